use super::*;
use crate::store::{StoreBuilder, Syntax};
use crate::toolchain::RawCompileResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// Toolchain double: canned dependency lists plus a scripted compile
/// result
struct ScriptedToolchain {
    deps: HashMap<String, Vec<String>>,
    result: RawCompileResult,
}

impl ScriptedToolchain {
    fn succeeding(code: &str) -> Self {
        Self {
            deps: HashMap::new(),
            result: RawCompileResult {
                js_code: Some(code.to_string()),
                js_error_msg: None,
                row: None,
                column: None,
                text: None,
            },
        }
    }

    fn failing(text: &str, row: u32, column: u32) -> Self {
        Self {
            deps: HashMap::new(),
            result: RawCompileResult {
                js_code: None,
                js_error_msg: Some("compile error".to_string()),
                row: Some(row),
                column: Some(column),
                text: Some(text.to_string()),
            },
        }
    }

    fn with_deps(mut self, code: &str, names: &[&str]) -> Self {
        self.deps.insert(
            code.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl Toolchain for ScriptedToolchain {
    async fn list_dependencies(
        &self,
        code: &str,
        _syntax: Syntax,
    ) -> Result<Vec<String>, ToolchainError> {
        let mut names = vec!["0".to_string()];
        if let Some(deps) = self.deps.get(code) {
            names.extend(deps.iter().cloned());
        }
        Ok(names)
    }

    async fn translate_ocaml(&self, code: &str) -> Result<String, ToolchainError> {
        Ok(code.to_string())
    }

    async fn compile(&self, _source: &str) -> Result<RawCompileResult, ToolchainError> {
        Ok(self.result.clone())
    }
}

fn widget_store() -> crate::store::ModuleStore {
    let mut builder = StoreBuilder::new();
    builder.add_module("main.re", "code-main").unwrap();
    builder.add_module("util.re", "code-util").unwrap();
    builder.build()
}

#[tokio::test]
async fn test_success_returns_output_unmodified() {
    let toolchain =
        ScriptedToolchain::succeeding("var x = 1;").with_deps("code-main", &["Util"]);
    let transpiler = Transpiler::new(toolchain);

    let output = transpiler.transpile(&widget_store(), "main.re").await.unwrap();
    assert_eq!(output.code, "var x = 1;");
}

#[tokio::test]
async fn test_dependencies_exclude_root() {
    let toolchain =
        ScriptedToolchain::succeeding("var x = 1;").with_deps("code-main", &["Util"]);
    let transpiler = Transpiler::new(toolchain);

    let output = transpiler.transpile(&widget_store(), "main.re").await.unwrap();
    assert_eq!(output.dependencies, vec!["util.re".to_string()]);
}

#[tokio::test]
async fn test_error_is_structured_and_stripped() {
    let toolchain =
        ScriptedToolchain::failing("\u{1b}[31mUnbound value x\u{1b}[0m", 4, 7);
    let transpiler = Transpiler::new(toolchain);

    let err = transpiler
        .transpile(&widget_store(), "main.re")
        .await
        .unwrap_err();

    match err {
        CompileError::Compiler(diagnostic) => {
            assert_eq!(diagnostic.message, "Unbound value x");
            assert_eq!(diagnostic.path, "main.re");
            assert_eq!(diagnostic.line, 5, "line is reported row + 1");
            assert_eq!(diagnostic.column, 7);
            assert_eq!(diagnostic.raw_text, "\u{1b}[31mUnbound value x\u{1b}[0m");
        }
        other => panic!("expected compiler diagnostic, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_root_rejected() {
    let transpiler = Transpiler::new(ScriptedToolchain::succeeding(""));
    let err = transpiler
        .transpile(&widget_store(), "missing.re")
        .await
        .unwrap_err();
    assert!(matches!(err, CompileError::UnknownRoot(_)));
}

#[tokio::test]
async fn test_interface_root_rejected() {
    let mut builder = StoreBuilder::new();
    builder.add_module("api.rei", "let get: unit;").unwrap();
    let store = builder.build();

    let transpiler = Transpiler::new(ScriptedToolchain::succeeding(""));
    let err = transpiler.transpile(&store, "api.rei").await.unwrap_err();
    assert!(matches!(err, CompileError::InterfaceTarget(_)));
}

#[test]
fn test_strip_control_codes() {
    assert_eq!(
        strip_control_codes("\u{1b}[1;31merror\u{1b}[0m: plain"),
        "error: plain"
    );
    assert_eq!(strip_control_codes("no codes"), "no codes");
}
