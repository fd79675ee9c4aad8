use super::*;
use crate::store::StoreBuilder;
use crate::toolchain::RawCompileResult;
use async_trait::async_trait;

struct NullToolchain;

#[async_trait]
impl Toolchain for NullToolchain {
    async fn list_dependencies(
        &self,
        _code: &str,
        _syntax: Syntax,
    ) -> Result<Vec<String>, ToolchainError> {
        Ok(vec!["0".to_string()])
    }

    async fn translate_ocaml(&self, code: &str) -> Result<String, ToolchainError> {
        Ok(format!("/* from ocaml */ {}", code))
    }

    async fn compile(&self, _source: &str) -> Result<RawCompileResult, ToolchainError> {
        Ok(RawCompileResult {
            js_code: None,
            js_error_msg: None,
            row: None,
            column: None,
            text: None,
        })
    }
}

#[tokio::test]
async fn test_reason_module_verbatim() {
    let mut builder = StoreBuilder::new();
    builder.add_module("main.re", "let x = 1;").unwrap();
    let store = builder.build();

    let modules = vec![store.get("main.re").unwrap()];
    let unit = assemble_unit(&modules, &store, &NullToolchain).await.unwrap();

    assert_eq!(unit, "module Main = {\n#1 Main\nlet x = 1;\n};");
}

#[tokio::test]
async fn test_ocaml_module_translated() {
    let mut builder = StoreBuilder::new();
    builder.add_module("legacy.ml", "let x = 1").unwrap();
    let store = builder.build();

    let modules = vec![store.get("legacy.ml").unwrap()];
    let unit = assemble_unit(&modules, &store, &NullToolchain).await.unwrap();

    assert!(unit.contains("/* from ocaml */ let x = 1"));
    assert!(unit.starts_with("module Legacy = {"));
}

#[tokio::test]
async fn test_interface_ascription() {
    let mut builder = StoreBuilder::new();
    builder.add_module("api.re", "let get = _ => 1;").unwrap();
    builder.add_module("api.rei", "let get: string => int;").unwrap();
    let store = builder.build();

    let modules = vec![store.get("api.re").unwrap()];
    let unit = assemble_unit(&modules, &store, &NullToolchain).await.unwrap();

    assert_eq!(
        unit,
        "module Api: {\nlet get: string => int;\n} = {\n#1 Api\nlet get = _ => 1;\n};"
    );
}

#[tokio::test]
async fn test_concatenation_order_and_separator() {
    let mut builder = StoreBuilder::new();
    builder.add_module("a.re", "let a = 1;").unwrap();
    builder.add_module("b.re", "let b = 2;").unwrap();
    let store = builder.build();

    let modules = vec![store.get("a.re").unwrap(), store.get("b.re").unwrap()];
    let unit = assemble_unit(&modules, &store, &NullToolchain).await.unwrap();

    let a_pos = unit.find("module A").unwrap();
    let b_pos = unit.find("module B").unwrap();
    assert!(a_pos < b_pos);
    assert!(unit.contains("};\n\nmodule B"));
}

#[tokio::test]
async fn test_empty_set() {
    let store = StoreBuilder::new().build();
    let unit = assemble_unit(&[], &store, &NullToolchain).await.unwrap();
    assert_eq!(unit, "");
}
