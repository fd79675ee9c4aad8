// the compiler server contract
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ListDependenciesRequest {
    pub code: String,
    /// Parser entry point: "reason" or "ocaml"
    pub syntax: String,
}

#[derive(Debug, Deserialize)]
pub struct ListDependenciesResponse {
    /// Raw name list; index 0 is a sentinel the parser always emits
    pub dependencies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct CompileRequest {
    pub source: String,
}

/// Result shape of the external compiler, verbatim
///
/// A present `js_error_msg` means the compile failed; `row` is 0-based.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCompileResult {
    #[serde(default)]
    pub js_code: Option<String>,
    #[serde(default)]
    pub js_error_msg: Option<String>,
    #[serde(default)]
    pub row: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
    #[serde(default)]
    pub text: Option<String>,
}
