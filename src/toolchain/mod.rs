mod client;
mod error;
mod types;


pub use client::HttpToolchain;
pub use error::ToolchainError;
pub use types::{
    CompileRequest, ListDependenciesRequest, ListDependenciesResponse, RawCompileResult,
    TranslateRequest, TranslateResponse,
};

use crate::store::Syntax;
use async_trait::async_trait;

/// Seam to the externally hosted Reason/OCaml toolchain
///
/// The toolchain owns all real compilation work; the pipeline only
/// stages input and relays results.
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Raw dependency name list for a module
    ///
    /// The entry point differs by source syntax. The returned list is
    /// verbatim parser output: the first element is a sentinel value the
    /// caller discards.
    async fn list_dependencies(
        &self,
        code: &str,
        syntax: Syntax,
    ) -> Result<Vec<String>, ToolchainError>;

    /// Translate OCaml source to Reason via the print/parse round trip
    async fn translate_ocaml(&self, code: &str) -> Result<String, ToolchainError>;

    /// Compile an assembled compilation unit
    async fn compile(&self, source: &str) -> Result<RawCompileResult, ToolchainError>;
}
