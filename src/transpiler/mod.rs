mod diagnostics;

#[cfg(test)]
mod tests;

pub use diagnostics::{strip_control_codes, CompileDiagnostic};

use crate::assemble::assemble_unit;
use crate::resolver::{DependencyResolver, ResolveError};
use crate::store::ModuleStore;
use crate::toolchain::{Toolchain, ToolchainError};
use thiserror::Error;

/// Successful transpilation of a root module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOutput {
    /// Generated code, exactly as the compiler produced it
    pub code: String,
    /// Sibling module paths the compilation depends on; the caller
    /// registers these upstream for cache invalidation
    pub dependencies: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Reason compile error in {} at line {}, column {}: {}", .0.path, .0.line, .0.column, .0.message)]
    Compiler(CompileDiagnostic),

    #[error("No module staged at {0}")]
    UnknownRoot(String),

    #[error("Interface file is not a compilation target: {0}")]
    InterfaceTarget(String),

    #[error("Toolchain reply carried neither code nor an error")]
    EmptyReply,

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}

/// Front door of the transpilation pipeline
///
/// Resolves the root's dependency closure, assembles the compilation
/// unit, forwards it to the toolchain and translates the result into
/// either output code or a structured diagnostic.
pub struct Transpiler<T: Toolchain> {
    toolchain: T,
}

impl<T: Toolchain> Transpiler<T> {
    pub fn new(toolchain: T) -> Self {
        Self { toolchain }
    }

    pub async fn transpile(
        &self,
        store: &ModuleStore,
        root_path: &str,
    ) -> Result<TranspileOutput, CompileError> {
        let root = store
            .get(root_path)
            .ok_or_else(|| CompileError::UnknownRoot(root_path.to_string()))?;

        if root.syntax.is_interface() {
            return Err(CompileError::InterfaceTarget(root.path.clone()));
        }

        let resolved = DependencyResolver::new(store, &self.toolchain)
            .resolve(root)
            .await?;

        let dependencies: Vec<String> = resolved
            .iter()
            .filter(|m| m.path != root.path)
            .map(|m| m.path.clone())
            .collect();

        let unit = assemble_unit(&resolved, store, &self.toolchain).await?;

        tracing::debug!(
            root = %root.path,
            modules = resolved.len(),
            unit_bytes = unit.len(),
            "submitting compilation unit"
        );

        let result = self.toolchain.compile(&unit).await?;

        if result.js_error_msg.is_some() {
            let raw_text = result.text.unwrap_or_default();
            // The compiler reports 0-based rows
            return Err(CompileError::Compiler(CompileDiagnostic {
                message: strip_control_codes(&raw_text),
                path: root.path.clone(),
                line: result.row.unwrap_or(0) + 1,
                column: result.column.unwrap_or(0),
                raw_text,
            }));
        }

        let code = result.js_code.ok_or(CompileError::EmptyReply)?;
        Ok(TranspileOutput { code, dependencies })
    }
}
