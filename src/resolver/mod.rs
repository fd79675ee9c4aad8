
use crate::store::{ModuleStore, SourceModule};
use crate::toolchain::{Toolchain, ToolchainError};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Dependency names known safe to drop without resolution
const IGNORED_DEPENDENCIES: &[&str] = &[];

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Circular dependency detected: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}

/// Depth-first resolution of a module's transitive dependencies
///
/// Produces an ordered set in which every module appears exactly once
/// and after all of its resolved dependencies, root last. The downstream
/// compiler has no dependency resolution of its own, so this order is
/// the concatenation order of the compilation unit.
pub struct DependencyResolver<'a, T: Toolchain + ?Sized> {
    store: &'a ModuleStore,
    toolchain: &'a T,
    /// Completed modules, by module name
    resolved: HashSet<String>,
    /// Visit stack; re-entering a name on it is a cycle
    in_progress: Vec<String>,
    ordered: Vec<&'a SourceModule>,
}

impl<'a, T: Toolchain + ?Sized> DependencyResolver<'a, T> {
    pub fn new(store: &'a ModuleStore, toolchain: &'a T) -> Self {
        Self {
            store,
            toolchain,
            resolved: HashSet::new(),
            in_progress: Vec::new(),
            ordered: Vec::new(),
        }
    }

    /// Resolve the ordered closure of modules required to compile `root`
    pub async fn resolve(
        mut self,
        root: &'a SourceModule,
    ) -> Result<Vec<&'a SourceModule>, ResolveError> {
        self.visit(root).await?;

        tracing::debug!(
            root = %root.module_name,
            modules = self.ordered.len(),
            "dependency resolution complete"
        );

        Ok(self.ordered)
    }

    fn visit<'s>(
        &'s mut self,
        module: &'a SourceModule,
    ) -> Pin<Box<dyn Future<Output = Result<(), ResolveError>> + Send + 's>> {
        Box::pin(async move {
            if self.in_progress.iter().any(|n| n == &module.module_name) {
                let mut chain = self.in_progress.clone();
                chain.push(module.module_name.clone());
                return Err(ResolveError::Cycle { chain });
            }
            self.in_progress.push(module.module_name.clone());

            let mut names = self
                .toolchain
                .list_dependencies(&module.code, module.syntax)
                .await?;

            // Index 0 is the parser's sentinel value
            if !names.is_empty() {
                names.remove(0);
            }

            for name in names {
                if IGNORED_DEPENDENCIES.contains(&name.as_str()) || self.resolved.contains(&name) {
                    continue;
                }

                // A name with no matching module is assumed already
                // satisfied externally
                if let Some(found) = self.store.find_by_name(&name) {
                    self.visit(found).await?;
                }
            }

            self.in_progress.pop();
            self.resolved.insert(module.module_name.clone());
            self.ordered.push(module);
            Ok(())
        })
    }
}
