mod entry;
mod error;
mod path;


pub use entry::{SourceModule, Syntax};
pub use error::StoreError;
pub use path::PathSanitizer;

use std::collections::HashMap;
use walkdir::WalkDir;

/// Immutable pool of staged source modules
///
/// Modules are read-only inputs owned by the build system; the pipeline
/// never mutates them after the store is built.
pub struct ModuleStore {
    /// Modules in insertion order
    modules: Vec<SourceModule>,
    /// Index mapping virtual paths to positions in `modules`
    index: HashMap<String, usize>,
}

/// Mutable builder for constructing a module store
pub struct StoreBuilder {
    modules: Vec<SourceModule>,
    index: HashMap<String, usize>,
    total_bytes: u64,
    max_file_size: u64,
    max_total_size: u64,
}

impl StoreBuilder {
    /// Create a new builder with default limits
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            index: HashMap::new(),
            total_bytes: 0,
            max_file_size: 5 * 1024 * 1024,   // 5 MB per file
            max_total_size: 50 * 1024 * 1024, // 50 MB total
        }
    }

    /// Set maximum individual file size
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set maximum total source size
    pub fn max_total_size(mut self, size: u64) -> Self {
        self.max_total_size = size;
        self
    }

    /// Stage a source module
    ///
    /// The path is sanitized, classified by extension, and the module
    /// name is derived from the basename. Re-adding a path overwrites
    /// the previous entry.
    pub fn add_module(&mut self, raw_path: &str, code: &str) -> Result<(), StoreError> {
        let virtual_path = PathSanitizer::sanitize(raw_path)?;

        let syntax = Syntax::from_path(&virtual_path)
            .ok_or_else(|| StoreError::UnsupportedExtension(virtual_path.clone()))?;

        let module_name = SourceModule::module_name_of(&virtual_path)
            .ok_or_else(|| StoreError::InvalidPath(virtual_path.clone()))?;

        if code.len() as u64 > self.max_file_size {
            return Err(StoreError::FileTooLarge {
                size: code.len() as u64,
                max: self.max_file_size,
            });
        }

        let new_total = self.total_bytes + code.len() as u64;
        if new_total > self.max_total_size {
            return Err(StoreError::FileTooLarge {
                size: new_total,
                max: self.max_total_size,
            });
        }

        let module = SourceModule {
            path: virtual_path.clone(),
            code: code.to_string(),
            module_name,
            syntax,
        };

        match self.index.get(&virtual_path) {
            Some(&pos) => {
                self.total_bytes -= self.modules[pos].code.len() as u64;
                self.total_bytes += code.len() as u64;
                self.modules[pos] = module;
            }
            None => {
                self.index.insert(virtual_path, self.modules.len());
                self.modules.push(module);
                self.total_bytes += code.len() as u64;
            }
        }

        Ok(())
    }

    /// Ingest every stageable file under a project directory
    ///
    /// Files with extensions the pipeline does not know are skipped
    /// rather than rejected.
    pub fn ingest_dir(mut self, root: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");

            if Syntax::from_path(&relative).is_none() {
                continue;
            }

            let code =
                std::fs::read_to_string(entry.path()).map_err(|source| StoreError::Read {
                    path: relative.clone(),
                    source,
                })?;

            self.add_module(&relative, &code)?;
        }

        Ok(self)
    }

    /// Build the immutable store
    pub fn build(self) -> ModuleStore {
        ModuleStore {
            modules: self.modules,
            index: self.index,
        }
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleStore {
    /// Look up a module by virtual path
    pub fn get(&self, virtual_path: &str) -> Option<&SourceModule> {
        self.index.get(virtual_path).map(|&pos| &self.modules[pos])
    }

    /// Iterate all modules in insertion order
    pub fn modules(&self) -> impl Iterator<Item = &SourceModule> {
        self.modules.iter()
    }

    /// Resolve a dependency name to a module
    ///
    /// Exact module-name match; interface files are never resolution
    /// targets.
    pub fn find_by_name(&self, name: &str) -> Option<&SourceModule> {
        self.modules
            .iter()
            .find(|m| m.module_name == name && !m.syntax.is_interface())
    }

    /// The interface file attached to an implementation module, if any
    ///
    /// `src/foo.re` -> `src/foo.rei`; modules without a Reason
    /// implementation extension have no attached interface.
    pub fn interface_for(&self, path: &str) -> Option<&SourceModule> {
        let stem = path.strip_suffix(".re")?;
        self.get(&format!("{}.rei", stem))
    }

    /// Total number of staged modules
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Total staged source size in bytes
    pub fn total_size(&self) -> usize {
        self.modules.iter().map(|m| m.code.len()).sum()
    }
}
