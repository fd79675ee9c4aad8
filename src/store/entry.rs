/// Source syntax, classified by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Reason implementation (`.re`)
    Reason,
    /// Reason interface (`.rei`)
    ReasonInterface,
    /// OCaml implementation (`.ml`)
    Ocaml,
}

impl Syntax {
    /// Classify a virtual path by extension, `None` for anything the
    /// pipeline does not stage
    pub fn from_path(path: &str) -> Option<Syntax> {
        if path.ends_with(".rei") {
            Some(Syntax::ReasonInterface)
        } else if path.ends_with(".re") {
            Some(Syntax::Reason)
        } else if path.ends_with(".ml") {
            Some(Syntax::Ocaml)
        } else {
            None
        }
    }

    /// Interface files are attached to implementations, never compiled
    /// on their own
    pub fn is_interface(&self) -> bool {
        matches!(self, Syntax::ReasonInterface)
    }
}

/// A single staged source module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// Sanitized virtual path, unique within the store
    pub path: String,
    /// Raw source text
    pub code: String,
    /// Display name: capitalized basename without extension
    pub module_name: String,
    /// Syntax derived from the extension
    pub syntax: Syntax,
}

impl SourceModule {
    /// Derive the module name from a path: basename, extension dropped,
    /// first character upper-cased (`utils/helpers.re` -> `Helpers`)
    pub fn module_name_of(path: &str) -> Option<String> {
        let basename = path.rsplit('/').next()?;
        let mut parts: Vec<&str> = basename.split('.').collect();
        parts.pop();

        let uncapitalized = parts.join(".");
        let mut chars = uncapitalized.chars();
        let first = chars.next()?;
        Some(first.to_uppercase().collect::<String>() + chars.as_str())
    }
}
