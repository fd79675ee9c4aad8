use crate::store::StoreError;
use std::path::{Component, Path};

pub struct PathSanitizer;

impl PathSanitizer {
    /// Normalize a raw path into a virtual store path:
    /// - no absolute paths
    /// - no parent directory traversal
    /// - forward slashes only
    pub fn sanitize(raw_path: &str) -> Result<String, StoreError> {
        if raw_path.is_empty() {
            return Err(StoreError::InvalidPath("Empty path".to_string()));
        }

        let path = Path::new(raw_path);
        let mut components = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(StoreError::InvalidPath(format!(
                        "Absolute path not allowed: {}",
                        raw_path
                    )));
                }
                Component::ParentDir => {
                    return Err(StoreError::InvalidPath(format!(
                        "Parent directory traversal not allowed: {}",
                        raw_path
                    )));
                }
                Component::CurDir => continue,
                Component::Normal(part) => {
                    let part_str = part.to_str().ok_or_else(|| {
                        StoreError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", part))
                    })?;
                    components.push(part_str);
                }
            }
        }

        if components.is_empty() {
            return Err(StoreError::InvalidPath(format!(
                "No valid components: {}",
                raw_path
            )));
        }

        Ok(components.join("/"))
    }
}
