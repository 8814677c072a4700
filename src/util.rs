//! Utility functions for secure path handling

use std::io;
use std::path::{Path, PathBuf};

/// Join a reference or note argument onto a base directory, ensuring the
/// result stays inside it.
///
/// Rejects absolute components and any `..` that would climb out of `base`.
pub fn secure_join(base: &Path, relative: &str) -> io::Result<PathBuf> {
    if relative.starts_with('/') || relative.starts_with('\\') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Absolute paths are not allowed",
        ));
    }

    let mut result = base.to_path_buf();

    for component in relative.split(|c| c == '/' || c == '\\') {
        match component {
            "" | "." => continue,
            ".." => {
                if result == base {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Path traversal detected: cannot escape the vault",
                    ));
                }
                result.pop();
            }
            _ => {
                // Windows drive-letter components like "C:" are absolute too.
                if component.len() >= 2 && component.as_bytes()[1] == b':' {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Absolute paths are not allowed",
                    ));
                }
                result.push(component);
            }
        }
    }

    // Symlinked intermediates could still escape; canonicalize what exists
    // and re-check the prefix. dunce avoids UNC prefixes on Windows.
    if result.exists() {
        let canonical_base = dunce::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
        let canonical = dunce::canonicalize(&result).unwrap_or_else(|_| result.clone());
        if !canonical.starts_with(&canonical_base) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Path traversal detected: resolved path escapes the vault",
            ));
        }
    }

    Ok(result)
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_join_normal() {
        let base = PathBuf::from("/vault");
        let result = secure_join(&base, "assets/pic.png").unwrap();
        assert_eq!(result, PathBuf::from("/vault/assets/pic.png"));
    }

    #[test]
    fn test_secure_join_current_dir_components_skipped() {
        let base = PathBuf::from("/vault");
        let result = secure_join(&base, "./notes/today.md").unwrap();
        assert_eq!(result, PathBuf::from("/vault/notes/today.md"));
    }

    #[test]
    fn test_secure_join_traversal_blocked() {
        let base = PathBuf::from("/vault");
        assert!(secure_join(&base, "../../etc/passwd").is_err());
    }

    #[test]
    fn test_secure_join_internal_parent_allowed() {
        let base = PathBuf::from("/vault");
        let result = secure_join(&base, "notes/../pic.png").unwrap();
        assert_eq!(result, PathBuf::from("/vault/pic.png"));
    }

    #[test]
    fn test_secure_join_absolute_blocked() {
        let base = PathBuf::from("/vault");
        #[cfg(unix)]
        assert!(secure_join(&base, "/etc/passwd").is_err());
        #[cfg(windows)]
        assert!(secure_join(&base, "C:\\Windows\\System32").is_err());
    }

    #[test]
    fn test_display_path_forward_slashes() {
        let path = Path::new("a").join("b.png");
        assert_eq!(display_path(&path), "a/b.png");
    }
}
