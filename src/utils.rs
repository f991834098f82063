//! Path utilities
//!
//! Small filesystem path helpers shared across modules.

use std::path::{Path, PathBuf};

/// Resolve a possibly-relative path against a base directory
///
/// Absolute paths are returned unchanged.
pub fn absolutize_path(path: &str, base_dir: &Path) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_unchanged() {
        assert_eq!(
            absolutize_path("/etc/keys/admin.txt", Path::new("/srv/api")),
            PathBuf::from("/etc/keys/admin.txt")
        );
    }

    #[test]
    fn test_relative_path_is_joined_to_base() {
        assert_eq!(
            absolutize_path("keys/admin.txt", Path::new("/srv/api")),
            PathBuf::from("/srv/api/keys/admin.txt")
        );
    }
}
