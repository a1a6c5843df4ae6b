//! Thin filesystem wrappers used by the INI store
//!
//! The store only consumes the success/failure outcome of these calls; all
//! path validation happens before any filesystem access.

use std::fs;
use std::io;
use std::path::Path;

/// File extension required for INI load/save paths.
pub const INI_EXTENSION: &str = "ini";

/// Checks if the path carries the `.ini` extension
pub fn has_ini_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == INI_EXTENSION)
        .unwrap_or(false)
}

/// Reads an entire file into a string
pub fn read_to_string(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Writes a string to a file, creating or truncating it
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_ini_extension() {
        assert!(has_ini_extension(Path::new("config.ini")));
        assert!(has_ini_extension(Path::new("/etc/app/config.ini")));
        assert!(!has_ini_extension(Path::new("config.txt")));
        assert!(!has_ini_extension(Path::new("config")));
        assert!(!has_ini_extension(Path::new("config.INI")));
    }
}
