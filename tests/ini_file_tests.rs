use inistore::{IniError, IniStore};

#[cfg(test)]
mod ini_file_tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const VALID_DATA: &str = r#"
;server section
[server]
ip = 127.0.0.1
port = 8080

;database section
[database]
host = localhost
port = 5432
name = mydb"#;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, VALID_DATA).unwrap();

        let mut store = IniStore::new();
        store.load_from_file(&path).unwrap();

        assert_eq!(store.get("server", "ip").unwrap(), "127.0.0.1");
        assert_eq!(store.get("database", "name").unwrap(), "mydb");
        assert_eq!(store.section_count(), 2);
    }

    #[test]
    fn test_load_from_file_rejects_wrong_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.txt");
        fs::write(&path, VALID_DATA).unwrap();

        let mut store = IniStore::new();
        let err = store.load_from_file(&path).unwrap_err();
        assert!(matches!(err, IniError::FileExtension(_)));
    }

    #[test]
    fn test_extension_checked_before_filesystem() {
        // The path does not exist; a filesystem probe would report that,
        // but the extension check must fire first.
        let mut store = IniStore::new();
        let err = store.load_from_file("no/such/dir/config.txt").unwrap_err();
        assert!(matches!(err, IniError::FileExtension(_)));

        let store = IniStore::new();
        let err = store.save_to_file("no/such/dir/config.txt").unwrap_err();
        assert!(matches!(err, IniError::FileExtension(_)));
    }

    #[test]
    fn test_load_from_file_missing_file() {
        let mut store = IniStore::new();
        let err = store.load_from_file("no/such/dir/config.ini").unwrap_err();
        assert!(matches!(err, IniError::OpeningFile(_)));
    }

    #[test]
    fn test_load_from_file_invalid_content_keeps_state() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.ini");
        let bad = dir.path().join("bad.ini");
        fs::write(&good, VALID_DATA).unwrap();
        fs::write(&bad, "[server]\nhost = 1\nhost = 2").unwrap();

        let mut store = IniStore::new();
        store.load_from_file(&good).unwrap();

        let err = store.load_from_file(&bad).unwrap_err();
        assert!(matches!(err, IniError::RedefiningKey { .. }));
        assert_eq!(store.get("server", "port").unwrap(), "8080");
    }

    #[test]
    fn test_from_file_constructor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, VALID_DATA).unwrap();

        let store = IniStore::from_file(&path).unwrap();
        assert_eq!(store.get("database", "host").unwrap(), "localhost");
    }

    #[test]
    fn test_save_to_file_rejects_wrong_extension() {
        let mut store = IniStore::new();
        store.load_from_str(VALID_DATA).unwrap();

        let err = store.save_to_file("false.txt").unwrap_err();
        assert!(matches!(err, IniError::FileExtension(_)));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.ini");

        let mut store = IniStore::new();
        store.load_from_str(VALID_DATA).unwrap();
        store.set("server", "motd", "welcome");
        store.save_to_file(&path).unwrap();

        let reloaded = IniStore::from_file(&path).unwrap();
        assert_eq!(reloaded.sections(), store.sections());
        assert_eq!(reloaded.get("server", "motd").unwrap(), "welcome");
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.ini");
        fs::write(&path, "[stale]\nold = data\n").unwrap();

        let mut store = IniStore::new();
        store.load_from_str("[fresh]\nnew = data").unwrap();
        store.save_to_file(&path).unwrap();

        let reloaded = IniStore::from_file(&path).unwrap();
        assert!(!reloaded.contains_section("stale"));
        assert_eq!(reloaded.get("fresh", "new").unwrap(), "data");
    }
}
