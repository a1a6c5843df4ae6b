use std::error::Error;

use env_logger::Env;
use inistore::IniStore;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("debug"));

    // Create example INI content
    let ini_content = r#"
;server section
[server]
ip = 127.0.0.1
port = 8080

;database section
[database]
host = localhost
port = 5432
name = mydb
"#;

    // Create and parse with the INI store
    let mut store = IniStore::new();
    store.load_from_str(ini_content)?;

    // Get all section names
    println!("Sections: {:?}", store.section_names());

    // Check if specific sections exist
    println!("Has 'server' section: {}", store.contains_section("server"));
    println!("Has 'cache' section: {}", store.contains_section("cache"));

    // Get values from sections
    println!("Server port: {}", store.get("server", "port")?);
    println!("Database host: {}", store.get("database", "host")?);

    // Modify values
    store.set("server", "port", "9090");
    store.set("cache", "ttl", "60");
    println!("Updated server port: {}", store.get("server", "port")?);
    println!("Added cache ttl: {}", store.get("cache", "ttl")?);

    // Export to string
    println!("\nExported INI:\n{}", store);

    // Save to a file and load it back
    let path = std::env::temp_dir().join("ini_store_demo.ini");
    let path = path.to_str().unwrap_or("ini_store_demo.ini");
    store.save_to_file(path)?;
    let reloaded = IniStore::from_file(path)?;
    println!("Reloaded {} section(s) from {}", reloaded.section_count(), path);

    Ok(())
}
