//! INI parser and store implementation
//!
//! This module provides the [`IniStore`] type, which parses INI text into an
//! in-memory section map, answers queries against it, accepts mutations, and
//! serializes it back to INI text.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::IniError;
use crate::utils::file;
use crate::utils::string::split_key_value;

/// Key-value pairs of a single section.
pub type Properties = HashMap<String, String>;

/// Mapping of section names to their key-value pairs.
pub type SectionMap = HashMap<String, Properties>;

/// In-memory INI configuration store.
///
/// A store is created empty, populated wholesale by one of the load
/// operations (loading replaces all previous content, it never merges), and
/// rendered back to INI text through [`fmt::Display`] or
/// [`save_to_file`](IniStore::save_to_file).
///
/// Section names and keys are case-sensitive and stored trimmed. The
/// underlying maps are unordered, so no operation guarantees any section or
/// key order.
#[derive(Debug, Clone, Default)]
pub struct IniStore {
    /// Mapping of sections to key-value pairs
    sections: SectionMap,
}

impl IniStore {
    /// Create a new empty store
    pub fn new() -> Self {
        IniStore {
            sections: SectionMap::new(),
        }
    }

    /// Create a store and load an INI file into it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let mut store = IniStore::new();
        store.load_from_file(path)?;
        Ok(store)
    }

    /// Parse INI text and replace the store's entire content with the result.
    ///
    /// Parsing is line-oriented: lines are trimmed, blank lines and `;`
    /// comments are skipped, `[name]` opens a section, and every other line
    /// must be a `key = value` pair inside an open section. The new section
    /// map is built on the side and only committed on success, so any error
    /// leaves the previous content untouched.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), IniError> {
        let sections = parse(text)?;
        debug!("loaded {} section(s) from INI text", sections.len());
        self.sections = sections;
        Ok(())
    }

    /// Load an INI file, replacing the store's entire content.
    ///
    /// The path must carry the `.ini` extension; that is validated before
    /// any filesystem access.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        if !file::has_ini_extension(path) {
            return Err(IniError::FileExtension(path.display().to_string()));
        }

        debug!("loading INI file: {}", path.display());
        let contents = file::read_to_string(path)?;
        self.load_from_str(&contents)
    }

    /// Get the full section map
    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Get all section names, in no guaranteed order
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Get the count of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the store holds no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check if a section exists
    pub fn contains_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Check if a key exists in the given section
    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .map(|props| props.contains_key(key))
            .unwrap_or(false)
    }

    /// Look up the value stored under `section` / `key`.
    ///
    /// # Returns
    ///
    /// [`IniError::SectionNotFound`] if the section does not exist, and
    /// [`IniError::KeyName`] if the section exists but the key does not.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, IniError> {
        let props = self
            .sections
            .get(section)
            .ok_or_else(|| IniError::SectionNotFound(section.to_string()))?;
        let value = props
            .get(key)
            .ok_or_else(|| IniError::KeyName(key.to_string()))?;
        Ok(value)
    }

    /// Set a value, creating the section and key as needed.
    ///
    /// An existing value under the same section and key is overwritten.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a whole section, returning its entries if it existed
    pub fn remove_section(&mut self, section: &str) -> Option<Properties> {
        self.sections.remove(section)
    }

    /// Remove a single key, returning its value if it existed
    pub fn remove_key(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections.get_mut(section)?.remove(key)
    }

    /// Render the store to INI text and write it to a file.
    ///
    /// The same `.ini` extension rule as [`load_from_file`](IniStore::load_from_file)
    /// applies, checked before touching the filesystem. The file is created
    /// or truncated.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        if !file::has_ini_extension(path) {
            return Err(IniError::FileExtension(path.display().to_string()));
        }

        debug!(
            "writing {} section(s) to INI file: {}",
            self.sections.len(),
            path.display()
        );
        file::write_string(path, &self.to_string())?;
        Ok(())
    }
}

/// Parse INI text into a fresh section map.
///
/// Comments and original ordering are dropped here; only the trimmed
/// section/key/value content survives.
fn parse(text: &str) -> Result<SectionMap, IniError> {
    let mut sections = SectionMap::new();
    let mut current_section: Option<String> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();

        // Skip blank lines and comments
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        // Section header
        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(IniError::InvalidFormat {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
            let name = line[1..line.len() - 1].trim();
            if name.is_empty() {
                return Err(IniError::SectionNameEmpty { line: index + 1 });
            }
            // Re-opening an existing section continues it
            sections.entry(name.to_string()).or_default();
            current_section = Some(name.to_string());
            continue;
        }

        // Key-value pair; only valid once a section has been opened
        let section = match &current_section {
            Some(section) => section,
            None => {
                return Err(IniError::InvalidFormat {
                    line: index + 1,
                    content: line.to_string(),
                })
            }
        };

        let (key, value) = split_key_value(line).ok_or_else(|| IniError::InvalidKeyFormat {
            line: index + 1,
            content: line.to_string(),
        })?;
        if key.is_empty() {
            return Err(IniError::InvalidKeyFormat {
                line: index + 1,
                content: line.to_string(),
            });
        }

        let props = sections.entry(section.clone()).or_default();
        if props.contains_key(key) {
            return Err(IniError::RedefiningKey {
                section: section.clone(),
                key: key.to_string(),
            });
        }
        props.insert(key.to_string(), value.to_string());
    }

    Ok(sections)
}

impl fmt::Display for IniStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, props) in &self.sections {
            writeln!(f, "[{}]", name)?;
            for (key, value) in props {
                writeln!(f, "{} = {}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for IniStore {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut store = IniStore::new();
        store.load_from_str(s)?;
        Ok(store)
    }
}
