pub mod error;
pub mod store;
pub mod utils;

// Re-export the main store types for easier access
pub use error::IniError;
pub use store::{IniStore, Properties, SectionMap};
