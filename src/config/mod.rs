//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or in-code Options
//!     → loader.rs (parse & deserialize)
//!     → schema.rs (Options, level name resolution)
//!     → emit::Settings (destination, min level, version)
//!     → Logger::configure (atomic swap)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - An unknown level name is not an error; it means info

pub mod loader;
pub mod schema;

pub use loader::{load_options, parse_options, ConfigError};
pub use schema::Options;
