/// The `config` module loads records from files, the environment and overrides
pub mod config;

/// The `error` module provides error handling
pub mod error;

/// The `format` module reads and writes records as JSON, TOML or YAML
pub mod format;

/// The `traits` module provides the traits shared by both records
pub mod traits;
