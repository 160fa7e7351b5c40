//! Configuration management.
//!
//! Start directories, path rules and log settings ([`settings::Config`])
//! are read from a TOML file at startup.

pub mod settings;
