//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prefix of every environment variable the application reads.
pub const ENV_PREFIX: &str = "TIP_SEGMENTER";
