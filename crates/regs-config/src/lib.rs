//! Configuration for regs
//!
//! Growth policy for rule storage and the limits applied when patterns are
//! compiled. Everything defaults to sensible values; a TOML file can override
//! any subset of them.
//!
//! ```toml
//! [store]
//! growth_factor = 2.0
//! shrink_factor = 0.25
//!
//! [regex]
//! max_pattern_length = 1000000
//! ```

pub mod manager;
pub mod types;

pub use manager::ConfigError;
pub use types::{RegexLimits, RegsConfig, StoreConfig};
