//! Error handling for the host layers.
//!
//! Tokenization and completion are total and never return errors; malformed
//! source is reported through token classes instead. The types here cover
//! everything around the engines: configuration, file input, serialization
//! of output and the interactive editor.
//!
//! # Example
//!
//! ```rust
//! use hlsl_syntax::error::{ConfigError, HlslError, Result};
//!
//! fn check_size(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(ConfigError::InvalidValue {
//!             field: "history.max_size".into(),
//!             value: size.to_string(),
//!         }
//!         .into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(check_size(0), Err(HlslError::Config(_))));
//! ```

pub mod kinds;

pub use kinds::{ConfigError, HlslError, Result};
