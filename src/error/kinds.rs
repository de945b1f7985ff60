use std::{fmt, io};

/// Crate-wide `Result` type using [`HlslError`] as the error.
///
/// The engines themselves never fail; this alias covers the host layers
/// (configuration, file input, output serialization and the REPL).
pub type Result<T> = std::result::Result<T, HlslError>;

/// Top-level error type for hlsl-syntax operations.
#[derive(Debug)]
pub enum HlslError {
    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Output could not be serialized.
    Serialization(String),

    /// Interactive editor failure.
    Repl(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Any other configuration problem.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for HlslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HlslError::Config(e) => write!(f, "Configuration error: {e}"),
            HlslError::Io(e) => write!(f, "I/O error: {e}"),
            HlslError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            HlslError::Repl(msg) => write!(f, "REPL error: {msg}"),
            HlslError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for HlslError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HlslError::Config(e) => Some(e),
            HlslError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}

/* ========================= Conversions to HlslError ========================= */

impl From<io::Error> for HlslError {
    fn from(err: io::Error) -> Self {
        HlslError::Io(err)
    }
}

impl From<ConfigError> for HlslError {
    fn from(err: ConfigError) -> Self {
        HlslError::Config(err)
    }
}

impl From<toml::de::Error> for HlslError {
    fn from(err: toml::de::Error) -> Self {
        HlslError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for HlslError {
    fn from(err: toml::ser::Error) -> Self {
        HlslError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for HlslError {
    fn from(err: serde_json::Error) -> Self {
        HlslError::Serialization(err.to_string())
    }
}

impl From<String> for HlslError {
    fn from(msg: String) -> Self {
        HlslError::Generic(msg)
    }
}

impl From<&str> for HlslError {
    fn from(msg: &str) -> Self {
        HlslError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        let err = HlslError::from(ConfigError::InvalidValue {
            field: "history.max_size".to_string(),
            value: "0".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value '0' for field 'history.max_size'"
        );
        assert_eq!(HlslError::from("boom").to_string(), "boom");
    }

    #[test]
    fn test_toml_error_becomes_invalid_format() {
        let parse = toml::from_str::<toml::Table>("[display").unwrap_err();
        let err = HlslError::from(parse);
        assert!(matches!(err, HlslError::Config(ConfigError::InvalidFormat(_))));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_source() {
        let err = HlslError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
