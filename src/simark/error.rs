//! Errors surfaced to users of the library and the command-line driver
//!
//! Parsing itself never fails: unmatched markup degrades to text. What can fail is
//! everything around it: loading configuration, reading input, picking an output format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimarkError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown output format '{0}' (available: {1})")]
    UnknownFormat(String, String),

    #[error("invalid override '{0}': expected key=value")]
    InvalidOverride(String),
}

pub type SimarkResult<T> = Result<T, SimarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SimarkError::UnknownFormat("pdf".into(), "html, plain".into());
        assert_eq!(
            err.to_string(),
            "unknown output format 'pdf' (available: html, plain)"
        );
        let err = SimarkError::InvalidOverride("indent".into());
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SimarkError = io.into();
        assert!(matches!(err, SimarkError::Io(_)));
    }
}
