//! Error types for dumprs.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while configuring or running a dump.
///
/// Reaching the end of the stream and failing to find a search pattern are
/// ordinary outcomes, not errors; they surface through return values instead.
#[derive(Debug)]
pub enum DumpError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A file could not be opened.
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O error occurred while reading input data.
    Read(std::io::Error),

    /// An I/O error occurred while repositioning the input stream.
    Seek(std::io::Error),

    /// An I/O error occurred while writing formatted output.
    Write(std::io::Error),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            DumpError::Open { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            DumpError::Read(e) => write!(f, "read error: {}", e),
            DumpError::Seek(e) => write!(f, "seek error: {}", e),
            DumpError::Write(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::Open { source, .. } => Some(source),
            DumpError::Read(e) | DumpError::Seek(e) | DumpError::Write(e) => Some(e),
            DumpError::InvalidConfig { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = DumpError::InvalidConfig {
            message: "field width must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));

        let err = DumpError::Open {
            path: PathBuf::from("missing.bin"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        };
        assert!(err.to_string().contains("missing.bin"));
    }

    #[test]
    fn test_source_chain() {
        let err = DumpError::Read(std::io::Error::new(std::io::ErrorKind::Other, "test"));
        assert!(err.source().is_some());

        let err = DumpError::InvalidConfig { message: "test" };
        assert!(err.source().is_none());
    }
}
