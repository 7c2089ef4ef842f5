// SPDX-License-Identifier: MPL-2.0
use crate::domain::lang::LangParseError;
use crate::i18n::parser::ParseError;
use std::fmt;

/// Errors raised while assembling the message catalog or reading configuration.
///
/// Every variant is fatal at initialization time. Lookups never produce an
/// error: a missing message resolves to its key instead.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Parse(ParseError),

    /// A located resource could not be read.
    Resource {
        source_id: String,
        message: String,
    },

    /// A configured language tag is not a valid language identifier.
    InvalidLang {
        tag: String,
        origin: String,
    },
}

impl Error {
    pub(crate) fn invalid_lang(err: &LangParseError, origin: &str) -> Self {
        Error::InvalidLang {
            tag: err.tag().to_string(),
            origin: origin.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Resource { source_id, message } => {
                write!(f, "Resource Error: {}: {}", source_id, message)
            }
            Error::InvalidLang { tag, origin } => {
                write!(f, "Invalid language '{}' in {}", tag, origin)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
