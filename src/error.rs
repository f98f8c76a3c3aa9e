use thiserror::Error;

use crate::radix::{Literal, Radix};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumcellError {
    #[error("Parse error: unable to convert '{input}': {message}")]
    Parse { input: String, message: String },
    #[error("Invalid digit: '{character}' is not a digit of radix {radix} in the {literal} literal format")]
    InvalidDigit { character: char, radix: Radix, literal: Literal },
    #[error("Domain error: {0}")]
    Domain(String),
    #[error("Precision error: {0}")]
    Precision(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NumcellError>;

impl NumcellError {
    pub(crate) fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}

// Helper conversions
impl From<config::ConfigError> for NumcellError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
