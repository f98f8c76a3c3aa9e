// used to read settings from a separate file
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::radix::{Literal, Radix};

pub const DEFAULT_DECIMAL_PRECISION: u64 = 100;

/// Tunables of the value core.
///
/// `decimal_precision` bounds the significant digits of decimal division and of
/// rational to decimal conversion, and the number of fractional digits emitted
/// when a decimal is rendered in a radix whose expansion does not terminate.
/// `radix` and `literal` are what [`crate::Kind::render`] formats with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub decimal_precision: u64,
    pub radix: Radix,
    pub literal: Literal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            radix: Radix::Decimal,
            literal: Literal::None,
        }
    }
}

impl Settings {
    /// Reads settings from a file in any format `config` understands (toml, json, yaml, ...).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings: Settings = Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        info!(path = %path.display(), precision = settings.decimal_precision, radix = %settings.radix, literal = %settings.literal, "settings loaded");
        settings.validated()
    }
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validated()
    }
    fn validated(self) -> Result<Self> {
        if self.decimal_precision == 0 {
            return Err(crate::NumcellError::Config(
                "decimal_precision must be at least 1".to_string(),
            ));
        }
        // a radix and literal that cannot be rendered together is a configuration mistake
        crate::radix::prefix(self.radix, self.literal)
            .map_err(|e| crate::NumcellError::Config(e.to_string()))?;
        Ok(self)
    }
}
