use serde::{Deserialize, Serialize};

use crate::decode::TextEncoding;
use crate::error::{QfxError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub encoding: TextEncoding,
}

impl ImportConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self> {
        toml::from_str(toml_content).map_err(|e| QfxError::Config(e.to_string()))
    }
}
