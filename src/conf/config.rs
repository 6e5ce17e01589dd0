use std::path::Path;

use config::{Config as CConfig, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::{conf::ChunkConfig, core::ColchunkError};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chunk: ChunkConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, ColchunkError> {
        let config = CConfig::builder()
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .add_source(Self::env())
            .build()?
            .try_deserialize::<Config>()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, ColchunkError> {
        let config = CConfig::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Self::env())
            .build()?
            .try_deserialize::<Config>()?;
        Ok(config)
    }

    /// `COLCHUNK_CHUNK__NUMBER_FORMAT=fixed` overrides `chunk.number_format`.
    fn env() -> Environment {
        Environment::with_prefix("COLCHUNK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}
