use serde::{Deserialize, Serialize};

use blockdiff_project::ProjectionConfig;
use blockdiff_words::WordDiffConfig;

use crate::error::SdkResult;

/// Configuration for a full document diff.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How texts are cut into groups and diffed.
    pub words: WordDiffConfig,
    /// How blocks were joined into the flat texts.
    pub projection: ProjectionConfig,
}

impl EngineConfig {
    /// Diff whole lines instead of words.
    pub fn line_mode() -> Self {
        Self {
            words: WordDiffConfig::line_mode(),
            ..Default::default()
        }
    }

    /// Parse a TOML document. Missing sections keep their defaults.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.words.validate()?;
        Ok(config)
    }
}
