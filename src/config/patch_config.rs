use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, PatchResult};
use crate::utils::fs::read_text;
use crate::utils::paths::expand_tilde;

/// Patch settings as read from a definition file or gathered from the command line.
///
/// Every field is optional so partial sources can be layered with [`PatchConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchConfig {
    /// File to patch
    pub target: Option<PathBuf>,

    /// Literal text to look for
    pub search: Option<String>,

    /// Literal text to put in its place
    pub replace: Option<String>,

    /// Treat a missing search text as an error
    #[serde(default)]
    pub strict: bool,
}

/// A fully resolved patch, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchDefinition {
    pub target: PathBuf,
    pub search: String,
    pub replace: String,
    pub strict: bool,
}

impl PatchConfig {
    /// Load a definition file, choosing the format from its extension
    pub fn load(path: &Path) -> PatchResult<Self> {
        let path = expand_tilde(path);
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = read_text(&path)?;
        debug!("Loading patch definition from {}", path.display());

        match ext {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            _ => Err(PatchError::invalid_argument(format!(
                "Unsupported patch definition format: {}",
                ext
            ))),
        }
    }

    /// Layer `overrides` on top of `self`; values set in `overrides` win
    pub fn merge(self, overrides: PatchConfig) -> Self {
        Self {
            target: overrides.target.or(self.target),
            search: overrides.search.or(self.search),
            replace: overrides.replace.or(self.replace),
            strict: self.strict || overrides.strict,
        }
    }

    /// Check that target and search are present and resolve the target path
    pub fn into_definition(self) -> PatchResult<PatchDefinition> {
        let target = self
            .target
            .ok_or_else(|| PatchError::invalid_argument("no target file given"))?;
        let search = self
            .search
            .ok_or_else(|| PatchError::invalid_argument("no search text given"))?;

        Ok(PatchDefinition {
            target: expand_tilde(target),
            search,
            replace: self.replace.unwrap_or_default(),
            strict: self.strict,
        })
    }
}

/// Read a literal text block from a file, verbatim
pub fn load_block(path: &Path) -> PatchResult<String> {
    read_text(expand_tilde(path))
}
