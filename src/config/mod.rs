//! Configuration for confirma.
//!
//! Config lives in a markdown file whose YAML frontmatter may override the
//! source of any built-in pattern. The markdown body is free-form notes.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::intent::{Intent, PatternSet};
use crate::paths::CONFIG_PATH;

pub mod validation;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub patterns: PatternOverrides,
}

/// Replacement pattern sources, keyed by intent. Missing keys keep the
/// built-in pattern.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternOverrides {
    pub affirmative: Option<String>,
    pub with_invoice: Option<String>,
    pub without_invoice: Option<String>,
}

impl PatternOverrides {
    pub fn get(&self, intent: Intent) -> Option<&str> {
        match intent {
            Intent::Affirmative => self.affirmative.as_deref(),
            Intent::WithInvoice => self.with_invoice.as_deref(),
            Intent::WithoutInvoice => self.without_invoice.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Intent::ALL.iter().all(|intent| self.get(*intent).is_none())
    }
}

impl Config {
    /// Load `.confirma/config.md` from the working directory, falling back to
    /// built-in defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_optional(Path::new(CONFIG_PATH))
    }

    /// Load `path` if it exists, otherwise return the default config.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using built-in patterns");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.patterns.validate()?;

        Ok(config)
    }

    /// Built-in patterns with this config's overrides applied.
    pub fn pattern_set(&self) -> Result<PatternSet> {
        let mut patterns = PatternSet::builtin();
        for intent in Intent::ALL {
            if let Some(source) = self.patterns.get(intent) {
                tracing::debug!(%intent, source, "overriding built-in pattern");
                patterns = patterns.with_override(intent, source)?;
            }
        }
        Ok(patterns)
    }
}

/// Split `---`-delimited YAML frontmatter from the markdown body.
///
/// Returns `None` for the frontmatter when the content does not start with a
/// delimiter or the closing delimiter is missing.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

#[cfg(test)]
mod tests;
