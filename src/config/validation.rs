//! Validation logic for pattern overrides.

use anyhow::Result;

use super::PatternOverrides;
use crate::intent::Intent;

impl PatternOverrides {
    /// Validate override sources
    ///
    /// Empty sources match every reply. Compile errors surface from
    /// `Config::pattern_set`, which names the intent.
    pub fn validate(&self) -> Result<()> {
        for intent in Intent::ALL {
            let Some(source) = self.get(intent) else {
                continue;
            };

            if source.trim().is_empty() {
                anyhow::bail!("patterns.{} must not be empty", config_key(intent));
            }
        }

        Ok(())
    }
}

/// Frontmatter key for an intent's override.
pub fn config_key(intent: Intent) -> &'static str {
    match intent {
        Intent::Affirmative => "affirmative",
        Intent::WithInvoice => "with_invoice",
        Intent::WithoutInvoice => "without_invoice",
    }
}
