//! Intents and the regular expressions that recognise them.
//!
//! Every pattern is compiled case-insensitively with Unicode enabled, so `\b`
//! treats accented letters such as `í` or `ñ` as word characters.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::str::FromStr;

/// Built-in source for the affirmative confirmation pattern.
pub const AFFIRMATIVE_SOURCE: &str = r"\b(?:s[ií]|claro|dale|ok(?:ay)?|vale|por supuesto|agr[eé]g(?:a|alo|ala|alos|alas)|a[ñn]ad(?:e|elo|ela|elos|elas|ir))\b";

/// Built-in source for the "with invoice" qualifier.
pub const WITH_INVOICE_SOURCE: &str = r"\b(?:con\s+factura|con|factura)\b";

/// Built-in source for the "without invoice" qualifier.
pub const WITHOUT_INVOICE_SOURCE: &str = r"\b(?:sin\s+factura|sin|no)\b";

/// The reading a customer reply is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// "yes", "sure", "add it"
    Affirmative,
    /// "with invoice"
    WithInvoice,
    /// "without invoice"
    WithoutInvoice,
}

impl Intent {
    /// All intents, in check order.
    pub const ALL: [Intent; 3] = [
        Intent::Affirmative,
        Intent::WithInvoice,
        Intent::WithoutInvoice,
    ];

    /// Pattern source shipped with the binary for this intent.
    pub fn builtin_source(self) -> &'static str {
        match self {
            Intent::Affirmative => AFFIRMATIVE_SOURCE,
            Intent::WithInvoice => WITH_INVOICE_SOURCE,
            Intent::WithoutInvoice => WITHOUT_INVOICE_SOURCE,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Affirmative => write!(f, "affirmative"),
            Intent::WithInvoice => write!(f, "with-invoice"),
            Intent::WithoutInvoice => write!(f, "without-invoice"),
        }
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "affirmative" => Ok(Intent::Affirmative),
            "with-invoice" => Ok(Intent::WithInvoice),
            "without-invoice" => Ok(Intent::WithoutInvoice),
            other => Err(format!(
                "unknown intent '{}' (expected affirmative, with-invoice or without-invoice)",
                other
            )),
        }
    }
}

/// Where a pattern's source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOrigin {
    Builtin,
    Config,
}

/// A compiled pattern for one intent.
#[derive(Debug, Clone)]
pub struct Pattern {
    intent: Intent,
    origin: PatternOrigin,
    regex: Regex,
}

impl Pattern {
    /// The shipped pattern for `intent`.
    pub fn builtin(intent: Intent) -> Self {
        Self::new(intent, intent.builtin_source(), PatternOrigin::Builtin)
            .expect("built-in pattern sources are valid")
    }

    /// Compile `source` for `intent`.
    pub fn new(intent: Intent, source: &str, origin: PatternOrigin) -> Result<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid {} pattern '{}'", intent, source))?;

        Ok(Self {
            intent,
            origin,
            regex,
        })
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn origin(&self) -> PatternOrigin {
        self.origin
    }

    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The leftmost matched substring of `text`, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }
}

/// One compiled pattern per intent.
#[derive(Debug, Clone)]
pub struct PatternSet {
    affirmative: Pattern,
    with_invoice: Pattern,
    without_invoice: Pattern,
}

impl PatternSet {
    /// The set shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            affirmative: Pattern::builtin(Intent::Affirmative),
            with_invoice: Pattern::builtin(Intent::WithInvoice),
            without_invoice: Pattern::builtin(Intent::WithoutInvoice),
        }
    }

    /// Replace the pattern for `intent` with a compiled `source`.
    pub fn with_override(mut self, intent: Intent, source: &str) -> Result<Self> {
        let pattern = Pattern::new(intent, source, PatternOrigin::Config)?;
        *self.slot_mut(intent) = pattern;
        Ok(self)
    }

    pub fn get(&self, intent: Intent) -> &Pattern {
        match intent {
            Intent::Affirmative => &self.affirmative,
            Intent::WithInvoice => &self.with_invoice,
            Intent::WithoutInvoice => &self.without_invoice,
        }
    }

    fn slot_mut(&mut self, intent: Intent) -> &mut Pattern {
        match intent {
            Intent::Affirmative => &mut self.affirmative,
            Intent::WithInvoice => &mut self.with_invoice,
            Intent::WithoutInvoice => &mut self.without_invoice,
        }
    }

    /// Patterns in check order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        Intent::ALL.into_iter().map(move |intent| self.get(intent))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin()
    }
}
