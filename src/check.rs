//! Fail-fast smoke checks over the confirmation patterns.
//!
//! A check run evaluates assertions in order and stops at the first one whose
//! pattern does not match its sample. The checker never terminates the
//! process itself; the binary maps the outcome to an exit status.

use std::fmt;

use crate::intent::{Intent, PatternSet};

/// Line written to stdout when every assertion holds.
pub const SUCCESS_MESSAGE: &str = "all confirmation patterns matched";

/// Sample reply the affirmative pattern must recognise.
pub const AFFIRMATIVE_SAMPLE: &str = "hola, si agrégalo por favor";
/// Sample reply the "with invoice" pattern must recognise.
pub const WITH_INVOICE_SAMPLE: &str = "con factura";
/// Sample reply the "without invoice" pattern must recognise.
pub const WITHOUT_INVOICE_SAMPLE: &str = "sin factura";

/// A sample phrase that the pattern for `intent` must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    pub intent: Intent,
    pub sample: String,
    /// Diagnostic written verbatim when the assertion fails
    pub message: String,
}

impl Assertion {
    /// Create an assertion with the standard diagnostic message.
    pub fn new(intent: Intent, sample: impl Into<String>) -> Self {
        let sample = sample.into();
        let message = format!("{} pattern did not match {:?}", intent, sample);
        Self {
            intent,
            sample,
            message,
        }
    }

    /// Replace the diagnostic message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Whether the assertion holds against `patterns`.
    pub fn holds(&self, patterns: &PatternSet) -> bool {
        patterns.get(self.intent).is_match(&self.sample)
    }
}

/// The assertions run by default, in order.
pub fn builtin_assertions() -> Vec<Assertion> {
    vec![
        Assertion::new(Intent::Affirmative, AFFIRMATIVE_SAMPLE),
        Assertion::new(Intent::WithInvoice, WITH_INVOICE_SAMPLE),
        Assertion::new(Intent::WithoutInvoice, WITHOUT_INVOICE_SAMPLE),
    ]
}

/// The first assertion that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    pub intent: Intent,
    pub sample: String,
    pub message: String,
    /// Zero-based position of the failing assertion in the run
    pub index: usize,
    /// Assertions left unevaluated after the failure
    pub skipped: usize,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AssertionFailure {}

/// Summary of a run in which every assertion held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub passed: usize,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.passed == self.total
    }
}

/// Runs assertions against a pattern set.
pub struct Checker<'a> {
    patterns: &'a PatternSet,
}

impl<'a> Checker<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Evaluate `assertions` in order, stopping at the first failure.
    pub fn run(&self, assertions: &[Assertion]) -> Result<CheckReport, AssertionFailure> {
        let total = assertions.len();

        for (index, assertion) in assertions.iter().enumerate() {
            let pattern = self.patterns.get(assertion.intent);
            tracing::debug!(
                intent = %assertion.intent,
                sample = %assertion.sample,
                pattern = pattern.source(),
                "evaluating assertion"
            );

            if !assertion.holds(self.patterns) {
                tracing::debug!(index, "assertion failed, skipping remaining checks");
                return Err(AssertionFailure {
                    intent: assertion.intent,
                    sample: assertion.sample.clone(),
                    message: assertion.message.clone(),
                    index,
                    skipped: total - index - 1,
                });
            }
        }

        Ok(CheckReport {
            total,
            passed: total,
        })
    }
}
