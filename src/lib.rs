//! # Confirma - confirmation phrase smoke checks
//!
//! Confirma holds the regular expressions an ordering worker uses to read a
//! customer's short Spanish reply, and a smoke checker that proves each of
//! them still matches a representative sample before anything else runs.
//!
//! ## Core Concepts
//!
//! - **Intents**: the three readings a reply can carry (affirmative, with
//!   invoice, without invoice)
//! - **Patterns**: case-insensitive, word-bounded regexes, one per intent
//! - **Assertions**: a sample phrase plus the diagnostic printed if the
//!   pattern for its intent stops matching it
//!
//! ## Modules
//!
//! - [`intent`] - Intents, built-in pattern sources and compiled pattern sets
//! - [`check`] - Assertions and the fail-fast checker
//! - [`config`] - Optional pattern overrides loaded from `.confirma/config.md`
//! - [`ui`] - Quiet mode and colour helpers
//!
//! ## Example
//!
//! ```
//! use confirma::check::{builtin_assertions, Checker};
//! use confirma::intent::PatternSet;
//!
//! let patterns = PatternSet::builtin();
//! let report = Checker::new(&patterns)
//!     .run(&builtin_assertions())
//!     .expect("built-in patterns match their samples");
//! assert_eq!(report.passed, report.total);
//! ```

pub mod check;
pub mod config;
pub mod intent;
pub mod ui;

/// Default path constants for the confirma directory structure.
pub mod paths {
    /// Project configuration file: `.confirma/config.md`
    pub const CONFIG_PATH: &str = ".confirma/config.md";
}
