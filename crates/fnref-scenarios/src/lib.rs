//! fnref Scenarios
//!
//! Self-contained demonstrations of callable contracts and the harness that
//! runs them.
//!
//! # Core Concepts
//!
//! - [`construction`]: four equivalent ways to build a summator
//! - [`binding`]: free functions and bound methods as summators
//! - [`unbound`]: unbound method paths as transformations
//! - [`constructor`]: constructor functions as factories
//! - [`auxiliary`]: comparator, consumer, runnable and shape mismatch
//! - [`Harness`]: runs a [`catalog`] of [`Scenario`]s into a [`HarnessReport`]
//!
//! # Example
//!
//! ```rust
//! use fnref_scenarios::{catalog, Harness, HarnessConfig};
//!
//! let harness = Harness::new(HarnessConfig::new().with_filter("binding"));
//! let report = harness.run(&catalog());
//! assert!(report.passed());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod auxiliary;
pub mod binding;
pub mod construction;
pub mod constructor;
pub mod unbound;

mod catalog;
mod harness;

// Re-exports
pub use catalog::{catalog, Scenario, ScenarioGroup};
pub use harness::{
    run_all, Harness, HarnessConfig, HarnessReport, ScenarioOutcome, ScenarioRecord,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
