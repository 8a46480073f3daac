//! Scenario harness
//!
//! Runs scenarios one by one. A scenario that returns an error or panics is
//! recorded as failed; the remaining scenarios still run unless
//! [`HarnessConfig::stop_on_first_failure`] is set.

use crate::catalog::{Scenario, ScenarioGroup};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Write as _;
use std::panic;

/// Harness configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Only run scenarios whose qualified name contains this text
    pub filter: Option<String>,
    /// Stop after the first failed scenario
    pub stop_on_first_failure: bool,
}

impl HarnessConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name filter
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// With stop-on-first-failure
    #[inline]
    #[must_use]
    pub fn with_stop_on_first_failure(mut self, stop: bool) -> Self {
        self.stop_on_first_failure = stop;
        self
    }

    /// Whether `scenario` passes the filter
    #[must_use]
    pub fn selects(&self, scenario: &Scenario) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| scenario.qualified_name().contains(filter))
    }
}

/// Result of one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// Every check held
    Passed,
    /// A check failed or the scenario panicked
    Failed(String),
}

impl ScenarioOutcome {
    /// Whether the scenario passed
    #[inline]
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, ScenarioOutcome::Passed)
    }
}

/// Outcome of one scenario in a run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRecord {
    /// `group::name`
    pub name: String,
    /// Owning group
    pub group: ScenarioGroup,
    /// What happened
    pub outcome: ScenarioOutcome,
}

/// Report from a harness run
#[derive(Debug, Clone, Default, Serialize)]
pub struct HarnessReport {
    /// Scenarios that ran, in run order
    pub records: Vec<ScenarioRecord>,
    /// Scenarios filtered out or left unrun after a stop
    pub not_run: usize,
}

impl HarnessReport {
    /// No scenario failed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.records.iter().all(|r| r.outcome.is_passed())
    }

    /// Number of passed scenarios
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_passed()).count()
    }

    /// Number of failed scenarios
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.records.len() - self.passed_count()
    }

    /// Records of failed scenarios
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioRecord> {
        self.records.iter().filter(|r| !r.outcome.is_passed())
    }

    /// Human-readable summary
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Scenario Report");
        let _ = writeln!(out, "===============");
        for record in &self.records {
            match &record.outcome {
                ScenarioOutcome::Passed => {
                    let _ = writeln!(out, "  PASS  {}", record.name);
                }
                ScenarioOutcome::Failed(message) => {
                    let _ = writeln!(out, "  FAIL  {}: {}", record.name, message);
                }
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Passed: {}  Failed: {}  Not run: {}",
            self.passed_count(),
            self.failed_count(),
            self.not_run
        );
        out
    }

    /// JSON rendering
    ///
    /// # Errors
    /// Propagates serializer failures
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs scenarios under a [`HarnessConfig`]
#[derive(Debug, Clone, Default)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Create harness
    #[inline]
    #[must_use]
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run every selected scenario
    #[must_use]
    pub fn run(&self, scenarios: &[Scenario]) -> HarnessReport {
        let mut report = HarnessReport::default();
        let mut stopped = false;

        for scenario in scenarios {
            if stopped || !self.config.selects(scenario) {
                report.not_run += 1;
                continue;
            }

            let name = scenario.qualified_name();
            tracing::debug!("Running scenario {}", name);
            let outcome = run_one(scenario);

            match &outcome {
                ScenarioOutcome::Passed => tracing::info!("Scenario passed: {}", name),
                ScenarioOutcome::Failed(message) => {
                    tracing::error!("Scenario failed: {}: {}", name, message);
                    stopped = self.config.stop_on_first_failure;
                }
            }

            report.records.push(ScenarioRecord {
                name,
                group: scenario.group,
                outcome,
            });
        }

        report
    }
}

fn run_one(scenario: &Scenario) -> ScenarioOutcome {
    match panic::catch_unwind(scenario.run) {
        Ok(Ok(())) => ScenarioOutcome::Passed,
        Ok(Err(error)) => ScenarioOutcome::Failed(error.to_string()),
        Err(payload) => ScenarioOutcome::Failed(format!("panicked: {}", panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

/// Run the whole catalog with default configuration
#[must_use]
pub fn run_all() -> HarnessReport {
    Harness::default().run(&crate::catalog::catalog())
}
