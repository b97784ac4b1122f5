//! Selection scripts
//!
//! A script replays shopper input against a matcher, one step at a time:
//!
//! ```yaml
//! - init: V1
//! - set: metal=gold
//! - set: tone=rose
//! - set: "size="      # clears the size facet
//! ```

use crate::candidates::CandidateSet;
use crate::error::{CoreError, CoreResult};
use crate::facet::FacetValue;
use crate::ids::VariantId;
use crate::matcher::{Action, ConfigurationMatcher, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStep {
    /// Seed from a default variant
    Init(VariantId),
    /// A `facet=value` selection
    Set(String),
}

impl ScriptStep {
    /// The matcher action for this step.
    pub fn to_action(&self) -> CoreResult<Action> {
        match self {
            ScriptStep::Init(variant) => Ok(Action::Init {
                default_variant: Some(variant.clone()),
            }),
            ScriptStep::Set(expr) => FacetValue::parse(expr).map(Action::from),
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Init(variant) => write!(f, "init {}", variant),
            ScriptStep::Set(expr) => write!(f, "set {}", expr),
        }
    }
}

/// Result of replaying one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    pub transition: Transition,
    pub candidates: CandidateSet,
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    /// Steps are written as single-key maps (`- set: metal=gold`)
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Load a script file (YAML, or JSON which YAML also accepts).
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let script: Script = serde_yaml::from_str(&content)?;
        script.validate()?;
        Ok(script)
    }

    /// Build a script of `set` steps from `facet=value` expressions.
    pub fn from_selections<I, S>(selections: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = Script {
            steps: selections
                .into_iter()
                .map(|s| ScriptStep::Set(s.into()))
                .collect(),
        };
        script.validate()?;
        Ok(script)
    }

    /// Check every `set` expression parses, before any step runs.
    pub fn validate(&self) -> CoreResult<()> {
        for step in &self.steps {
            step.to_action()?;
        }
        Ok(())
    }

    /// Replay every step against `matcher`.
    pub fn run(&self, matcher: &mut ConfigurationMatcher) -> CoreResult<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let transition = matcher.apply(step.to_action()?);
            log::debug!(
                "{}: changed={} resolved={:?}",
                step,
                transition.changed,
                transition.resolved_variant.as_ref().map(|v| v.as_str())
            );
            reports.push(StepReport {
                step: step.to_string(),
                transition,
                candidates: matcher.candidates(),
            });
        }
        Ok(reports)
    }
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
