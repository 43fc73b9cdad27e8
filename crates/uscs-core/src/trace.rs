use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    Components,
    BranchSelect,
    FineGrainedRule,
    CoarsePrefix,
    Gradation,
    FinesCharacter,
    SymbolCompose,
    GroupName,
    PlasticityCheck,
}

/// One decision taken while classifying a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

impl TraceStep {
    pub fn new(step_type: TraceStepType, message: impl Into<String>) -> Self {
        Self {
            step_type,
            message: message.into(),
        }
    }
}

/// Ordered record of the decisions behind a classification.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step_type: TraceStepType, message: impl Into<String>) {
        let step = TraceStep::new(step_type, message);
        tracing::debug!(step = ?step.step_type, "{}", step.message);
        self.steps.push(step);
    }

    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}
