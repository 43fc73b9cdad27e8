//! Ordered decision tables.
//!
//! ASTM D2487 is a sequence of threshold tests where the first matching test
//! decides. Each table keeps that order explicit: rules are evaluated top to
//! bottom and the fallback applies when none match, so evaluation is total.

use crate::model::AtterbergLimits;
use crate::plasticity::a_line;
use rust_decimal::Decimal;
use serde::Serialize;

/// A labelled predicate and the outcome it selects.
pub struct DecisionRule<I: 'static, O: 'static> {
    pub label: &'static str,
    pub applies: fn(&I) -> bool,
    pub outcome: O,
}

/// An ordered list of rules with an explicit fallback.
pub struct DecisionTable<I: 'static, O: 'static> {
    pub name: &'static str,
    pub rules: &'static [DecisionRule<I, O>],
    pub fallback_label: &'static str,
    pub fallback: O,
}

/// The outcome of evaluating a table, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision<O> {
    pub outcome: O,
    pub label: &'static str,
    /// Position of the matching rule, `None` when the fallback applied.
    pub rule_index: Option<usize>,
}

impl<I: 'static, O: Copy + 'static> DecisionTable<I, O> {
    /// Evaluate rules in order; first match wins.
    pub fn evaluate(&self, input: &I) -> Decision<O> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| (rule.applies)(input))
            .map(|(idx, rule)| Decision {
                outcome: rule.outcome,
                label: rule.label,
                rule_index: Some(idx),
            })
            .unwrap_or(Decision {
                outcome: self.fallback,
                label: self.fallback_label,
                rule_index: None,
            })
    }

    /// Labels and outcomes in evaluation order, fallback last.
    pub fn entries(&self) -> Vec<(&'static str, O)> {
        self.rules
            .iter()
            .map(|r| (r.label, r.outcome))
            .chain(std::iter::once((self.fallback_label, self.fallback)))
            .collect()
    }
}

/// A sample's position on the plasticity chart, as the decision tables see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlasticityPoint {
    pub liquid_limit: Decimal,
    pub plasticity_index: Decimal,
    pub a_line: Decimal,
    pub is_organic: bool,
}

impl PlasticityPoint {
    pub fn new(limits: AtterbergLimits, is_organic: bool) -> Self {
        Self {
            liquid_limit: limits.liquid_limit,
            plasticity_index: limits.plasticity_index,
            a_line: a_line(limits.liquid_limit),
            is_organic,
        }
    }
}
