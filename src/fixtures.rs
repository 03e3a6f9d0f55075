//! Matcher doubles shared by the decorator tests.

use crate::{Argument, Capability, CapabilityError, Configured, Matcher, Operator};

/// Fluent tolerance matcher: `be_within(delta)` refined by a chained
/// `of(expected)` call.
pub(crate) struct BeWithin {
    delta: f64,
    expected: Option<f64>,
}

pub(crate) fn be_within(delta: f64) -> BeWithin {
    BeWithin {
        delta,
        expected: None,
    }
}

impl Matcher<f64> for BeWithin {
    fn supports(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::Match
                | Capability::Description
                | Capability::FailureMessage
                | Capability::FailureMessageWhenNegated
        )
    }

    fn matches(&self, actual: &f64) -> Result<bool, CapabilityError> {
        Ok(self
            .expected
            .map_or(false, |expected| (actual - expected).abs() <= self.delta))
    }

    fn description(&self) -> Result<String, CapabilityError> {
        Ok(match self.expected {
            Some(expected) => format!("be within {} of {}", self.delta, expected),
            None => format!("be within {}", self.delta),
        })
    }

    fn failure_message(&self) -> Result<String, CapabilityError> {
        Ok(format!("expected the value to {}", self.description()?))
    }

    fn failure_message_when_negated(&self) -> Result<String, CapabilityError> {
        Ok(format!("expected the value not to {}", self.description()?))
    }

    fn configure(&self, name: &str, args: &[Argument]) -> Result<Configured<f64>, CapabilityError> {
        match (name, args) {
            ("of", [Argument::Float(expected)]) => Ok(Configured::Matcher(Box::new(BeWithin {
                delta: self.delta,
                expected: Some(*expected),
            }))),
            ("delta", []) => Ok(Configured::Value(Argument::Float(self.delta))),
            ("opaque", []) => Ok(Configured::Matcher(Box::new(Opaque))),
            _ => Err(CapabilityError::UnknownConfiguration(name.to_owned())),
        }
    }
}

/// Parity matcher with no negated-match capability.
pub(crate) struct BeEven;

impl Matcher<i64> for BeEven {
    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Match | Capability::Description)
    }

    fn matches(&self, actual: &i64) -> Result<bool, CapabilityError> {
        Ok(actual % 2 == 0)
    }

    fn description(&self) -> Result<String, CapabilityError> {
        Ok("be even".to_owned())
    }
}

/// Sign matcher whose negated check is not the boolean inverse of its
/// positive check: zero is neither positive nor negative.
pub(crate) struct BePositive;

impl Matcher<i64> for BePositive {
    fn supports(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::Match | Capability::NegatedMatch | Capability::Description
        )
    }

    fn matches(&self, actual: &i64) -> Result<bool, CapabilityError> {
        Ok(*actual > 0)
    }

    fn does_not_match(&self, actual: &i64) -> Result<bool, CapabilityError> {
        Ok(*actual < 0)
    }

    fn description(&self) -> Result<String, CapabilityError> {
        Ok("be positive".to_owned())
    }
}

/// Matcher whose predicate is expressed through comparison operators rather
/// than a `matches` check.
pub(crate) struct EqOperator {
    pub(crate) expected: i64,
}

impl Matcher<i64> for EqOperator {
    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::OperatorMatch)
    }

    fn matches_operator(&self, _operator: Operator, actual: &i64) -> Result<bool, CapabilityError> {
        Ok(*actual == self.expected)
    }
}

/// Chain result that exposes failure text but no description.
pub(crate) struct Opaque;

impl Matcher<f64> for Opaque {
    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Match | Capability::FailureMessage)
    }

    fn matches(&self, _actual: &f64) -> Result<bool, CapabilityError> {
        Ok(false)
    }

    fn failure_message(&self) -> Result<String, CapabilityError> {
        Ok("gave up".to_owned())
    }
}
