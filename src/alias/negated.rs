use std::sync::Arc;

use super::AliasedMatcher;
use crate::{
    Argument, Capability, CapabilityError, Configured, DescriptionTransform, Matcher, Operator,
};

/// An alias whose match and negated-match roles are swapped relative to the
/// wrapped matcher.
///
/// A request to match is answered by the wrapped matcher's own negated
/// check when it provides one; only when it does not is the answer the
/// boolean inverse of the forwarded positive check. Some matchers have
/// negation semantics that are not the inverse of their positive check, so
/// the fallback is a last resort, not an equivalent. A request not to match
/// is always answered by the wrapped matcher's positive check.
///
/// Descriptions and failure messages behave exactly as on
/// [`AliasedMatcher`].
pub struct NegatedAliasedMatcher<M> {
    aliased: AliasedMatcher<M>,
}

impl<M> NegatedAliasedMatcher<M> {
    /// Creates a negated alias of the given matcher with the given
    /// description transform.
    pub fn new(
        base_matcher: M,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::with_transform(base_matcher, Arc::new(transform))
    }

    /// Creates a negated alias sharing an existing transform.
    pub fn with_transform(base_matcher: M, transform: DescriptionTransform) -> Self {
        Self {
            aliased: AliasedMatcher::with_transform(base_matcher, transform),
        }
    }

    /// The wrapped matcher.
    pub fn base_matcher(&self) -> &M {
        self.aliased.base_matcher()
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for NegatedAliasedMatcher<M> {
    fn supports(&self, capability: Capability) -> bool {
        let base = self.aliased.base_matcher();

        match capability {
            Capability::Match => {
                base.supports(Capability::NegatedMatch) || base.supports(Capability::Match)
            }
            Capability::NegatedMatch => base.supports(Capability::Match),
            other => self.aliased.supports(other),
        }
    }

    fn matches(&self, actual: &T) -> Result<bool, CapabilityError> {
        let base = self.aliased.base_matcher();

        if base.supports(Capability::NegatedMatch) {
            base.does_not_match(actual)
        } else {
            Ok(!self.aliased.matches(actual)?)
        }
    }

    fn does_not_match(&self, actual: &T) -> Result<bool, CapabilityError> {
        self.aliased.base_matcher().matches(actual)
    }

    fn description(&self) -> Result<String, CapabilityError> {
        self.aliased.description()
    }

    fn failure_message(&self) -> Result<String, CapabilityError> {
        self.aliased.failure_message()
    }

    fn failure_message_when_negated(&self) -> Result<String, CapabilityError> {
        self.aliased.failure_message_when_negated()
    }

    fn matches_operator(&self, operator: Operator, actual: &T) -> Result<bool, CapabilityError> {
        self.aliased.matches_operator(operator, actual)
    }

    fn configure(&self, name: &str, args: &[Argument]) -> Result<Configured<T>, CapabilityError>
    where
        T: 'static,
    {
        match self.aliased.delegator().configure(name, args)? {
            Configured::Matcher(next) if next.supports(Capability::Description) => Ok(
                Configured::Matcher(Box::new(NegatedAliasedMatcher::with_transform(
                    next,
                    Arc::clone(self.aliased.transform()),
                ))),
            ),
            outcome => Ok(outcome),
        }
    }
}
