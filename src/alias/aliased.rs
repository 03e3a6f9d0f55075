use std::sync::Arc;

use super::Delegator;
use crate::{
    Argument, Capability, CapabilityError, Configured, DescriptionTransform, Matcher, Operator,
};

/// Presents a wrapped matcher under an alternate description.
///
/// Exactly three operations are intercepted: `description`,
/// `failure_message` and `failure_message_when_negated`, each returning the
/// wrapped matcher's text rewritten by the transform. The transform always
/// receives the original, untransformed string, and is never invoked for any
/// other operation. Everything else forwards through [`Delegator`]; a
/// chained configuration call whose result carries a description is
/// re-wrapped in a new alias sharing the same transform, so the alias
/// survives arbitrary chain depth.
pub struct AliasedMatcher<M> {
    delegator: Delegator<M>,
    transform: DescriptionTransform,
}

impl<M> AliasedMatcher<M> {
    /// Creates an alias of the given matcher with the given description
    /// transform.
    pub fn new(
        base_matcher: M,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::with_transform(base_matcher, Arc::new(transform))
    }

    /// Creates an alias sharing an existing transform.
    ///
    /// Chained configuration uses this form, so every alias along a chain
    /// holds the same [`Arc`] rather than a copy.
    pub fn with_transform(base_matcher: M, transform: DescriptionTransform) -> Self {
        Self {
            delegator: Delegator::new(base_matcher),
            transform,
        }
    }

    /// The wrapped matcher.
    pub fn base_matcher(&self) -> &M {
        self.delegator.base_matcher()
    }

    pub(crate) fn delegator(&self) -> &Delegator<M> {
        &self.delegator
    }

    pub(crate) fn transform(&self) -> &DescriptionTransform {
        &self.transform
    }

    fn rewrite(&self, text: String) -> String {
        (self.transform.as_ref())(&text)
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for AliasedMatcher<M> {
    fn supports(&self, capability: Capability) -> bool {
        self.delegator.supports(capability)
    }

    fn matches(&self, actual: &T) -> Result<bool, CapabilityError> {
        self.delegator.matches(actual)
    }

    fn does_not_match(&self, actual: &T) -> Result<bool, CapabilityError> {
        self.delegator.does_not_match(actual)
    }

    fn description(&self) -> Result<String, CapabilityError> {
        Ok(self.rewrite(self.delegator.description()?))
    }

    fn failure_message(&self) -> Result<String, CapabilityError> {
        Ok(self.rewrite(self.delegator.failure_message()?))
    }

    fn failure_message_when_negated(&self) -> Result<String, CapabilityError> {
        Ok(self.rewrite(self.delegator.failure_message_when_negated()?))
    }

    fn matches_operator(&self, operator: Operator, actual: &T) -> Result<bool, CapabilityError> {
        self.delegator.matches_operator(operator, actual)
    }

    fn configure(&self, name: &str, args: &[Argument]) -> Result<Configured<T>, CapabilityError>
    where
        T: 'static,
    {
        match self.delegator.configure(name, args)? {
            Configured::Matcher(next) if next.supports(Capability::Description) => {
                Ok(Configured::Matcher(Box::new(AliasedMatcher::with_transform(
                    next,
                    Arc::clone(&self.transform),
                ))))
            }
            outcome => Ok(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::alias::{aliased, substitution, AliasedMatcher};
    use crate::fixtures::{be_within, BeEven, EqOperator, Opaque};
    use crate::{Argument, Capability, CapabilityError, Matcher, Operator};

    #[test]
    fn rewrites_descriptions_and_failure_messages() {
        let matcher = AliasedMatcher::with_transform(
            be_within(0.1),
            substitution("be within", "a value within"),
        );

        assert_eq!(matcher.description().unwrap(), "a value within 0.1");
        assert_eq!(
            matcher.failure_message().unwrap(),
            "expected the value to a value within 0.1",
        );
        assert_eq!(
            matcher.failure_message_when_negated().unwrap(),
            "expected the value not to a value within 0.1",
        );
    }

    #[test]
    fn matching_is_transparent() {
        let matcher = aliased(BeEven, |text| text.replace("be even", "divide by two"));

        assert_eq!(matcher.matches(&4), Ok(true));
        assert_eq!(matcher.matches(&5), Ok(false));
        assert!(matcher.supports(Capability::Match));
        assert!(!matcher.supports(Capability::NegatedMatch));
    }

    #[test]
    fn alias_survives_chained_configuration() {
        let matcher = aliased(be_within(0.1), |text| {
            text.replace("be within", "a value within")
        });
        let configured = matcher
            .configure("of", &[Argument::Float(3.0)])
            .unwrap()
            .into_matcher()
            .unwrap();

        assert_eq!(configured.description().unwrap(), "a value within 0.1 of 3");
        assert_eq!(configured.matches(&3.05), Ok(true));
        assert_eq!(configured.matches(&4.0), Ok(false));
    }

    #[test]
    fn plain_chain_values_pass_through_unwrapped() {
        let matcher = aliased(be_within(0.25), |text| text.to_owned());

        assert_eq!(
            matcher.configure("delta", &[]).unwrap().into_value(),
            Some(Argument::Float(0.25)),
        );
    }

    #[test]
    fn chain_results_without_descriptions_are_not_wrapped() {
        let matcher = aliased(be_within(0.1), |text| text.replace("gave", "never gave"));
        let opaque = matcher
            .configure("opaque", &[])
            .unwrap()
            .into_matcher()
            .unwrap();

        assert_eq!(opaque.failure_message().unwrap(), "gave up");
        assert_eq!(
            opaque.description(),
            Err(CapabilityError::Unsupported(Capability::Description)),
        );
    }

    #[test]
    fn unknown_chain_calls_fail_like_the_raw_matcher() {
        let matcher = aliased(be_within(0.1), |text| text.to_owned());

        assert_eq!(
            matcher.configure("rounded", &[2.into()]).err(),
            Some(CapabilityError::UnknownConfiguration("rounded".to_owned())),
        );
    }

    #[test]
    fn operator_matching_reaches_the_wrapped_matcher() {
        let matcher = aliased(EqOperator { expected: 5 }, |text| text.to_owned());

        assert_eq!(matcher.matches_operator(Operator::Equality, &5), Ok(true));
        assert_eq!(
            matcher.matches_operator(Operator::CaseEquality, &6),
            Ok(false),
        );
        assert_eq!(
            aliased(BeEven, |text| text.to_owned()).matches_operator(Operator::Equality, &2),
            Err(CapabilityError::Unsupported(Capability::OperatorMatch)),
        );
    }

    #[test]
    fn transform_is_not_invoked_for_non_message_operations() {
        let matcher = aliased(BeEven, |_| panic!("transform invoked"));

        assert_eq!(matcher.matches(&2), Ok(true));
        assert!(matcher.supports(Capability::Description));
    }

    #[test]
    fn message_errors_propagate_unchanged() {
        let matcher = aliased(Opaque, |text| text.to_owned());

        assert_eq!(
            matcher.description(),
            Err(CapabilityError::Unsupported(Capability::Description)),
        );
    }
}
