use std::sync::Arc;

pub mod aliased;
pub mod delegator;
pub mod negated;

pub use self::aliased::AliasedMatcher;
pub use self::delegator::Delegator;
pub use self::negated::NegatedAliasedMatcher;

use crate::DescriptionTransform;

/// Returns a matcher that behaves exactly like `base_matcher` but reports
/// descriptions and failure messages rewritten by `transform`.
///
/// The alias survives fluent configuration: chained calls that produce a
/// description-bearing matcher produce a new alias sharing the same
/// transform.
///
/// ### Example
/// ```
/// # use aliasrs::{alias::aliased, Capability, CapabilityError, Matcher};
/// # struct BeWithin { delta: f64, expected: f64 }
/// # impl Matcher<f64> for BeWithin {
/// #     fn supports(&self, capability: Capability) -> bool {
/// #         matches!(capability, Capability::Match | Capability::Description)
/// #     }
/// #     fn matches(&self, actual: &f64) -> Result<bool, CapabilityError> {
/// #         Ok((actual - self.expected).abs() <= self.delta)
/// #     }
/// #     fn description(&self) -> Result<String, CapabilityError> {
/// #         Ok(format!("be within {} of {}", self.delta, self.expected))
/// #     }
/// # }
/// let base = BeWithin { delta: 0.1, expected: 3.0 };
/// let matcher = aliased(base, |text| text.replace("be within", "a value within"));
///
/// assert_eq!(matcher.matches(&3.05), Ok(true));
/// assert_eq!(matcher.description().unwrap(), "a value within 0.1 of 3");
/// ```
pub fn aliased<M>(
    base_matcher: M,
    transform: impl Fn(&str) -> String + Send + Sync + 'static,
) -> AliasedMatcher<M> {
    AliasedMatcher::new(base_matcher, transform)
}

/// Returns an alias of `base_matcher` whose match and negated-match roles
/// are swapped, e.g. "does not include" wrapping "include".
pub fn negated<M>(
    base_matcher: M,
    transform: impl Fn(&str) -> String + Send + Sync + 'static,
) -> NegatedAliasedMatcher<M> {
    NegatedAliasedMatcher::new(base_matcher, transform)
}

/// Returns the transform used when an alias merely renames a matcher:
/// every occurrence of `from` in the original text is replaced with `to`.
///
/// ### Example
/// ```
/// # use aliasrs::alias::{substitution, AliasedMatcher};
/// # use aliasrs::{Capability, CapabilityError, Matcher};
/// # struct BeWithin;
/// # impl Matcher<f64> for BeWithin {
/// #     fn supports(&self, capability: Capability) -> bool {
/// #         matches!(capability, Capability::Description)
/// #     }
/// #     fn description(&self) -> Result<String, CapabilityError> {
/// #         Ok("be within 0.1 of 3".to_owned())
/// #     }
/// # }
/// let matcher = AliasedMatcher::with_transform(
///     BeWithin,
///     substitution("be within", "a value within"),
/// );
///
/// assert_eq!(matcher.description().unwrap(), "a value within 0.1 of 3");
/// ```
pub fn substitution(from: impl Into<String>, to: impl Into<String>) -> DescriptionTransform {
    let from = from.into();
    let to = to.into();

    Arc::new(move |text| text.replace(&from, &to))
}
