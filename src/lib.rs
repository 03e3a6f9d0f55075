use std::fmt::{Display, Formatter};
use std::sync::Arc;

use thiserror::Error;

pub mod alias;

#[cfg(test)]
pub(crate) mod fixtures;

/// Implements [`Matcher`] for a decorator struct by forwarding every
/// capability to the field holding the wrapped matcher.
///
/// The wrapped matcher is the struct's only field, or the field marked with
/// `#[delegate]` when there are several. Decorators built this way behave
/// exactly like the matcher they hold; overriding individual capabilities is
/// done by wrapping a derived delegator (see
/// [`AliasedMatcher`](alias::AliasedMatcher)) rather than by partially
/// implementing the trait.
///
/// ### Example
/// ```
/// # use aliasrs::{Capability, CapabilityError, Delegate, Matcher};
/// struct BeEven;
///
/// impl Matcher<i64> for BeEven {
///     fn supports(&self, capability: Capability) -> bool {
///         matches!(capability, Capability::Match | Capability::Description)
///     }
///
///     fn matches(&self, actual: &i64) -> Result<bool, CapabilityError> {
///         Ok(actual % 2 == 0)
///     }
///
///     fn description(&self) -> Result<String, CapabilityError> {
///         Ok("be even".to_owned())
///     }
/// }
///
/// #[derive(Delegate)]
/// struct Transparent(BeEven);
///
/// let matcher = Transparent(BeEven);
///
/// assert_eq!(matcher.matches(&4), Ok(true));
/// assert_eq!(matcher.description().unwrap(), "be even");
/// assert_eq!(
///     matcher.does_not_match(&4),
///     Err(CapabilityError::Unsupported(Capability::NegatedMatch)),
/// );
/// ```
pub use aliasrs_derive::Delegate;

/// The capability protocol of a matcher.
///
/// A matcher is any value that implements some subset of the protocol:
/// presence of a capability, declared through [`Matcher::supports`], governs
/// behavior. Every optional operation has a default body that fails with
/// [`CapabilityError`], so invoking a capability a matcher does not provide
/// fails the same way on a decorated matcher as on a raw one.
///
/// ### Example
/// ```
/// # use aliasrs::{Capability, CapabilityError, Matcher};
/// struct BePositive;
///
/// impl Matcher<i64> for BePositive {
///     fn supports(&self, capability: Capability) -> bool {
///         matches!(capability, Capability::Match | Capability::Description)
///     }
///
///     fn matches(&self, actual: &i64) -> Result<bool, CapabilityError> {
///         Ok(*actual > 0)
///     }
///
///     fn description(&self) -> Result<String, CapabilityError> {
///         Ok("be positive".to_owned())
///     }
/// }
///
/// assert_eq!(BePositive.matches(&1), Ok(true));
/// assert!(!BePositive.supports(Capability::NegatedMatch));
/// ```
pub trait Matcher<T: ?Sized> {
    /// Returns whether this matcher provides the given capability.
    ///
    /// Implementations must keep this in sync with the operations they
    /// actually override: decorators consult it to decide whether a chained
    /// return value is itself a matcher worth re-wrapping, and whether an
    /// explicit negated match is available.
    fn supports(&self, capability: Capability) -> bool;

    /// Returns whether the given value matches.
    fn matches(&self, actual: &T) -> Result<bool, CapabilityError> {
        let _ = actual;

        Err(CapabilityError::Unsupported(Capability::Match))
    }

    /// Returns whether the given value does *not* match.
    ///
    /// This is not necessarily the boolean inverse of [`Matcher::matches`];
    /// matchers with asymmetric semantics provide both.
    fn does_not_match(&self, actual: &T) -> Result<bool, CapabilityError> {
        let _ = actual;

        Err(CapabilityError::Unsupported(Capability::NegatedMatch))
    }

    /// Describes what kind of value this matcher expects.
    fn description(&self) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unsupported(Capability::Description))
    }

    /// The message reported when the matcher was expected to match but did
    /// not.
    fn failure_message(&self) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unsupported(Capability::FailureMessage))
    }

    /// The message reported when the matcher was expected not to match but
    /// did.
    fn failure_message_when_negated(&self) -> Result<String, CapabilityError> {
        Err(CapabilityError::Unsupported(
            Capability::FailureMessageWhenNegated,
        ))
    }

    /// Answers an equality-style predicate (`==`, `===`) used as an
    /// alternate match check.
    ///
    /// Decorators in this crate implement no comparison operator traits, so
    /// operator-driven matching always reaches the wrapped matcher through
    /// this forwarded capability instead of being shadowed by structural
    /// equality of the wrapper.
    fn matches_operator(&self, operator: Operator, actual: &T) -> Result<bool, CapabilityError> {
        let _ = (operator, actual);

        Err(CapabilityError::Unsupported(Capability::OperatorMatch))
    }

    /// Answers a fluent configuration call, by name.
    ///
    /// Builder-style matchers refine themselves through chained calls such
    /// as `be_within(0.1).of(3)`; each call returns either a
    /// further-configured matcher or a plain value.
    fn configure(&self, name: &str, args: &[Argument]) -> Result<Configured<T>, CapabilityError>
    where
        T: 'static,
    {
        let _ = args;

        Err(CapabilityError::UnknownConfiguration(name.to_owned()))
    }
}

impl<'m, T: ?Sized, M: ?Sized + Matcher<T>> Matcher<T> for &'m M {
    fn supports(&self, capability: Capability) -> bool {
        (**self).supports(capability)
    }

    fn matches(&self, actual: &T) -> Result<bool, CapabilityError> {
        (**self).matches(actual)
    }

    fn does_not_match(&self, actual: &T) -> Result<bool, CapabilityError> {
        (**self).does_not_match(actual)
    }

    fn description(&self) -> Result<String, CapabilityError> {
        (**self).description()
    }

    fn failure_message(&self) -> Result<String, CapabilityError> {
        (**self).failure_message()
    }

    fn failure_message_when_negated(&self) -> Result<String, CapabilityError> {
        (**self).failure_message_when_negated()
    }

    fn matches_operator(&self, operator: Operator, actual: &T) -> Result<bool, CapabilityError> {
        (**self).matches_operator(operator, actual)
    }

    fn configure(&self, name: &str, args: &[Argument]) -> Result<Configured<T>, CapabilityError>
    where
        T: 'static,
    {
        (**self).configure(name, args)
    }
}

impl<T: ?Sized, M: ?Sized + Matcher<T>> Matcher<T> for Box<M> {
    fn supports(&self, capability: Capability) -> bool {
        (**self).supports(capability)
    }

    fn matches(&self, actual: &T) -> Result<bool, CapabilityError> {
        (**self).matches(actual)
    }

    fn does_not_match(&self, actual: &T) -> Result<bool, CapabilityError> {
        (**self).does_not_match(actual)
    }

    fn description(&self) -> Result<String, CapabilityError> {
        (**self).description()
    }

    fn failure_message(&self) -> Result<String, CapabilityError> {
        (**self).failure_message()
    }

    fn failure_message_when_negated(&self) -> Result<String, CapabilityError> {
        (**self).failure_message_when_negated()
    }

    fn matches_operator(&self, operator: Operator, actual: &T) -> Result<bool, CapabilityError> {
        (**self).matches_operator(operator, actual)
    }

    fn configure(&self, name: &str, args: &[Argument]) -> Result<Configured<T>, CapabilityError>
    where
        T: 'static,
    {
        (**self).configure(name, args)
    }
}

/// A named operation of the [`Matcher`] protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// [`Matcher::matches`].
    Match,
    /// [`Matcher::does_not_match`].
    NegatedMatch,
    /// [`Matcher::description`].
    Description,
    /// [`Matcher::failure_message`].
    FailureMessage,
    /// [`Matcher::failure_message_when_negated`].
    FailureMessageWhenNegated,
    /// [`Matcher::matches_operator`].
    OperatorMatch,
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Capability::Match => "matches",
            Capability::NegatedMatch => "does_not_match",
            Capability::Description => "description",
            Capability::FailureMessage => "failure_message",
            Capability::FailureMessageWhenNegated => "failure_message_when_negated",
            Capability::OperatorMatch => "matches_operator",
        })
    }
}

/// An equality-style predicate answered by [`Matcher::matches_operator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Plain equality, `==`.
    Equality,
    /// Case equality, `===`, for matchers used as case-dispatch predicates.
    CaseEquality,
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operator::Equality => "==",
            Operator::CaseEquality => "===",
        })
    }
}

/// Failure raised when a forwarded call targets an operation the wrapped
/// matcher does not provide.
///
/// Decorators never originate any other failure: a consumer of a decorated
/// matcher observes exactly the errors the raw matcher would produce.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// A fixed protocol operation the matcher does not provide.
    #[error("matcher does not support `{0}`")]
    Unsupported(Capability),
    /// A fluent configuration call the matcher does not recognize.
    #[error("matcher does not recognize the configuration call `{0}`")]
    UnknownConfiguration(String),
}

/// A value passed to, or returned by, a fluent configuration call.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Int(value.into())
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Int(value)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Str(value.to_owned())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Str(value)
    }
}

/// The outcome of a fluent configuration call.
pub enum Configured<T: ?Sized + 'static> {
    /// The call produced a further-configured matcher.
    Matcher(Box<dyn Matcher<T>>),
    /// The call produced a plain value.
    Value(Argument),
}

impl<T: ?Sized + 'static> Configured<T> {
    /// Returns the configured matcher, if the call produced one.
    pub fn into_matcher(self) -> Option<Box<dyn Matcher<T>>> {
        match self {
            Configured::Matcher(matcher) => Some(matcher),
            Configured::Value(_) => None,
        }
    }

    /// Returns the plain value, if the call produced one.
    pub fn into_value(self) -> Option<Argument> {
        match self {
            Configured::Matcher(_) => None,
            Configured::Value(value) => Some(value),
        }
    }
}

/// A pure `string -> string` function adapting description and failure
/// message text, e.g. replacing one phrase with another so an alias name
/// appears instead of the original.
///
/// The transform is shared, not cloned: every decorator produced while
/// chaining configuration calls holds the same [`Arc`].
pub type DescriptionTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;
