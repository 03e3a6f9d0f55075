use crate::{self as aliasrs, Delegate};

/// Generic forwarding decorator: holds exactly one wrapped matcher and
/// answers the whole capability protocol by delegating to it unchanged.
///
/// The wrapped matcher is fixed at construction and never reassigned. No
/// validation of its capabilities happens here; forwarding an operation it
/// does not provide fails exactly the way the raw matcher would fail.
#[derive(Delegate)]
pub struct Delegator<M> {
    base_matcher: M,
}

impl<M> Delegator<M> {
    /// Creates a delegator around the given matcher.
    pub const fn new(base_matcher: M) -> Self {
        Self { base_matcher }
    }

    /// The wrapped matcher.
    pub fn base_matcher(&self) -> &M {
        &self.base_matcher
    }

    /// Consumes the delegator, returning the wrapped matcher.
    pub fn into_inner(self) -> M {
        self.base_matcher
    }
}
