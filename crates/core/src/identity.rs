//! Identity storage for entities.

use crate::error::{DomainError, DomainResult};

/// Identifier holder embedded by entity types.
///
/// The identifier is required at construction and never changes afterwards.
/// Absence is modeled as `None`: construction accepts either a plain
/// identifier or an `Option` of one, and rejects `None` with
/// [`DomainError::NullIdentifier`].
///
/// Equality, hashing and ordering delegate to the identifier itself, so an
/// `Identity<I>` hashes exactly like its `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity<I> {
    identifier: I,
}

impl<I> Identity<I> {
    /// Wrap an identifier, rejecting an absent one.
    ///
    /// The error names the `identifier` parameter.
    pub fn new(identifier: impl Into<Option<I>>) -> DomainResult<Self> {
        Self::named(identifier, "identifier")
    }

    /// Like [`Identity::new`], but reports `parameter` as the offending
    /// argument name.
    pub fn named(
        identifier: impl Into<Option<I>>,
        parameter: &'static str,
    ) -> DomainResult<Self> {
        match identifier.into() {
            Some(identifier) => Ok(Self { identifier }),
            None => {
                tracing::debug!(parameter, "rejected entity construction without identifier");
                Err(DomainError::null_identifier(parameter))
            }
        }
    }

    pub fn get(&self) -> &I {
        &self.identifier
    }

    pub fn into_inner(self) -> I {
        self.identifier
    }
}

impl<I> AsRef<I> for Identity<I> {
    fn as_ref(&self) -> &I {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasher, RandomState};

    #[test]
    fn plain_identifier_is_accepted() {
        let identity: Identity<i32> = Identity::new(1337).unwrap();
        assert_eq!(*identity.get(), 1337);
    }

    #[test]
    fn present_nullable_identifier_is_accepted() {
        let identity: Identity<i32> = Identity::new(Some(1337)).unwrap();
        assert_eq!(identity.into_inner(), 1337);
    }

    #[test]
    fn absent_identifier_is_rejected_with_parameter_name() {
        let err = Identity::<i32>::new(None).unwrap_err();
        assert_eq!(err, DomainError::NullIdentifier { parameter: "identifier" });
    }

    #[test]
    fn named_constructor_reports_custom_parameter() {
        let err = Identity::<String>::named(None, "order_number").unwrap_err();
        assert_eq!(err.parameter(), Some("order_number"));
    }

    #[test]
    fn hash_matches_identifier_hash() {
        let state = RandomState::new();
        let identity: Identity<String> = Identity::new("abc".to_string()).unwrap();
        assert_eq!(state.hash_one(&identity), state.hash_one("abc".to_string()));
    }
}
