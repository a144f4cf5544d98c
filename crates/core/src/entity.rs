//! Entity trait: identity + continuity across state changes.
//!
//! Two entities are equal when they are of the same concrete type and carry
//! equal identifiers; every other attribute is ignored. Hashing uses the
//! identifier alone, so equal entities always hash equally.

use core::any::Any;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Entity marker + minimal interface.
pub trait Entity: core::fmt::Debug + 'static {
    /// Strongly-typed entity identifier.
    type Id: Eq + Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Identity equality between two entities of the same type.
///
/// The same instance compares equal without consulting the identifier.
pub fn identity_eq<E: Entity>(lhs: &E, rhs: &E) -> bool {
    core::ptr::eq(lhs, rhs) || lhs.id() == rhs.id()
}

/// Feeds exactly the identifier's hash into `state`.
pub fn identity_hash<E: Entity, H: Hasher>(entity: &E, state: &mut H) {
    entity.id().hash(state);
}

/// Identifier ordering; consistent with [`identity_eq`].
pub fn identity_cmp<E>(lhs: &E, rhs: &E) -> Ordering
where
    E: Entity,
    E::Id: Ord,
{
    if core::ptr::eq(lhs, rhs) {
        return Ordering::Equal;
    }
    lhs.id().cmp(rhs.id())
}

/// Object-safe view over any entity.
///
/// Comparisons through `dyn AnyEntity` are type-exact: an entity of one type
/// never equals an entity of another type, even when the identifiers match.
pub trait AnyEntity: core::fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Type-exact identity comparison.
    fn eq_entity(&self, other: &dyn AnyEntity) -> bool;

    /// Hashes the identifier only.
    fn hash_entity(&self, state: &mut dyn Hasher);
}

impl<E: Entity> AnyEntity for E {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_entity(&self, other: &dyn AnyEntity) -> bool {
        match other.as_any().downcast_ref::<E>() {
            Some(other) => identity_eq(self, other),
            None => false,
        }
    }

    fn hash_entity(&self, mut state: &mut dyn Hasher) {
        self.id().hash(&mut state);
    }
}

impl<'a> PartialEq for dyn AnyEntity + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.eq_entity(other)
    }
}

impl<'a> Eq for dyn AnyEntity + 'a {}

impl<'a> Hash for dyn AnyEntity + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_entity(state);
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` for entity types by identity.
///
/// ```ignore
/// #[derive(Debug)]
/// struct Customer {
///     identity: Identity<CustomerId>,
///     name: String,
/// }
///
/// impl Entity for Customer {
///     type Id = CustomerId;
///
///     fn id(&self) -> &CustomerId {
///         self.identity.get()
///     }
/// }
///
/// forgeddd_core::entity_equality!(Customer);
/// ```
#[macro_export]
macro_rules! entity_equality {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    $crate::entity::identity_eq(self, other)
                }
            }

            impl ::core::cmp::Eq for $t {}

            impl ::core::hash::Hash for $t {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    $crate::entity::identity_hash(self, state)
                }
            }
        )+
    };
}

/// Implements `PartialOrd` and `Ord` by identifier for entity types whose
/// identifier is `Ord`. Requires [`entity_equality!`] on the same types.
#[macro_export]
macro_rules! entity_ordering {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialOrd for $t {
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            impl ::core::cmp::Ord for $t {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    $crate::entity::identity_cmp(self, other)
                }
            }
        )+
    };
}
