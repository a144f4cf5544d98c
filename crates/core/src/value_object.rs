//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by an ordered sequence of attribute values ("components"). Two value objects of the same
//! type with pairwise-equal components are considered equal.

use core::any::{Any, TypeId};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// A single field participating in value-object equality, hashing and ordering.
///
/// Implemented for every `Ord + Hash + Debug + Send + Sync + 'static` type, which
/// includes primitives, `String`, `Option<T>` (nullable fields) and other value
/// objects (nested values compare structurally).
pub trait Component: core::fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    /// Equal only to a component of the same concrete type with an equal value.
    fn eq_component(&self, other: &dyn Component) -> bool;

    /// Orders by value within a type, by `TypeId` across types.
    fn cmp_component(&self, other: &dyn Component) -> Ordering;

    fn hash_component(&self, state: &mut dyn Hasher);
}

impl<T> Component for T
where
    T: Ord + Hash + core::fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_component(&self, other: &dyn Component) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn cmp_component(&self, other: &dyn Component) -> Ordering {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => Ord::cmp(self, other),
            None => TypeId::of::<T>().cmp(&other.as_any().type_id()),
        }
    }

    fn hash_component(&self, mut state: &mut dyn Hasher) {
        Hash::hash(self, &mut state);
    }
}

/// Ordered component sequence returned by [`ValueObject::equality_components`].
pub type Components = Vec<Box<dyn Component>>;

/// Builds a [`Components`] sequence from owned field values, in order.
///
/// ```ignore
/// components![self.amount, self.currency.clone()]
/// ```
#[macro_export]
macro_rules! components {
    ($($field:expr),* $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($field) as ::std::boxed::Box<dyn $crate::value_object::Component>),*
        ]
    };
}

/// Per-instance, once-initialized memo of a value object's components.
///
/// Concurrent first access computes the sequence at most once and every caller
/// observes the same snapshot. Cloning yields an empty cache, so a clone
/// recomputes its own snapshot on first use.
#[derive(Default)]
pub struct ComponentCache {
    cell: OnceLock<Box<[Box<dyn Component>]>>,
}

impl ComponentCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the cached components, computing them with `compute` on first access.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> Components) -> &[Box<dyn Component>] {
        self.cell.get_or_init(|| {
            let components = compute();
            tracing::trace!(count = components.len(), "computed value object components");
            components.into_boxed_slice()
        })
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Clone for ComponentCache {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ComponentCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ComponentCache")
            .field("computed", &self.is_computed())
            .finish()
    }
}

/// Value object contract.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same components are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Components
///
/// `equality_components` lists the fields that take part in equality, hashing and
/// ordering. The order is part of the value's identity: `(1, 2)` and `(2, 1)` are
/// different values, and declaring the same fields in another order changes the hash.
/// The list is computed once per instance and cached in the instance's
/// [`ComponentCache`], so the fields must not change after construction.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Money {
///     amount: i64,
///     currency: String,
///     cache: ComponentCache,
/// }
///
/// impl ValueObject for Money {
///     fn equality_components(&self) -> Components {
///         components![self.amount, self.currency.clone()]
///     }
///
///     fn component_cache(&self) -> &ComponentCache {
///         &self.cache
///     }
/// }
///
/// forgeddd_core::value_object_equality!(Money);
/// ```
pub trait ValueObject: core::fmt::Debug + Send + Sync + 'static {
    /// Ordered fields to include in equality, hashing and ordering.
    fn equality_components(&self) -> Components;

    fn component_cache(&self) -> &ComponentCache;

    /// The cached component snapshot.
    fn components(&self) -> &[Box<dyn Component>] {
        self.component_cache().get_or_compute(|| self.equality_components())
    }
}

/// Structural equality between two values of the same type.
///
/// The same instance compares equal without computing components.
pub fn structural_eq<V: ValueObject>(lhs: &V, rhs: &V) -> bool {
    core::ptr::eq(lhs, rhs) || components_eq(lhs.components(), rhs.components())
}

/// Order-sensitive hash over all components.
pub fn structural_hash<V: ValueObject, H: Hasher>(value: &V, state: &mut H) {
    hash_components(value.components(), state);
}

/// Lexicographic ordering over components; consistent with [`structural_eq`].
pub fn structural_cmp<V: ValueObject>(lhs: &V, rhs: &V) -> Ordering {
    if core::ptr::eq(lhs, rhs) {
        return Ordering::Equal;
    }
    cmp_components(lhs.components(), rhs.components())
}

fn components_eq(lhs: &[Box<dyn Component>], rhs: &[Box<dyn Component>]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| l.eq_component(&**r))
}

fn hash_components<H: Hasher>(components: &[Box<dyn Component>], state: &mut H) {
    state.write_usize(components.len());
    for component in components {
        component.hash_component(&mut *state);
    }
}

fn cmp_components(lhs: &[Box<dyn Component>], rhs: &[Box<dyn Component>]) -> Ordering {
    for (l, r) in lhs.iter().zip(rhs) {
        match l.cmp_component(&**r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    lhs.len().cmp(&rhs.len())
}

/// Object-safe view over any value object.
///
/// Comparisons through `dyn AnyValueObject` are type-exact: values of different
/// concrete types are never equal, even when their components match.
pub trait AnyValueObject: core::fmt::Debug + Send + Sync {
    /// Concrete type of the value.
    fn type_tag(&self) -> TypeId;

    /// The cached component snapshot.
    fn snapshot(&self) -> &[Box<dyn Component>];
}

impl<V: ValueObject> AnyValueObject for V {
    fn type_tag(&self) -> TypeId {
        TypeId::of::<V>()
    }

    fn snapshot(&self) -> &[Box<dyn Component>] {
        self.components()
    }
}

impl<'a> PartialEq for dyn AnyValueObject + 'a {
    fn eq(&self, other: &Self) -> bool {
        // A value and its first field can share an address, so the type is checked first.
        self.type_tag() == other.type_tag()
            && (core::ptr::addr_eq(self, other) || components_eq(self.snapshot(), other.snapshot()))
    }
}

impl<'a> Eq for dyn AnyValueObject + 'a {}

impl<'a> Hash for dyn AnyValueObject + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(self.snapshot(), state);
    }
}

impl<'a> PartialOrd for dyn AnyValueObject + 'a {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for dyn AnyValueObject + 'a {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_tag().cmp(&other.type_tag()).then_with(|| {
            if core::ptr::addr_eq(self, other) {
                Ordering::Equal
            } else {
                cmp_components(self.snapshot(), other.snapshot())
            }
        })
    }
}

/// Implements `PartialEq`, `Eq`, `Hash`, `PartialOrd` and `Ord` for value object
/// types from their components.
#[macro_export]
macro_rules! value_object_equality {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    $crate::value_object::structural_eq(self, other)
                }
            }

            impl ::core::cmp::Eq for $t {}

            impl ::core::hash::Hash for $t {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    $crate::value_object::structural_hash(self, state)
                }
            }

            impl ::core::cmp::PartialOrd for $t {
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            impl ::core::cmp::Ord for $t {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    $crate::value_object::structural_cmp(self, other)
                }
            }
        )+
    };
}
