//! `forgeddd-core` — domain-driven design building blocks.
//!
//! Two independent equality contracts:
//!
//! - **Entities** are equal when they are the same concrete type and carry equal
//!   identifiers ([`Entity`], [`Identity`], [`entity_equality!`]).
//! - **Value objects** are equal when they are the same concrete type and their
//!   ordered components are pairwise equal ([`ValueObject`], [`components!`],
//!   [`value_object_equality!`]).
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod compare;
pub mod entity;
pub mod error;
pub mod id;
pub mod identity;
pub mod value_object;

pub use compare::{equals, not_equals};
pub use entity::{AnyEntity, Entity};
pub use error::{DomainError, DomainResult};
pub use identity::Identity;
pub use value_object::{AnyValueObject, Component, ComponentCache, Components, ValueObject};

#[doc(hidden)]
pub use uuid;
