//! Strongly-typed identifiers for entities.

/// Declares a UUID-backed identifier newtype.
///
/// The generated type is `Copy + Eq + Hash + Ord`, so it can back an
/// [`Identity`](crate::Identity) and key both hash-based and ordered
/// containers.
///
/// ```ignore
/// forgeddd_core::identifier_newtype! {
///     /// Identifier of a customer.
///     pub struct CustomerId;
/// }
/// ```
#[macro_export]
macro_rules! identifier_newtype {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::uuid::Uuid);

        impl $name {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self($crate::uuid::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: $crate::uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &$crate::uuid::Uuid {
                &self.0
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::From<$crate::uuid::Uuid> for $name {
            fn from(value: $crate::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for $crate::uuid::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let uuid = <$crate::uuid::Uuid as ::core::str::FromStr>::from_str(s).map_err(|e| {
                    $crate::DomainError::invalid_id(::std::format!("{}: {}", stringify!($name), e))
                })?;
                ::core::result::Result::Ok(Self(uuid))
            }
        }
    };
}
