//! Newtype wrappers around [`uuid::Uuid`] for domain entity identifiers.
//!
//! Each entity gets its own identifier type via [`define_id!`], which
//! prevents passing one entity's ID where another's is expected. IDs are
//! generated at random when absent and must be canonical hyphenated UUIDs
//! when supplied as text.

pub use uuid::Uuid;

use crate::error::IdError;

/// Parse a canonical hyphenated UUID (`8e65b539-6bdb-42eb-b782-1470846e9cbf`).
///
/// Other textual forms accepted by `uuid` (simple, braced, URN) are rejected.
pub fn parse_canonical(s: &str) -> Result<Uuid, IdError> {
    let invalid = || IdError {
        value: s.to_string(),
    };
    if s.len() != uuid::fmt::Hyphenated::LENGTH {
        return Err(invalid());
    }
    Uuid::parse_str(s).map_err(|_| invalid())
}

/// Define a newtype ID wrapper around `Uuid`.
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name($crate::types::id::Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self($crate::types::id::Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: $crate::types::id::Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> $crate::types::id::Uuid {
                self.0
            }

            /// Return a reference to the inner UUID.
            pub fn as_uuid(&self) -> &$crate::types::id::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::types::id::parse_canonical(s).map(Self)
            }
        }

        impl From<$crate::types::id::Uuid> for $name {
            fn from(uuid: $crate::types::id::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for $crate::types::id::Uuid {
            fn from(id: $name) -> $crate::types::id::Uuid {
                id.0
            }
        }
    };
}
