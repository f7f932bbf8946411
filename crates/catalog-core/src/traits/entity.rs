//! Base trait for domain entities.

use std::fmt;

/// A domain record identified by exactly one immutable identity.
///
/// Implementors compare equal iff their identities are equal; attribute
/// equality is not identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The identity type.
    type Id: Clone + Eq + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// This entity's identity.
    fn id(&self) -> &Self::Id;
}
