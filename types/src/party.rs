//! Ledger party identities.
//!
//! A [`Party`] is a named participant identified by its owning key. States hold
//! parties through [`PartyRef`] so that two states (or two fields of one state)
//! can point at the very same identity. Identity comparison is by reference:
//! two separately constructed parties are distinct identities even when their
//! names and keys coincide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::TypesError;
use crate::keys::PublicKey;

/// A shared handle to a party identity.
pub type PartyRef = Arc<Party>;

/// A named ledger participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    name: String,
    owning_key: PublicKey,
}

impl Party {
    pub fn new(name: impl Into<String>, owning_key: PublicKey) -> Result<Self, TypesError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TypesError::EmptyPartyName);
        }
        Ok(Self { name, owning_key })
    }

    /// Construct a party and wrap it in a fresh shared handle.
    pub fn shared(name: impl Into<String>, owning_key: PublicKey) -> Result<PartyRef, TypesError> {
        Self::new(name, owning_key).map(Arc::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key this party must sign with when it participates in a state.
    pub fn owning_key(&self) -> &PublicKey {
        &self.owning_key
    }

    /// Whether `a` and `b` are the same identity object.
    pub fn same_identity(a: &PartyRef, b: &PartyRef) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
