use std::fmt;

use serde::{Deserialize, Serialize};

/// Membership tier a patron holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Entitlement {
    /// Regular membership, good for the general collection
    #[default]
    Standard,
    /// Premium membership, good for the whole collection
    Premium,
}

impl Entitlement {
    /// Whether this tier unlocks the premium collection
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Premium)
    }

    /// Lowercase tier name for listings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for Entitlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A library member: a name plus the tier they pay for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Patron {
    /// The patron's name
    name: String,
    /// Membership tier the patron holds
    entitlement: Entitlement,
}

impl Patron {
    /// Enroll a patron at the given tier
    #[must_use]
    pub fn new(name: impl Into<String>, entitlement: Entitlement) -> Self {
        Self { name: name.into(), entitlement }
    }

    /// The patron's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tier the patron holds
    #[must_use]
    pub const fn entitlement(&self) -> Entitlement {
        self.entitlement
    }

    /// Whether the patron may take books from the premium collection
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.entitlement.is_premium()
    }
}
