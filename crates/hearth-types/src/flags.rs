//! Capability flags granted to entities.
//!
//! Flags are a small bitset. Setting or clearing one flag never touches
//! the others.

use serde::{Deserialize, Serialize};

/// A set of capability grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags(u8);

impl Flags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Full administrative rights, including `@set`.
    pub const WIZARD: Self = Self(1);
    /// May create rooms and exits.
    pub const BUILDER: Self = Self(1 << 1);
    /// Reserved for programmable objects.
    pub const PROGRAMMER: Self = Self(1 << 2);

    /// Named flags in display order.
    const NAMED: [(&'static str, Self); 3] = [
        ("wizard", Self::WIZARD),
        ("builder", Self::BUILDER),
        ("programmer", Self::PROGRAMMER),
    ];

    /// Check whether any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Check whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the bits of `other`.
    pub const fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the bits of `other`.
    pub const fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Check whether no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Look up a single flag by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::NAMED
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, flag)| *flag)
    }
}

impl core::ops::BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::fmt::Display for Flags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(label, _)| *label)
            .collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(" "))
        }
    }
}
