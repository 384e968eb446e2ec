//! Strongly typed identifier wrappers.
//!
//! `AgentId` is a zero-cost `Copy` wrapper; ids are assigned `1..=N` in
//! start-list order at reset time and stay stable for the whole run.
//! `OrderId` wraps the caller-supplied order name.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// One AGV.  Numbering starts at 1, so `AgentId(1)` is the first start
    /// cell passed to `reset`.
    pub struct AgentId(u32);
}

impl AgentId {
    /// Slot of this agent in a `Vec` ordered by id (`id - 1`).
    #[inline(always)]
    pub fn slot(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Id of the agent stored at `slot` (`slot + 1`).
    #[inline(always)]
    pub fn from_slot(slot: usize) -> Self {
        AgentId(slot as u32 + 1)
    }
}

/// Caller-supplied order name, e.g. `"O1"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
