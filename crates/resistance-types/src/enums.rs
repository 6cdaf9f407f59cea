//! Enumeration types shared by agents and orchestrators.

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// Used both for a participant's secret role and for the winning side
/// reported at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Wants missions to succeed. Does not know who the infiltrators are.
    Loyalist,
    /// Wants missions to fail. Knows every other infiltrator.
    Infiltrator,
}

impl Side {
    /// Map the orchestrator's `spies_win` flag to the winning side.
    pub const fn winner(spies_win: bool) -> Self {
        if spies_win {
            Self::Infiltrator
        } else {
            Self::Loyalist
        }
    }

    /// Returns `true` for [`Side::Infiltrator`].
    pub const fn is_infiltrator(self) -> bool {
        matches!(self, Self::Infiltrator)
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Loyalist => write!(f, "loyalist"),
            Self::Infiltrator => write!(f, "infiltrator"),
        }
    }
}
