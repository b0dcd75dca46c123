use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier the remote catalog assigns to an artwork.
///
/// The catalog issues integer ids; they are the identity key across fetches,
/// so the selection ledger is keyed by this type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtworkId(i64);

impl ArtworkId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for ArtworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ArtworkId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
