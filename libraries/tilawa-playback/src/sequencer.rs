//! Request sequencing
//!
//! Fetches complete in any order. Each one carries a [`Ticket`]; only the
//! outcome holding the latest ticket for its resource may touch state.

use serde::{Deserialize, Serialize};

/// Independently sequenced resource groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Recitation and language lists
    Catalog,
    /// Language-dependent surah and translation lists
    Listings,
    /// Verses of the selected surah
    Verses,
    /// Full-chapter audio URL
    ChapterAudio,
}

impl ResourceKind {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            ResourceKind::Catalog => 0,
            ResourceKind::Listings => 1,
            ResourceKind::Verses => 2,
            ResourceKind::ChapterAudio => 3,
        }
    }
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    pub kind: ResourceKind,
    pub seq: u64,
}

/// Per-resource monotonically increasing counters
#[derive(Debug, Default, Clone)]
pub struct RequestSequencer {
    latest: [u64; ResourceKind::COUNT],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for `kind`, superseding all earlier ones
    pub fn issue(&mut self, kind: ResourceKind) -> Ticket {
        let slot = &mut self.latest[kind.index()];
        *slot += 1;
        Ticket { kind, seq: *slot }
    }

    /// Whether `ticket` is the latest issued for its resource
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.kind.index()] == ticket.seq
    }
}
