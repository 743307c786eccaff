//! Fetch requests issued by the controller and their outcomes

use crate::sequencer::Ticket;
use tilawa_api_client::{ApiClientError, VerseQuery};
use tilawa_core::{Language, Recitation, RecitationId, Surah, SurahId, Translation, Verse};

/// Work the controller wants done against the content API
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    /// Startup batch: catalog lists plus the listings for `language`
    Catalog {
        catalog: Ticket,
        listings: Ticket,
        language: String,
    },

    /// Surah and translation lists for a language
    Listings { ticket: Ticket, language: String },

    /// Verses of one surah
    Verses { ticket: Ticket, query: VerseQuery },

    /// Full-chapter audio URL
    ChapterAudio {
        ticket: Ticket,
        recitation: RecitationId,
        surah: SurahId,
    },
}

impl FetchRequest {
    /// The ticket that decides whether the outcome is applied
    pub fn ticket(&self) -> Ticket {
        match self {
            FetchRequest::Catalog { catalog, .. } => *catalog,
            FetchRequest::Listings { ticket, .. }
            | FetchRequest::Verses { ticket, .. }
            | FetchRequest::ChapterAudio { ticket, .. } => *ticket,
        }
    }
}

/// Language-independent lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogData {
    pub recitations: Vec<Recitation>,
    pub languages: Vec<Language>,
}

/// Lists that are re-fetched on language change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listings {
    pub surahs: Vec<Surah>,
    pub translations: Vec<Translation>,
}

/// Result of executing a [`FetchRequest`]
#[derive(Debug)]
pub enum FetchOutcome {
    Catalog {
        catalog: Ticket,
        listings: Ticket,
        language: String,
        result: Result<(CatalogData, Listings), ApiClientError>,
    },

    Listings {
        ticket: Ticket,
        language: String,
        result: Result<Listings, ApiClientError>,
    },

    /// Carries the query so the selection it was made for is committed
    /// together with the verses
    Verses {
        ticket: Ticket,
        query: VerseQuery,
        result: Result<Vec<Verse>, ApiClientError>,
    },

    ChapterAudio {
        ticket: Ticket,
        result: Result<String, ApiClientError>,
    },
}
