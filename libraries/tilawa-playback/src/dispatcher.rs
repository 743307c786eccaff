//! Fetch dispatcher
//!
//! Runs [`FetchRequest`]s on tokio tasks and sends each [`FetchOutcome`]
//! back over a channel. Nothing is cancelled; the controller ignores
//! outcomes it has already superseded.

use std::sync::Arc;

use tilawa_api_client::ContentApi;
use tokio::sync::mpsc;
use tracing::debug;

use crate::fetch::{CatalogData, FetchOutcome, FetchRequest, Listings};

/// Spawns fetches against a [`ContentApi`]
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn ContentApi>,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn ContentApi>, outcomes: mpsc::UnboundedSender<FetchOutcome>) -> Self {
        Self { api, outcomes }
    }

    /// Execute `request` in the background
    pub fn dispatch(&self, request: FetchRequest) {
        let api = Arc::clone(&self.api);
        let outcomes = self.outcomes.clone();

        tokio::spawn(async move {
            let outcome = execute(api.as_ref(), request).await;
            if outcomes.send(outcome).is_err() {
                debug!("Outcome receiver dropped");
            }
        });
    }

    pub fn dispatch_all(&self, requests: impl IntoIterator<Item = FetchRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }
}

/// Execute one request to completion
///
/// The startup batch fetches its four lists concurrently and fails as a
/// whole if any of them fails.
pub async fn execute(api: &dyn ContentApi, request: FetchRequest) -> FetchOutcome {
    debug!(ticket = ?request.ticket(), "Executing fetch");

    match request {
        FetchRequest::Catalog {
            catalog,
            listings,
            language,
        } => {
            let result = tokio::try_join!(
                api.list_surahs(&language),
                api.list_recitations(),
                api.list_languages(),
                api.list_translations(&language),
            )
            .map(|(surahs, recitations, languages, translations)| {
                (
                    CatalogData {
                        recitations,
                        languages,
                    },
                    Listings {
                        surahs,
                        translations,
                    },
                )
            });

            FetchOutcome::Catalog {
                catalog,
                listings,
                language,
                result,
            }
        }

        FetchRequest::Listings { ticket, language } => {
            let result = tokio::try_join!(
                api.list_surahs(&language),
                api.list_translations(&language),
            )
            .map(|(surahs, translations)| Listings {
                surahs,
                translations,
            });

            FetchOutcome::Listings {
                ticket,
                language,
                result,
            }
        }

        FetchRequest::Verses { ticket, query } => {
            let result = api.list_verses(&query).await;
            FetchOutcome::Verses {
                ticket,
                query,
                result,
            }
        }

        FetchRequest::ChapterAudio {
            ticket,
            recitation,
            surah,
        } => FetchOutcome::ChapterAudio {
            ticket,
            result: api.chapter_audio_url(recitation, surah).await,
        },
    }
}
