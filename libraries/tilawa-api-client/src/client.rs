//! quran.com content API client.

use crate::envelope;
use crate::error::{ApiClientError, Result};
use crate::types::{ApiConfig, ChapterAudioFile, Envelope, Resource, VerseQuery};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tilawa_core::{Language, Recitation, RecitationId, Surah, SurahId, Translation, Verse};
use tracing::{debug, info};
use url::Url;

/// Read-only access to the content resources the player needs.
///
/// Every operation is a single idempotent GET. Implementations do not retry
/// and do not cache.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Chapter list with names translated into `language`
    async fn list_surahs(&self, language: &str) -> Result<Vec<Surah>>;

    /// Available recitations
    async fn list_recitations(&self) -> Result<Vec<Recitation>>;

    /// Available languages
    async fn list_languages(&self) -> Result<Vec<Language>>;

    /// Translations offered for `language`
    async fn list_translations(&self, language: &str) -> Result<Vec<Translation>>;

    /// Verses of one chapter with the requested translation and audio attached
    async fn list_verses(&self, query: &VerseQuery) -> Result<Vec<Verse>>;

    /// Absolute URL of a full-chapter recitation file
    async fn chapter_audio_url(&self, recitation: RecitationId, surah: SurahId)
        -> Result<String>;
}

/// HTTP client for the quran.com v4 API.
///
/// # Example
///
/// ```ignore
/// use tilawa_api_client::{ApiConfig, ContentApi, QuranApiClient};
///
/// let client = QuranApiClient::new(ApiConfig::default())?;
/// let surahs = client.list_surahs("en").await?;
/// println!("{} chapters", surahs.len());
/// ```
#[derive(Debug, Clone)]
pub struct QuranApiClient {
    http: Client,
    base_url: String,
    audio_base: Url,
    envelope: Envelope,
    verses_per_page: u32,
}

impl QuranApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ApiClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Url::join drops the last path segment unless the base ends in '/'
        let mut audio_base = config.audio_base_url.clone();
        if !audio_base.ends_with('/') {
            audio_base.push('/');
        }
        let audio_base = Url::parse(&audio_base)
            .map_err(|e| ApiClientError::InvalidUrl(format!("audio base URL: {}", e)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tilawa/{} (Terminal)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            audio_base,
            envelope: config.envelope,
            verses_per_page: config.verses_per_page,
        })
    }

    /// Normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Active envelope contract.
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Make a verse audio path absolute.
    ///
    /// Relative paths are joined onto the audio base, protocol-relative URLs
    /// get `https:` and absolute URLs pass through unchanged.
    pub fn resolve_audio_url(&self, raw: &str) -> Result<String> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Ok(raw.to_string());
        }
        if let Some(rest) = raw.strip_prefix("//") {
            return Ok(format!("https://{}", rest));
        }

        self.audio_base
            .join(raw.trim_start_matches('/'))
            .map(String::from)
            .map_err(|e| ApiClientError::InvalidUrl(format!("audio path {}: {}", raw, e)))
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        resource: Resource,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, resource = resource.name(), "Fetching resource");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ApiClientError::ServerUnreachable(e.to_string())
                } else {
                    ApiClientError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiClientError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            ApiClientError::Parse(format!("Failed to parse {}: {}", resource.name(), e))
        })?;

        envelope::extract(body, resource, self.envelope)
    }
}

#[async_trait]
impl ContentApi for QuranApiClient {
    async fn list_surahs(&self, language: &str) -> Result<Vec<Surah>> {
        let surahs: Vec<Surah> = self
            .get_envelope(
                Resource::Chapters,
                "/chapters",
                &[("language", language.to_string())],
            )
            .await?;

        info!(count = surahs.len(), language, "Fetched chapters");
        Ok(surahs)
    }

    async fn list_recitations(&self) -> Result<Vec<Recitation>> {
        let recitations: Vec<Recitation> = self
            .get_envelope(Resource::Recitations, "/resources/recitations", &[])
            .await?;

        info!(count = recitations.len(), "Fetched recitations");
        Ok(recitations)
    }

    async fn list_languages(&self) -> Result<Vec<Language>> {
        let languages: Vec<Language> = self
            .get_envelope(Resource::Languages, "/resources/languages", &[])
            .await?;

        info!(count = languages.len(), "Fetched languages");
        Ok(languages)
    }

    async fn list_translations(&self, language: &str) -> Result<Vec<Translation>> {
        let translations: Vec<Translation> = self
            .get_envelope(
                Resource::Translations,
                "/resources/translations",
                &[("language", language.to_string())],
            )
            .await?;

        info!(count = translations.len(), language, "Fetched translations");
        Ok(translations)
    }

    async fn list_verses(&self, query: &VerseQuery) -> Result<Vec<Verse>> {
        let mut params = vec![("language", query.language.clone())];
        if let Some(translation) = query.translation {
            params.push(("translations", translation.to_string()));
        }
        params.push(("fields", "text_uthmani".to_string()));
        if let Some(recitation) = query.recitation {
            params.push(("audio", recitation.to_string()));
        }
        params.push(("per_page", self.verses_per_page.to_string()));

        let path = format!("/verses/by_chapter/{}", query.surah);
        let mut verses: Vec<Verse> = self
            .get_envelope(Resource::Verses, &path, &params)
            .await?;

        for verse in &mut verses {
            if let Some(audio) = verse.audio.as_mut() {
                audio.url = self.resolve_audio_url(&audio.url)?;
            }
        }

        info!(count = verses.len(), surah = %query.surah, "Fetched verses");
        Ok(verses)
    }

    async fn chapter_audio_url(
        &self,
        recitation: RecitationId,
        surah: SurahId,
    ) -> Result<String> {
        let path = format!("/chapter_recitations/{}/{}", recitation, surah);
        let file: ChapterAudioFile = self
            .get_envelope(Resource::ChapterAudio, &path, &[])
            .await?;

        debug!(url = %file.audio_url, "Resolved chapter audio");
        self.resolve_audio_url(&file.audio_url)
    }
}
