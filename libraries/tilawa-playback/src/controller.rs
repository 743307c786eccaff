//! Player state controller - core orchestration
//!
//! Owns every piece of mutable player state and keeps selections, verse list,
//! media element, bookmarks and reading goal consistent with each other.
//!
//! Intents either mutate state directly or return [`FetchRequest`]s. The
//! platform executes those (see [`crate::Dispatcher`]) and feeds the
//! [`FetchOutcome`]s back through [`PlayerController::apply_outcome`], which
//! drops any outcome that is no longer the latest for its resource.

use std::sync::Arc;
use std::time::Duration;

use tilawa_api_client::VerseQuery;
use tilawa_core::text::plain_text;
use tilawa_core::{
    BookmarkAction, BookmarkSet, Language, ReadOutcome, ReadingGoal, Recitation, RecitationId,
    Surah, SurahId, Translation, TranslationId, Verse, VerseId,
};
use tilawa_storage::{bookmarks, reading_goal, LocalStore};
use tracing::{debug, error, info, warn};

use crate::{
    clock::Clock,
    error::{PlayerError, Result},
    fetch::{CatalogData, FetchOutcome, FetchRequest, Listings},
    media::{MediaElement, MediaEvent},
    notice::Notice,
    search::filter_surahs,
    sequencer::{RequestSequencer, ResourceKind, Ticket},
    share::ShareTarget,
    types::{AudioMode, PlayerConfig, PlayerSnapshot},
};

/// Language-dependent lists waiting for their first verse list
struct StagedListings {
    language: Language,
    lists: Listings,
}

/// Single-owner player state machine
///
/// Selections are committed together with the verse list fetched for them,
/// so `surah()`, `verses()` and `current_verse()` always agree.
pub struct PlayerController {
    config: PlayerConfig,

    // Collaborators
    media: Box<dyn MediaElement>,
    share: Box<dyn ShareTarget>,
    store: Arc<dyn LocalStore>,
    clock: Arc<dyn Clock>,
    sequencer: RequestSequencer,

    // Selections
    language: Option<Language>,
    surah: Option<SurahId>,
    recitation: Option<RecitationId>,
    translation: Option<TranslationId>,

    // Fetched lists
    surahs: Vec<Surah>,
    filtered_surahs: Vec<Surah>,
    recitations: Vec<Recitation>,
    languages: Vec<Language>,
    translations: Vec<Translation>,
    verses: Vec<Verse>,

    current_verse: Option<VerseId>,
    // Verse to select once the next verse list arrives (bookmark jumps)
    pending_verse: Option<VerseId>,
    staged_listings: Option<StagedListings>,
    // Start playback once the next chapter audio is loaded
    resume_on_load: bool,

    // Mirrors of the media element
    position: Duration,
    duration: Duration,
    is_playing: bool,
    volume: f32,

    search_term: String,
    bookmarks: BookmarkSet,
    reading_goal: ReadingGoal,
    notices: Vec<Notice>,
}

impl PlayerController {
    /// Create a controller with empty lists and default local state
    pub fn new(
        config: PlayerConfig,
        mut media: Box<dyn MediaElement>,
        share: Box<dyn ShareTarget>,
        store: Arc<dyn LocalStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let volume = if config.initial_volume.is_nan() {
            1.0
        } else {
            config.initial_volume.clamp(0.0, 1.0)
        };
        media.set_volume(volume);

        let reading_goal = ReadingGoal::new(config.default_daily_target, clock.today());

        Self {
            config,
            media,
            share,
            store,
            clock,
            sequencer: RequestSequencer::new(),
            language: None,
            surah: None,
            recitation: None,
            translation: None,
            surahs: Vec::new(),
            filtered_surahs: Vec::new(),
            recitations: Vec::new(),
            languages: Vec::new(),
            translations: Vec::new(),
            verses: Vec::new(),
            current_verse: None,
            pending_verse: None,
            staged_listings: None,
            resume_on_load: false,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            is_playing: false,
            volume,
            search_term: String::new(),
            bookmarks: BookmarkSet::default(),
            reading_goal,
            notices: Vec::new(),
        }
    }

    // ===== Startup =====

    /// Load bookmarks and the reading goal from the store
    ///
    /// Missing or unreadable records become defaults.
    pub async fn restore_local_state(&mut self) {
        self.bookmarks = bookmarks::load(self.store.as_ref()).await;
        self.reading_goal = reading_goal::load(
            self.store.as_ref(),
            self.config.default_daily_target,
            self.clock.today(),
        )
        .await;

        info!(
            bookmarks = self.bookmarks.len(),
            total_read = self.reading_goal.total_verses_read,
            "Restored local state"
        );
    }

    /// Request the startup batch for the configured language
    pub fn initial_load(&mut self) -> FetchRequest {
        let catalog = self.sequencer.issue(ResourceKind::Catalog);
        let listings = self.sequencer.issue(ResourceKind::Listings);

        FetchRequest::Catalog {
            catalog,
            listings,
            language: self.config.default_language.clone(),
        }
    }

    // ===== Fetch outcomes =====

    /// Apply a completed fetch, returning any follow-up requests
    ///
    /// Outcomes superseded by a later request for the same resource are
    /// discarded.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Vec<FetchRequest> {
        match outcome {
            FetchOutcome::Catalog {
                catalog,
                listings,
                language,
                result,
            } => {
                if !self.accept(catalog) {
                    return Vec::new();
                }
                match result {
                    Ok((data, lists)) => {
                        self.apply_catalog(data);
                        if self.accept(listings) {
                            self.apply_listings(&language, lists)
                        } else {
                            Vec::new()
                        }
                    }
                    Err(e) => {
                        error!(error = %e, language = %language, "Initial load failed");
                        self.notify(Notice::error(format!("Failed to load content: {}", e)));
                        Vec::new()
                    }
                }
            }

            FetchOutcome::Listings {
                ticket,
                language,
                result,
            } => {
                if !self.accept(ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(lists) => self.apply_listings(&language, lists),
                    Err(e) => {
                        warn!(error = %e, language = %language, "Language change failed");
                        self.notify(Notice::error(format!(
                            "Failed to switch language to {}: {}",
                            language, e
                        )));
                        Vec::new()
                    }
                }
            }

            FetchOutcome::Verses {
                ticket,
                query,
                result,
            } => {
                if !self.accept(ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(verses) => self.apply_verses(query, verses),
                    Err(e) => {
                        warn!(error = %e, surah = %query.surah, "Verse fetch failed");
                        self.abandon_verse_fetch();
                        self.notify(Notice::error(format!("Failed to load verses: {}", e)));
                        Vec::new()
                    }
                }
            }

            FetchOutcome::ChapterAudio { ticket, result } => {
                if !self.accept(ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(url) => {
                        debug!(url = %url, "Loading chapter audio");
                        self.position = Duration::ZERO;
                        self.duration = Duration::ZERO;
                        self.media.load(&url);
                        if std::mem::take(&mut self.resume_on_load) {
                            self.request_play();
                        }
                    }
                    Err(e) => {
                        self.resume_on_load = false;
                        warn!(error = %e, "Chapter audio lookup failed");
                        self.notify(Notice::error(format!("Failed to load audio: {}", e)));
                    }
                }
                Vec::new()
            }
        }
    }

    fn accept(&self, ticket: Ticket) -> bool {
        let current = self.sequencer.is_current(ticket);
        if !current {
            debug!(kind = ?ticket.kind, seq = ticket.seq, "Discarding stale fetch outcome");
        }
        current
    }

    fn apply_catalog(&mut self, data: CatalogData) {
        self.recitations = data.recitations;
        self.languages = data.languages;

        let still_listed = self
            .recitation
            .is_some_and(|id| self.recitations.iter().any(|r| r.id == id));
        if !still_listed {
            self.recitation = self.recitations.first().map(|r| r.id);
        }

        info!(
            recitations = self.recitations.len(),
            languages = self.languages.len(),
            "Catalog loaded"
        );
    }

    /// Stage new listings and fetch verses for their first surah
    ///
    /// The language and lists are committed once those verses arrive.
    fn apply_listings(&mut self, language: &str, lists: Listings) -> Vec<FetchRequest> {
        let language = self.lookup_language(language);
        info!(
            language = %language.iso_code,
            surahs = lists.surahs.len(),
            translations = lists.translations.len(),
            "Listings loaded"
        );

        self.pending_verse = None;
        let Some(surah) = lists.surahs.first().map(|s| s.id) else {
            // No surah to fetch verses for
            self.staged_listings = None;
            self.commit_listings(language, lists);
            self.surah = None;
            self.verses.clear();
            self.current_verse = None;
            return Vec::new();
        };

        let query = VerseQuery {
            surah,
            language: language.iso_code.clone(),
            translation: lists.translations.first().map(|t| t.id),
            recitation: self.recitation,
        };
        self.staged_listings = Some(StagedListings { language, lists });
        self.request_verses(query)
    }

    fn commit_listings(&mut self, language: Language, lists: Listings) {
        self.language = Some(language);
        self.surahs = lists.surahs;
        self.translations = lists.translations;
        self.refilter();
    }

    /// Commit a verse list together with the selection it was fetched for
    fn apply_verses(&mut self, query: VerseQuery, verses: Vec<Verse>) -> Vec<FetchRequest> {
        if let Some(staged) = self.staged_listings.take() {
            if staged.language.iso_code == query.language {
                self.commit_listings(staged.language, staged.lists);
            } else {
                debug!(language = %staged.language.iso_code, "Dropping superseded listings");
            }
        }

        self.surah = Some(query.surah);
        self.translation = query.translation;
        self.recitation = query.recitation;
        self.verses = verses;

        let target = self
            .pending_verse
            .take()
            .filter(|id| self.verses.iter().any(|v| v.id == *id));
        self.current_verse = target.or_else(|| self.verses.first().map(|v| v.id));

        debug!(surah = %query.surah, count = self.verses.len(), "Verses loaded");

        match self.config.audio_mode {
            AudioMode::VerseEmbedded => {
                self.load_current_audio();
                Vec::new()
            }
            AudioMode::ChapterRecitation => self.chapter_audio_request(),
        }
    }

    /// Forget everything that was waiting on a failed verse fetch
    ///
    /// The committed selection and verse list stay as they were. Listings
    /// staged before anything was ever selected are still committed so a
    /// surah can be picked.
    fn abandon_verse_fetch(&mut self) {
        self.pending_verse = None;
        self.resume_on_load = false;

        if let Some(staged) = self.staged_listings.take() {
            if self.surah.is_none() {
                let translation = staged.lists.translations.first().map(|t| t.id);
                self.commit_listings(staged.language, staged.lists);
                self.translation = translation;
            }
        }
    }

    fn lookup_language(&self, code: &str) -> Language {
        self.languages
            .iter()
            .find(|l| l.iso_code == code)
            .cloned()
            .unwrap_or_else(|| {
                if code == "en" {
                    Language::english()
                } else {
                    Language::from_code(code)
                }
            })
    }

    fn language_code(&self) -> String {
        self.language
            .as_ref()
            .map(|l| l.iso_code.clone())
            .unwrap_or_else(|| self.config.default_language.clone())
    }

    fn query_for(
        &self,
        surah: SurahId,
        translation: Option<TranslationId>,
        recitation: Option<RecitationId>,
    ) -> VerseQuery {
        VerseQuery {
            surah,
            language: self.language_code(),
            translation,
            recitation,
        }
    }

    fn request_verses(&mut self, query: VerseQuery) -> Vec<FetchRequest> {
        vec![FetchRequest::Verses {
            ticket: self.sequencer.issue(ResourceKind::Verses),
            query,
        }]
    }

    fn chapter_audio_request(&mut self) -> Vec<FetchRequest> {
        match (self.recitation, self.surah) {
            (Some(recitation), Some(surah)) => vec![FetchRequest::ChapterAudio {
                ticket: self.sequencer.issue(ResourceKind::ChapterAudio),
                recitation,
                surah,
            }],
            _ => Vec::new(),
        }
    }

    // ===== Selection =====

    /// Switch the content language
    ///
    /// Nothing changes until the listings for `code` arrive; the language,
    /// surah list and translation list are then replaced together.
    pub fn select_language(&mut self, code: &str) -> Result<FetchRequest> {
        let code = code.trim();
        let known = self.languages.is_empty() || self.languages.iter().any(|l| l.iso_code == code);
        if code.is_empty() || !known {
            return Err(PlayerError::UnknownLanguage(code.to_string()));
        }

        info!(language = %code, "Switching language");
        Ok(FetchRequest::Listings {
            ticket: self.sequencer.issue(ResourceKind::Listings),
            language: code.to_string(),
        })
    }

    /// Select a surah from the full list
    ///
    /// The selection changes when its verses arrive.
    pub fn select_surah(&mut self, id: SurahId) -> Result<Vec<FetchRequest>> {
        if !self.surahs.iter().any(|s| s.id == id) {
            return Err(PlayerError::UnknownSurah(id));
        }

        self.pending_verse = None;
        let query = self.query_for(id, self.translation, self.recitation);
        Ok(self.request_verses(query))
    }

    /// Select a recitation
    pub fn select_recitation(&mut self, id: RecitationId) -> Result<Vec<FetchRequest>> {
        if !self.recitations.iter().any(|r| r.id == id) {
            return Err(PlayerError::UnknownRecitation(id));
        }

        let Some(surah) = self.surah else {
            // No verse list to keep in step with
            self.recitation = Some(id);
            return Ok(Vec::new());
        };
        let query = self.query_for(surah, self.translation, Some(id));
        Ok(self.request_verses(query))
    }

    /// Select a translation
    pub fn select_translation(&mut self, id: TranslationId) -> Result<Vec<FetchRequest>> {
        if !self.translations.iter().any(|t| t.id == id) {
            return Err(PlayerError::UnknownTranslation(id));
        }

        let Some(surah) = self.surah else {
            self.translation = Some(id);
            return Ok(Vec::new());
        };
        let query = self.query_for(surah, Some(id), self.recitation);
        Ok(self.request_verses(query))
    }

    /// Filter the surah list; the selection is untouched
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered_surahs = filter_surahs(&self.surahs, &self.search_term);
    }

    // ===== Playback Control =====

    /// Pause if the media reports playing, otherwise request playback
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.media.pause();
        } else {
            self.request_play();
        }
    }

    fn request_play(&mut self) {
        if let Err(e) = self.media.play() {
            warn!(error = %e, "Play request failed");
            self.notify(Notice::error(format!("Playback failed: {}", e)));
        }
    }

    /// Move to the next verse, wrapping to the first
    pub fn next_verse(&mut self) {
        self.step(true, self.is_playing);
    }

    /// Move to the previous verse, wrapping to the last
    pub fn previous_verse(&mut self) {
        self.step(false, self.is_playing);
    }

    fn step(&mut self, forward: bool, resume: bool) {
        let len = self.verses.len();
        if len == 0 {
            return;
        }

        let index = match self.current_index() {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.go_to_index(index, resume);
    }

    /// Jump to a verse in the current list
    pub fn select_verse(&mut self, id: VerseId) -> Result<()> {
        let index = self
            .verses
            .iter()
            .position(|v| v.id == id)
            .ok_or(PlayerError::UnknownVerse(id))?;

        self.go_to_index(index, self.is_playing);
        Ok(())
    }

    fn go_to_index(&mut self, index: usize, resume: bool) {
        let Some(verse) = self.verses.get(index) else {
            return;
        };
        self.current_verse = Some(verse.id);

        // A chapter file keeps playing across verse changes
        if self.config.audio_mode == AudioMode::VerseEmbedded {
            self.load_current_audio();
            if resume {
                self.request_play();
            }
        }
    }

    fn current_index(&self) -> Option<usize> {
        let current = self.current_verse?;
        self.verses.iter().position(|v| v.id == current)
    }

    fn load_current_audio(&mut self) {
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;

        let url = self
            .current_verse()
            .and_then(|v| v.audio_url())
            .map(str::to_owned);
        match url {
            Some(url) => self.media.load(&url),
            None => debug!("Current verse has no audio"),
        }
    }

    /// Move the playhead, clamped to the known duration
    pub fn seek(&mut self, position: Duration) {
        let target = position.min(self.duration);
        self.media.seek(target);
        self.position = target;
    }

    /// Set volume, clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.media.set_volume(volume);
        self.volume = volume;
    }

    /// Mirror a status report from the media element
    ///
    /// Returns the fetches needed when a chapter ends and playback moves on
    /// to the next surah.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Vec<FetchRequest> {
        match event {
            MediaEvent::Playing => self.is_playing = true,
            MediaEvent::Paused => self.is_playing = false,
            MediaEvent::TimeUpdate { position, duration } => {
                self.position = position;
                self.duration = duration;
            }
            MediaEvent::LoadedMetadata { duration } => self.duration = duration,
            MediaEvent::Ended => {
                self.is_playing = false;
                match self.config.audio_mode {
                    AudioMode::VerseEmbedded => self.step(true, true),
                    AudioMode::ChapterRecitation => {
                        self.position = self.duration;
                        return self.advance_surah();
                    }
                }
            }
            MediaEvent::Failed(message) => {
                self.is_playing = false;
                warn!(error = %message, "Media element failed");
                self.notify(Notice::error(format!("Playback error: {}", message)));
            }
        }
        Vec::new()
    }

    /// Queue the surah after the current one, wrapping to the first, and
    /// play its chapter audio once loaded
    fn advance_surah(&mut self) -> Vec<FetchRequest> {
        let Some(current) = self.surah else {
            return Vec::new();
        };
        let len = self.surahs.len();
        let Some(index) = self.surahs.iter().position(|s| s.id == current) else {
            debug!(surah = %current, "Finished surah is no longer listed");
            return Vec::new();
        };
        let next = self.surahs[(index + 1) % len].id;

        info!(from = %current, to = %next, "Chapter finished, moving on");
        self.pending_verse = None;
        self.resume_on_load = true;
        let query = self.query_for(next, self.translation, self.recitation);
        self.request_verses(query)
    }

    // ===== Bookmarks =====

    /// Bookmark the current verse, or remove its bookmark
    ///
    /// The full set is persisted after every toggle.
    pub async fn toggle_bookmark(&mut self) -> Result<BookmarkAction> {
        if self.surah.is_none() {
            return Err(PlayerError::NoCurrentVerse);
        }
        let Some(verse) = self.current_verse() else {
            return Err(PlayerError::NoCurrentVerse);
        };
        let key = verse.verse_key;
        let verse_id = verse.id;
        let surah_id = SurahId::new(key.chapter());

        let action = self
            .bookmarks
            .toggle(surah_id, verse_id, Some(key), self.clock.now_millis());

        self.persist_bookmarks().await;

        match action {
            BookmarkAction::Added => self.notify(Notice::success(format!("Bookmarked {}", key))),
            BookmarkAction::Removed => {
                self.notify(Notice::info(format!("Removed bookmark {}", key)))
            }
        }
        Ok(action)
    }

    async fn persist_bookmarks(&mut self) {
        if let Err(e) = bookmarks::save(self.store.as_ref(), &self.bookmarks).await {
            error!(error = %e, "Failed to save bookmarks");
            self.notify(Notice::error("Failed to save bookmarks"));
        }
    }

    /// Select the bookmarked verse, fetching its surah first if needed
    pub fn open_bookmark(&mut self, index: usize) -> Result<Vec<FetchRequest>> {
        let bookmark = self
            .bookmarks
            .get(index)
            .cloned()
            .ok_or(PlayerError::UnknownBookmark(index))?;

        if self.surah == Some(bookmark.surah_id) {
            if let Some(i) = self.verses.iter().position(|v| v.id == bookmark.verse_id) {
                self.go_to_index(i, self.is_playing);
                return Ok(Vec::new());
            }
        }

        let requests = self.select_surah(bookmark.surah_id)?;
        self.pending_verse = Some(bookmark.verse_id);
        Ok(requests)
    }

    // ===== Share =====

    /// Share the current verse, falling back to the clipboard
    ///
    /// Failures are logged only.
    pub async fn share_current_verse(&mut self) {
        let Some(text) = self.current_verse().map(share_text) else {
            debug!("Nothing to share");
            return;
        };

        if self.share.supports_native_share() {
            if let Err(e) = self.share.share(&text).await {
                warn!(error = %e, "Native share failed");
            }
            return;
        }

        match self.share.copy_to_clipboard(&text).await {
            Ok(()) => self.notify(Notice::success("Verse copied to clipboard")),
            Err(e) => warn!(error = %e, "Clipboard copy failed"),
        }
    }

    // ===== Reading Goal =====

    /// Count `count` verses as read today
    pub async fn mark_as_read(&mut self, count: u32) -> ReadOutcome {
        let today = self.clock.today();
        let outcome = self
            .reading_goal
            .record_read(count, today, self.config.daily_reset);

        self.persist_reading_goal().await;

        info!(
            count,
            total = outcome.total,
            progress = outcome.progress,
            "Marked verses as read"
        );
        if outcome.goal_reached {
            self.notify(Notice::success(format!(
                "Daily goal achieved: {} verses",
                self.reading_goal.verses_per_day
            )));
        }
        outcome
    }

    /// Change the daily target
    pub async fn set_daily_target(&mut self, verses_per_day: u32) -> Result<()> {
        if verses_per_day == 0 {
            return Err(PlayerError::InvalidOperation(
                "daily target must be at least one verse".into(),
            ));
        }

        self.reading_goal.verses_per_day = verses_per_day;
        self.persist_reading_goal().await;
        self.notify(Notice::info(format!(
            "Daily goal set to {} verses",
            verses_per_day
        )));
        Ok(())
    }

    async fn persist_reading_goal(&mut self) {
        if let Err(e) = reading_goal::save(self.store.as_ref(), &self.reading_goal).await {
            error!(error = %e, "Failed to save reading goal");
            self.notify(Notice::error("Failed to save reading goal"));
        }
    }

    // ===== Notices =====

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Take all pending notices
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ===== State Queries =====

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    pub fn surah(&self) -> Option<&Surah> {
        let id = self.surah?;
        self.surahs.iter().find(|s| s.id == id)
    }

    pub fn recitation(&self) -> Option<&Recitation> {
        let id = self.recitation?;
        self.recitations.iter().find(|r| r.id == id)
    }

    pub fn translation(&self) -> Option<&Translation> {
        let id = self.translation?;
        self.translations.iter().find(|t| t.id == id)
    }

    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn filtered_surahs(&self) -> &[Surah] {
        &self.filtered_surahs
    }

    pub fn recitations(&self) -> &[Recitation] {
        &self.recitations
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn current_verse(&self) -> Option<&Verse> {
        let id = self.current_verse?;
        self.verses.iter().find(|v| v.id == id)
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Playing flag as last reported by the media element
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn reading_goal(&self) -> &ReadingGoal {
        &self.reading_goal
    }

    /// Progress against the daily target as of today
    pub fn goal_progress(&self) -> u64 {
        self.reading_goal
            .progress(self.clock.today(), self.config.daily_reset)
    }

    /// Whether the current verse is bookmarked
    pub fn current_is_bookmarked(&self) -> bool {
        self.current_verse().is_some_and(|v| {
            self.bookmarks
                .contains(SurahId::new(v.verse_key.chapter()), v.id)
        })
    }

    /// Everything the presentation needs for one render
    pub fn snapshot(&self) -> PlayerSnapshot<'_> {
        PlayerSnapshot {
            language: self.language(),
            surah: self.surah(),
            recitation: self.recitation(),
            translation: self.translation(),
            filtered_surahs: &self.filtered_surahs,
            verses: &self.verses,
            current_verse: self.current_verse(),
            position: self.position,
            duration: self.duration,
            is_playing: self.is_playing,
            volume: self.volume,
            search_term: &self.search_term,
            bookmarks: &self.bookmarks,
            reading_goal: &self.reading_goal,
            goal_progress: self.goal_progress(),
            current_is_bookmarked: self.current_is_bookmarked(),
            pending_notices: &self.notices,
        }
    }
}

/// "{verse key}: {text}" with the first translation as plain text, or the
/// Uthmani text when there is none
pub fn share_text(verse: &Verse) -> String {
    let body = verse
        .first_translation()
        .map(plain_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| verse.text_uthmani.clone());

    format!("{}: {}", verse.verse_key, body)
}
