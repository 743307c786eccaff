//! Integration tests for the player controller
//!
//! Fetch outcomes are fed in by hand so ordering and failures are exact.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tilawa_api_client::ApiClientError;
use tilawa_core::{
    BookmarkAction, Language, Recitation, RecitationId, Surah, SurahId, TranslatedName,
    Translation, TranslationId, Verse, VerseAudio, VerseId, VerseTranslation,
};
use tilawa_playback::{
    AudioMode, CatalogData, FetchOutcome, FetchRequest, FixedClock, Listings, MediaElement,
    MediaError, MediaEvent, NoticeKind, PlayerConfig, PlayerController, PlayerError, ShareError,
    ShareTarget,
};
use tilawa_storage::{bookmarks, reading_goal, LocalStore, MemoryStore};

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq)]
enum MediaCall {
    Load(String),
    Play,
    Pause,
    Seek(Duration),
    Volume(f32),
}

/// Media element that records calls and can refuse to play
#[derive(Clone, Default)]
struct RecordingMedia {
    calls: Arc<Mutex<Vec<MediaCall>>>,
    refuse_play: Arc<Mutex<bool>>,
}

impl RecordingMedia {
    fn calls(&self) -> Vec<MediaCall> {
        self.calls.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn refuse_play(&self, refuse: bool) {
        *self.refuse_play.lock().unwrap() = refuse;
    }

    fn loads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                MediaCall::Load(url) => Some(url),
                _ => None,
            })
            .collect()
    }
}

impl MediaElement for RecordingMedia {
    fn load(&mut self, url: &str) {
        self.calls.lock().unwrap().push(MediaCall::Load(url.to_string()));
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.calls.lock().unwrap().push(MediaCall::Play);
        if *self.refuse_play.lock().unwrap() {
            Err(MediaError::Rejected("autoplay blocked".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.calls.lock().unwrap().push(MediaCall::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.calls.lock().unwrap().push(MediaCall::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.lock().unwrap().push(MediaCall::Volume(volume));
    }
}

struct NoShare;

#[async_trait]
impl ShareTarget for NoShare {
    fn supports_native_share(&self) -> bool {
        false
    }

    async fn share(&self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }

    async fn copy_to_clipboard(&self, _text: &str) -> Result<(), ShareError> {
        Ok(())
    }
}

struct Harness {
    player: PlayerController,
    media: RecordingMedia,
    store: Arc<MemoryStore>,
    clock: Arc<FixedClock>,
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
}

fn harness_with(config: PlayerConfig) -> Harness {
    let media = RecordingMedia::default();
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(day(1), 1_780_000_000_000));

    let player = PlayerController::new(
        config,
        Box::new(media.clone()),
        Box::new(NoShare),
        store.clone(),
        clock.clone(),
    );

    Harness {
        player,
        media,
        store,
        clock,
    }
}

fn harness() -> Harness {
    harness_with(PlayerConfig::default())
}

fn surah(id: u32, simple: &str, arabic: &str, translated: &str) -> Surah {
    Surah {
        id: SurahId::new(id),
        name_simple: simple.into(),
        name_arabic: arabic.into(),
        translated_name: TranslatedName {
            language_name: None,
            name: translated.into(),
        },
        verses_count: 7,
        revelation_place: None,
    }
}

fn english_listings() -> Listings {
    Listings {
        surahs: vec![
            surah(1, "Al-Fatihah", "الفاتحة", "The Opener"),
            surah(2, "Al-Baqarah", "البقرة", "The Cow"),
            surah(3, "Ali 'Imran", "آل عمران", "Family of Imran"),
        ],
        translations: vec![
            Translation {
                id: TranslationId::new(131),
                name: "The Clear Quran".into(),
                author_name: None,
            },
            Translation {
                id: TranslationId::new(20),
                name: "Saheeh International".into(),
                author_name: None,
            },
        ],
    }
}

fn arabic_listings() -> Listings {
    Listings {
        surahs: vec![
            surah(1, "Al-Fatihah", "الفاتحة", "الفاتحة"),
            surah(2, "Al-Baqarah", "البقرة", "البقرة"),
        ],
        translations: vec![Translation {
            id: TranslationId::new(78),
            name: "Muyassar".into(),
            author_name: None,
        }],
    }
}

fn catalog() -> CatalogData {
    CatalogData {
        recitations: vec![
            Recitation {
                id: RecitationId::new(7),
                reciter_name: "Mishari Rashid al-`Afasy".into(),
                style: None,
            },
            Recitation {
                id: RecitationId::new(1),
                reciter_name: "AbdulBaset AbdulSamad".into(),
                style: Some("Mujawwad".into()),
            },
        ],
        languages: vec![
            Language::english(),
            Language {
                iso_code: "ar".into(),
                native_name: "العربية".into(),
                name: Some("arabic".into()),
            },
        ],
    }
}

fn verses(surah: u32, count: u32) -> Vec<Verse> {
    (1..=count)
        .map(|n| Verse {
            id: VerseId::new(u64::from(surah) * 1000 + u64::from(n)),
            verse_key: format!("{}:{}", surah, n).parse().unwrap(),
            verse_number: Some(n),
            text_uthmani: format!("text {}:{}", surah, n),
            translations: vec![VerseTranslation {
                resource_id: Some(131),
                text: format!("translation {}:{}", surah, n),
            }],
            audio: Some(VerseAudio {
                url: format!("https://verses.quran.com/Alafasy/mp3/{:03}{:03}.mp3", surah, n),
            }),
        })
        .collect()
}

fn upstream_error() -> ApiClientError {
    ApiClientError::Status {
        status: 500,
        message: "internal".into(),
    }
}

/// Run the startup batch successfully, returning the follow-up requests
fn load_catalog(h: &mut Harness) -> Vec<FetchRequest> {
    let FetchRequest::Catalog {
        catalog: catalog_ticket,
        listings,
        language,
    } = h.player.initial_load()
    else {
        panic!("initial load must be a catalog request");
    };

    h.player.apply_outcome(FetchOutcome::Catalog {
        catalog: catalog_ticket,
        listings,
        language,
        result: Ok((catalog(), english_listings())),
    })
}

/// Complete verse requests with `count` verses of their surah, returning
/// any other requests and follow-ups
fn complete_verses(h: &mut Harness, requests: Vec<FetchRequest>, count: u32) -> Vec<FetchRequest> {
    let mut rest = Vec::new();
    for request in requests {
        match request {
            FetchRequest::Verses { ticket, query } => {
                let result = Ok(verses(query.surah.get(), count));
                rest.extend(h.player.apply_outcome(FetchOutcome::Verses {
                    ticket,
                    query,
                    result,
                }));
            }
            other => rest.push(other),
        }
    }
    rest
}

/// Fail every verse request in `requests`
fn fail_verses(h: &mut Harness, requests: Vec<FetchRequest>) {
    for request in requests {
        if let FetchRequest::Verses { ticket, query } = request {
            h.player.apply_outcome(FetchOutcome::Verses {
                ticket,
                query,
                result: Err(upstream_error()),
            });
        }
    }
}

/// Resolve chapter audio requests with a URL naming recitation and surah
fn complete_chapter_audio(h: &mut Harness, requests: Vec<FetchRequest>) {
    for request in requests {
        if let FetchRequest::ChapterAudio {
            ticket,
            recitation,
            surah,
        } = request
        {
            h.player.apply_outcome(FetchOutcome::ChapterAudio {
                ticket,
                result: Ok(format!("https://download.quranicaudio.com/{}/{:03}.mp3", recitation, surah.get())),
            });
        }
    }
}

/// Harness after initial load with surah 1 and `count` verses
fn loaded(count: u32) -> Harness {
    let mut h = harness();
    let requests = load_catalog(&mut h);
    complete_verses(&mut h, requests, count);
    h.media.clear();
    h
}

fn current_key(h: &Harness) -> String {
    h.player.current_verse().unwrap().verse_key.to_string()
}

// ===== Initial Load =====

#[test]
fn test_initial_load_selects_first_of_each_list() {
    let mut h = harness();
    let requests = load_catalog(&mut h);

    // Listings wait for the first surah's verses
    assert!(h.player.surah().is_none());
    assert!(h.player.language().is_none());
    assert_eq!(h.player.recitation().unwrap().id, RecitationId::new(7));

    assert_eq!(requests.len(), 1);
    match &requests[0] {
        FetchRequest::Verses { query, .. } => {
            assert_eq!(query.surah, SurahId::new(1));
            assert_eq!(query.translation, Some(TranslationId::new(131)));
            assert_eq!(query.recitation, Some(RecitationId::new(7)));
            assert_eq!(query.language, "en");
        }
        other => panic!("Expected verse request, got {:?}", other),
    }

    complete_verses(&mut h, requests, 7);

    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(131));
    assert_eq!(h.player.language().unwrap().iso_code, "en");
    assert_eq!(h.player.filtered_surahs().len(), 3);
}

#[test]
fn test_failed_initial_verses_still_commit_listings() {
    let mut h = harness();
    let requests = load_catalog(&mut h);
    fail_verses(&mut h, requests);

    // Lists are usable so a surah can be picked by hand
    assert!(h.player.surah().is_none());
    assert!(h.player.verses().is_empty());
    assert_eq!(h.player.language().unwrap().iso_code, "en");
    assert_eq!(h.player.surahs().len(), 3);
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(131));

    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());

    let requests = h.player.select_surah(SurahId::new(2)).unwrap();
    complete_verses(&mut h, requests, 5);
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(2));
    assert_eq!(current_key(&h), "2:1");
}

#[test]
fn test_initial_verses_select_first_and_load_audio() {
    let mut h = harness();
    let requests = load_catalog(&mut h);
    complete_verses(&mut h, requests, 7);

    assert_eq!(h.player.verses().len(), 7);
    assert_eq!(current_key(&h), "1:1");
    assert_eq!(
        h.media.loads(),
        vec!["https://verses.quran.com/Alafasy/mp3/001001.mp3".to_string()]
    );
    assert!(!h.player.is_playing());
}

#[test]
fn test_initial_load_failure_leaves_state_empty() {
    let mut h = harness();
    let FetchRequest::Catalog {
        catalog: catalog_ticket,
        listings,
        language,
    } = h.player.initial_load()
    else {
        panic!("initial load must be a catalog request");
    };

    let follow_up = h.player.apply_outcome(FetchOutcome::Catalog {
        catalog: catalog_ticket,
        listings,
        language,
        result: Err(upstream_error()),
    });

    assert!(follow_up.is_empty());
    assert!(h.player.surah().is_none());
    assert!(h.player.surahs().is_empty());
    assert!(h.player.recitations().is_empty());

    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
}

#[test]
fn test_unlisted_default_language_gets_synthetic_entry() {
    let mut h = harness_with(PlayerConfig {
        default_language: "xx".into(),
        ..PlayerConfig::default()
    });
    let requests = load_catalog(&mut h);
    complete_verses(&mut h, requests, 7);

    let language = h.player.language().unwrap();
    assert_eq!(language.iso_code, "xx");
}

#[tokio::test]
async fn test_restore_local_state_reads_store() {
    let mut h = harness();

    let mut saved = tilawa_core::BookmarkSet::default();
    saved.toggle(SurahId::new(2), VerseId::new(2255), None, 1);
    bookmarks::save(h.store.as_ref(), &saved).await.unwrap();
    h.store
        .set_raw(reading_goal::READING_GOAL_KEY, "{broken")
        .await
        .unwrap();

    h.player.restore_local_state().await;

    assert_eq!(h.player.bookmarks(), &saved);
    assert_eq!(h.player.reading_goal().total_verses_read, 0);
    assert_eq!(h.player.reading_goal().verses_per_day, 10);
}

// ===== Language =====

#[test]
fn test_language_change_issues_one_listings_fetch() {
    let mut h = loaded(7);

    let request = h.player.select_language("ar").unwrap();
    assert!(matches!(
        request,
        FetchRequest::Listings { ref language, .. } if language == "ar"
    ));

    // Nothing committed before the outcome arrives
    assert_eq!(h.player.language().unwrap().iso_code, "en");
}

#[test]
fn test_language_change_resets_surah_and_translation_keeps_recitation() {
    let mut h = loaded(7);
    let requests = h.player.select_recitation(RecitationId::new(1)).unwrap();
    complete_verses(&mut h, requests, 7);
    let requests = h.player.select_surah(SurahId::new(3)).unwrap();
    complete_verses(&mut h, requests, 7);
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(3));

    let FetchRequest::Listings { ticket, language } = h.player.select_language("ar").unwrap()
    else {
        panic!("expected listings request");
    };
    let follow_up = h.player.apply_outcome(FetchOutcome::Listings {
        ticket,
        language,
        result: Ok(arabic_listings()),
    });

    assert_eq!(follow_up.len(), 1);
    match &follow_up[0] {
        FetchRequest::Verses { query, .. } => {
            assert_eq!(query.surah, SurahId::new(1));
            assert_eq!(query.language, "ar");
            assert_eq!(query.translation, Some(TranslationId::new(78)));
            assert_eq!(query.recitation, Some(RecitationId::new(1)));
        }
        other => panic!("Expected verse request, got {:?}", other),
    }

    complete_verses(&mut h, follow_up, 7);

    assert_eq!(h.player.language().unwrap().native_name, "العربية");
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(78));
    assert_eq!(h.player.recitation().unwrap().id, RecitationId::new(1));
    assert_eq!(h.player.filtered_surahs().len(), 2);
}

#[test]
fn test_failed_verses_after_language_switch_keep_previous_language() {
    let mut h = loaded(3);
    h.player.drain_notices();

    let FetchRequest::Listings { ticket, language } = h.player.select_language("ar").unwrap()
    else {
        panic!("expected listings request");
    };
    let follow_up = h.player.apply_outcome(FetchOutcome::Listings {
        ticket,
        language,
        result: Ok(arabic_listings()),
    });
    fail_verses(&mut h, follow_up);

    assert_eq!(h.player.language().unwrap().iso_code, "en");
    assert_eq!(h.player.surahs().len(), 3);
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(131));
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    assert_eq!(h.player.verses().len(), 3);
    assert_eq!(current_key(&h), "1:1");
    assert_eq!(h.player.drain_notices().len(), 1);
}

#[test]
fn test_failed_language_switch_keeps_previous_lists() {
    let mut h = loaded(7);
    h.player.drain_notices();

    let FetchRequest::Listings { ticket, language } = h.player.select_language("ar").unwrap()
    else {
        panic!("expected listings request");
    };
    let follow_up = h.player.apply_outcome(FetchOutcome::Listings {
        ticket,
        language,
        result: Err(upstream_error()),
    });

    assert!(follow_up.is_empty());
    assert_eq!(h.player.language().unwrap().iso_code, "en");
    assert_eq!(h.player.surahs().len(), 3);
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(131));

    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert!(notices[0].message.contains("ar"));
}

#[test]
fn test_unknown_language_rejected() {
    let mut h = loaded(7);
    assert!(matches!(
        h.player.select_language("zz"),
        Err(PlayerError::UnknownLanguage(_))
    ));
}

// ===== Sequencing =====

#[test]
fn test_stale_verse_outcome_is_discarded() {
    let mut h = loaded(7);

    let first = h.player.select_surah(SurahId::new(2)).unwrap();
    let second = h.player.select_surah(SurahId::new(3)).unwrap();

    // Newer response arrives first
    complete_verses(&mut h, second, 4);
    complete_verses(&mut h, first, 9);

    assert_eq!(h.player.surah().unwrap().id, SurahId::new(3));
    assert_eq!(h.player.verses().len(), 4);
    assert_eq!(current_key(&h), "3:1");
}

#[test]
fn test_stale_listings_outcome_is_discarded() {
    let mut h = loaded(7);

    let Ok(FetchRequest::Listings {
        ticket: first,
        language: first_lang,
    }) = h.player.select_language("ar")
    else {
        panic!("expected listings request");
    };
    let Ok(FetchRequest::Listings {
        ticket: second,
        language: second_lang,
    }) = h.player.select_language("en")
    else {
        panic!("expected listings request");
    };

    h.player.apply_outcome(FetchOutcome::Listings {
        ticket: second,
        language: second_lang,
        result: Ok(english_listings()),
    });
    let follow_up = h.player.apply_outcome(FetchOutcome::Listings {
        ticket: first,
        language: first_lang,
        result: Ok(arabic_listings()),
    });

    assert!(follow_up.is_empty());
    assert_eq!(h.player.language().unwrap().iso_code, "en");
    assert_eq!(h.player.surahs().len(), 3);
}

#[test]
fn test_language_switch_during_startup_wins_over_startup_listings() {
    let mut h = harness();
    let FetchRequest::Catalog {
        catalog: catalog_ticket,
        listings,
        language,
    } = h.player.initial_load()
    else {
        panic!("initial load must be a catalog request");
    };
    h.player.select_language("ar").unwrap();

    let follow_up = h.player.apply_outcome(FetchOutcome::Catalog {
        catalog: catalog_ticket,
        listings,
        language,
        result: Ok((catalog(), english_listings())),
    });

    // Catalog lists applied, language-dependent ones left to the switch
    assert!(follow_up.is_empty());
    assert_eq!(h.player.recitations().len(), 2);
    assert!(h.player.surahs().is_empty());
}

// ===== Selection =====

#[test]
fn test_select_surah_issues_verse_fetch() {
    let mut h = loaded(7);
    let requests = h.player.select_surah(SurahId::new(2)).unwrap();

    assert_eq!(requests.len(), 1);
    assert!(matches!(
        &requests[0],
        FetchRequest::Verses { query, .. } if query.surah == SurahId::new(2)
    ));
}

#[test]
fn test_unknown_ids_leave_state_unchanged() {
    let mut h = loaded(7);

    assert!(matches!(
        h.player.select_surah(SurahId::new(99)),
        Err(PlayerError::UnknownSurah(_))
    ));
    assert!(matches!(
        h.player.select_recitation(RecitationId::new(99)),
        Err(PlayerError::UnknownRecitation(_))
    ));
    assert!(matches!(
        h.player.select_translation(TranslationId::new(99)),
        Err(PlayerError::UnknownTranslation(_))
    ));

    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    assert_eq!(h.player.recitation().unwrap().id, RecitationId::new(7));
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(131));
}

#[test]
fn test_translation_change_refetches_verses() {
    let mut h = loaded(7);
    let requests = h.player.select_translation(TranslationId::new(20)).unwrap();

    assert!(matches!(
        &requests[0],
        FetchRequest::Verses { query, .. } if query.translation == Some(TranslationId::new(20))
    ));
}

#[test]
fn test_chapter_mode_requests_chapter_audio() {
    let mut h = harness_with(PlayerConfig {
        audio_mode: AudioMode::ChapterRecitation,
        ..PlayerConfig::default()
    });
    let requests = load_catalog(&mut h);
    assert_eq!(requests.len(), 1);

    // Chapter audio follows once the verses are committed
    let follow_up = complete_verses(&mut h, requests, 7);
    assert_eq!(follow_up.len(), 1);
    let FetchRequest::ChapterAudio {
        ticket,
        recitation,
        surah,
    } = follow_up[0].clone()
    else {
        panic!("expected chapter audio request");
    };
    assert_eq!(recitation, RecitationId::new(7));
    assert_eq!(surah, SurahId::new(1));

    h.player.apply_outcome(FetchOutcome::ChapterAudio {
        ticket,
        result: Ok("https://download.quranicaudio.com/qdc/mishari/1.mp3".into()),
    });

    // Verse audio is ignored in chapter mode
    assert_eq!(
        h.media.loads(),
        vec!["https://download.quranicaudio.com/qdc/mishari/1.mp3".to_string()]
    );
}

#[test]
fn test_failed_verse_fetch_keeps_committed_selection() {
    let mut h = loaded(3);
    h.player.drain_notices();

    let requests = h.player.select_surah(SurahId::new(2)).unwrap();
    // Still on the old surah while the fetch is in flight
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    fail_verses(&mut h, requests);

    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    assert_eq!(h.player.verses().len(), 3);
    assert_eq!(current_key(&h), "1:1");
    assert!(h.media.loads().is_empty());

    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.starts_with("Failed to load verses"));
}

#[test]
fn test_failed_translation_fetch_keeps_translation() {
    let mut h = loaded(3);

    let requests = h.player.select_translation(TranslationId::new(20)).unwrap();
    fail_verses(&mut h, requests);
    assert_eq!(h.player.translation().unwrap().id, TranslationId::new(131));

    let requests = h.player.select_recitation(RecitationId::new(1)).unwrap();
    fail_verses(&mut h, requests);
    assert_eq!(h.player.recitation().unwrap().id, RecitationId::new(7));
}

#[test]
fn test_chapter_end_moves_to_next_surah_and_plays() {
    let mut h = harness_with(PlayerConfig {
        audio_mode: AudioMode::ChapterRecitation,
        ..PlayerConfig::default()
    });
    let requests = load_catalog(&mut h);
    let follow_up = complete_verses(&mut h, requests, 7);
    complete_chapter_audio(&mut h, follow_up);
    h.player.handle_media_event(MediaEvent::Playing);
    h.player.handle_media_event(MediaEvent::LoadedMetadata {
        duration: Duration::from_secs(50),
    });
    h.media.clear();

    let requests = h.player.handle_media_event(MediaEvent::Ended);
    assert!(!h.player.is_playing());
    assert_eq!(h.player.position(), Duration::from_secs(50));
    assert_eq!(requests.len(), 1);
    assert!(matches!(
        &requests[0],
        FetchRequest::Verses { query, .. } if query.surah == SurahId::new(2)
    ));

    let follow_up = complete_verses(&mut h, requests, 4);
    complete_chapter_audio(&mut h, follow_up);

    assert_eq!(h.player.surah().unwrap().id, SurahId::new(2));
    assert_eq!(current_key(&h), "2:1");
    assert_eq!(
        h.media.calls(),
        vec![
            MediaCall::Load("https://download.quranicaudio.com/7/002.mp3".into()),
            MediaCall::Play,
        ]
    );
}

#[test]
fn test_chapter_end_wraps_to_first_surah() {
    let mut h = harness_with(PlayerConfig {
        audio_mode: AudioMode::ChapterRecitation,
        ..PlayerConfig::default()
    });
    let requests = load_catalog(&mut h);
    let follow_up = complete_verses(&mut h, requests, 7);
    complete_chapter_audio(&mut h, follow_up);
    let requests = h.player.select_surah(SurahId::new(3)).unwrap();
    let follow_up = complete_verses(&mut h, requests, 7);
    complete_chapter_audio(&mut h, follow_up);
    h.media.clear();

    let requests = h.player.handle_media_event(MediaEvent::Ended);
    let follow_up = complete_verses(&mut h, requests, 7);
    complete_chapter_audio(&mut h, follow_up);

    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
    assert_eq!(
        h.media.calls(),
        vec![
            MediaCall::Load("https://download.quranicaudio.com/7/001.mp3".into()),
            MediaCall::Play,
        ]
    );
}

#[test]
fn test_manual_chapter_load_does_not_autoplay() {
    let mut h = harness_with(PlayerConfig {
        audio_mode: AudioMode::ChapterRecitation,
        ..PlayerConfig::default()
    });
    let requests = load_catalog(&mut h);
    let follow_up = complete_verses(&mut h, requests, 7);
    complete_chapter_audio(&mut h, follow_up);
    h.media.clear();

    let requests = h.player.select_surah(SurahId::new(2)).unwrap();
    let follow_up = complete_verses(&mut h, requests, 7);
    complete_chapter_audio(&mut h, follow_up);

    assert_eq!(
        h.media.calls(),
        vec![MediaCall::Load("https://download.quranicaudio.com/7/002.mp3".into())]
    );
}

#[test]
fn test_verse_mode_ended_needs_no_fetch() {
    let mut h = loaded(2);
    assert!(h.player.handle_media_event(MediaEvent::Ended).is_empty());
    assert_eq!(current_key(&h), "1:2");
}

// ===== Search =====

#[test]
fn test_search_is_case_insensitive_over_three_names() {
    let mut h = loaded(7);

    h.player.set_search_term("COW");
    assert_eq!(h.player.filtered_surahs().len(), 1);
    assert_eq!(h.player.filtered_surahs()[0].id, SurahId::new(2));

    h.player.set_search_term("عمران");
    assert_eq!(h.player.filtered_surahs()[0].id, SurahId::new(3));

    h.player.set_search_term("fatiha");
    assert_eq!(h.player.filtered_surahs()[0].id, SurahId::new(1));

    // Selection is untouched by search
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));
}

#[test]
fn test_empty_search_restores_full_list() {
    let mut h = loaded(7);
    h.player.set_search_term("cow");
    h.player.set_search_term("");

    assert_eq!(h.player.filtered_surahs(), h.player.surahs());
}

#[test]
fn test_filter_recomputed_when_list_changes() {
    let mut h = loaded(7);
    h.player.set_search_term("imran");
    assert_eq!(h.player.filtered_surahs().len(), 1);

    let FetchRequest::Listings { ticket, language } = h.player.select_language("ar").unwrap()
    else {
        panic!("expected listings request");
    };
    let follow_up = h.player.apply_outcome(FetchOutcome::Listings {
        ticket,
        language,
        result: Ok(arabic_listings()),
    });
    complete_verses(&mut h, follow_up, 7);

    assert!(h.player.filtered_surahs().is_empty());
}

// ===== Navigation =====

#[test]
fn test_next_wraps_to_first() {
    let mut h = loaded(3);

    h.player.next_verse();
    h.player.next_verse();
    assert_eq!(current_key(&h), "1:3");

    h.player.next_verse();
    assert_eq!(current_key(&h), "1:1");
}

#[test]
fn test_previous_wraps_to_last() {
    let mut h = loaded(3);

    h.player.previous_verse();
    assert_eq!(current_key(&h), "1:3");
}

#[test]
fn test_next_then_previous_returns_to_start() {
    let mut h = loaded(5);
    for _ in 0..5 {
        h.player.next_verse();
    }
    assert_eq!(current_key(&h), "1:1");

    h.player.next_verse();
    h.player.previous_verse();
    assert_eq!(current_key(&h), "1:1");
}

#[test]
fn test_navigation_on_empty_list_is_noop() {
    let mut h = harness();
    h.player.next_verse();
    h.player.previous_verse();

    assert!(h.player.current_verse().is_none());
    assert!(h.media.loads().is_empty());
}

#[test]
fn test_next_resumes_when_playing() {
    let mut h = loaded(3);
    h.player.handle_media_event(MediaEvent::Playing);

    h.player.next_verse();

    assert_eq!(
        h.media.calls(),
        vec![
            MediaCall::Load("https://verses.quran.com/Alafasy/mp3/001002.mp3".into()),
            MediaCall::Play,
        ]
    );
}

#[test]
fn test_next_while_paused_only_loads() {
    let mut h = loaded(3);
    h.player.next_verse();

    assert_eq!(
        h.media.calls(),
        vec![MediaCall::Load(
            "https://verses.quran.com/Alafasy/mp3/001002.mp3".into()
        )]
    );
}

#[test]
fn test_ended_advances_and_keeps_playing() {
    let mut h = loaded(2);
    h.player.handle_media_event(MediaEvent::Playing);
    h.player.next_verse();
    h.media.clear();

    h.player.handle_media_event(MediaEvent::Ended);

    assert_eq!(current_key(&h), "1:1");
    assert_eq!(
        h.media.calls(),
        vec![
            MediaCall::Load("https://verses.quran.com/Alafasy/mp3/001001.mp3".into()),
            MediaCall::Play,
        ]
    );
}

#[test]
fn test_select_verse() {
    let mut h = loaded(7);
    h.player.select_verse(VerseId::new(1005)).unwrap();
    assert_eq!(current_key(&h), "1:5");

    assert!(matches!(
        h.player.select_verse(VerseId::new(42)),
        Err(PlayerError::UnknownVerse(_))
    ));
}

// ===== Transport =====

#[test]
fn test_playing_flag_follows_media_events() {
    let mut h = loaded(3);

    h.player.toggle_play();
    assert_eq!(h.media.calls(), vec![MediaCall::Play]);
    assert!(!h.player.is_playing());

    h.player.handle_media_event(MediaEvent::Playing);
    assert!(h.player.is_playing());

    h.player.toggle_play();
    assert_eq!(h.media.calls().last(), Some(&MediaCall::Pause));
    assert!(h.player.is_playing());

    h.player.handle_media_event(MediaEvent::Paused);
    assert!(!h.player.is_playing());
}

#[test]
fn test_failed_play_does_not_flip_playing_flag() {
    let mut h = loaded(3);
    h.player.drain_notices();
    h.media.refuse_play(true);

    h.player.toggle_play();

    assert!(!h.player.is_playing());
    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("autoplay blocked"));
}

#[test]
fn test_media_failure_surfaces_notice() {
    let mut h = loaded(3);
    h.player.handle_media_event(MediaEvent::Playing);
    h.player.handle_media_event(MediaEvent::Failed("404".into()));

    assert!(!h.player.is_playing());
    assert!(h.player.drain_notices().iter().any(|n| n.is_error()));
}

#[test]
fn test_seek_is_clamped_to_duration() {
    let mut h = loaded(3);
    h.player.handle_media_event(MediaEvent::LoadedMetadata {
        duration: Duration::from_secs(12),
    });

    h.player.seek(Duration::from_secs(30));
    assert_eq!(h.player.position(), Duration::from_secs(12));

    h.player.seek(Duration::from_secs(4));
    assert_eq!(h.player.position(), Duration::from_secs(4));
    assert_eq!(
        h.media.calls(),
        vec![
            MediaCall::Seek(Duration::from_secs(12)),
            MediaCall::Seek(Duration::from_secs(4)),
        ]
    );
}

#[test]
fn test_time_updates_mirror_position() {
    let mut h = loaded(3);
    h.player.handle_media_event(MediaEvent::TimeUpdate {
        position: Duration::from_millis(1500),
        duration: Duration::from_secs(9),
    });

    assert_eq!(h.player.position(), Duration::from_millis(1500));
    assert_eq!(h.player.duration(), Duration::from_secs(9));
}

#[test]
fn test_volume_is_clamped() {
    let mut h = loaded(3);

    h.player.set_volume(1.7);
    assert_eq!(h.player.volume(), 1.0);

    h.player.set_volume(-0.2);
    assert_eq!(h.player.volume(), 0.0);

    h.player.set_volume(0.4);
    assert_eq!(h.player.volume(), 0.4);
    assert_eq!(h.media.calls().last(), Some(&MediaCall::Volume(0.4)));
}

// ===== Bookmarks =====

#[tokio::test]
async fn test_bookmark_double_toggle_round_trip() {
    let mut h = loaded(7);
    h.player.next_verse();

    let first = h.player.toggle_bookmark().await.unwrap();
    assert_eq!(first, BookmarkAction::Added);
    assert!(h.player.current_is_bookmarked());

    let stored = bookmarks::load(h.store.as_ref()).await;
    assert!(stored.contains(SurahId::new(1), VerseId::new(1002)));
    assert_eq!(stored.get(0).unwrap().timestamp, 1_780_000_000_000);

    h.clock.advance_millis(1000);
    let second = h.player.toggle_bookmark().await.unwrap();
    assert_eq!(second, BookmarkAction::Removed);
    assert!(h.player.bookmarks().is_empty());
    assert!(bookmarks::load(h.store.as_ref()).await.is_empty());

    let notices = h.player.drain_notices();
    assert!(notices.iter().any(|n| n.message == "Bookmarked 1:2"));
    assert!(notices.iter().any(|n| n.message == "Removed bookmark 1:2"));
}

#[tokio::test]
async fn test_bookmark_requires_current_verse() {
    let mut h = harness();
    assert!(matches!(
        h.player.toggle_bookmark().await,
        Err(PlayerError::NoCurrentVerse)
    ));
    assert!(h.store.is_empty().await);
}

#[tokio::test]
async fn test_open_bookmark_in_other_surah() {
    let mut h = loaded(7);

    let mut saved = tilawa_core::BookmarkSet::default();
    saved.toggle(SurahId::new(2), VerseId::new(2005), None, 1);
    bookmarks::save(h.store.as_ref(), &saved).await.unwrap();
    h.player.restore_local_state().await;

    let requests = h.player.open_bookmark(0).unwrap();
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(1));

    complete_verses(&mut h, requests, 10);
    assert_eq!(h.player.surah().unwrap().id, SurahId::new(2));
    assert_eq!(current_key(&h), "2:5");
}

#[tokio::test]
async fn test_open_bookmark_in_loaded_surah_needs_no_fetch() {
    let mut h = loaded(7);
    h.player.select_verse(VerseId::new(1004)).unwrap();
    h.player.toggle_bookmark().await.unwrap();
    h.player.select_verse(VerseId::new(1001)).unwrap();

    let requests = h.player.open_bookmark(0).unwrap();

    assert!(requests.is_empty());
    assert_eq!(current_key(&h), "1:4");
}

#[test]
fn test_open_missing_bookmark() {
    let mut h = loaded(7);
    assert!(matches!(
        h.player.open_bookmark(3),
        Err(PlayerError::UnknownBookmark(3))
    ));
}

// ===== Share =====

#[tokio::test]
async fn test_share_copies_when_no_native_share() {
    let mut h = loaded(2);
    h.player.drain_notices();

    h.player.share_current_verse().await;

    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

// ===== Reading Goal =====

#[tokio::test]
async fn test_mark_as_read_adds_exactly_n() {
    let mut h = loaded(2);

    let outcome = h.player.mark_as_read(3).await;
    assert_eq!(outcome.total, 3);

    let outcome = h.player.mark_as_read(4).await;
    assert_eq!(outcome.total, 7);
    assert_eq!(h.player.reading_goal().last_read_date, Some(day(1)));

    let stored = reading_goal::load(h.store.as_ref(), 10, day(1)).await;
    assert_eq!(stored.total_verses_read, 7);
}

#[tokio::test]
async fn test_goal_notice_once_per_crossing() {
    let mut h = loaded(2);
    h.player.drain_notices();

    h.player.mark_as_read(6).await;
    assert!(h.player.drain_notices().is_empty());

    let crossing = h.player.mark_as_read(5).await;
    assert!(crossing.goal_reached);
    let notices = h.player.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("goal achieved"));

    h.player.mark_as_read(5).await;
    assert!(h.player.drain_notices().is_empty());
}

#[tokio::test]
async fn test_daily_progress_resets_on_new_day() {
    let mut h = loaded(2);
    h.player.mark_as_read(10).await;
    h.player.drain_notices();

    h.clock.set_today(day(2));
    assert_eq!(h.player.goal_progress(), 0);

    let outcome = h.player.mark_as_read(10).await;
    assert!(outcome.goal_reached);
    assert_eq!(outcome.total, 20);
    assert_eq!(h.player.drain_notices().len(), 1);
}

#[tokio::test]
async fn test_without_daily_reset_progress_is_cumulative() {
    let mut h = harness_with(PlayerConfig {
        daily_reset: false,
        ..PlayerConfig::default()
    });
    h.player.mark_as_read(6).await;
    h.clock.set_today(day(3));

    assert_eq!(h.player.goal_progress(), 6);
}

#[tokio::test]
async fn test_set_daily_target() {
    let mut h = loaded(2);
    h.player.set_daily_target(20).await.unwrap();

    assert_eq!(h.player.reading_goal().verses_per_day, 20);
    let stored = reading_goal::load(h.store.as_ref(), 10, day(1)).await;
    assert_eq!(stored.verses_per_day, 20);

    assert!(matches!(
        h.player.set_daily_target(0).await,
        Err(PlayerError::InvalidOperation(_))
    ));
}
