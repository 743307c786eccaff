//! Text rendering of the player state
//!
//! Everything here is a pure function of a [`PlayerSnapshot`] (or a piece of
//! one) so the terminal loop only decides *when* to print.

use std::time::Duration;
use tilawa_core::text::plain_text;
use tilawa_core::{BookmarkSet, ReadingGoal, Surah, SurahId, Verse};
use tilawa_playback::{Notice, NoticeKind, PlayerSnapshot};

/// Number of surahs listed before the view switches to a summary
const SURAH_LIST_LIMIT: usize = 20;

/// Format a duration as `m:ss` (or `h:mm:ss` past the hour)
pub fn format_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.kind {
        NoticeKind::Info => "info",
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    format!("[{}] {}", tag, notice.message)
}

/// Verse key, Uthmani text and the first translation
pub fn render_verse(verse: &Verse, bookmarked: bool) -> Vec<String> {
    let marker = if bookmarked { " *" } else { "" };
    let mut lines = vec![
        format!("-- {}{} --", verse.verse_key, marker),
        verse.text_uthmani.clone(),
    ];
    if let Some(translation) = verse.first_translation() {
        lines.push(plain_text(translation));
    }
    lines
}

pub fn render_transport(snapshot: &PlayerSnapshot<'_>) -> String {
    let state = if snapshot.is_playing { "playing" } else { "paused" };
    format!(
        "[{}] {} / {}  vol {}%",
        state,
        format_time(snapshot.position),
        format_time(snapshot.duration),
        (snapshot.volume * 100.0).round() as u32
    )
}

pub fn render_goal(goal: &ReadingGoal, progress: u64) -> String {
    let done = if progress >= u64::from(goal.verses_per_day) {
        "  (goal met)"
    } else {
        ""
    };
    format!(
        "Reading goal: {}/{} today, {} total{}",
        progress, goal.verses_per_day, goal.total_verses_read, done
    )
}

/// Numbered surah list with the current one marked
pub fn render_surah_list(surahs: &[Surah], current: Option<SurahId>) -> Vec<String> {
    if surahs.is_empty() {
        return vec!["No surahs match".to_string()];
    }
    surahs
        .iter()
        .map(|surah| {
            let marker = if Some(surah.id) == current { '>' } else { ' ' };
            format!(
                "{} {:>3}. {} ({}, {} verses)",
                marker,
                surah.id,
                surah.display_name(),
                surah.translated_name.name,
                surah.verses_count
            )
        })
        .collect()
}

pub fn render_bookmarks(bookmarks: &BookmarkSet) -> Vec<String> {
    if bookmarks.is_empty() {
        return vec!["No bookmarks yet".to_string()];
    }
    bookmarks
        .iter()
        .enumerate()
        .map(|(i, bookmark)| {
            let label = match &bookmark.verse_key {
                Some(key) => key.to_string(),
                None => format!("surah {}, verse id {}", bookmark.surah_id, bookmark.verse_id),
            };
            format!("{:>3}. {}", i + 1, label)
        })
        .collect()
}

/// Full player view
pub fn render(snapshot: &PlayerSnapshot<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    let surah = snapshot
        .surah
        .map(Surah::display_name)
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!("Surah:       {}", surah));
    lines.push(format!(
        "Reciter:     {}",
        snapshot
            .recitation
            .map(|r| r.display_name())
            .unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!(
        "Language:    {}",
        snapshot
            .language
            .map(|l| l.display_name())
            .unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!(
        "Translation: {}",
        snapshot.translation.map(|t| t.name.as_str()).unwrap_or("-")
    ));

    if snapshot.search_term.is_empty() {
        lines.push(format!("{} surahs", snapshot.filtered_surahs.len()));
    } else {
        lines.push(format!(
            "Search \"{}\": {} match(es)",
            snapshot.search_term,
            snapshot.filtered_surahs.len()
        ));
        let current = snapshot.surah.map(|s| s.id);
        lines.extend(
            render_surah_list(snapshot.filtered_surahs, current)
                .into_iter()
                .take(SURAH_LIST_LIMIT),
        );
        if snapshot.filtered_surahs.len() > SURAH_LIST_LIMIT {
            lines.push(format!(
                "  ... {} more",
                snapshot.filtered_surahs.len() - SURAH_LIST_LIMIT
            ));
        }
    }

    match snapshot.current_verse {
        Some(verse) => {
            let index = snapshot
                .verses
                .iter()
                .position(|v| v.id == verse.id)
                .map(|i| i + 1)
                .unwrap_or(0);
            lines.push(format!("Verse {} of {}", index, snapshot.verses.len()));
            lines.extend(render_verse(verse, snapshot.current_is_bookmarked));
        }
        None => lines.push("No verses loaded".to_string()),
    }

    lines.push(render_transport(snapshot));
    lines.push(format!("Bookmarks:   {}", snapshot.bookmarks.len()));
    lines.push(render_goal(snapshot.reading_goal, snapshot.goal_progress));
    lines.extend(snapshot.pending_notices.iter().map(render_notice));
    lines
}
