//! Applies parsed intents to the player controller

use crate::commands::{Intent, HELP};
use crate::view;
use tilawa_playback::{FetchRequest, PlayerController, PlayerError};

/// What an intent produced
#[derive(Debug, Default)]
pub struct Effect {
    /// Fetches to dispatch
    pub requests: Vec<FetchRequest>,
    /// Lines to print
    pub output: Vec<String>,
}

impl Effect {
    fn requests(requests: Vec<FetchRequest>) -> Self {
        Self {
            requests,
            ..Self::default()
        }
    }

    fn output(output: Vec<String>) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }
}

/// Run one intent against the controller.
///
/// `Quit` is a no-op here; the event loop owns termination.
pub async fn apply(player: &mut PlayerController, intent: Intent) -> Result<Effect, PlayerError> {
    let effect = match intent {
        Intent::Language(code) => Effect::requests(vec![player.select_language(&code)?]),
        Intent::Surah(id) => Effect::requests(player.select_surah(id)?),
        Intent::Reciter(id) => Effect::requests(player.select_recitation(id)?),
        Intent::Translation(id) => Effect::requests(player.select_translation(id)?),
        Intent::Search(term) => {
            player.set_search_term(&term);
            let current = player.surah().map(|s| s.id);
            Effect::output(view::render_surah_list(player.filtered_surahs(), current))
        }
        Intent::TogglePlay => {
            player.toggle_play();
            Effect::default()
        }
        Intent::Next => {
            player.next_verse();
            Effect::default()
        }
        Intent::Previous => {
            player.previous_verse();
            Effect::default()
        }
        Intent::Verse(number) => {
            let id = player
                .verses()
                .iter()
                .find(|v| v.verse_number.unwrap_or_else(|| v.verse_key.verse()) == number)
                .map(|v| v.id)
                .ok_or_else(|| {
                    PlayerError::InvalidOperation(format!("No verse {} in this surah", number))
                })?;
            player.select_verse(id)?;
            Effect::default()
        }
        Intent::Seek(position) => {
            player.seek(position);
            Effect::default()
        }
        Intent::Volume(level) => {
            player.set_volume(level);
            Effect::output(vec![format!(
                "Volume {}%",
                (player.volume() * 100.0).round() as u32
            )])
        }
        Intent::Bookmark => {
            player.toggle_bookmark().await?;
            Effect::default()
        }
        Intent::ListBookmarks => Effect::output(view::render_bookmarks(player.bookmarks())),
        Intent::OpenBookmark(index) => Effect::requests(player.open_bookmark(index)?),
        Intent::Share => {
            player.share_current_verse().await;
            Effect::default()
        }
        Intent::Read(count) => {
            let outcome = player.mark_as_read(count).await;
            Effect::output(vec![view::render_goal(
                player.reading_goal(),
                outcome.progress,
            )])
        }
        Intent::Goal(target) => {
            player.set_daily_target(target).await?;
            Effect::output(vec![view::render_goal(
                player.reading_goal(),
                player.goal_progress(),
            )])
        }
        Intent::Status => Effect::output(view::render(&player.snapshot())),
        Intent::Help => Effect::output(HELP.iter().map(|line| line.to_string()).collect()),
        Intent::Quit => Effect::default(),
    };
    Ok(effect)
}
