//! Line commands for the interactive session
//!
//! Each input line maps to one [`Intent`]. Parsing is pure so the whole
//! grammar can be exercised without a terminal.

use std::time::Duration;
use thiserror::Error;
use tilawa_core::{RecitationId, SurahId, TranslationId};

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Language(String),
    Surah(SurahId),
    Reciter(RecitationId),
    Translation(TranslationId),
    /// Filter the surah list; an empty term clears the filter
    Search(String),
    TogglePlay,
    Next,
    Previous,
    /// Jump to a verse by its number within the current surah
    Verse(u32),
    Seek(Duration),
    Volume(f32),
    Bookmark,
    ListBookmarks,
    /// Zero-based index into the bookmark list
    OpenBookmark(usize),
    Share,
    Read(u32),
    Goal(u32),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{command}`: invalid value `{value}`")]
    InvalidArgument { command: &'static str, value: String },
}

/// Parse one input line
pub fn parse(line: &str) -> Result<Intent, ParseError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "lang" | "language" => {
            let code = required(rest, "lang", "a language code")?;
            Ok(Intent::Language(code.to_string()))
        }
        "surah" | "s" => Ok(Intent::Surah(SurahId::new(number(rest, "surah")?))),
        "reciter" | "r" => Ok(Intent::Reciter(RecitationId::new(number(rest, "reciter")?))),
        "translation" | "t" => Ok(Intent::Translation(TranslationId::new(number(
            rest,
            "translation",
        )?))),
        "search" | "/" => Ok(Intent::Search(rest.to_string())),
        "play" | "pause" | "p" => Ok(Intent::TogglePlay),
        "next" | "n" => Ok(Intent::Next),
        "prev" | "previous" => Ok(Intent::Previous),
        "verse" | "v" => Ok(Intent::Verse(number(rest, "verse")?)),
        "seek" => Ok(Intent::Seek(timestamp(rest)?)),
        "volume" | "vol" => Ok(Intent::Volume(volume(rest)?)),
        "bookmark" | "b" => Ok(Intent::Bookmark),
        "bookmarks" => Ok(Intent::ListBookmarks),
        "open" => {
            let n: usize = number(rest, "open")?;
            if n == 0 {
                return Err(ParseError::InvalidArgument {
                    command: "open",
                    value: rest.to_string(),
                });
            }
            Ok(Intent::OpenBookmark(n - 1))
        }
        "share" => Ok(Intent::Share),
        "read" => {
            if rest.is_empty() {
                Ok(Intent::Read(1))
            } else {
                Ok(Intent::Read(number(rest, "read")?))
            }
        }
        "goal" => Ok(Intent::Goal(number(rest, "goal")?)),
        "status" | "st" => Ok(Intent::Status),
        "help" | "?" => Ok(Intent::Help),
        "quit" | "exit" | "q" => Ok(Intent::Quit),
        _ => Err(ParseError::Unknown(head.to_string())),
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(rest: &str, command: &'static str) -> Result<T, ParseError> {
    let raw = required(rest, command, "a number")?;
    raw.parse().map_err(|_| ParseError::InvalidArgument {
        command,
        value: raw.to_string(),
    })
}

/// `90`, `1:30` or `1:02:03`
fn timestamp(rest: &str) -> Result<Duration, ParseError> {
    let raw = required(rest, "seek", "a time such as 1:30")?;
    let invalid = || ParseError::InvalidArgument {
        command: "seek",
        value: raw.to_string(),
    };

    let mut total: u64 = 0;
    for (i, part) in raw.split(':').enumerate() {
        if i > 2 {
            return Err(invalid());
        }
        let value: u64 = part.parse().map_err(|_| invalid())?;
        total = total
            .checked_mul(60)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(invalid)?;
    }
    Ok(Duration::from_secs(total))
}

/// `0.5` or `50%`
fn volume(rest: &str) -> Result<f32, ParseError> {
    let raw = required(rest, "volume", "a level such as 0.8 or 80%")?;
    let invalid = || ParseError::InvalidArgument {
        command: "volume",
        value: raw.to_string(),
    };

    let level = match raw.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f32>().map_err(|_| invalid())? / 100.0,
        None => raw.parse::<f32>().map_err(|_| invalid())?,
    };
    if level.is_finite() {
        Ok(level)
    } else {
        Err(invalid())
    }
}

/// Lines printed for `help`
pub const HELP: &[&str] = &[
    "Commands:",
    "  lang <code>          switch translation language (e.g. lang ur)",
    "  surah <n>            open a surah",
    "  reciter <id>         choose a recitation",
    "  translation <id>     choose a translation",
    "  search [term]        filter surahs; no term clears the filter",
    "  play | pause | p     toggle playback",
    "  next | prev          move between verses",
    "  verse <n>            jump to verse n of the current surah",
    "  seek <m:ss>          move the playhead",
    "  volume <0-1|n%>      set the volume",
    "  bookmark             bookmark or unbookmark the current verse",
    "  bookmarks            list bookmarks",
    "  open <n>             open bookmark n",
    "  share                share or copy the current verse",
    "  read [n]             mark n verses as read (default 1)",
    "  goal <n>             set the daily reading target",
    "  status               show the player",
    "  quit                 leave",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_selection_commands() {
        assert_eq!(parse("surah 36"), Ok(Intent::Surah(SurahId::new(36))));
        assert_eq!(parse("R 7"), Ok(Intent::Reciter(RecitationId::new(7))));
        assert_eq!(
            parse("translation 131"),
            Ok(Intent::Translation(TranslationId::new(131)))
        );
        assert_eq!(parse("lang ur"), Ok(Intent::Language("ur".into())));
    }

    #[test]
    fn test_missing_and_invalid_arguments() {
        assert_eq!(
            parse("surah"),
            Err(ParseError::MissingArgument {
                command: "surah",
                expected: "a number"
            })
        );
        assert!(matches!(
            parse("surah yasin"),
            Err(ParseError::InvalidArgument { command: "surah", .. })
        ));
        assert!(matches!(parse("lang"), Err(ParseError::MissingArgument { .. })));
    }

    #[test]
    fn test_search_keeps_inner_spaces() {
        assert_eq!(
            parse("search  al baqarah "),
            Ok(Intent::Search("al baqarah".into()))
        );
        assert_eq!(parse("search"), Ok(Intent::Search(String::new())));
    }

    #[test]
    fn test_seek_formats() {
        assert_eq!(parse("seek 90"), Ok(Intent::Seek(Duration::from_secs(90))));
        assert_eq!(parse("seek 1:30"), Ok(Intent::Seek(Duration::from_secs(90))));
        assert_eq!(
            parse("seek 1:00:05"),
            Ok(Intent::Seek(Duration::from_secs(3605)))
        );
        assert!(parse("seek 1:2:3:4").is_err());
        assert!(parse("seek abc").is_err());
    }

    #[test]
    fn test_seek_overflow_is_invalid() {
        let huge = format!("seek 1:{}", u64::MAX);
        assert_eq!(
            parse(&huge),
            Err(ParseError::InvalidArgument {
                command: "seek",
                value: format!("1:{}", u64::MAX),
            })
        );
        assert!(parse("seek 5124095576030432:0:0").is_err());
    }

    #[test]
    fn test_volume_formats() {
        assert_eq!(parse("volume 0.25"), Ok(Intent::Volume(0.25)));
        assert_eq!(parse("vol 80%"), Ok(Intent::Volume(0.8)));
        assert!(parse("volume NaN").is_err());
    }

    #[test]
    fn test_open_is_one_based() {
        assert_eq!(parse("open 1"), Ok(Intent::OpenBookmark(0)));
        assert!(parse("open 0").is_err());
    }

    #[test]
    fn test_read_defaults_to_one() {
        assert_eq!(parse("read"), Ok(Intent::Read(1)));
        assert_eq!(parse("read 5"), Ok(Intent::Read(5)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("dance"), Err(ParseError::Unknown("dance".into())));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("p"), Ok(Intent::TogglePlay));
        assert_eq!(parse("pause"), Ok(Intent::TogglePlay));
        assert_eq!(parse("n"), Ok(Intent::Next));
        assert_eq!(parse("prev"), Ok(Intent::Previous));
        assert_eq!(parse("q"), Ok(Intent::Quit));
        assert_eq!(parse("?"), Ok(Intent::Help));
    }
}
