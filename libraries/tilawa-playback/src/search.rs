//! Surah search

use tilawa_core::Surah;

/// Surahs whose simple, Arabic or translated name contains `term`.
///
/// Matching ignores case and surrounding whitespace. A blank term keeps the
/// whole list.
pub fn filter_surahs(surahs: &[Surah], term: &str) -> Vec<Surah> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return surahs.to_vec();
    }

    surahs
        .iter()
        .filter(|surah| surah.matches(&needle))
        .cloned()
        .collect()
}
