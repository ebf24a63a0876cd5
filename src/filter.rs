//! Track selection from user-supplied filter criteria.
//!
//! A track is kept when it matches ANY non-empty criterion; an empty
//! criterion contributes nothing. The audio codec-type criterion is the
//! one exception to the union rule: when non-empty it replaces whatever
//! the earlier dimensions matched.

use crate::media::MediaFile;
use std::collections::BTreeSet;

/// Filter criteria for one track kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact language codes to match
    pub languages: BTreeSet<String>,
    /// Case-insensitive track-name substring
    pub name: String,
    /// Case-insensitive codec-type substring
    pub codec_type: String,
    /// Explicit track IDs
    pub ids: BTreeSet<u64>,
}

impl FilterCriteria {
    /// Build criteria from the raw form entries. Language and ID entries
    /// are comma-separated; blank elements and unparseable IDs are
    /// skipped.
    pub fn from_entries(languages: &str, name: &str, codec_type: &str, ids: &str) -> Self {
        Self {
            languages: split_list(languages).map(str::to_string).collect(),
            name: name.trim().to_string(),
            codec_type: codec_type.trim().to_string(),
            ids: split_list(ids).filter_map(|s| s.parse().ok()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.name.is_empty()
            && self.codec_type.is_empty()
            && self.ids.is_empty()
    }
}

fn split_list(entry: &str) -> impl Iterator<Item = &str> {
    entry.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Audio track IDs to flag default for one file
pub fn keep_audio(file: &MediaFile, criteria: &FilterCriteria) -> BTreeSet<u64> {
    let tracks: Vec<(u64, &str, Option<&str>, &str)> = file
        .audio
        .iter()
        .map(|(id, t)| (*id, t.language.as_str(), t.name.as_deref(), t.codec.as_str()))
        .collect();
    keep_tracks(&tracks, criteria, true)
}

/// Subtitle track IDs to flag default for one file
pub fn keep_subtitles(file: &MediaFile, criteria: &FilterCriteria) -> BTreeSet<u64> {
    let tracks: Vec<(u64, &str, Option<&str>, &str)> = file
        .subtitles
        .iter()
        .map(|(id, t)| (*id, t.language.as_str(), t.name.as_deref(), t.codec.as_str()))
        .collect();
    keep_tracks(&tracks, criteria, false)
}

fn keep_tracks(
    tracks: &[(u64, &str, Option<&str>, &str)],
    criteria: &FilterCriteria,
    type_replaces: bool,
) -> BTreeSet<u64> {
    let mut keep = BTreeSet::new();

    for (id, language, _, _) in tracks {
        if criteria.languages.contains(*language) {
            keep.insert(*id);
        }
    }

    if !criteria.name.is_empty() {
        let needle = criteria.name.to_uppercase();
        for (id, _, name, _) in tracks {
            if name
                .map(|n| n.to_uppercase().contains(&needle))
                .unwrap_or(false)
            {
                keep.insert(*id);
            }
        }
    }

    if !criteria.codec_type.is_empty() {
        let needle = criteria.codec_type.to_uppercase();
        let matched: BTreeSet<u64> = tracks
            .iter()
            .filter(|(_, _, _, codec)| codec.to_uppercase().contains(&needle))
            .map(|(id, _, _, _)| *id)
            .collect();
        if type_replaces {
            // Audio inherits the historical behavior: a non-empty type
            // criterion discards the language and name matches.
            keep = matched;
        } else {
            keep.extend(matched);
        }
    }

    if !criteria.ids.is_empty() {
        for (id, _, _, _) in tracks {
            if criteria.ids.contains(id) {
                keep.insert(*id);
            }
        }
    }

    keep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{AudioTrack, SubtitleTrack};
    use std::path::PathBuf;

    fn sample_file() -> MediaFile {
        let mut file = MediaFile::new(PathBuf::from("sample.mkv"));
        file.audio.insert(
            1,
            AudioTrack {
                codec: "AC-3".to_string(),
                language: "eng".to_string(),
                name: Some("Surround".to_string()),
            },
        );
        file.audio.insert(
            2,
            AudioTrack {
                codec: "DTS".to_string(),
                language: "jpn".to_string(),
                name: None,
            },
        );
        file.subtitles.insert(
            3,
            SubtitleTrack {
                codec: "SubRip/SRT".to_string(),
                language: "eng".to_string(),
                name: Some("Full".to_string()),
                encoding: Some("UTF-8".to_string()),
            },
        );
        file.subtitles.insert(
            4,
            SubtitleTrack {
                codec: "HDMV PGS".to_string(),
                language: "jpn".to_string(),
                name: None,
                encoding: None,
            },
        );
        file
    }

    fn criteria(languages: &str, name: &str, codec_type: &str, ids: &str) -> FilterCriteria {
        FilterCriteria::from_entries(languages, name, codec_type, ids)
    }

    #[test]
    fn empty_criteria_keep_nothing() {
        let file = sample_file();
        assert!(keep_audio(&file, &criteria("", "", "", "")).is_empty());
        assert!(keep_subtitles(&file, &criteria("", "", "", "")).is_empty());
    }

    #[test]
    fn language_match_is_independent_of_other_dimensions() {
        let file = sample_file();
        let keep = keep_audio(&file, &criteria("eng", "", "", ""));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn name_match_is_case_insensitive_and_unions() {
        let file = sample_file();
        let keep = keep_audio(&file, &criteria("jpn", "surround", "", ""));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn audio_type_match_replaces_earlier_matches() {
        let file = sample_file();
        // Language selects track 1; the type criterion then discards it.
        let keep = keep_audio(&file, &criteria("eng", "", "dts", ""));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn subtitle_type_match_unions_with_earlier_matches() {
        let file = sample_file();
        let keep = keep_subtitles(&file, &criteria("eng", "", "pgs", ""));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn explicit_ids_match_only_tracks_the_file_has() {
        let file = sample_file();
        let keep = keep_audio(&file, &criteria("", "", "", "2, 9"));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn ids_restrict_to_their_own_track_kind() {
        let file = sample_file();
        // 3 is a subtitle track, so the audio ID criterion ignores it.
        assert!(keep_audio(&file, &criteria("", "", "", "3")).is_empty());
        let keep = keep_subtitles(&file, &criteria("", "", "", "3"));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn track_matching_several_dimensions_is_kept_once() {
        let file = sample_file();
        let keep = keep_audio(&file, &criteria("eng", "surround", "", "1"));
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn entry_parsing_skips_blanks_and_garbage() {
        let parsed = criteria(" eng, ,jpn ", "  ", "", "1, x, 2,");
        assert_eq!(
            parsed.languages.iter().cloned().collect::<Vec<_>>(),
            vec!["eng", "jpn"]
        );
        assert!(parsed.name.is_empty());
        assert_eq!(parsed.ids.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
