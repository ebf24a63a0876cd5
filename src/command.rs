//! mkvpropedit command-line rendering.
//!
//! Commands are never executed; the rendered text is the program's
//! entire output. Quoting is a plain single-quote wrap around the file
//! path.

use crate::filter::{self, FilterCriteria};
use crate::media::{FileStatus, MediaFile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do with the container title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAction {
    Keep,
    #[default]
    Clear,
}

impl TitleAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            TitleAction::Keep => "Keep title",
            TitleAction::Clear => "Remove title",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            TitleAction::Keep => TitleAction::Clear,
            TitleAction::Clear => TitleAction::Keep,
        }
    }
}

/// Build the mkvpropedit invocation for one file.
///
/// Every non-video track gets a clear-default edit first, then each
/// keeper gets a set-default edit. Track IDs are 0-based internally and
/// 1-based on the mkvpropedit command line.
pub fn build_command(
    editor: &str,
    file: &MediaFile,
    keep: &BTreeSet<u64>,
    title: TitleAction,
) -> String {
    let mut command = format!("{} '{}' --edit info", editor, file.path.display());

    if title == TitleAction::Clear {
        command.push_str(" --set \"title=\"");
    }

    for id in file.non_video_ids() {
        command.push_str(&format!(" --edit track:{} --set flag-default=0", id + 1));
    }

    for id in keep {
        command.push_str(&format!(" --edit track:{} --set flag-default=1", id + 1));
    }

    command
}

/// Render the full advisory output: a `# <file>` header line followed by
/// the command for every successfully loaded file. Files whose
/// inspection failed are left out.
pub fn render_output(
    editor: &str,
    files: &[MediaFile],
    audio: &FilterCriteria,
    subtitles: &FilterCriteria,
    title: TitleAction,
) -> String {
    let mut output = String::new();

    for file in files {
        if !matches!(file.status, FileStatus::Loaded) {
            continue;
        }

        let mut keep = filter::keep_audio(file, audio);
        keep.extend(filter::keep_subtitles(file, subtitles));

        output.push_str(&format!("# {}\n", file.path.display()));
        output.push_str(&build_command(editor, file, &keep, title));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::mkvmerge::parse_identify;
    use crate::media::{AudioTrack, SubtitleTrack};
    use std::path::PathBuf;

    fn three_track_file() -> MediaFile {
        let mut file = MediaFile::new(PathBuf::from("/films/movie.mkv"));
        file.status = FileStatus::Loaded;
        file.audio.insert(
            1,
            AudioTrack {
                codec: "AC-3".to_string(),
                language: "eng".to_string(),
                name: None,
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
                name: None,
                encoding: None,
            },
        );
        file
    }

    #[test]
    fn clears_every_non_video_track_then_sets_keepers() {
        let file = three_track_file();
        let keep: BTreeSet<u64> = [1].into_iter().collect();
        let command = build_command("mkvpropedit", &file, &keep, TitleAction::Keep);

        assert_eq!(
            command,
            "mkvpropedit '/films/movie.mkv' --edit info \
             --edit track:2 --set flag-default=0 \
             --edit track:3 --set flag-default=0 \
             --edit track:4 --set flag-default=0 \
             --edit track:2 --set flag-default=1"
        );
        assert_eq!(command.matches("flag-default=0").count(), 3);
        assert_eq!(command.matches("flag-default=1").count(), 1);
    }

    #[test]
    fn clear_title_adds_the_info_edit() {
        let file = three_track_file();
        let command = build_command("mkvpropedit", &file, &BTreeSet::new(), TitleAction::Clear);
        assert!(command.contains("--edit info --set \"title=\""));
    }

    #[test]
    fn keep_title_leaves_info_edit_bare() {
        let file = three_track_file();
        let command = build_command("mkvpropedit", &file, &BTreeSet::new(), TitleAction::Keep);
        assert!(command.contains("--edit info"));
        assert!(!command.contains("--set \"title=\""));
    }

    #[test]
    fn identify_round_trip_selects_the_english_audio_track() {
        let json = r#"{
            "container": { "properties": { "title": "Sample" } },
            "tracks": [
                { "id": 0, "type": "video", "codec": "AVC/H.264/MPEG-4p10", "properties": {} },
                { "id": 1, "type": "audio", "codec": "AC-3", "properties": { "language": "eng" } },
                { "id": 2, "type": "subtitles", "codec": "SubRip/SRT", "properties": { "language": "eng" } }
            ]
        }"#;
        let file = parse_identify(&PathBuf::from("sample.mkv"), json).unwrap();

        let audio = FilterCriteria::from_entries("eng", "", "", "");
        let subtitles = FilterCriteria::default();
        let output = render_output("mkvpropedit", &[file], &audio, &subtitles, TitleAction::Keep);

        assert_eq!(
            output,
            "# sample.mkv\n\
             mkvpropedit 'sample.mkv' --edit info \
             --edit track:2 --set flag-default=0 \
             --edit track:3 --set flag-default=0 \
             --edit track:2 --set flag-default=1\n"
        );
    }

    #[test]
    fn failed_files_are_left_out_of_the_output() {
        let mut file = three_track_file();
        file.status = FileStatus::Error {
            message: "mkvmerge failed".to_string(),
        };
        let output = render_output(
            "mkvpropedit",
            &[file],
            &FilterCriteria::default(),
            &FilterCriteria::default(),
            TitleAction::Clear,
        );
        assert!(output.is_empty());
    }
}
