pub mod catalog;

pub use catalog::TrackCatalog;

use chrono::{DateTime, Local};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Video track information
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct VideoTrack {
    pub codec: String,
    pub language: String,
    pub name: Option<String>,
    pub display_dimensions: Option<String>,
}

/// Audio track information
#[derive(Debug, Clone)]
pub struct AudioTrack {
    pub codec: String,
    pub language: String,
    pub name: Option<String>,
}

impl AudioTrack {
    pub fn display_name(&self, id: u64) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {
                format!("{}-{} ('{}' {})", id, self.language, name, self.codec)
            }
            _ => format!("{}-{} ({})", id, self.language, self.codec),
        }
    }
}

/// Subtitle track information
#[derive(Debug, Clone)]
pub struct SubtitleTrack {
    pub codec: String,
    pub language: String,
    pub name: Option<String>,
    pub encoding: Option<String>,
}

impl SubtitleTrack {
    pub fn display_name(&self, id: u64) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {
                format!("{}-{} ('{}' {})", id, self.language, name, self.codec)
            }
            _ => format!("{}-{} ({})", id, self.language, self.codec),
        }
    }
}

/// Per-file load status
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Not yet inspected
    Pending,
    /// Track maps populated
    Loaded,
    /// Inspection failed; track maps are empty
    Error { message: String },
}

/// A container file and its track metadata
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub path: PathBuf,
    /// Container title, empty when the file carries none
    pub title: String,
    pub video: BTreeMap<u64, VideoTrack>,
    pub audio: BTreeMap<u64, AudioTrack>,
    pub subtitles: BTreeMap<u64, SubtitleTrack>,
    /// Track IDs currently flagged default among non-video tracks
    pub default_ids: BTreeSet<u64>,
    pub status: FileStatus,
    pub size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
}

impl MediaFile {
    /// Create a new file entry, capturing filesystem metadata
    pub fn new(path: PathBuf) -> Self {
        let meta = std::fs::metadata(&path).ok();
        let size = meta.as_ref().map(|m| m.len());
        let modified = meta
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Local>::from);
        Self {
            path,
            title: String::new(),
            video: BTreeMap::new(),
            audio: BTreeMap::new(),
            subtitles: BTreeMap::new(),
            default_ids: BTreeSet::new(),
            status: FileStatus::Pending,
            size,
            modified,
        }
    }

    /// Get the filename
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// All audio and subtitle track IDs
    pub fn non_video_ids(&self) -> BTreeSet<u64> {
        self.audio
            .keys()
            .chain(self.subtitles.keys())
            .copied()
            .collect()
    }

    /// Audio column summary for the file grid
    pub fn audio_summary(&self, separator: &str) -> String {
        self.audio
            .iter()
            .map(|(id, track)| track.display_name(*id))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Subtitle column summary for the file grid
    pub fn subtitle_summary(&self, separator: &str) -> String {
        self.subtitles
            .iter()
            .map(|(id, track)| track.display_name(*id))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Current-defaults column summary, `<id>-<type>` per flagged track
    pub fn defaults_summary(&self, separator: &str) -> String {
        self.default_ids
            .iter()
            .map(|id| {
                if self.audio.contains_key(id) {
                    format!("{}-audio", id)
                } else {
                    format!("{}-subtitles", id)
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Get the modified date string for the grid
    pub fn modified_string(&self) -> String {
        self.modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }

    /// Get the file size string for the grid
    pub fn size_string(&self) -> String {
        self.size
            .map(|s| humansize::format_size(s, humansize::DECIMAL))
            .unwrap_or_default()
    }
}

/// Check if a path is a Matroska file
pub fn is_mkv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("mkv"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(language: &str, name: Option<&str>) -> AudioTrack {
        AudioTrack {
            codec: "AC-3".to_string(),
            language: language.to_string(),
            name: name.map(|n| n.to_string()),
        }
    }

    #[test]
    fn mkv_extension_is_case_insensitive() {
        assert!(is_mkv_file(Path::new("a.mkv")));
        assert!(is_mkv_file(Path::new("b.MKV")));
        assert!(!is_mkv_file(Path::new("c.mp4")));
        assert!(!is_mkv_file(Path::new("mkv")));
    }

    #[test]
    fn non_video_ids_unions_audio_and_subtitles() {
        let mut file = MediaFile::new(PathBuf::from("x.mkv"));
        file.audio.insert(1, audio("eng", None));
        file.audio.insert(2, audio("jpn", None));
        file.subtitles.insert(
            3,
            SubtitleTrack {
                codec: "SubRip/SRT".to_string(),
                language: "eng".to_string(),
                name: None,
                encoding: None,
            },
        );

        let ids: Vec<u64> = file.non_video_ids().into_iter().collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn summaries_include_name_when_present() {
        let mut file = MediaFile::new(PathBuf::from("x.mkv"));
        file.audio.insert(1, audio("eng", Some("Commentary")));
        file.audio.insert(2, audio("jpn", None));

        assert_eq!(
            file.audio_summary(",  "),
            "1-eng ('Commentary' AC-3),  2-jpn (AC-3)"
        );
    }

    #[test]
    fn defaults_summary_labels_track_kind() {
        let mut file = MediaFile::new(PathBuf::from("x.mkv"));
        file.audio.insert(1, audio("eng", None));
        file.subtitles.insert(
            2,
            SubtitleTrack {
                codec: "HDMV PGS".to_string(),
                language: "eng".to_string(),
                name: None,
                encoding: None,
            },
        );
        file.default_ids.insert(1);
        file.default_ids.insert(2);

        assert_eq!(file.defaults_summary(", "), "1-audio, 2-subtitles");
    }
}
