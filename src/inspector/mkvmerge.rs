use super::TrackInspector;
use crate::error::AppError;
use crate::media::{AudioTrack, FileStatus, MediaFile, SubtitleTrack, VideoTrack};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use tracing::warn;

/// Reads track metadata through `mkvmerge --identify`
pub struct MkvmergeInspector {
    tool: String,
}

impl MkvmergeInspector {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl TrackInspector for MkvmergeInspector {
    fn inspect(&self, path: &Path) -> Result<MediaFile, AppError> {
        let output = Command::new(&self.tool)
            .args(["--identify", "--identification-format", "json"])
            .arg(path)
            .output()
            .map_err(|e| AppError::Inspect(format!("failed to execute {}: {}", self.tool, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Inspect(format!(
                "{} failed for {}: {}",
                self.tool,
                path.display(),
                stderr.trim()
            )));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        parse_identify(path, &json)
    }
}

/// Parse `mkvmerge --identify` JSON into a loaded [`MediaFile`]
pub fn parse_identify(path: &Path, json: &str) -> Result<MediaFile, AppError> {
    let data: IdentifyOutput = serde_json::from_str(json).map_err(|e| {
        AppError::Inspect(format!("failed to parse identify output: {}", e))
    })?;

    let mut file = MediaFile::new(path.to_path_buf());

    if let Some(title) = data
        .container
        .and_then(|c| c.properties)
        .and_then(|p| p.title)
    {
        file.title = title;
    }

    for track in data.tracks.unwrap_or_default() {
        let properties = track.properties.unwrap_or_default();

        // language_ietf is not always present
        let language = properties
            .language_ietf
            .or(properties.language)
            .unwrap_or_default();

        match track.track_type.as_str() {
            "video" => {
                file.video.insert(
                    track.id,
                    VideoTrack {
                        codec: track.codec,
                        language,
                        name: properties.track_name,
                        display_dimensions: properties.display_dimensions,
                    },
                );
            }
            "audio" => {
                if properties.default_track == Some(true) {
                    file.default_ids.insert(track.id);
                }
                file.audio.insert(
                    track.id,
                    AudioTrack {
                        codec: track.codec,
                        language,
                        name: properties.track_name,
                    },
                );
            }
            "subtitles" => {
                if properties.default_track == Some(true) {
                    file.default_ids.insert(track.id);
                }
                file.subtitles.insert(
                    track.id,
                    SubtitleTrack {
                        codec: track.codec,
                        language,
                        name: properties.track_name,
                        encoding: properties.encoding,
                    },
                );
            }
            other => {
                warn!(
                    "unknown track type '{}' (id {}) in {}",
                    other,
                    track.id,
                    path.display()
                );
            }
        }
    }

    file.status = FileStatus::Loaded;
    Ok(file)
}

// JSON deserialization structures

#[derive(Debug, Deserialize)]
struct IdentifyOutput {
    container: Option<ContainerInfo>,
    tracks: Option<Vec<RawTrack>>,
}

#[derive(Debug, Deserialize)]
struct ContainerInfo {
    properties: Option<ContainerProperties>,
}

#[derive(Debug, Deserialize)]
struct ContainerProperties {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    id: u64,
    #[serde(rename = "type")]
    track_type: String,
    codec: String,
    properties: Option<RawTrackProperties>,
}

#[derive(Debug, Deserialize, Default)]
struct RawTrackProperties {
    language: Option<String>,
    language_ietf: Option<String>,
    track_name: Option<String>,
    default_track: Option<bool>,
    display_dimensions: Option<String>,
    encoding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE_IDENTIFY: &str = r#"{
        "container": {
            "properties": { "title": "Sample Movie" }
        },
        "tracks": [
            {
                "id": 0,
                "type": "video",
                "codec": "AVC/H.264/MPEG-4p10",
                "properties": { "language": "und", "display_dimensions": "1920x1080" }
            },
            {
                "id": 1,
                "type": "audio",
                "codec": "AC-3",
                "properties": { "language": "eng", "default_track": true }
            },
            {
                "id": 2,
                "type": "subtitles",
                "codec": "SubRip/SRT",
                "properties": { "language": "eng", "encoding": "UTF-8" }
            }
        ]
    }"#;

    #[test]
    fn parses_sample_document() {
        let file = parse_identify(&PathBuf::from("sample.mkv"), SAMPLE_IDENTIFY).unwrap();

        assert_eq!(file.title, "Sample Movie");
        assert_eq!(file.status, FileStatus::Loaded);
        assert_eq!(file.video.len(), 1);
        assert_eq!(file.audio.len(), 1);
        assert_eq!(file.subtitles.len(), 1);
        assert_eq!(file.audio[&1].language, "eng");
        assert_eq!(file.subtitles[&2].encoding.as_deref(), Some("UTF-8"));
        assert_eq!(file.video[&0].display_dimensions.as_deref(), Some("1920x1080"));
        assert!(file.default_ids.contains(&1));
        assert!(!file.default_ids.contains(&2));
    }

    #[test]
    fn language_ietf_takes_precedence() {
        let json = r#"{
            "container": { "properties": {} },
            "tracks": [
                {
                    "id": 0,
                    "type": "audio",
                    "codec": "AC-3",
                    "properties": { "language": "fre", "language_ietf": "fr-CA" }
                },
                {
                    "id": 1,
                    "type": "audio",
                    "codec": "AC-3",
                    "properties": { "language": "jpn" }
                },
                {
                    "id": 2,
                    "type": "audio",
                    "codec": "AC-3",
                    "properties": {}
                }
            ]
        }"#;

        let file = parse_identify(&PathBuf::from("x.mkv"), json).unwrap();
        assert_eq!(file.audio[&0].language, "fr-CA");
        assert_eq!(file.audio[&1].language, "jpn");
        assert_eq!(file.audio[&2].language, "");
    }

    #[test]
    fn unknown_track_type_is_dropped() {
        let json = r#"{
            "tracks": [
                { "id": 0, "type": "buttons", "codec": "VobBtn", "properties": {} },
                { "id": 1, "type": "audio", "codec": "AC-3", "properties": { "language": "eng" } }
            ]
        }"#;

        let file = parse_identify(&PathBuf::from("x.mkv"), json).unwrap();
        assert!(file.video.is_empty());
        assert_eq!(file.audio.len(), 1);
        assert!(file.subtitles.is_empty());
    }

    #[test]
    fn missing_title_leaves_empty_string() {
        let json = r#"{ "container": { "properties": {} }, "tracks": [] }"#;
        let file = parse_identify(&PathBuf::from("x.mkv"), json).unwrap();
        assert_eq!(file.title, "");
    }

    #[test]
    fn garbage_output_is_an_error() {
        assert!(parse_identify(&PathBuf::from("x.mkv"), "not json").is_err());
    }
}
