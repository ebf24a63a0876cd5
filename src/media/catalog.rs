use super::MediaFile;
use std::collections::BTreeSet;

/// Distinct track attributes seen across all loaded files, used to
/// populate the filter form hints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCatalog {
    pub audio_languages: BTreeSet<String>,
    pub audio_types: BTreeSet<String>,
    pub audio_ids: BTreeSet<u64>,
    pub subtitle_languages: BTreeSet<String>,
    pub subtitle_types: BTreeSet<String>,
    pub subtitle_ids: BTreeSet<u64>,
}

impl TrackCatalog {
    /// Accumulate the catalog from a set of loaded files
    pub fn collect(files: &[MediaFile]) -> Self {
        let mut catalog = Self::default();

        for file in files {
            for track in file.audio.values() {
                catalog.audio_languages.insert(track.language.clone());
                catalog.audio_types.insert(track.codec.clone());
            }
            catalog.audio_ids.extend(file.audio.keys().copied());

            for track in file.subtitles.values() {
                catalog.subtitle_languages.insert(track.language.clone());
                catalog.subtitle_types.insert(track.codec.clone());
            }
            catalog.subtitle_ids.extend(file.subtitles.keys().copied());
        }

        catalog
    }

    pub fn audio_languages_line(&self) -> String {
        join_strings(&self.audio_languages)
    }

    pub fn audio_types_line(&self) -> String {
        join_strings(&self.audio_types)
    }

    pub fn audio_ids_line(&self) -> String {
        join_ids(&self.audio_ids)
    }

    pub fn subtitle_languages_line(&self) -> String {
        join_strings(&self.subtitle_languages)
    }

    pub fn subtitle_types_line(&self) -> String {
        join_strings(&self.subtitle_types)
    }

    pub fn subtitle_ids_line(&self) -> String {
        join_ids(&self.subtitle_ids)
    }
}

fn join_strings(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn join_ids(values: &BTreeSet<u64>) -> String {
    values
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::AudioTrack;
    use std::path::PathBuf;

    fn file_with_audio(name: &str, language: &str, codec: &str, id: u64) -> MediaFile {
        let mut file = MediaFile::new(PathBuf::from(name));
        file.audio.insert(
            id,
            AudioTrack {
                codec: codec.to_string(),
                language: language.to_string(),
                name: None,
            },
        );
        file
    }

    #[test]
    fn catalog_deduplicates_across_files() {
        let files = vec![
            file_with_audio("a.mkv", "eng", "AC-3", 1),
            file_with_audio("b.mkv", "eng", "AC-3", 1),
        ];

        let catalog = TrackCatalog::collect(&files);
        assert_eq!(catalog.audio_languages_line(), "eng");
        assert_eq!(catalog.audio_types_line(), "AC-3");
        assert_eq!(catalog.audio_ids_line(), "1");
    }

    #[test]
    fn catalog_sorts_values() {
        let files = vec![
            file_with_audio("a.mkv", "jpn", "DTS", 2),
            file_with_audio("b.mkv", "eng", "AC-3", 1),
        ];

        let catalog = TrackCatalog::collect(&files);
        assert_eq!(catalog.audio_languages_line(), "eng, jpn");
        assert_eq!(catalog.audio_types_line(), "AC-3, DTS");
        assert_eq!(catalog.audio_ids_line(), "1, 2");
    }
}
