//! In-memory session state: current folder, loaded files, catalogs.
//! Rebuilt in full on every folder change or refresh.

use crate::error::AppError;
use crate::inspector::TrackInspector;
use crate::media::{FileStatus, MediaFile, TrackCatalog, is_mkv_file};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct Session {
    pub folder: PathBuf,
    pub files: Vec<MediaFile>,
    pub catalog: TrackCatalog,
}

impl Session {
    pub fn new(folder: PathBuf) -> Self {
        Self {
            folder,
            files: Vec::new(),
            catalog: TrackCatalog::default(),
        }
    }

    /// Discard and rebuild all file state for the current folder.
    ///
    /// Inspection runs serially and blocks for its full duration; a file
    /// whose inspection fails is kept in the list with an error status
    /// and empty track maps.
    pub fn rescan(&mut self, inspector: &dyn TrackInspector) -> Result<(), AppError> {
        self.files.clear();
        self.catalog = TrackCatalog::default();

        let paths = scan_folder(&self.folder)?;
        info!("scanning {} ({} files)", self.folder.display(), paths.len());

        for path in paths {
            match inspector.inspect(&path) {
                Ok(file) => self.files.push(file),
                Err(e) => {
                    warn!("{}: {}", path.display(), e);
                    let mut file = MediaFile::new(path);
                    file.status = FileStatus::Error {
                        message: e.to_string(),
                    };
                    self.files.push(file);
                }
            }
        }

        self.catalog = TrackCatalog::collect(&self.files);
        Ok(())
    }

    /// Switch to a new folder and rebuild
    pub fn set_folder(
        &mut self,
        folder: PathBuf,
        inspector: &dyn TrackInspector,
    ) -> Result<(), AppError> {
        self.folder = folder;
        self.rescan(inspector)
    }

    pub fn error_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Error { .. }))
            .count()
    }
}

/// List the Matroska files directly inside `folder`, sorted by file
/// name. Subdirectories are not descended into.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = std::fs::read_dir(folder)
        .map_err(|e| AppError::Scan(format!("failed to read {}: {}", folder.display(), e)))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_mkv_file(p))
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::mkvmerge::parse_identify;
    use std::fs::File;

    struct StubInspector;

    impl TrackInspector for StubInspector {
        fn inspect(&self, path: &Path) -> Result<MediaFile, AppError> {
            if path.file_name().is_some_and(|n| n == "broken.mkv") {
                return Err(AppError::Inspect("unreadable".to_string()));
            }
            let json = r#"{
                "tracks": [
                    { "id": 0, "type": "audio", "codec": "AC-3", "properties": { "language": "eng" } }
                ]
            }"#;
            parse_identify(path, json)
        }
    }

    #[test]
    fn scan_is_flat_case_insensitive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("b.mkv")).unwrap();
        File::create(dir.path().join("A.MKV")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        std::fs::create_dir(dir.path().join("nested.mkv")).unwrap();
        File::create(dir.path().join("nested.mkv").join("c.mkv")).unwrap();

        let paths = scan_folder(dir.path()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["A.MKV", "b.mkv"]);
    }

    #[test]
    fn scan_of_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_folder(&missing).is_err());
    }

    #[test]
    fn rescan_rebuilds_files_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.mkv")).unwrap();
        File::create(dir.path().join("b.mkv")).unwrap();

        let mut session = Session::new(dir.path().to_path_buf());
        session.rescan(&StubInspector).unwrap();
        assert_eq!(session.files.len(), 2);
        assert_eq!(session.catalog.audio_languages_line(), "eng");

        // A second pass must not accumulate
        session.rescan(&StubInspector).unwrap();
        assert_eq!(session.files.len(), 2);
    }

    #[test]
    fn failed_inspection_becomes_an_error_entry() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("broken.mkv")).unwrap();
        File::create(dir.path().join("ok.mkv")).unwrap();

        let mut session = Session::new(dir.path().to_path_buf());
        session.rescan(&StubInspector).unwrap();

        assert_eq!(session.files.len(), 2);
        assert_eq!(session.error_count(), 1);
        let broken = &session.files[0];
        assert!(matches!(broken.status, FileStatus::Error { .. }));
        assert!(broken.audio.is_empty());
    }
}
