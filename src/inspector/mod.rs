pub mod mkvmerge;

pub use mkvmerge::MkvmergeInspector;

use crate::error::AppError;
use crate::media::MediaFile;
use std::path::Path;

/// Narrow interface over the external metadata tool, so everything
/// downstream of inspection can be exercised without a process spawn.
pub trait TrackInspector {
    fn inspect(&self, path: &Path) -> Result<MediaFile, AppError>;
}
