use clap::Parser;
use std::path::{Path, PathBuf};

/// Generate mkvpropedit command lines that set default audio and
/// subtitle tracks across a folder of Matroska files
#[derive(Parser, Debug)]
#[command(name = "mkvdefaults", version)]
pub struct Args {
    /// Folder to scan. A file path (its parent folder is used) or a
    /// file:// URL also works, so the tool can be wired to a file
    /// browser context menu.
    pub path: Option<String>,
}

/// Resolve the starting folder from the optional CLI argument, falling
/// back to the current directory when absent or invalid.
pub fn initial_folder(arg: Option<&str>) -> PathBuf {
    arg.and_then(resolve_argument)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_argument(raw: &str) -> Option<PathBuf> {
    let path = Path::new(raw);
    if path.is_dir() {
        return Some(path.to_path_buf());
    }

    // A file reference seeds its containing folder
    if let Some(parent) = path.parent()
        && parent.is_dir()
    {
        return Some(parent.to_path_buf());
    }

    if let Some(stripped) = raw.strip_prefix("file://") {
        let decoded = urlencoding::decode(stripped).ok()?;
        let decoded_path = Path::new(decoded.as_ref());
        if decoded_path.is_dir() {
            return Some(decoded_path.to_path_buf());
        }
        if let Some(parent) = decoded_path.parent()
            && parent.is_dir()
        {
            return Some(parent.to_path_buf());
        }
    }

    None
}
