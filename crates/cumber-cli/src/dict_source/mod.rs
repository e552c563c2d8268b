//! Fetching and locating the CMU Pronouncing Dictionary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the cached plain-text dictionary.
pub const DICT_FILE_NAME: &str = "cmudict.dict";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Dictionary path used when `--dict` is not given.
///
/// `$NAMEBATCH_DICT`, else `$XDG_CACHE_HOME/namebatch/cmudict.dict`,
/// else `$HOME/.cache/namebatch/cmudict.dict`.
pub fn default_dict_path() -> PathBuf {
    resolve_dict_path(
        std::env::var_os("NAMEBATCH_DICT").map(PathBuf::from),
        std::env::var_os("XDG_CACHE_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_dict_path(
    explicit: Option<PathBuf>,
    cache_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }
    let cache = cache_home
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| home.map(|h| h.join(".cache")))
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    cache.join("namebatch").join(DICT_FILE_NAME)
}

/// Download `url` to `dest`, skipping the download if `dest` already exists.
///
/// Returns `true` when a download happened.
pub fn fetch(url: &str, dest: &Path) -> Result<bool, SourceError> {
    if dest.exists() {
        eprintln!("{} (already exists, skipping)", dest.display());
        return Ok(false);
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Downloading {url}...");
    let body = ureq::get(url)
        .call()
        .map_err(|e| SourceError::Http(format!("{url}: {e}")))?
        .into_body()
        .read_to_vec()
        .map_err(|e| SourceError::Http(format!("{url}: {e}")))?;

    let tmp = dest.with_extension("tmp");
    fs::write(&tmp, &body)?;
    fs::rename(&tmp, dest)?;
    eprintln!(
        "Wrote {} ({:.1} MB)",
        dest.display(),
        body.len() as f64 / 1_048_576.0
    );
    Ok(true)
}
