//! Reading sort sources from files, directories and stdin

use std::path::{Path, PathBuf};

use tagsort_core::api::InputSource;
use tagsort_core::config::constants;
use tagsort_core::util::sort::compare_paths;
use tagsort_core::{Result, TagsortError};
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Read every source, preserving argument order
///
/// An empty list reads stdin. Directories contribute their regular files
/// (not recursively) in tag-name order. Files are read concurrently.
pub async fn read_sources(sources: &[PathBuf]) -> Result<Vec<InputSource>> {
    if sources.is_empty() {
        return Ok(vec![read_stdin().await?]);
    }

    let mut files = Vec::new();
    for source in sources {
        if source.as_os_str() == constants::STDIN_SOURCE {
            files.push(None);
        } else if tokio::fs::metadata(source).await?.is_dir() {
            files.extend(list_dir(source).await?.into_iter().map(Some));
        } else {
            files.push(Some(source.clone()));
        }
    }
    debug!("Resolved {} input files", files.len());

    let mut tasks = JoinSet::new();
    let mut slots: Vec<Option<InputSource>> = Vec::with_capacity(files.len());
    for (index, file) in files.into_iter().enumerate() {
        slots.push(None);
        match file {
            // stdin is read inline, it cannot be shared between tasks
            None => slots[index] = Some(read_stdin().await?),
            Some(path) => {
                tasks.spawn(async move { (index, read_file(&path).await) });
            }
        }
    }

    while let Some(joined) = tasks.join_next().await {
        let (index, source) = joined.map_err(|e| TagsortError::other(e.to_string()))?;
        slots[index] = Some(source?);
    }

    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| TagsortError::missing_input("source")))
        .collect()
}

/// Regular files directly inside `dir`, ordered with [`compare_paths`]
pub async fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| compare_paths(a, b));
    Ok(files)
}

async fn read_file(path: &Path) -> Result<InputSource> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        TagsortError::other(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(InputSource::new(
        path.display().to_string(),
        decode(&path.display().to_string(), bytes),
    ))
}

async fn read_stdin() -> Result<InputSource> {
    let mut bytes = Vec::new();
    tokio::io::stdin().read_to_end(&mut bytes).await?;
    Ok(InputSource::new(
        constants::STDIN_NAME,
        decode(constants::STDIN_NAME, bytes),
    ))
}

fn decode(name: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", name);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
