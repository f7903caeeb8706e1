//! File system cache for raw provider data.
//!
//! Fetched game logs and draft rosters are stored as pretty JSON under
//! `<cache_dir>/draft-graph/` so repeated runs over the same seasons do not
//! hit the stats API again. `DRAFT_GRAPH_CACHE_DIR` relocates the directory.

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::cli::types::{DraftYear, Season, SeasonType};

/// Environment variable that overrides the cache root.
pub const CACHE_DIR_ENV_VAR: &str = "DRAFT_GRAPH_CACHE_DIR";

/// Root of the cache: `$DRAFT_GRAPH_CACHE_DIR`, else `~/.cache/draft-graph`.
pub fn cache_root() -> PathBuf {
    if let Ok(dir) = std::env::var(CACHE_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("draft-graph")
}

/// Path: {root}/game-logs_{season}_{type}.json
pub fn game_logs_path(root: &Path, season: Season, season_type: SeasonType) -> PathBuf {
    root.join(format!(
        "game-logs_{}_{}.json",
        season.as_u16(),
        season_type.slug()
    ))
}

/// Path: {root}/draft_{year}.json
pub fn draft_path(root: &Path, year: DraftYear) -> PathBuf {
    root.join(format!("draft_{}.json", year.as_u16()))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Read and decode a cached JSON value. Missing or undecodable files yield `None`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let s = try_read_to_string(path)?;
    match serde_json::from_str(&s) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable cache entry");
            None
        }
    }
}

/// Encode and store a JSON value. Failures are logged and otherwise ignored.
pub fn write_json<T: Serialize>(path: &Path, value: &T) {
    let result = serde_json::to_string_pretty(value)
        .map_err(std::io::Error::from)
        .and_then(|s| write_string(path, &s));
    if let Err(e) = result {
        tracing::warn!(path = %path.display(), error = %e, "failed to write cache entry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_paths() {
        let root = PathBuf::from("/tmp/dg");
        assert_eq!(
            game_logs_path(&root, Season::new(2019), SeasonType::Regular),
            PathBuf::from("/tmp/dg/game-logs_2019_regular.json")
        );
        assert_eq!(
            draft_path(&root, DraftYear::new(2018)),
            PathBuf::from("/tmp/dg/draft_2018.json")
        );
    }

    #[test]
    fn test_write_then_read_string() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("file.json");

        write_string(&path, "{\"a\":1}").unwrap();
        assert_eq!(try_read_to_string(&path).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(try_read_to_string(&dir.path().join("missing.json")).is_none());
        assert!(read_json::<Vec<u32>>(&dir.path().join("missing.json")).is_none());
    }

    #[test]
    fn test_read_json_ignores_corrupt_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.json");
        write_string(&path, "not json").unwrap();

        assert!(read_json::<Vec<u32>>(&path).is_none());
    }

    #[test]
    fn test_write_json_then_read_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("values.json");

        write_json(&path, &vec![3u32, 1, 2]);
        assert_eq!(read_json::<Vec<u32>>(&path), Some(vec![3, 1, 2]));
    }
}
