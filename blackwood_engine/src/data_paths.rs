//! Location of runtime data files (rules, help text, intro).
//!
//! The mansion itself is compiled in; these files only tune and describe it.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_VAR: &str = "BLACKWOOD_DATA";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let override_dir = env::var_os(DATA_DIR_VAR).map(PathBuf::from);
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    first_existing(&candidate_roots(override_dir, exe_dir.as_deref()))
}

/// Candidate directories in search order: explicit override, then the working
/// directory, then next to the executable and one level above it.
fn candidate_roots(override_dir: Option<PathBuf>, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = override_dir.into_iter().collect();
    candidates.push(PathBuf::from("blackwood_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Some(dir) = exe_dir {
        candidates.push(dir.join("blackwood_engine/data"));
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("blackwood_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}

fn first_existing(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|candidate| candidate.is_dir())
        .cloned()
        .unwrap_or_else(|| PathBuf::from("blackwood_engine/data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_searched_first() {
        let candidates = candidate_roots(Some(PathBuf::from("/srv/blackwood")), Some(Path::new("/opt/bw/bin")));
        assert_eq!(candidates[0], PathBuf::from("/srv/blackwood"));
        assert!(candidates.contains(&PathBuf::from("/opt/bw/data")));
    }

    #[test]
    fn falls_back_when_nothing_exists() {
        let root = first_existing(&[PathBuf::from("/definitely/not/a/dir")]);
        assert_eq!(root, PathBuf::from("blackwood_engine/data"));
    }

    #[test]
    fn picks_first_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = first_existing(&[PathBuf::from("/definitely/not/a/dir"), dir.path().to_path_buf()]);
        assert_eq!(root, dir.path());
    }
}
