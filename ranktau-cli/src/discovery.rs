/// Ranking file discovery by name pattern.
///
/// A source prefix like `runs/master` names every file in `runs/` whose name
/// starts with `master_rankings_`. Results are sorted by path, so pair k on
/// the master side lines up with pair k on the student side. Sorting is
/// lexicographic: `_10` comes before `_2`.
use globset::GlobBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::BatchError;

/// Default fragment between a source prefix and the pair index.
pub const DEFAULT_INFIX: &str = "_rankings_";

/// Splits `runs/master` into (`runs`, `master`). A bare prefix lives in the
/// current directory.
fn split_prefix(prefix: &str) -> (Option<&Path>, &str) {
    match prefix.rsplit_once('/') {
        Some(("", stem)) => (Some(Path::new("/")), stem),
        Some((dir, stem)) => (Some(Path::new(dir)), stem),
        None => (None, prefix),
    }
}

/// The file-name glob for one source, e.g. `master_rankings_*`.
pub fn file_pattern(stem: &str, infix: &str) -> String {
    format!("{}{}*", globset::escape(stem), globset::escape(infix))
}

/// Finds all ranking files for one source, sorted by path.
pub fn find_ranking_files(prefix: &str, infix: &str) -> Result<Vec<PathBuf>, BatchError> {
    let (dir, stem) = split_prefix(prefix);
    let pattern = file_pattern(stem, infix);

    let matcher = GlobBuilder::new(&pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| BatchError::Pattern { pattern: pattern.clone(), source })?
        .compile_matcher();

    let search_dir = dir.unwrap_or_else(|| Path::new("."));
    let entries = std::fs::read_dir(search_dir).map_err(|source| BatchError::Io {
        path: search_dir.to_path_buf(),
        source,
    })?;

    // Hidden files (editor swap files and the like) only match a pattern that
    // itself starts with a dot.
    let include_hidden = pattern.starts_with('.');

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::Io {
            path: search_dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if !include_hidden && name.to_string_lossy().starts_with('.') {
            continue;
        }
        if !matcher.is_match(Path::new(&name)) {
            continue;
        }
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        files.push(match dir {
            Some(d) => d.join(&name),
            None => PathBuf::from(&name),
        });
    }

    files.sort();
    debug!(
        "{} file(s) match {} in {}",
        files.len(),
        pattern,
        search_dir.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "0\n").unwrap();
    }

    #[test]
    fn test_split_prefix() {
        assert_eq!(split_prefix("runs/master"), (Some(Path::new("runs")), "master"));
        assert_eq!(split_prefix("a/b/student"), (Some(Path::new("a/b")), "student"));
        assert_eq!(split_prefix("/master"), (Some(Path::new("/")), "master"));
        assert_eq!(split_prefix("master"), (None, "master"));
    }

    #[test]
    fn test_file_pattern() {
        assert_eq!(file_pattern("master", DEFAULT_INFIX), "master_rankings_*");
    }

    #[test]
    fn test_find_treats_prefix_literally() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "run[1]_rankings_0");
        touch(tmp.path(), "run1_rankings_0");

        let prefix = format!("{}/run[1]", tmp.path().display());
        let files = find_ranking_files(&prefix, DEFAULT_INFIX).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("run[1]_rankings_0"));
    }

    #[test]
    fn test_find_filters_by_source_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        touch(dir, "master_rankings_2");
        touch(dir, "master_rankings_0");
        touch(dir, "master_rankings_10");
        touch(dir, "student_rankings_0");
        touch(dir, "master_scores_0");
        fs::create_dir(dir.join("master_rankings_dir")).unwrap();

        let prefix = format!("{}/master", dir.display());
        let files = find_ranking_files(&prefix, DEFAULT_INFIX).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["master_rankings_0", "master_rankings_10", "master_rankings_2"]);
        assert!(files.iter().all(|p| p.starts_with(dir)));
    }

    #[test]
    fn test_find_skips_hidden_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "master_rankings_0");
        touch(tmp.path(), ".master_rankings_0.swp");

        let prefix = format!("{}/master", tmp.path().display());
        let files = find_ranking_files(&prefix, DEFAULT_INFIX).unwrap();
        assert_eq!(files, vec![tmp.path().join("master_rankings_0")]);
    }

    #[test]
    fn test_find_hidden_stem_matches_hidden_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".master_rankings_0");
        touch(tmp.path(), "master_rankings_0");

        let prefix = format!("{}/.master", tmp.path().display());
        let files = find_ranking_files(&prefix, DEFAULT_INFIX).unwrap();
        assert_eq!(files, vec![tmp.path().join(".master_rankings_0")]);
    }

    #[test]
    fn test_find_custom_infix() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "master-rank-0");
        touch(tmp.path(), "master_rankings_0");

        let prefix = format!("{}/master", tmp.path().display());
        let files = find_ranking_files(&prefix, "-rank-").unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("master-rank-0"));
    }

    #[test]
    fn test_find_missing_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let prefix = format!("{}/nope/master", tmp.path().display());
        let err = find_ranking_files(&prefix, DEFAULT_INFIX).unwrap_err();
        assert!(matches!(err, BatchError::Io { .. }));
    }
}
