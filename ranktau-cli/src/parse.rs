/// Ranking file loading: whitespace-separated integers, normally one per line.
use ranktau_core::Ranking;
use std::path::Path;

use crate::error::{BatchError, RankParseError};

/// Parse ranking file contents. Blank lines are skipped; anything else that
/// is not an `i64` is an error pointing at its line.
pub fn parse_ranking(content: &str) -> Result<Ranking, RankParseError> {
    let mut ranks = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let rank = token.parse::<i64>().map_err(|_| RankParseError {
                line: idx + 1,
                token: token.to_string(),
            })?;
            ranks.push(rank);
        }
    }
    Ok(ranks)
}

/// Read and parse one ranking file.
pub fn load_ranking(path: &Path) -> Result<Ranking, BatchError> {
    let content = std::fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ranking(&content).map_err(|source| BatchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_per_line() {
        assert_eq!(parse_ranking("3\n1\n2\n").unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let content = "  4 \r\n\n-2\t7\n\n";
        assert_eq!(parse_ranking(content).unwrap(), vec![4, -2, 7]);
    }

    #[test]
    fn test_empty_file_is_empty_ranking() {
        assert_eq!(parse_ranking("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_junk_token_reports_line() {
        let err = parse_ranking("1\n2\nthree\n").unwrap_err();
        assert_eq!(err, RankParseError { line: 3, token: "three".to_string() });
    }

    #[test]
    fn test_float_is_rejected() {
        assert!(parse_ranking("1.5\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_ranking(Path::new("/definitely/not/here_rankings_0")).unwrap_err();
        assert!(matches!(err, BatchError::Io { .. }));
    }

    #[test]
    fn test_load_tags_parse_error_with_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("master_rankings_0");
        std::fs::write(&path, "0\nx\n").unwrap();
        let err = load_ranking(&path).unwrap_err();
        match err {
            BatchError::Parse { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
