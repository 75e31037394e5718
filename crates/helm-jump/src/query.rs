//! Query matching and jump execution

use regex::RegexBuilder;
use std::cmp::Ordering;

use helm_host::Navigator;

use crate::error::JumpError;
use crate::store::{JumpEntry, JumpStore};
use crate::Result;

/// Pick the entry matching all query terms in order (terms joined with `.*`,
/// case-insensitive). The shortest path wins; equal lengths break toward the
/// higher rank.
pub fn best_match<'a>(entries: &'a [JumpEntry], terms: &[String]) -> Result<Option<&'a JumpEntry>> {
    if terms.is_empty() {
        return Err(JumpError::EmptyQuery);
    }

    let pattern = terms.join(".*");
    let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

    Ok(entries
        .iter()
        .filter(|entry| regex.is_match(&entry.path))
        .min_by(|a, b| {
            a.path
                .len()
                .cmp(&b.path.len())
                .then(b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal))
        }))
}

/// Resolve the query against the datafile and enter the winning directory.
/// Returns the chosen path.
pub fn jump_to(navigator: &dyn Navigator, store: &JumpStore, terms: &[String]) -> Result<String> {
    let entries = store.entries()?;
    let chosen = best_match(&entries, terms)?.ok_or(JumpError::NoMatch)?;

    tracing::info!(path = %chosen.path, "Jumping to directory");
    navigator.change_directory(&chosen.path)?;

    Ok(chosen.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use helm_host::{NavCall, RecordingNavigator};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(path: &str, rank: f64) -> JumpEntry {
        JumpEntry {
            path: path.to_string(),
            rank,
            last_visit: 0,
        }
    }

    #[test]
    fn test_shortest_matching_path_wins() {
        let entries = vec![
            entry("/home/u/projects/helm", 1.0),
            entry("/home/u/proj", 5.0),
            entry("/var/unrelated", 9.0),
        ];

        let best = best_match(&entries, &["proj".to_string()]).unwrap().unwrap();
        assert_eq!(best.path, "/home/u/proj");
    }

    #[test]
    fn test_rank_breaks_length_ties() {
        let entries = vec![entry("/aaa/x", 1.0), entry("/bbb/x", 7.0)];

        let best = best_match(&entries, &["x".to_string()]).unwrap().unwrap();
        assert_eq!(best.path, "/bbb/x");
    }

    #[test]
    fn test_terms_match_in_order_case_insensitively() {
        let entries = vec![entry("/home/u/Projects/Helm", 1.0), entry("/helm/proj", 1.0)];

        let best = best_match(&entries, &["proj".to_string(), "helm".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(best.path, "/home/u/Projects/Helm");
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert!(matches!(best_match(&[], &[]), Err(JumpError::EmptyQuery)));
    }

    #[test]
    fn test_jump_enters_winning_directory() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "/home/u/work|4.0|100").unwrap();
        writeln!(file, "/home/u/workbench/deep|9.0|100").unwrap();

        let store = JumpStore::new(file.path());
        let nav = RecordingNavigator::new("/elsewhere");

        let chosen = jump_to(&nav, &store, &["work".to_string()]).unwrap();

        assert_eq!(chosen, "/home/u/work");
        assert_eq!(
            nav.navigation_calls(),
            vec![NavCall::ChangeDirectory("/home/u/work".to_string())]
        );
    }

    #[test]
    fn test_no_match_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "/home/u/work|4.0|100").unwrap();

        let store = JumpStore::new(file.path());
        let nav = RecordingNavigator::new("/elsewhere");

        let err = jump_to(&nav, &store, &["nope".to_string()]).unwrap_err();
        assert!(matches!(err, JumpError::NoMatch));
        assert!(nav.navigation_calls().is_empty());
    }
}
