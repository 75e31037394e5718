//! Search tool invocation and output parsing

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runner::CommandRunner;
use crate::Result;

/// How the search tool delimits results on stdout. Null separation allows
/// newlines in file names; newline separation allows NUL bytes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSeparator {
    Null,
    Newline,
}

impl ResultSeparator {
    /// Extra flag passed to the tool, if any.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            ResultSeparator::Null => Some("-0"),
            ResultSeparator::Newline => None,
        }
    }

    pub fn byte(&self) -> u8 {
        match self {
            ResultSeparator::Null => 0,
            ResultSeparator::Newline => b'\n',
        }
    }
}

/// One search invocation: a pattern matched at most `depth` levels below the
/// current directory.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub pattern: String,
    pub depth: usize,
    pub separator: ResultSeparator,
}

impl SearchQuery {
    pub fn new(pattern: impl Into<String>, depth: usize) -> Self {
        Self {
            pattern: pattern.into(),
            depth: depth.max(1),
            separator: ResultSeparator::Null,
        }
    }

    pub fn with_separator(mut self, separator: ResultSeparator) -> Self {
        self.separator = separator;
        self
    }
}

/// Run `tool` and return the matches as absolute paths, sorted
/// case-insensitively with exact duplicates removed.
///
/// A non-zero exit yields an empty list; only a spawn failure is an error.
pub fn collect_matches(
    runner: &dyn CommandRunner,
    tool: &str,
    query: &SearchQuery,
    current_dir: &Path,
) -> Result<Vec<String>> {
    let depth_arg = format!("-d{}", query.depth);
    let mut args: Vec<&str> = Vec::new();
    if let Some(flag) = query.separator.flag() {
        args.push(flag);
    }
    args.push(&depth_arg);
    args.push(&query.pattern);

    let output = runner.run(tool, &args)?;
    if !output.success {
        tracing::warn!(tool, pattern = %query.pattern, "Search tool exited non-zero");
        return Ok(Vec::new());
    }

    let mut matches: Vec<String> = output
        .stdout
        .split(|b| *b == query.separator.byte())
        .map(|token| String::from_utf8_lossy(token).to_string())
        .filter(|token| !token.is_empty())
        .collect();

    // Tie-break case variants on the exact value so identical paths end up
    // adjacent and the dedup removes every exact duplicate.
    matches.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    matches.dedup();

    Ok(matches
        .into_iter()
        .map(|rel| current_dir.join(rel).to_string_lossy().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunOutput;
    use std::sync::Mutex;

    // Minimal scripted runner; records the invocation and replays canned
    // output.
    struct ScriptedRunner {
        output: RunOutput,
        seen: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl ScriptedRunner {
        fn new(stdout: &[u8], success: bool) -> Self {
            Self {
                output: RunOutput {
                    success,
                    stdout: stdout.to_vec(),
                },
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput> {
            self.seen.lock().unwrap().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            Ok(self.output.clone())
        }

        fn run_with_input(&self, program: &str, args: &[&str], _input: &[u8]) -> Result<RunOutput> {
            self.run(program, args)
        }
    }

    #[test]
    fn test_matches_are_sorted_absolutized_and_deduped() {
        let runner = ScriptedRunner::new(b"Beta\0alpha\0\0Beta\0gamma\0", true);
        let query = SearchQuery::new("pat", 1);

        let matches = collect_matches(&runner, "fd", &query, Path::new("/cwd")).unwrap();

        assert_eq!(
            matches,
            vec!["/cwd/alpha", "/cwd/Beta", "/cwd/gamma"]
        );
    }

    #[test]
    fn test_exact_duplicate_split_by_case_variant_is_removed() {
        let runner = ScriptedRunner::new(b"Beta\0beta\0Beta\0", true);
        let query = SearchQuery::new("pat", 1);

        let matches = collect_matches(&runner, "fd", &query, Path::new("/cwd")).unwrap();

        assert_eq!(matches, vec!["/cwd/Beta", "/cwd/beta"]);
    }

    #[test]
    fn test_newline_separator_omits_flag() {
        let runner = ScriptedRunner::new(b"a\nb\n", true);
        let query = SearchQuery::new("pat", 3).with_separator(ResultSeparator::Newline);

        let matches = collect_matches(&runner, "fd", &query, Path::new("/cwd")).unwrap();

        assert_eq!(matches, vec!["/cwd/a", "/cwd/b"]);
        let seen = runner.seen.lock().unwrap();
        assert_eq!(seen[0].1, vec!["-d3", "pat"]);
    }

    #[test]
    fn test_null_separator_passes_flag_and_depth() {
        let runner = ScriptedRunner::new(b"", true);
        let query = SearchQuery::new("x", 2);

        collect_matches(&runner, "fd", &query, Path::new("/cwd")).unwrap();

        let seen = runner.seen.lock().unwrap();
        assert_eq!(seen[0].0, "fd");
        assert_eq!(seen[0].1, vec!["-0", "-d2", "x"]);
    }

    #[test]
    fn test_non_zero_exit_yields_empty_list() {
        let runner = ScriptedRunner::new(b"ignored\0", false);
        let query = SearchQuery::new("pat", 1);

        let matches = collect_matches(&runner, "fd", &query, Path::new("/cwd")).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_depth_is_clamped_to_one() {
        assert_eq!(SearchQuery::new("p", 0).depth, 1);
    }
}
