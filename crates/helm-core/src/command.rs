//! Console command parsing
//!
//! Commands as typed into the host's console:
//! - `mkcd <path>` — create a directory tree and walk into it
//! - `fd_search [-d<depth>] <query>` — search below the current directory
//! - `fd_next` / `fd_prev` — cycle through the last search's matches
//! - `fzf_select [--dirs]` — fuzzy-pick an entry
//! - `z <term>...` — frecency jump
//! - `reveal` — show the selection in the OS file browser

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleCommand {
    MakeAndDescend {
        path: String,
    },
    Search {
        /// `None` falls back to the configured default depth.
        depth: Option<usize>,
        query: String,
    },
    SearchNext,
    SearchPrev,
    Pick {
        dirs_only: bool,
    },
    Jump {
        terms: Vec<String>,
    },
    Reveal,
}

impl ConsoleCommand {
    /// Parse a console line. Returns `None` for unknown command names;
    /// argument validation happens at dispatch time so the user gets a
    /// usage message instead of an unknown-command one.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (name, rest) = match input.find(char::is_whitespace) {
            Some(idx) => (&input[..idx], input[idx..].trim_start()),
            None => (input, ""),
        };

        match name {
            "mkcd" => Some(ConsoleCommand::MakeAndDescend {
                path: rest.to_string(),
            }),
            "fd_search" => Some(Self::parse_search(rest)),
            "fd_next" => Some(ConsoleCommand::SearchNext),
            "fd_prev" => Some(ConsoleCommand::SearchPrev),
            "fzf_select" => Some(ConsoleCommand::Pick {
                dirs_only: rest == "--dirs",
            }),
            "z" => Some(ConsoleCommand::Jump {
                terms: rest.split_whitespace().map(str::to_string).collect(),
            }),
            "reveal" => Some(ConsoleCommand::Reveal),
            _ => None,
        }
    }

    /// A leading `-d<n>` token sets the depth; a `-d` token that does not
    /// parse as a positive integer stays part of the query.
    fn parse_search(rest: &str) -> Self {
        if let Some(first) = rest.split_whitespace().next() {
            if let Some(digits) = first.strip_prefix("-d") {
                if let Ok(depth) = digits.parse::<usize>() {
                    if depth >= 1 {
                        let query = rest[first.len()..].trim_start().to_string();
                        return ConsoleCommand::Search {
                            depth: Some(depth),
                            query,
                        };
                    }
                }
            }
        }

        ConsoleCommand::Search {
            depth: None,
            query: rest.to_string(),
        }
    }

    /// Command name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::MakeAndDescend { .. } => "mkcd",
            ConsoleCommand::Search { .. } => "fd_search",
            ConsoleCommand::SearchNext => "fd_next",
            ConsoleCommand::SearchPrev => "fd_prev",
            ConsoleCommand::Pick { .. } => "fzf_select",
            ConsoleCommand::Jump { .. } => "z",
            ConsoleCommand::Reveal => "reveal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mkcd_keeps_raw_path() {
        let cmd = ConsoleCommand::parse("mkcd a/.git/hooks").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::MakeAndDescend {
                path: "a/.git/hooks".to_string()
            }
        );
    }

    #[test]
    fn test_parse_search_with_depth() {
        let cmd = ConsoleCommand::parse("fd_search -d3 readme").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Search {
                depth: Some(3),
                query: "readme".to_string()
            }
        );
    }

    #[test]
    fn test_parse_search_without_depth() {
        let cmd = ConsoleCommand::parse("fd_search readme").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Search {
                depth: None,
                query: "readme".to_string()
            }
        );
    }

    #[test]
    fn test_bad_depth_token_stays_in_query() {
        let cmd = ConsoleCommand::parse("fd_search -dx foo").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Search {
                depth: None,
                query: "-dx foo".to_string()
            }
        );

        let cmd = ConsoleCommand::parse("fd_search -d0 foo").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Search {
                depth: None,
                query: "-d0 foo".to_string()
            }
        );
    }

    #[test]
    fn test_parse_search_query_may_be_empty() {
        let cmd = ConsoleCommand::parse("fd_search").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Search {
                depth: None,
                query: String::new()
            }
        );
    }

    #[test]
    fn test_parse_cycle_commands() {
        assert_eq!(
            ConsoleCommand::parse("fd_next"),
            Some(ConsoleCommand::SearchNext)
        );
        assert_eq!(
            ConsoleCommand::parse("fd_prev"),
            Some(ConsoleCommand::SearchPrev)
        );
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(
            ConsoleCommand::parse("fzf_select"),
            Some(ConsoleCommand::Pick { dirs_only: false })
        );
        assert_eq!(
            ConsoleCommand::parse("fzf_select --dirs"),
            Some(ConsoleCommand::Pick { dirs_only: true })
        );
    }

    #[test]
    fn test_parse_jump_terms() {
        let cmd = ConsoleCommand::parse("z proj helm").unwrap();
        assert_eq!(
            cmd,
            ConsoleCommand::Jump {
                terms: vec!["proj".to_string(), "helm".to_string()]
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(ConsoleCommand::parse("frobnicate now").is_none());
        assert!(ConsoleCommand::parse("").is_none());
    }
}
