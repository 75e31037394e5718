//! Session dispatcher
//!
//! Owns the process-wide search cursor and routes parsed console commands to
//! the component crates. Exactly one mutator thread is assumed; the mutex
//! still serializes cursor access for concurrent embeddings, since a load
//! replaces the match list and index non-atomically with respect to reads.

use parking_lot::Mutex;
use std::sync::Arc;

use helm_host::{Navigator, Severity};
use helm_jump::JumpStore;
use helm_pick::PickScope;
use helm_search::{collect_matches, CommandRunner, CursorState, MatchCursor, SearchQuery};

use crate::command::ConsoleCommand;
use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Session {
    config: Config,
    navigator: Arc<dyn Navigator>,
    runner: Arc<dyn CommandRunner>,
    cursor: Arc<Mutex<MatchCursor>>,
}

impl Session {
    pub fn new(
        config: Config,
        navigator: Arc<dyn Navigator>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            config,
            navigator,
            runner,
            cursor: Arc::new(Mutex::new(MatchCursor::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cursor_state(&self) -> CursorState {
        self.cursor.lock().state()
    }

    /// Execute a parsed command, funnelling any failure into a single
    /// user-visible warning. The result is also returned for embedders that
    /// want it.
    pub fn dispatch(&self, command: ConsoleCommand) -> Result<()> {
        tracing::info!(command = command.name(), "Dispatching command");

        let result = self.execute(command);
        if let Err(err) = &result {
            self.navigator.notify(&err.to_string(), Severity::Warning);
        }
        result
    }

    fn execute(&self, command: ConsoleCommand) -> Result<()> {
        match command {
            ConsoleCommand::MakeAndDescend { path } => self.make_and_descend(&path),
            ConsoleCommand::Search { depth, query } => self.search(&query, depth).map(|_| ()),
            ConsoleCommand::SearchNext => self.search_next(),
            ConsoleCommand::SearchPrev => self.search_prev(),
            ConsoleCommand::Pick { dirs_only } => self.pick(dirs_only).map(|_| ()),
            ConsoleCommand::Jump { terms } => self.jump(&terms).map(|_| ()),
            ConsoleCommand::Reveal => self.reveal(),
        }
    }

    // === mkcd ===

    pub fn make_and_descend(&self, raw_path: &str) -> Result<()> {
        if raw_path.trim().is_empty() {
            return Err(CoreError::Usage("mkcd needs a directory name".to_string()));
        }

        let base = self.navigator.current_directory_path();
        let show_hidden = self.navigator.hidden_entries_visible();
        helm_nav::descend(self.navigator.as_ref(), &base, raw_path, show_hidden)?;
        Ok(())
    }

    // === fd_search / fd_next / fd_prev ===

    /// Run a search and load its matches into the cursor, selecting the
    /// first one. Returns the match count.
    pub fn search(&self, query: &str, depth: Option<usize>) -> Result<usize> {
        if query.trim().is_empty() {
            return Err(CoreError::Usage("fd_search needs a query".to_string()));
        }

        let request = SearchQuery::new(query, depth.unwrap_or(self.config.default_depth))
            .with_separator(self.config.result_separator);
        let cwd = self.navigator.current_directory_path();
        let matches =
            collect_matches(self.runner.as_ref(), &self.config.search_tool, &request, &cwd)?;

        let count = matches.len();
        tracing::info!(query, count, "Search finished");

        let mut cursor = self.cursor.lock();
        if let Some(first) = cursor.load(matches) {
            self.navigator.select_absolute_path(first)?;
        }
        Ok(count)
    }

    pub fn search_next(&self) -> Result<()> {
        let mut cursor = self.cursor.lock();
        if let Some(current) = cursor.advance() {
            self.navigator.select_absolute_path(current)?;
        }
        Ok(())
    }

    pub fn search_prev(&self) -> Result<()> {
        let mut cursor = self.cursor.lock();
        if let Some(current) = cursor.retreat() {
            self.navigator.select_absolute_path(current)?;
        }
        Ok(())
    }

    // === fzf_select ===

    pub fn pick(&self, dirs_only: bool) -> Result<Option<String>> {
        let scope = if dirs_only {
            PickScope::DirsOnly
        } else {
            PickScope::FilesAndDirs
        };

        Ok(helm_pick::pick(
            self.navigator.as_ref(),
            self.runner.as_ref(),
            &self.config.search_tool,
            &self.config.picker_tool,
            &self.config.picker_excludes,
            scope,
        )?)
    }

    // === z ===

    pub fn jump(&self, terms: &[String]) -> Result<String> {
        let store = match &self.config.jump_data {
            Some(path) => JumpStore::new(path.clone()),
            None => JumpStore::from_env()?,
        };

        Ok(helm_jump::jump_to(self.navigator.as_ref(), &store, terms)?)
    }

    // === reveal ===

    pub fn reveal(&self) -> Result<()> {
        let paths = self.navigator.selected_paths();
        helm_pick::reveal(self.runner.as_ref(), &paths)?;
        Ok(())
    }
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            navigator: Arc::clone(&self.navigator),
            runner: Arc::clone(&self.runner),
            cursor: Arc::clone(&self.cursor),
        }
    }
}
