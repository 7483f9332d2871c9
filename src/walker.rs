use crate::action::ActionDispatcher;
use crate::matcher::Matcher;
use crate::output::{emit, Rendered};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// True when the path exists (symlinks followed, like the descent itself).
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// True when the current user may read the path.
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    use nix::unistd::{access, AccessFlags};
    access(path, AccessFlags::R_OK).is_ok()
}

#[cfg(not(unix))]
pub fn is_readable(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// End-of-run telemetry: paths that passed the guard checks and paths that
/// matched the pattern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStats {
    pub visited: usize,
    pub matched: usize,
}

/// Depth-bounded directory walk with per-node match/action evaluation.
pub struct TreeTraverser<'a> {
    matcher: &'a Matcher<'a>,
    action: Option<&'a ActionDispatcher>,
}

impl<'a> TreeTraverser<'a> {
    pub fn new(matcher: &'a Matcher<'a>, action: Option<&'a ActionDispatcher>) -> Self {
        Self { matcher, action }
    }

    /// Walks from `root`. An explicit worklist replaces the obvious
    /// recursion so deep trees cannot exhaust the call stack; the cutoff
    /// semantics are unchanged. Depth 0 evaluates the root alone; each
    /// directory descent hands children a budget smaller by exactly 1, and
    /// a node arriving with a negative budget is dropped silently.
    pub fn run(&self, root: &Path, max_depth: i64) -> TraversalStats {
        let mut stats = TraversalStats::default();
        let mut worklist: Vec<(PathBuf, i64)> = vec![(root.to_path_buf(), max_depth)];

        while let Some((path, depth)) = worklist.pop() {
            if depth < 0 {
                // recursion floor, not an error
                continue;
            }
            if !path_exists(&path) {
                eprintln!("{} doesn't exist", path.display());
                continue;
            }
            if !is_readable(&path) {
                eprintln!("no read access to {}", path.display());
                continue;
            }

            stats.visited += 1;
            let subject = path.to_string_lossy();
            let outcome = self.matcher.evaluate(&subject);
            if let Some(line) = outcome.rendered {
                emit(&Rendered::Line(line));
            }
            if outcome.matched {
                stats.matched += 1;
                if let Some(action) = self.action {
                    action.dispatch(&subject);
                }
            }

            let remaining = depth - 1;
            if path.is_dir() {
                match fs::read_dir(&path) {
                    Ok(entries) => {
                        for entry in entries {
                            match entry {
                                Ok(entry) => worklist.push((entry.path(), remaining)),
                                Err(err) => {
                                    eprintln!(
                                        "cannot read entry under {}: {err}",
                                        path.display()
                                    );
                                }
                            }
                        }
                    }
                    Err(err) => eprintln!("cannot list {}: {err}", path.display()),
                }
            }
        }

        debug!(
            "traversal done: {} visited, {} matched",
            stats.visited, stats.matched
        );
        stats
    }
}
