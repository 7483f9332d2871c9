use crate::cli::Cli;
use crate::matcher::{ColorKey, RenderOptions};
use crate::sanitize;
use is_terminal::IsTerminal;
use regex::Regex;

/// Process-spawn strategy of the host, probed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Runtime capabilities, computed once and passed down explicitly so
/// components stay testable with injected flags.
#[derive(Clone, Copy, Debug)]
pub struct Capabilities {
    pub platform: Platform,
    pub color: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            platform: Platform::current(),
            color: std::io::stdout().is_terminal(),
        }
    }
}

/// Resolved per-run configuration. Built once by the entry point and never
/// mutated afterwards.
#[derive(Debug)]
pub struct SearchConfig {
    pub pattern: Regex,
    pub max_depth: i64,
    pub verbose: bool,
    pub only_matches: bool,
    pub action: Option<String>,
    pub ignore_case: bool,
    pub color: ColorKey,
}

impl SearchConfig {
    /// Resolves the parsed flags into the run configuration; the pattern
    /// is sanitized and compiled here so the stored case flag and the
    /// compiled pattern cannot drift apart. `max_depth` arrives already
    /// validated by the entry point.
    pub fn resolve(cli: &Cli, max_depth: i64) -> Self {
        Self {
            pattern: sanitize::compile(&cli.regex, cli.ignore_case),
            max_depth,
            verbose: !cli.quiet,
            only_matches: cli.only_matches,
            action: cli.action.clone(),
            ignore_case: cli.ignore_case,
            color: cli.color,
        }
    }

    pub fn render_options(&self, capabilities: &Capabilities) -> RenderOptions {
        RenderOptions {
            verbose: self.verbose,
            only_matches: self.only_matches,
            color: self.color,
            color_enabled: capabilities.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn resolve_wires_flags_into_the_compiled_pattern() {
        let cli = Cli::parse_from(["rxfind", "-r", r"\.C$", "-i", "-q"]);
        let config = SearchConfig::resolve(&cli, 2);
        assert!(config.ignore_case);
        assert!(config.pattern.is_match("/tmp/a.c"));
        assert!(!config.verbose);
        assert_eq!(config.max_depth, 2);

        let caps = Capabilities {
            platform: Platform::Posix,
            color: false,
        };
        let opts = config.render_options(&caps);
        assert!(!opts.verbose);
        assert!(!opts.color_enabled);
    }

    #[test]
    fn case_sensitive_by_default() {
        let cli = Cli::parse_from(["rxfind", "-r", r"\.C$"]);
        let config = SearchConfig::resolve(&cli, 1);
        assert!(!config.ignore_case);
        assert!(!config.pattern.is_match("/tmp/a.c"));
    }
}
