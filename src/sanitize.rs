//! Hardening for user-supplied patterns before compilation.
//!
//! Shell-glob habits leak into regex input: a bare `*` or a bare `.` meant
//! as a wildcard turns into an unbounded greedy construct. The rewrites here
//! target exactly those two typo shapes; this is a heuristic, not a general
//! catastrophic-backtracking detector.

use log::warn;
use regex::{Regex, RegexBuilder};

/// The canonical match-everything pattern, also the fallback when a
/// sanitized pattern still refuses to compile.
pub const MATCH_ALL: &str = "^.*$";

/// True when the pattern is exactly `*` or contains a run of `*` characters
/// not immediately preceded by a `.`.
pub fn has_unsafe_asterisks(pattern: &str) -> bool {
    let mut prev: Option<char> = None;
    for c in pattern.chars() {
        if c == '*' && prev != Some('*') && prev != Some('.') {
            return true;
        }
        prev = Some(c);
    }
    false
}

/// True when the pattern is exactly `.` or contains an unescaped `.` run
/// not immediately followed by a `*`.
pub fn has_unsafe_dots(pattern: &str) -> bool {
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '.' {
            i += 1;
            continue;
        }
        let escaped = i > 0 && chars[i - 1] == '\\';
        let mut run_end = i;
        while run_end < chars.len() && chars[run_end] == '.' {
            run_end += 1;
        }
        let followed_by_star = run_end < chars.len() && chars[run_end] == '*';
        if !escaped && !followed_by_star {
            return true;
        }
        i = run_end;
    }
    false
}

/// Rewrites every offending `*` run, together with its preceding
/// non-`.`/non-`^` character, to the safe sequence `.*`. Runs already
/// preceded by a `.` are left alone.
pub fn defuse_asterisks(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '*' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let run_start = i;
        while i < chars.len() && chars[i] == '*' {
            i += 1;
        }
        let preceding = if run_start == 0 {
            None
        } else {
            Some(chars[run_start - 1])
        };
        match preceding {
            Some('.') => {
                for _ in run_start..i {
                    out.push('*');
                }
            }
            Some('^') | None => out.push_str(".*"),
            Some(_) => {
                out.pop();
                out.push_str(".*");
            }
        }
    }
    out
}

/// Rewrites every unescaped `.` run not followed by `*` to the anchored
/// safe form `^.*$`. A known trade-off: a meaningful bare `.` collapses
/// into the universal pattern in place.
pub fn defuse_dots(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '.' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let run_start = i;
        while i < chars.len() && chars[i] == '.' {
            i += 1;
        }
        let escaped = run_start > 0 && chars[run_start - 1] == '\\';
        let followed_by_star = i < chars.len() && chars[i] == '*';
        if escaped || followed_by_star {
            for _ in run_start..i {
                out.push('.');
            }
        } else {
            out.push_str(MATCH_ALL);
        }
    }
    out
}

/// Neutralizes the two unsafe shapes. The exact strings `.*` and `^.*$`
/// canonicalize to [`MATCH_ALL`] untouched; everything else goes through
/// the asterisk rewrite first, then the dot rewrite on the result.
pub fn sanitize(raw: &str) -> String {
    if raw == ".*" || raw == MATCH_ALL {
        return MATCH_ALL.to_string();
    }
    let mut pattern = raw.to_string();
    if has_unsafe_asterisks(&pattern) {
        pattern = defuse_asterisks(&pattern);
    }
    if has_unsafe_dots(&pattern) {
        pattern = defuse_dots(&pattern);
    }
    pattern
}

/// Sanitizes and compiles `raw`. Compilation failure is never fatal: the
/// universal pattern takes over and the substitution is logged.
pub fn compile(raw: &str, ignore_case: bool) -> Regex {
    let sanitized = sanitize(raw);
    build(&sanitized, ignore_case).unwrap_or_else(|err| {
        warn!("pattern {sanitized:?} does not compile ({err}); falling back to {MATCH_ALL}");
        build(MATCH_ALL, ignore_case).expect("the universal pattern always compiles")
    })
}

fn build(pattern: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .unicode(true)
        .build()
}
