use clap::ValueEnum;
use colored::{Color, Colorize};
use regex::Regex;

/// Highlight color key for matched text.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorKey {
    White,
    #[default]
    Red,
    Green,
    Yellow,
}

impl From<ColorKey> for Color {
    fn from(key: ColorKey) -> Self {
        match key {
            ColorKey::White => Color::White,
            ColorKey::Red => Color::Red,
            ColorKey::Green => Color::Green,
            ColorKey::Yellow => Color::Yellow,
        }
    }
}

/// How matches are rendered. Capability flags are injected here instead of
/// read from ambient process state.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub verbose: bool,
    pub only_matches: bool,
    pub color: ColorKey,
    pub color_enabled: bool,
}

/// Result of evaluating one subject. The match signal and the rendered
/// output are independent: a silent match still reports `matched` so a
/// configured action can fire.
#[derive(Debug)]
pub struct MatchOutcome {
    pub matched: bool,
    pub rendered: Option<String>,
}

impl MatchOutcome {
    fn miss() -> Self {
        Self {
            matched: false,
            rendered: None,
        }
    }
}

/// Evaluates subjects against a compiled pattern; never mutates either.
pub struct Matcher<'a> {
    pattern: &'a Regex,
    opts: RenderOptions,
}

impl<'a> Matcher<'a> {
    pub fn new(pattern: &'a Regex, opts: RenderOptions) -> Self {
        Self { pattern, opts }
    }

    /// Finds all non-overlapping matches in `subject`. Rendering rules:
    /// only-matches joins the matched substrings with single spaces;
    /// verbose returns the full subject with every match span highlighted
    /// in place; otherwise a match is signalled without output.
    pub fn evaluate(&self, subject: &str) -> MatchOutcome {
        let spans: Vec<(usize, usize)> = self
            .pattern
            .find_iter(subject)
            .map(|m| (m.start(), m.end()))
            .collect();
        if spans.is_empty() {
            return MatchOutcome::miss();
        }

        let rendered = if self.opts.only_matches {
            let joined = spans
                .iter()
                .map(|&(start, end)| &subject[start..end])
                .collect::<Vec<_>>()
                .join(" ");
            Some(self.paint(&joined))
        } else if self.opts.verbose {
            Some(self.highlight_spans(subject, &spans))
        } else {
            None
        };

        MatchOutcome {
            matched: true,
            rendered,
        }
    }

    fn paint(&self, text: &str) -> String {
        if self.opts.color_enabled {
            text.color(Color::from(self.opts.color)).to_string()
        } else {
            text.to_string()
        }
    }

    fn highlight_spans(&self, subject: &str, spans: &[(usize, usize)]) -> String {
        if !self.opts.color_enabled {
            return subject.to_string();
        }
        let mut out = String::with_capacity(subject.len() + spans.len() * 16);
        let mut cursor = 0;
        for &(start, end) in spans {
            out.push_str(&subject[cursor..start]);
            out.push_str(&self.paint(&subject[start..end]));
            cursor = end;
        }
        out.push_str(&subject[cursor..]);
        out
    }
}
