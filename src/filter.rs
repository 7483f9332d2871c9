use crate::action::ActionDispatcher;
use crate::matcher::Matcher;
use crate::output::{emit, Rendered};
use std::io::{self, BufRead, ErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Printed when an interrupt stops the read loop.
pub const FAREWELL: &str = "Ctrl-C applied.\nExiting now...";

/// Like `BufRead::read_line`, except an interrupted read surfaces as an
/// error instead of being retried. std's `read_until` swallows
/// `ErrorKind::Interrupted` and restarts the read, which would leave a
/// blocked filter stuck until the next newline; here the signal reaches
/// the caller while the loop is still blocked on input.
fn read_line<R: BufRead>(input: &mut R, line: &mut String) -> io::Result<usize> {
    let mut bytes = Vec::new();
    loop {
        let (found_newline, used) = {
            let available = input.fill_buf()?;
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    bytes.extend_from_slice(&available[..=i]);
                    (true, i + 1)
                }
                None => {
                    bytes.extend_from_slice(available);
                    (false, available.len())
                }
            }
        };
        input.consume(used);
        if found_newline || used == 0 {
            let text = std::str::from_utf8(&bytes).map_err(|_| {
                io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8")
            })?;
            line.push_str(text);
            return Ok(bytes.len());
        }
    }
}

/// Applies the traverser's match/action semantics to a stream of text
/// lines instead of filesystem paths. Single pass, non-restartable.
pub struct StdinFilter<'a> {
    matcher: &'a Matcher<'a>,
    action: Option<&'a ActionDispatcher>,
    interrupted: Arc<AtomicBool>,
}

impl<'a> StdinFilter<'a> {
    pub fn new(
        matcher: &'a Matcher<'a>,
        action: Option<&'a ActionDispatcher>,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        Self {
            matcher,
            action,
            interrupted,
        }
    }

    /// Reads lines until end-of-stream, an interrupt, or a read fault.
    /// Trailing newlines are stripped before evaluation. An interrupt is
    /// honored both between lines (the flag check) and while blocked on
    /// input (the read surfaces `ErrorKind::Interrupted`). Returns the
    /// matched-line count.
    pub fn run<R: BufRead>(&self, mut input: R) -> usize {
        let mut matched = 0;
        let mut line = String::new();
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                emit(&Rendered::Line(FAREWELL.to_string()));
                break;
            }
            line.clear();
            match read_line(&mut input, &mut line) {
                Ok(0) => break, // end of stream
                Ok(_) => {
                    let subject = line.strip_suffix('\n').unwrap_or(&line);
                    let subject = subject.strip_suffix('\r').unwrap_or(subject);
                    let outcome = self.matcher.evaluate(subject);
                    if let Some(rendered) = outcome.rendered {
                        emit(&Rendered::Line(rendered));
                    }
                    if outcome.matched {
                        matched += 1;
                        if let Some(action) = self.action {
                            action.dispatch(subject);
                        }
                    }
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {
                    emit(&Rendered::Line(FAREWELL.to_string()));
                    break;
                }
                Err(err) => {
                    eprintln!("cannot read standard input: {err}");
                    break;
                }
            }
        }
        matched
    }
}
