use std::io::Write;

/// Output shapes are selected by the producer, never inferred from the
/// value being printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A single line; a trailing newline is appended on emission.
    Line(String),
    /// Preformatted text printed as-is, e.g. captured action output.
    Block(String),
}

/// Writes to standard output. A failed write is reported to the error
/// stream for that one subject and processing continues.
pub fn emit(rendered: &Rendered) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let result = match rendered {
        Rendered::Line(line) => writeln!(handle, "{line}"),
        Rendered::Block(text) => handle.write_all(text.as_bytes()),
    };
    if let Err(err) = result {
        eprintln!("cannot render output: {err}");
    }
}
