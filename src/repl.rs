//! Line-oriented read-lex-print loop.

use std::io::{BufRead, Write};

use log::debug;

use crate::Error;
use crate::lexer::Lexer;

/// How line numbers are assigned to tokens across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineNumbering {
    /// Each input line is lexed on its own and reported as line 1.
    #[default]
    PerLine,
    /// Line numbers keep counting across the whole session.
    Continuous,
}

/// Settings for [`start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// Filename attached to every token's location.
    pub filename: String,
    pub line_numbering: LineNumbering,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            filename: "<repl>".to_string(),
            line_numbering: LineNumbering::PerLine,
        }
    }
}

/// Read lines from `input` until it is exhausted, writing the tokens of
/// each line to `output`.
///
/// The trailing `Eof` token of each line is not printed. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD and lex as `Illegal` tokens.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &ReplConfig,
) -> Result<(), Error> {
    debug!("repl session started ({:?})", config.line_numbering);
    writeln!(output, "Happy hacking!")?;

    let mut buf = Vec::new();
    let mut line_number = 1;

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text
            .strip_suffix('\n')
            .map_or(&*text, |l| l.strip_suffix('\r').unwrap_or(l));

        let start_line = match config.line_numbering {
            LineNumbering::PerLine => 1,
            LineNumbering::Continuous => line_number,
        };
        let mut lexer = Lexer::starting_at_line(line, config.filename.as_str(), start_line);
        for token in lexer.tokens().filter(|t| !t.is_eof()) {
            writeln!(output, "{token}")?;
        }
        line_number += 1;
    }

    writeln!(output)?;
    debug!("repl session ended after {} line(s)", line_number - 1);
    Ok(())
}
