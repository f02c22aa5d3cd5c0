//! Drawing the board in a terminal and reading which square a human touched

use std::io::{self, BufRead, Write};

use board::{Board, BoardSquare};
use tracing::debug;

/// Background for squares where `(file + rank)` is even
const GREY_SQUARE: &str = "\x1b[48;2;192;192;192m";
/// Background for the other squares
const WHITE_SQUARE: &str = "\x1b[48;2;255;255;255m";
/// Background for squares the selected piece can move to
const HIGHLIGHT: &str = "\x1b[48;2;250;170;64m";
/// Background for the selected piece itself
const SELECTED: &str = "\x1b[48;2;120;180;240m";
const BLACK_TEXT: &str = "\x1b[30m";
const RESET: &str = "\x1b[0m";

/// Something the human asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Touch the given square, as if tapping it on a display
    Touch(BoardSquare),
    /// Stop playing
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("`{0}` isn't a square; type something like `e2`, or a file and rank like `4 6`")]
    NotASquare(String),
    #[error("file and rank must both be between 0 and 7")]
    OutOfRange,
}

/// Parse one line of input
///
/// Returns `Ok(None)` for a blank line.
///
/// ```
/// use board::BoardSquare;
/// use terminal_ui::{parse_command, Command};
///
/// assert_eq!(parse_command("e2").unwrap(), Some(Command::Touch(BoardSquare::E2)));
/// assert_eq!(parse_command("4 6").unwrap(), Some(Command::Touch(BoardSquare::E2)));
/// assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
/// assert_eq!(parse_command("  ").unwrap(), None);
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    match line {
        "" => return Ok(None),
        "q" | "quit" | "exit" => return Ok(Some(Command::Quit)),
        _ => {}
    }
    if let Ok(square) = line.parse::<BoardSquare>() {
        return Ok(Some(Command::Touch(square)));
    }
    let mut parts = line.split_whitespace().map(str::parse::<u8>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(file)), Some(Ok(rank)), None) => {
            let square = BoardSquare::from_file_rank(file, rank);
            if square.is_valid() {
                Ok(Some(Command::Touch(square)))
            } else {
                Err(InputError::OutOfRange)
            }
        }
        _ => Err(InputError::NotASquare(line.to_owned())),
    }
}

/// Draw the board, rank 0 at the top, with file letters and rank numbers around it
///
/// With `plain` set no escape codes are written: pieces are letters, the selected square is
/// wrapped in `[ ]`, and squares it can move to in `* *`.
pub fn render<B: Board>(
    board: &B,
    selected: Option<BoardSquare>,
    highlights: &[BoardSquare],
    plain: bool,
) -> String {
    let mut out = String::new();
    for rank in 0..8u8 {
        out.push_str(&format!("{} ", 8 - rank));
        for file in 0..8u8 {
            let square = BoardSquare::from_file_rank(file, rank);
            let piece = board.get(square);
            let is_selected = selected == Some(square);
            let is_highlighted = highlights.contains(&square);
            if plain {
                let (left, right) = if is_selected {
                    ('[', ']')
                } else if is_highlighted {
                    ('*', '*')
                } else {
                    (' ', ' ')
                };
                out.push(left);
                out.push(piece.map_or('.', |piece| piece.letter()));
                out.push(right);
            } else {
                let background = if is_selected {
                    SELECTED
                } else if is_highlighted {
                    HIGHLIGHT
                } else if (file + rank) % 2 == 0 {
                    GREY_SQUARE
                } else {
                    WHITE_SQUARE
                };
                out.push_str(background);
                out.push_str(BLACK_TEXT);
                out.push(' ');
                out.push(piece.map_or(' ', |piece| piece.glyph()));
                out.push(' ');
            }
        }
        if !plain {
            out.push_str(RESET);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for file in 'a'..='h' {
        out.push(' ');
        out.push(file);
        out.push(' ');
    }
    out.push('\n');
    out
}

/// A human at a terminal
pub struct TerminalUI<R, W> {
    input: R,
    output: W,
    plain: bool,
}

impl TerminalUI<io::StdinLock<'static>, io::Stdout> {
    /// Read from stdin and draw to stdout
    pub fn stdio(plain: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), plain)
    }
}

impl<R: BufRead, W: Write> TerminalUI<R, W> {
    pub const fn new(input: R, output: W, plain: bool) -> Self {
        Self {
            input,
            output,
            plain,
        }
    }

    /// Draw the board along with the current selection
    pub fn draw<B: Board>(
        &mut self,
        board: &B,
        selected: Option<BoardSquare>,
        highlights: &[BoardSquare],
    ) -> io::Result<()> {
        let picture = render(board, selected, highlights, self.plain);
        self.output.write_all(picture.as_bytes())?;
        self.output.flush()
    }

    /// Show a line of text below the board
    pub fn message(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Wait for the next command
    ///
    /// Lines that can't be understood are reported and asked for again. Returns `Ok(None)` once
    /// the input is exhausted.
    pub fn next_command(&mut self) -> io::Result<Option<Command>> {
        let mut buffer = String::new();
        loop {
            write!(self.output, "Touch a square (e.g. e2), or `quit`: ")?;
            self.output.flush()?;
            buffer.clear();
            if self.input.read_line(&mut buffer)? == 0 {
                return Ok(None);
            }
            match parse_command(&buffer) {
                Ok(Some(command)) => {
                    debug!(?command, "read command");
                    return Ok(Some(command));
                }
                Ok(None) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Give back the output, so tests can look at what was drawn
    pub fn into_output(self) -> W {
        self.output
    }
}
