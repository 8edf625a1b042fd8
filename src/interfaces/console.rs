use crate::domain::payment::{Confirmation, Provider};
use colored::{Color, Colorize};
use std::io::{self, BufRead, Write};

/// Colour a line of output should be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Cyan,
    Magenta,
    Red,
    Green,
}

impl Tone {
    pub fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::PayPal => Tone::Cyan,
            Provider::Stripe => Tone::Magenta,
            Provider::Kaspi => Tone::Red,
            Provider::Halyk => Tone::Green,
        }
    }

    fn color(&self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Cyan => Some(Color::Cyan),
            Tone::Magenta => Some(Color::Magenta),
            Tone::Red => Some(Color::Red),
            Tone::Green => Some(Color::Green),
        }
    }
}

/// Line-oriented dialogue with the user.
///
/// The flows only talk through this trait so tests can drive them with
/// in-memory buffers instead of a real terminal.
pub trait Console {
    /// Prints `text` without a newline and reads one line of input.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, text: &str) -> io::Result<()>;

    fn write_toned(&mut self, text: &str, tone: Tone) -> io::Result<()>;

    fn show_confirmation(&mut self, confirmation: &Confirmation) -> io::Result<()> {
        self.write_toned(
            &confirmation.message,
            Tone::for_provider(confirmation.provider),
        )
    }
}

/// A [`Console`] over any buffered reader and writer.
///
/// Whether ANSI colour codes are actually emitted is decided globally by
/// `colored::control`.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when stdin closes mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn write_toned(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        match tone.color() {
            Some(color) => writeln!(self.output, "{}", text.color(color)),
            None => writeln!(self.output, "{text}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &str) -> Terminal<&[u8], Vec<u8>> {
        Terminal::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_prompt_reads_lines_then_eof() {
        let mut term = terminal("42\r\nhello\n");
        assert_eq!(term.prompt("a: ").unwrap().as_deref(), Some("42"));
        assert_eq!(term.prompt("b: ").unwrap().as_deref(), Some("hello"));
        assert_eq!(term.prompt("c: ").unwrap(), None);

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output, "a: b: c: \n");
    }

    #[test]
    fn test_tones_for_providers() {
        assert_eq!(Tone::for_provider(Provider::PayPal), Tone::Cyan);
        assert_eq!(Tone::for_provider(Provider::Stripe), Tone::Magenta);
        assert_eq!(Tone::for_provider(Provider::Kaspi), Tone::Red);
        assert_eq!(Tone::for_provider(Provider::Halyk), Tone::Green);
    }

    #[test]
    fn test_colored_output_is_reset() {
        colored::control::set_override(true);
        let mut term = terminal("");
        term.write_toned("Kaspi", Tone::Red).unwrap();
        let output = String::from_utf8(term.into_output()).unwrap();
        assert!(output.starts_with("\u{1b}[31m"));
        assert!(output.ends_with("\u{1b}[0m\n"));
    }
}
