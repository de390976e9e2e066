//! Console abstraction
//!
//! The play loop only talks to a [`Console`], so it can run against the real
//! terminal or an in-memory script.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, BufReader, Stdout, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Line-oriented terminal I/O
pub trait Console {
    /// Show `prompt` and read one line without its trailing newline
    ///
    /// Returns `Ok(None)` once the input stream is closed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying stream, including
    /// [`io::ErrorKind::Interrupted`] when the player presses Ctrl-C.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write `text` followed by a newline
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen and scrollback
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    fn clear(&mut self) -> io::Result<()>;
}

/// Something that happened on the input side
#[derive(Debug)]
pub enum InputEvent {
    Line(String),
    /// End of input
    Closed,
    /// SIGINT (Ctrl-C)
    Interrupted,
    Failed(io::Error),
}

/// Read lines from `reader` on a background thread
///
/// Stops after end of input, a read error, or once the receiver is gone.
pub fn spawn_line_reader<R>(mut reader: R, events: Sender<InputEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        loop {
            let mut line = String::new();
            let event = match reader.read_line(&mut line) {
                Ok(0) => InputEvent::Closed,
                Ok(_) => {
                    let len = line.trim_end_matches(['\r', '\n']).len();
                    line.truncate(len);
                    InputEvent::Line(line)
                }
                Err(e) => InputEvent::Failed(e),
            };

            let last = !matches!(event, InputEvent::Line(_));
            if events.send(event).is_err() || last {
                break;
            }
        }
    })
}

/// Console fed by an [`InputEvent`] channel
///
/// Lines and Ctrl-C arrive on the same channel, so an interrupt ends the
/// pending read right away instead of waiting for Enter.
#[derive(Debug)]
pub struct TerminalConsole<W: Write = Stdout> {
    events: Receiver<InputEvent>,
    out: W,
}

impl TerminalConsole<Stdout> {
    /// Wire up stdin, stdout and a Ctrl-C handler
    ///
    /// # Errors
    ///
    /// Returns an error if the Ctrl-C handler cannot be installed (for example
    /// because one already exists in this process).
    pub fn stdio() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        let interrupts = tx.clone();
        ctrlc::set_handler(move || {
            let _ = interrupts.send(InputEvent::Interrupted);
        })
        .map_err(io::Error::other)?;

        spawn_line_reader(BufReader::new(io::stdin()), tx);
        Ok(Self::from_events(rx, io::stdout()))
    }
}

impl<W: Write> TerminalConsole<W> {
    #[must_use]
    pub fn from_events(events: Receiver<InputEvent>, out: W) -> Self {
        Self { events, out }
    }

    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(Some(line)),
            Ok(InputEvent::Closed) | Err(_) => Ok(None),
            Ok(InputEvent::Interrupted) => {
                writeln!(self.out)?;
                Err(io::ErrorKind::Interrupted.into())
            }
            Ok(InputEvent::Failed(e)) => Err(e),
        }
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::All),
            Clear(ClearType::Purge)
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// One scripted response to `read_line`
    pub(crate) enum Scripted {
        Line(&'static str),
        Interrupt,
    }

    /// In-memory console; reports end of input once the script runs out
    #[derive(Default)]
    pub(crate) struct ScriptedConsole {
        script: VecDeque<Scripted>,
        pub(crate) output: Vec<String>,
        pub(crate) prompts: usize,
        pub(crate) clears: usize,
    }

    impl ScriptedConsole {
        pub(crate) fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
            Self {
                script: script.into_iter().collect(),
                ..Self::default()
            }
        }

        pub(crate) fn lines(lines: &[&'static str]) -> Self {
            Self::new(lines.iter().map(|&l| Scripted::Line(l)))
        }

        pub(crate) fn transcript(&self) -> String {
            self.output.join("\n")
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            self.prompts += 1;
            match self.script.pop_front() {
                Some(Scripted::Line(line)) => Ok(Some(line.to_string())),
                Some(Scripted::Interrupt) => Err(io::ErrorKind::Interrupted.into()),
                None => Ok(None),
            }
        }

        fn write_line(&mut self, text: &str) -> io::Result<()> {
            self.output.push(text.to_string());
            Ok(())
        }

        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }
    }

    #[test]
    fn scripted_console_reports_eof_after_script() {
        let mut console = ScriptedConsole::new([Scripted::Line("a"), Scripted::Interrupt]);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("a"));
        assert_eq!(
            console.read_line("> ").unwrap_err().kind(),
            io::ErrorKind::Interrupted
        );
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.prompts, 3);
    }

    /// Terminal console with a pre-filled event queue and in-memory output
    pub(crate) fn terminal(events: Vec<InputEvent>) -> TerminalConsole<Vec<u8>> {
        let (tx, rx) = mpsc::channel();
        for event in events {
            tx.send(event).unwrap();
        }
        TerminalConsole::from_events(rx, Vec::new())
    }

    #[test]
    fn terminal_console_reports_ctrl_c_as_interrupted() {
        let mut console = terminal(vec![InputEvent::Interrupted, InputEvent::Line("a".into())]);

        let err = console.read_line("Your input: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
        assert_eq!(console.read_line("Your input: ").unwrap().as_deref(), Some("a"));
        assert!(String::from_utf8_lossy(console.writer()).starts_with("Your input: \n"));
    }

    #[test]
    fn terminal_console_eof_when_channel_closes() {
        let mut console = terminal(Vec::new());
        assert_eq!(console.read_line("> ").unwrap(), None);

        let mut console = terminal(vec![InputEvent::Closed]);
        assert_eq!(console.read_line("> ").unwrap(), None);
    }

    #[test]
    fn line_reader_strips_newlines_and_reports_close() {
        let (tx, rx) = mpsc::channel();
        spawn_line_reader(io::Cursor::new("a\r\nbc\n\n"), tx).join().unwrap();

        let events: Vec<InputEvent> = rx.iter().collect();
        assert!(matches!(&events[0], InputEvent::Line(l) if l == "a"));
        assert!(matches!(&events[1], InputEvent::Line(l) if l == "bc"));
        assert!(matches!(&events[2], InputEvent::Line(l) if l.is_empty()));
        assert!(matches!(events[3], InputEvent::Closed));
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn line_reader_feeds_terminal_console() {
        let (tx, rx) = mpsc::channel();
        spawn_line_reader(io::Cursor::new("q\n"), tx);
        let mut console = TerminalConsole::from_events(rx, Vec::new());

        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("q"));
        assert_eq!(console.read_line("> ").unwrap(), None);
    }
}
