//! Line input and transient output for interactive prompts.
//!
//! Most commands answer with a single response string, but some need to talk
//! to the player while they run: the combat loop, yes/no offers, travel menus
//! and the memorization puzzle. They do so through a [`Console`].
//!
//! The quick-time dodge is the only read with a deadline. [`ChannelConsole`]
//! implements it with a reader thread feeding a channel and
//! `recv_timeout`, so a missed prompt never blocks past its window. Lines
//! typed before a window opens are discarded, so a late answer to one
//! prompt never lands in the next.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Interactive I/O used while a command runs.
pub trait Console {
    /// Print a line immediately.
    fn show(&mut self, text: &str);

    /// Show tokens one at a time, then erase them.
    fn flash(&mut self, tokens: &[String], pace: Duration);

    /// Block for the next line. `None` when input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    /// Wait at most `timeout` for the next line. `None` on timeout or when
    /// input is exhausted.
    fn read_line_timeout(&mut self, timeout: Duration) -> Option<String>;
}

/// A console over any line source, with stdout for output.
pub struct ChannelConsole {
    lines: Receiver<String>,
}

impl ChannelConsole {
    /// Read lines from stdin on a background thread.
    pub fn stdin() -> Self {
        Self::spawn(io::BufReader::new(io::stdin()))
    }

    /// Read lines from `reader` on a background thread.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }
}

impl Console for ChannelConsole {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn flash(&mut self, tokens: &[String], pace: Duration) {
        let mut stdout = io::stdout();
        for token in tokens {
            let _ = write!(stdout, "{token} ");
            let _ = stdout.flush();
            thread::sleep(pace);
        }
        let width = tokens.iter().map(|t| t.len() + 1).sum::<usize>().max(20);
        let _ = write!(stdout, "\r{}\r", " ".repeat(width));
        let _ = stdout.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let _ = io::stdout().flush();
        self.lines.recv().ok()
    }

    fn read_line_timeout(&mut self, timeout: Duration) -> Option<String> {
        let _ = io::stdout().flush();
        while self.lines.try_recv().is_ok() {}
        match self.lines.recv_timeout(timeout) {
            Ok(line) => Some(line),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scripted {
    Line(String),
    Timeout,
    Recall,
}

/// Shared log of everything a [`ScriptedConsole`] printed.
pub type Transcript = Rc<RefCell<Vec<String>>>;

/// A console fed from a script, for tests and replays.
///
/// Answers are consumed in order. A scripted timeout makes the next timed read
/// miss its window; a recall answers with whatever was last flashed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    script: VecDeque<Scripted>,
    flashed: Vec<String>,
    transcript: Transcript,
}

impl ScriptedConsole {
    /// A console answering with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut console = Self::default();
        for line in lines {
            console.script.push_back(Scripted::Line(line.into()));
        }
        console
    }

    /// Queue a line.
    pub fn then_line(mut self, line: impl Into<String>) -> Self {
        self.script.push_back(Scripted::Line(line.into()));
        self
    }

    /// Queue a missed quick-time window.
    pub fn then_timeout(mut self) -> Self {
        self.script.push_back(Scripted::Timeout);
        self
    }

    /// Queue an answer repeating the last flashed sequence.
    pub fn then_recall(mut self) -> Self {
        self.script.push_back(Scripted::Recall);
        self
    }

    /// Handle to the printed output, usable after the console is boxed.
    pub fn transcript(&self) -> Transcript {
        Rc::clone(&self.transcript)
    }

    fn next(&mut self) -> Option<Scripted> {
        self.script.pop_front()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) {
        self.transcript.borrow_mut().push(text.to_string());
    }

    fn flash(&mut self, tokens: &[String], _pace: Duration) {
        self.flashed = tokens.to_vec();
        self.transcript.borrow_mut().push(tokens.join(" "));
    }

    fn read_line(&mut self) -> Option<String> {
        match self.next()? {
            Scripted::Line(line) => Some(line),
            Scripted::Recall => Some(self.flashed.join(" ")),
            Scripted::Timeout => None,
        }
    }

    fn read_line_timeout(&mut self, _timeout: Duration) -> Option<String> {
        self.read_line()
    }
}
