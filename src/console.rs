// Console abstraction: the menu and the routines only ever read a line or
// write a line through this trait, so the whole program can be driven
// from a script in tests.

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

pub trait Console {
    /// Show `prompt` and return the line the operator typed, without its line
    /// terminator and otherwise untouched. `Ok(None)` means input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

/// Console on the process's stdin/stdout. Interactive sessions get
/// `dialoguer` prompts; piped input is read line by line so end of input
/// can be detected.
pub struct TerminalConsole {
    interactive: bool,
    colored: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole {
            interactive: io::stdin().is_terminal(),
            colored: io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn is_heading(line: &str) -> bool {
    line.starts_with("===") || line.starts_with("---")
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.interactive {
            // allow_empty: a blank answer is the routine's to reject, not ours.
            let line: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(Some(line));
        }

        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(|c| c == '\r' || c == '\n').len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        if self.colored && is_heading(line) {
            crossterm::execute!(
                stdout,
                SetForegroundColor(Color::Cyan),
                Print(line),
                ResetColor,
                Print("\n")
            )
        } else {
            writeln!(stdout, "{line}")
        }
    }
}

/// In-memory console fed from a fixed list of answers. Records every prompt
/// (as `"<prompt>: <answer>"`) and every written line in one transcript.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Transcript joined with newlines, as it would appear on screen.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer = self.answers.pop_front();
        match &answer {
            Some(text) => self.transcript.push(format!("{prompt}: {text}")),
            None => self.transcript.push(format!("{prompt}: ")),
        }
        Ok(answer)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_answers_in_order() {
        let mut console = ScriptedConsole::new(["1", " two "]);
        assert_eq!(console.read_line("First").unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line("Second").unwrap().as_deref(), Some(" two "));
        assert_eq!(console.read_line("Third").unwrap(), None);
        assert_eq!(console.transcript(), ["First: 1", "Second:  two ", "Third: "]);
    }

    #[test]
    fn write_lines_keeps_blank_lines() {
        let mut console = ScriptedConsole::default();
        console
            .write_lines(&[String::new(), "--- Header ---".to_string()])
            .unwrap();
        assert_eq!(console.output(), "\n--- Header ---");
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn headings_are_detected_by_prefix() {
        assert!(is_heading("=== Weather Checker ==="));
        assert!(is_heading("--- Weather in Oslo ---"));
        assert!(!is_heading("Found: Oslo, Norway"));
    }
}
