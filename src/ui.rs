// Menu dispatcher: a two-state machine (running / exiting) that reads a
// choice, runs the selected routine behind a single error boundary and
// loops. Routines never feed anything back into the dispatcher.

use crate::console::Console;
use crate::error::DemoError;
use crate::routines::{Demo, Routine};
use log::{debug, warn};

const RULE_WIDTH: usize = 40;

const MENU: [&str; 8] = [
    "",
    "Choose an option:",
    "1. Look up user info",
    "2. Search posts by user",
    "3. Check crypto price",
    "4. Check city weather",
    "5. Search todos",
    "6. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Routine),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "1" => MenuChoice::Run(Routine::UserLookup),
            "2" => MenuChoice::Run(Routine::PostSearch),
            "3" => MenuChoice::Run(Routine::CryptoPrice),
            "4" => MenuChoice::Run(Routine::Weather),
            "5" => MenuChoice::Run(Routine::TodoSearch),
            "6" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Error boundary shared by every routine. Expected outcomes print their own
/// message, remote faults print a generic one, and only console failures
/// escape to the caller.
pub fn run_guarded<F>(console: &mut dyn Console, routine: F) -> Result<(), DemoError>
where
    F: FnOnce(&mut dyn Console) -> Result<(), DemoError>,
{
    match routine(&mut *console) {
        Ok(()) => Ok(()),
        Err(err) if err.is_expected() => {
            for line in err.to_string().split('\n') {
                console.write_line(line)?;
            }
            Ok(())
        }
        Err(err) if err.is_recoverable() => {
            warn!("routine failed: {err}");
            console.write_line(&format!("An error occurred: {err}"))?;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Show the menu once, read a choice and act on it.
pub fn step(console: &mut dyn Console, demo: &Demo<'_>) -> Result<MenuState, DemoError> {
    for line in MENU {
        console.write_line(line)?;
    }
    console.write_line("")?;

    let Some(token) = console.read_line("Enter choice (1-6)")? else {
        debug!("input closed at the menu prompt");
        return Ok(MenuState::Exiting);
    };

    match MenuChoice::parse(&token) {
        MenuChoice::Run(routine) => {
            run_guarded(console, |console| demo.run(routine, console))?;
            Ok(MenuState::Running)
        }
        MenuChoice::Exit => {
            console.write_line("")?;
            console.write_line("Goodbye!")?;
            Ok(MenuState::Exiting)
        }
        MenuChoice::Invalid => {
            console.write_line("Invalid choice. Please try again.")?;
            Ok(MenuState::Running)
        }
    }
}

/// Print the banner and run the menu until the operator exits.
pub fn main_menu(console: &mut dyn Console, demo: &Demo<'_>) -> Result<(), DemoError> {
    let rule = "=".repeat(RULE_WIDTH);
    console.write_line(&rule)?;
    console.write_line("  Dynamic API Query Demo")?;
    console.write_line(&rule)?;

    let mut state = MenuState::Running;
    while state == MenuState::Running {
        state = step(console, demo)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use std::io;

    #[test]
    fn menu_tokens() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Run(Routine::UserLookup));
        assert_eq!(MenuChoice::parse(" 4 "), MenuChoice::Run(Routine::Weather));
        assert_eq!(MenuChoice::parse("5"), MenuChoice::Run(Routine::TodoSearch));
        assert_eq!(MenuChoice::parse("6"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("7"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("exit"), MenuChoice::Invalid);
    }

    #[test]
    fn boundary_prints_expected_messages_verbatim() {
        let mut console = ScriptedConsole::default();
        run_guarded(&mut console, |_| {
            Err(DemoError::NotFound("\nCoin 'x' not found!\nTry: y".into()))
        })
        .unwrap();
        assert_eq!(console.transcript(), ["", "Coin 'x' not found!", "Try: y"]);
    }

    #[test]
    fn boundary_reports_remote_faults_generically() {
        let mut console = ScriptedConsole::default();
        run_guarded(&mut console, |_| Err(DemoError::MissingField("email".into()))).unwrap();
        assert_eq!(
            console.transcript(),
            ["An error occurred: missing field `email` in response"]
        );
    }

    #[test]
    fn boundary_lets_console_failures_through() {
        let mut console = ScriptedConsole::default();
        let err = run_guarded(&mut console, |_| {
            Err(DemoError::Console(io::Error::new(io::ErrorKind::BrokenPipe, "closed")))
        })
        .unwrap_err();
        assert!(matches!(err, DemoError::Console(_)));
        assert!(console.transcript().is_empty());
    }
}
