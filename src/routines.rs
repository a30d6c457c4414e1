// The five demo routines. Each one prints its section header, reads one
// answer, validates it, performs one request (two for the weather) and
// prints what came back.
//
// Expected failures are returned as `DemoError::InvalidInput` or
// `DemoError::NotFound` carrying the operator-facing text; printing them is
// left to the error boundary in `ui`, like every other fault.

use crate::api::HttpGet;
use crate::config::Endpoints;
use crate::console::Console;
use crate::error::DemoError;
use crate::{query, render, validate};
use log::debug;

pub const INVALID_USER_ID: &str = "\nError: Please enter a valid numeric user ID.";
pub const NO_POSTS: &str = "No posts found for this user.";
pub const KNOWN_COINS: &str = "btc-bitcoin, eth-ethereum, doge-dogecoin";
pub const EMPTY_CITY: &str = "City name cannot be empty.";
pub const INVALID_YES_NO: &str = "Invalid input. Please enter 'y' or 'n'.";
pub const NO_TODOS: &str = "No todos found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    UserLookup,
    PostSearch,
    CryptoPrice,
    Weather,
    TodoSearch,
}

/// Read one answer; a closed input stream aborts the routine.
fn ask(console: &mut dyn Console, prompt: &str) -> Result<String, DemoError> {
    console.read_line(prompt)?.ok_or(DemoError::InputClosed)
}

/// Everything a routine needs besides the console.
pub struct Demo<'a> {
    http: &'a dyn HttpGet,
    endpoints: &'a Endpoints,
}

impl<'a> Demo<'a> {
    pub fn new(http: &'a dyn HttpGet, endpoints: &'a Endpoints) -> Self {
        Demo { http, endpoints }
    }

    pub fn run(&self, routine: Routine, console: &mut dyn Console) -> Result<(), DemoError> {
        debug!("running {routine:?}");
        match routine {
            Routine::UserLookup => self.user_lookup(console),
            Routine::PostSearch => self.post_search(console),
            Routine::CryptoPrice => self.crypto_price(console),
            Routine::Weather => self.weather(console),
            Routine::TodoSearch => self.todo_search(console),
        }
    }

    pub fn user_lookup(&self, console: &mut dyn Console) -> Result<(), DemoError> {
        console.write_line("=== User Information Lookup ===")?;
        console.write_line("")?;

        let id = ask(console, "Enter user ID (1-10)")?;
        if !validate::is_numeric_id(&id) {
            return Err(DemoError::InvalidInput(INVALID_USER_ID.into()));
        }

        let result = self.http.get(&query::user(self.endpoints, &id)?)?;
        if !result.is_ok() {
            return Err(DemoError::NotFound(format!("\nUser with ID {id} not found!")));
        }
        console.write_lines(&render::user(&id, result.json()?)?)?;
        Ok(())
    }

    pub fn post_search(&self, console: &mut dyn Console) -> Result<(), DemoError> {
        console.write_line("")?;
        console.write_line("=== Post Search ===")?;
        console.write_line("")?;

        let id = ask(console, "Enter user ID to see their posts (1-10)")?;
        if !validate::is_numeric_id(&id) {
            return Err(DemoError::InvalidInput(INVALID_USER_ID.into()));
        }

        let result = self.http.get(&query::posts_by_user(self.endpoints, &id)?)?;
        if !result.is_ok() {
            return Err(DemoError::NotFound(NO_POSTS.into()));
        }
        let lines = render::posts(&id, result.json()?)?;
        if lines.is_empty() {
            return Err(DemoError::NotFound(NO_POSTS.into()));
        }
        console.write_lines(&lines)?;
        Ok(())
    }

    pub fn crypto_price(&self, console: &mut dyn Console) -> Result<(), DemoError> {
        console.write_line("")?;
        console.write_line("=== Cryptocurrency Price Checker ===")?;
        console.write_line("")?;
        console.write_line(&format!("Available coins: {KNOWN_COINS}"))?;

        let coin = ask(console, "Enter coin ID (e.g., btc-bitcoin)")?
            .to_lowercase()
            .trim()
            .to_string();

        let result = self.http.get(&query::ticker(self.endpoints, &coin)?)?;
        if !result.is_ok() {
            return Err(DemoError::NotFound(format!(
                "\nCoin '{coin}' not found!\nTry: {KNOWN_COINS}"
            )));
        }
        console.write_lines(&render::ticker(result.json()?)?)?;
        Ok(())
    }

    /// Geocode the city, then fetch its current weather. The forecast is
    /// only requested once a location is known.
    pub fn weather(&self, console: &mut dyn Console) -> Result<(), DemoError> {
        console.write_line("")?;
        console.write_line("=== Weather Checker ===")?;
        console.write_line("")?;

        let answer = ask(console, "Enter city name (e.g., London, Tokyo)")?;
        let city = validate::non_empty(&answer)
            .ok_or_else(|| DemoError::InvalidInput(EMPTY_CITY.into()))?;

        let geo = self.http.get(&query::geocode(self.endpoints, city)?)?;
        let location = render::location(geo.json()?)?
            .ok_or_else(|| DemoError::NotFound(format!("City '{city}' not found.")))?;
        console.write_line(&render::found(&location))?;

        let forecast = self.http.get(&query::forecast(
            self.endpoints,
            &location.latitude,
            &location.longitude,
        )?)?;
        console.write_lines(&render::weather(&location.name, forecast.json()?)?)?;
        Ok(())
    }

    pub fn todo_search(&self, console: &mut dyn Console) -> Result<(), DemoError> {
        console.write_line("")?;
        console.write_line("=== Todo Search ===")?;
        console.write_line("")?;

        let answer = ask(console, "Search for completed todos? (y/n)")?;
        let completed = validate::parse_yes_no(&answer)
            .ok_or_else(|| DemoError::InvalidInput(INVALID_YES_NO.into()))?;

        let result = self.http.get(&query::todos(self.endpoints, completed)?)?;
        if !result.is_ok() {
            return Err(DemoError::NotFound(NO_TODOS.into()));
        }
        let lines = render::todos(completed, result.json()?)?;
        if lines.is_empty() {
            return Err(DemoError::NotFound(NO_TODOS.into()));
        }
        console.write_lines(&lines)?;
        Ok(())
    }
}
