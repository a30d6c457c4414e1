// Response rendering. Remote payloads are decoded into models whose fields
// are all optional, so a key the service dropped surfaces as
// `DemoError::MissingField` rather than a panic. Every function here is
// pure and returns the lines to print.

use crate::error::DemoError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::HashMap;

/// Shown in place of a weather reading the forecast did not include.
pub const NOT_AVAILABLE: &str = "N/A";

/// How many todos the todo search prints.
pub const TODO_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct User {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    website: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Titled {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Ticker {
    name: Option<String>,
    symbol: Option<String>,
    quotes: Option<HashMap<String, Quote>>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    price: Option<f64>,
    percent_change_24h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GeoSearch {
    results: Option<Vec<Place>>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: Option<String>,
    country: Option<String>,
    latitude: Option<Number>,
    longitude: Option<Number>,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: Option<Number>,
    windspeed: Option<Number>,
}

/// First geocoding match, ready to feed the forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    /// Empty when the geocoder did not report one.
    pub country: String,
    pub latitude: String,
    pub longitude: String,
}

fn decode<T: DeserializeOwned>(body: &Value) -> Result<T, DemoError> {
    T::deserialize(body).map_err(DemoError::decode)
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, DemoError> {
    value.ok_or_else(|| DemoError::MissingField(field.to_string()))
}

fn numbered(titles: Vec<Titled>, limit: usize) -> Result<Vec<String>, DemoError> {
    titles
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, item)| Ok(format!("{}. {}", i + 1, required(item.title, "title")?)))
        .collect()
}

pub fn user(id: &str, body: &Value) -> Result<Vec<String>, DemoError> {
    let user: User = decode(body)?;
    Ok(vec![
        String::new(),
        format!("--- User #{id} Info ---"),
        format!("Name: {}", required(user.name, "name")?),
        format!("Email: {}", required(user.email, "email")?),
        format!("Phone: {}", required(user.phone, "phone")?),
        format!("Website: {}", required(user.website, "website")?),
    ])
}

/// Numbered post titles. Returns no lines at all for an empty list so the
/// caller can report "nothing found" instead of a bare header.
pub fn posts(id: &str, body: &Value) -> Result<Vec<String>, DemoError> {
    let posts: Vec<Titled> = decode(body)?;
    if posts.is_empty() {
        return Ok(Vec::new());
    }
    let mut lines = vec![String::new(), format!("--- Posts by User #{id} ---")];
    lines.extend(numbered(posts, usize::MAX)?);
    Ok(lines)
}

pub fn ticker(body: &Value) -> Result<Vec<String>, DemoError> {
    let ticker: Ticker = decode(body)?;
    let mut quotes = required(ticker.quotes, "quotes")?;
    let usd = required(quotes.remove("USD"), "quotes.USD")?;
    let price = required(usd.price, "quotes.USD.price")?;
    let change = required(usd.percent_change_24h, "quotes.USD.percent_change_24h")?;
    Ok(vec![
        String::new(),
        format!(
            "--- {} ({}) ---",
            required(ticker.name, "name")?,
            required(ticker.symbol, "symbol")?
        ),
        format!("Price: {}", format_usd(price)),
        format!("24h Change: {}", format_signed_percent(change)),
    ])
}

/// The first geocoding match, or `None` when the search came back without
/// results.
pub fn location(body: &Value) -> Result<Option<Location>, DemoError> {
    let search: GeoSearch = decode(body)?;
    let Some(place) = search.results.and_then(|r| r.into_iter().next()) else {
        return Ok(None);
    };
    Ok(Some(Location {
        latitude: required(place.latitude, "results[0].latitude")?.to_string(),
        longitude: required(place.longitude, "results[0].longitude")?.to_string(),
        name: required(place.name, "results[0].name")?,
        country: place.country.unwrap_or_default(),
    }))
}

pub fn found(location: &Location) -> String {
    format!("Found: {}, {}", location.name, location.country)
}

/// Current conditions. Readings the forecast omitted print as `N/A`.
pub fn weather(place: &str, body: &Value) -> Result<Vec<String>, DemoError> {
    let forecast: Forecast = decode(body)?;
    let (temperature, windspeed) = match forecast.current_weather {
        Some(current) => (reading(current.temperature), reading(current.windspeed)),
        None => (reading(None), reading(None)),
    };
    Ok(vec![
        String::new(),
        format!("--- Weather in {place} ---"),
        format!("Temperature: {temperature}°C"),
        format!("Wind Speed: {windspeed} km/h"),
    ])
}

fn reading(value: Option<Number>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string())
}

/// At most `TODO_LIMIT` numbered titles; no lines for an empty list.
/// Entries past the limit are never decoded.
pub fn todos(completed: bool, body: &Value) -> Result<Vec<String>, DemoError> {
    let all: Vec<Value> = decode(body)?;
    if all.is_empty() {
        return Ok(Vec::new());
    }
    let todos = all
        .iter()
        .take(TODO_LIMIT)
        .map(decode::<Titled>)
        .collect::<Result<Vec<_>, _>>()?;
    let status = if completed { "Completed" } else { "Incomplete" };
    let mut lines = vec![String::new(), format!("--- {status} Todos (First {TODO_LIMIT}) ---")];
    lines.extend(numbered(todos, TODO_LIMIT)?);
    Ok(lines)
}

/// Dollar amount with two decimals and comma thousands separators,
/// e.g. `45000.256` -> `$45,000.26`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    let fixed = format!("{amount:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${sign}{grouped}.{frac}")
}

/// Percentage with two decimals and an explicit sign, e.g. `-3.40%`.
pub fn format_signed_percent(value: f64) -> String {
    format!("{value:+.2}%")
}
