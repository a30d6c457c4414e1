use api_query_demo::api::{HttpGet, QueryResult};
use api_query_demo::config::Endpoints;
use api_query_demo::console::ScriptedConsole;
use api_query_demo::query::QueryRequest;
use api_query_demo::routines::Demo;
use api_query_demo::ui::main_menu;
use api_query_demo::DemoError;
use serde_json::Value;
use std::cell::RefCell;

pub const BASE: &str = "http://mock.test";

enum Reply {
    Json(u16, Value),
    Fail(String),
}

/// Transport double: answers by URL path and records every request.
/// Unrouted paths get a 404 with an empty JSON object.
#[derive(Default)]
pub struct FakeHttp {
    routes: Vec<(String, Reply)>,
    calls: RefCell<Vec<QueryRequest>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, path: &str, status: u16, body: Value) -> Self {
        self.routes.push((format!("{BASE}{path}"), Reply::Json(status, body)));
        self
    }

    pub fn failing(mut self, path: &str, message: &str) -> Self {
        self.routes
            .push((format!("{BASE}{path}"), Reply::Fail(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<QueryRequest> {
        self.calls.borrow().clone()
    }
}

impl HttpGet for FakeHttp {
    fn get(&self, request: &QueryRequest) -> Result<QueryResult, DemoError> {
        self.calls.borrow_mut().push(request.clone());
        match self.routes.iter().find(|(url, _)| *url == request.url) {
            Some((_, Reply::Json(status, body))) => Ok(QueryResult::new(*status, body.clone())),
            Some((_, Reply::Fail(message))) => Err(DemoError::Transport {
                url: request.url.clone(),
                source: message.clone().into(),
            }),
            None => Ok(QueryResult::new(404, Value::Object(Default::default()))),
        }
    }
}

/// Drive the whole menu with `answers` and return the console afterwards.
pub fn run_menu(http: &FakeHttp, answers: &[&str]) -> (Result<(), DemoError>, ScriptedConsole) {
    let endpoints = Endpoints::all_at(BASE);
    let demo = Demo::new(http, &endpoints);
    let mut console = ScriptedConsole::new(answers.iter().copied());
    let outcome = main_menu(&mut console, &demo);
    (outcome, console)
}

/// The part of the transcript between the routine's first line and the next
/// menu, i.e. what the selected routine printed.
pub fn routine_output(console: &ScriptedConsole) -> Vec<String> {
    let lines = console.transcript();
    let start = lines
        .iter()
        .position(|l| l.starts_with("Enter choice (1-6): "))
        .expect("menu prompt")
        + 1;
    let end = lines[start..]
        .iter()
        .position(|l| l == "Choose an option:")
        .map(|i| start + i - 1)
        .unwrap_or(lines.len());
    lines[start..end].to_vec()
}
