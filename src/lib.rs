// Library root
// -----------
// This crate exposes the pieces of the interactive API query demo. The
// binary (`main.rs`) wires them to the real terminal and network.
//
// Module responsibilities:
// - `console`: reading answers and printing lines (terminal or scripted).
// - `validate`: predicates for operator input.
// - `query`: builds the URL and parameters of every outbound call.
// - `api`: executes a query as one blocking GET.
// - `render`: turns JSON responses into output lines.
// - `routines`: the five demos (users, posts, crypto, weather, todos).
// - `ui`: the menu loop and the error boundary around each routine.
// - `config`, `error`, `logging`: ambient plumbing.
pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod query;
pub mod render;
pub mod routines;
pub mod ui;
pub mod validate;

pub use error::DemoError;
