// Entrypoint for the demo.
// - Keeps `main` small: load config, build the HTTP client, hand both to
//   the menu loop with a terminal console.
// - Returns `anyhow::Result` so a lost console ends the process non-zero.

use anyhow::Context;
use api_query_demo::{
    api::ApiClient, config::Config, console::TerminalConsole, logging, routines::Demo,
    ui::main_menu,
};

fn main() -> anyhow::Result<()> {
    logging::init().context("Failed to initialise logger")?;

    // Endpoints and timeout come from `API_DEMO_*` variables, defaulting to
    // the public services. See `Config::from_env`.
    let config = Config::from_env()?;
    let api = ApiClient::from_config(&config)?;
    let demo = Demo::new(&api, &config.endpoints);

    // Blocks until the operator picks "Exit" or closes input.
    let mut console = TerminalConsole::new();
    main_menu(&mut console, &demo).context("Console session failed")?;
    Ok(())
}
