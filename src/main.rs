use crate::config::Config;
use crate::router::respond;
use crate::state::AppState;
use astra::Server;
use clap::Parser;
use log::{error, info};

mod catalog;
mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod reviews;
mod router;
mod state;
mod store;
mod templates;


fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();

    let state = match AppState::from_config(&cfg) {
        Ok(state) => state,
        Err(e) => {
            error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    info!("Starting server at http://{}", cfg.bind);
    let server = Server::bind(cfg.bind).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
