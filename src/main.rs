// src/main.rs

mod cli;
mod commands;
mod db;
mod error;
mod models;

use clap::Parser;
use cli::{Cli, Commands};
use db::Store;
use error::Result;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = Store::open_default()?;

    match cli.command {
        Commands::Add {
            message,
            category,
            important,
        } => commands::handle_add(&store, message, &category, important),
        Commands::List {
            after,
            before,
            filter,
        } => commands::handle_list(&store, after, before, filter),
        Commands::Clear { force } => commands::handle_clear(&store, force),
    }
}
