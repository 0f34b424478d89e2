mod common;
mod config;
mod ui;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use ui::ChatApp;

#[derive(Parser)]
#[command(name = "kotix", version, about = "Kotix messenger UI mock-up")]
struct Cli {
    /// Path to JSON seed config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Write the default seed data to the config path and exit (no UI)
    DumpSeed,
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();

    if cli.mode == Some(Mode::DumpSeed) {
        let seed = config::AppConfig::default();
        match config::save_config(&cli.config, &seed) {
            Ok(()) => log::info!("Wrote default seed config to {}", cli.config),
            Err(err) => log::error!("Failed to write seed config {}: {err}", cli.config),
        }
        return Ok(());
    }

    let seed = config::load_config(&cli.config);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Kotix",
        options,
        Box::new(move |cc| {
            log::info!("Client started with {} seed chats", seed.chats.len());

            Ok(Box::new(ChatApp::new(cc, seed)))
        }),
    )
}
