mod colors;
mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::{BoardGeometry, TicTacToeGameState};
use common::{log, logger};

use config::{get_config_manager, get_config_path};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tic_tac_toe")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Log every move and ignored click
    #[arg(long)]
    verbose: bool,

    /// Path to the YAML config; defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.unwrap_or_else(get_config_path);
    let config = get_config_manager(&config_path).get_or_create_config()?;
    log!("Loaded config from {}", config_path.display());

    let settings = &config.tictactoe;
    let game = TicTacToeGameState::from_settings(settings)?;
    let geometry = BoardGeometry::for_window(
        settings.board_size,
        config.window.width,
        config.window.height,
    )?;

    log!(
        "Starting {size}x{size} game: {} (X) vs {} (O)",
        settings.player_x_name,
        settings.player_o_name,
        size = settings.board_size,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(false)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(game, geometry)))),
    )?;

    log!("Window closed");
    Ok(())
}
