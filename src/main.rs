use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::*;
use rect_shooter::audio::AudioManager;
use rect_shooter::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use rect_shooter::error::GameError;
use rect_shooter::game::Game;
use rect_shooter::input::InputPoller;
use rect_shooter::logging;
use rect_shooter::render::Renderer;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Debug filter to specify log topics (e.g., "input,spawn,collision")
    /// Available topics: input, spawn, collision
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> Result<(), GameError> {
    info!("Loading assets...");
    let mut renderer = Renderer::new();
    renderer.load_font()?;
    let mut audio = AudioManager::new();
    audio.load_assets().await?;

    // Route window close through the quit flag so the loop can clean up
    prevent_quit();

    let mut input = InputPoller::new();
    let mut game = Game::default();
    game.run(&renderer, &mut input, &mut audio).await;
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let unknown = args
        .debug_filter
        .as_deref()
        .map(logging::unknown_topics)
        .unwrap_or_default();

    if let Err(e) = logging::init_logger(logging::parse_level(&args.log_level), args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    if !unknown.is_empty() {
        warn!(
            "Ignoring unknown debug topics {:?} (available: {})",
            unknown,
            logging::TOPICS.join(", ")
        );
    }

    info!("Initializing Rect Shooter...");
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Goodbye.");
}
