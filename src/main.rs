//! Spritestage demo entry point.
//!
//! A headless sprite-sheet clip player using:
//! - **bevy_ecs** for the playback world (components, systems, observers)
//! - **serde/serde_json** for the character and clip configuration
//! - **configparser** for the INI stage configuration
//!
//! This executable loads a character registry, selects one clip, and drives
//! the draw loop at the configured cadence against a logging surface. It is
//! the reference collaborator for embedding the engine: selection, sheet
//! load completion, run-state observers, and cancellation are all exercised
//! here the way a real UI shell would.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --list
//! cargo run -- --character forest-slime --clip 1
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, error, info};

use spritestage::components::playback::RunState;
use spritestage::driver::{DrawLoop, Surface};
use spritestage::framerect::Rect;
use spritestage::player::Player;
use spritestage::resources::characters::CharacterRegistry;
use spritestage::resources::stageconfig::StageConfig;
use spritestage::resources::surfacesize::SurfaceSize;

/// Spritestage clip player
#[derive(Parser)]
#[command(version, about = "Plays sprite-sheet clips headlessly")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Character slug to load (default: the first in the registry).
    #[arg(long, value_name = "SLUG")]
    character: Option<String>,

    /// Clip index to play.
    #[arg(long, default_value_t = 0)]
    clip: usize,

    /// Frame budget for looping clips before the loop is cancelled.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// List characters and clips, then exit.
    #[arg(long)]
    list: bool,
}

/// Surface that logs blits instead of drawing them.
struct LogSurface;

impl Surface for LogSurface {
    fn clear(&mut self) {}

    fn blit(&mut self, sheet_path: &str, src: Rect, dst: Rect) {
        debug!(
            "blit {} src ({}, {}) {}x{} -> dst ({}, {})",
            sheet_path, src.x, src.y, src.w, src.h, dst.x, dst.y
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = StageConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let registry = match CharacterRegistry::load_from_file(&config.characters_path) {
        Ok(registry) => registry,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if registry.is_empty() {
        error!("character registry {} is empty", config.characters_path);
        std::process::exit(1);
    }

    // Early-exit: list the registry and quit
    if cli.list {
        for (slug, character) in registry.iter() {
            println!("{} ({})", character.name, slug);
            for (i, clip) in character.animations.iter().enumerate() {
                println!(
                    "  [{}] {} {}x{} grid {}x{} ({})",
                    i, clip.name, clip.width, clip.height, clip.frame_x, clip.frame_y, clip.sprite
                );
            }
        }
        return;
    }

    let slug = cli
        .character
        .or_else(|| registry.iter().next().map(|(slug, _)| slug))
        .expect("registry checked non-empty above");

    let library = match registry.library_for(&slug, &config.base_path) {
        Ok(library) => library,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let surface_size = SurfaceSize {
        w: config.surface_width,
        h: config.surface_height,
    };
    let mut player = Player::new(library, surface_size);
    player.observe_run_state(|change| {
        info!("run state {:?} -> {:?}", change.from, change.to);
    });

    let ticket = match player.select_clip(cli.clip) {
        Ok(ticket) => ticket,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let clip = player.active_clip().expect("clip selected above");
    info!(
        "playing '{}' for {}: {} cells at 8 fps, {:?}",
        clip.name,
        slug,
        clip.columns * clip.rows,
        clip.loop_mode
    );

    // No real decoder in the demo shell; the sheet is "ready" immediately.
    player.complete_sheet_load(ticket);

    let mut draw_loop = DrawLoop::new(player, LogSurface);
    let cancel = draw_loop.cancel_handle();
    let on_finish = cancel.clone();
    draw_loop.player_mut().observe_finished(move |finished| {
        info!("clip {} finished", finished.clip_index);
        on_finish.cancel();
    });

    draw_loop.player_mut().run().expect("clip selected above");

    let frame_budget = Duration::from_secs_f64(1.0 / config.target_fps.max(1) as f64);
    let started = Instant::now();
    let mut frames_run = 0u32;
    while draw_loop.frame(started.elapsed().as_secs_f64() * 1000.0) {
        frames_run += 1;
        if frames_run >= cli.frames {
            info!("frame budget reached, cancelling");
            cancel.cancel();
        }
        thread::sleep(frame_budget);
    }

    let playback = draw_loop
        .player()
        .playback()
        .expect("clip was selected")
        .clone();
    info!(
        "done after {} frames: cell ({}, {}), {:?}",
        frames_run, playback.column, playback.row, playback.run_state
    );
    if playback.run_state != RunState::Stopped {
        draw_loop.player_mut().stop().ok();
    }
}
