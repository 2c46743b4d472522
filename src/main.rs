//! Terminal Pink Blast runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `pink-blast-term`.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pink_blast::adapter::{
    load_high_score, AudioSink, EffectDispatcher, JsonFileStore, SilentAudio, TerminalBell,
};
use pink_blast::core::{GameConfig, GameSession};
use pink_blast::input::{should_quit, InputHandler};
use pink_blast::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use pink_blast::types::Mode;
use pink_blast::App;

const FRAME_MS: u64 = 50;

/// Pink Blast: place blocks, clear lines, chase the high score
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the piece generator (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Board dimension N (N x N)
    #[arg(long, default_value_t = 8)]
    board_size: usize,

    /// Pieces per hand
    #[arg(long, default_value_t = 3)]
    batch_size: usize,

    /// Start in `classic` (next hand hidden) or `future` (next hand shown)
    #[arg(long, default_value = "classic", value_parser = parse_mode)]
    mode: Mode,

    /// High-score store file
    #[arg(long)]
    store: Option<PathBuf>,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode {s:?} (expected classic or future)"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = GameConfig::new(args.board_size, args.batch_size)?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let store_path = args
        .store
        .clone()
        .unwrap_or_else(JsonFileStore::default_path);
    let store = JsonFileStore::open(store_path);
    let high_score = load_high_score(&store);
    info!(
        seed,
        board_size = config.board_size,
        batch_size = config.batch_size,
        high_score,
        store = %store.path().display(),
        "starting"
    );

    let audio: Box<dyn AudioSink> = if args.mute {
        Box::new(SilentAudio)
    } else {
        Box::new(TerminalBell)
    };
    let dispatcher = EffectDispatcher::spawn(Box::new(store), audio);
    let session = GameSession::with_seed(config, seed, high_score)?;
    let input = InputHandler::new(config.board_size).with_mode(args.mode);
    let mut app = App::new(session, input, dispatcher);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = app.session().score(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let view_state = app.view_state();
        view.render_into(app.snapshot(), view_state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last.elapsed();
        last = Instant::now();
        app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
    }
}

/// File logging only; the terminal belongs to the game screen
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
