//! Terminal Hangman runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Each frame drains pending input, runs one engine step, then renders.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_hangman::audio::{AudioBackend, NullBackend};
use tui_hangman::core::{GameSnapshot, LevelCatalog};
use tui_hangman::engine::{Engine, Flow};
use tui_hangman::input::map_event;
use tui_hangman::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_hangman::types::{InputEvent, FRAME_MS};
use tui_hangman::Config;

type DynEngine = Engine<Box<dyn AudioBackend>>;

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env();
    let catalog = LevelCatalog::builtin()?;
    info!(
        seed = config.seed,
        tiers = catalog.tier_count(),
        "Starting Hangman"
    );

    let mut engine = Engine::new(catalog, config.seed, open_audio(&config))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    engine.shutdown();
    result
}

/// Logs go to stderr and only when `RUST_LOG` is set, so the TUI stays clean.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "sound")]
fn open_audio(config: &Config) -> Box<dyn AudioBackend> {
    if config.mute {
        return Box::new(NullBackend::new());
    }
    match tui_hangman::audio::RodioBackend::open() {
        Ok(backend) => Box::new(backend),
        Err(e) => {
            warn!("Audio unavailable: {}, playing silently", e);
            Box::new(NullBackend::new())
        }
    }
}

#[cfg(not(feature = "sound"))]
fn open_audio(config: &Config) -> Box<dyn AudioBackend> {
    if !config.mute {
        warn!("Built without the `sound` feature, playing silently");
    }
    Box::new(NullBackend::new())
}

fn run(term: &mut TerminalRenderer, engine: &mut DynEngine) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut events: Vec<InputEvent> = Vec::with_capacity(16);
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        let frame_start = Instant::now();
        events.clear();

        // Input until the next frame is due.
        loop {
            let timeout = frame.saturating_sub(frame_start.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                term.invalidate();
            }
            if let Some(input) = map_event(&ev) {
                events.push(input);
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if engine.step(&events, &viewport.keyboard()) == Flow::Quit {
            info!("Quit requested");
            return Ok(());
        }

        engine.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
