//! Terminal runner (default binary).
//!
//! Enter starts or stops a game, `p` pauses, arrows / hjkl / wasd play and
//! `q` or Ctrl-C quits. Configuration comes from `BLOCKFALL_*` environment
//! variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use tui_blockfall::engine::{EngineConfig, Session};
use tui_blockfall::input::{map_key_event, InputEvent, KeyState, ReleaseTracker};
use tui_blockfall::logging::{self, LogConfig};
use tui_blockfall::record::SnapshotRecorder;
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while nothing is scheduled (idle, game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    logging::init(&LogConfig::from_env())?;
    let config = EngineConfig::from_env();
    let mut recorder = SnapshotRecorder::from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut recorder);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(recorder) = recorder.as_mut() {
        recorder.flush()?;
    }
    result
}

fn run<W: std::io::Write>(
    term: &mut TerminalRenderer,
    config: &EngineConfig,
    recorder: &mut Option<SnapshotRecorder<W>>,
) -> Result<()> {
    let mut session = Session::from_config(config);
    let view = GameView;
    let mut fb = FrameBuffer::new(0, 0);

    // Terminals without release events get synthetic key-ups.
    let synthesize_release = !term.reports_key_release();
    let mut releases = ReleaseTracker::with_timeout(config.key_release);
    info!(synthesize_release, ?config, "session ready");

    let mut last_advance = Instant::now();
    loop {
        let snapshot = session.snapshot();
        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&snapshot)?;
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let now = Instant::now();
        let release_due = releases
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now));
        let timeout = [session.until_next_tick(), release_due]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key_event(key) {
                    Some(InputEvent::Quit) => {
                        info!(score = session.game().score(), "quit");
                        return Ok(());
                    }
                    Some(InputEvent::StartStop) => {
                        if session.game().is_playing() {
                            session.stop();
                        } else {
                            session.start();
                        }
                    }
                    Some(InputEvent::TogglePause) => {
                        if session.game().is_playing() {
                            session.toggle_pause();
                        }
                    }
                    Some(InputEvent::Key(k, KeyState::Down)) => {
                        if synthesize_release {
                            releases.press(k, Instant::now());
                        }
                        session.key_down(k);
                    }
                    Some(InputEvent::Key(k, KeyState::Up)) => {
                        releases.release(k);
                        session.key_up(k);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        for key in releases.expired(Instant::now()) {
            session.key_up(key);
        }

        let now = Instant::now();
        session.advance(now.duration_since(last_advance));
        last_advance = now;
    }
}
