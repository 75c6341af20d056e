//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses with a short timeout, feeds them and the
//! gravity timer into one [`Session`], and re-renders after every pass.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::{Engine, PieceRng, SimpleRng, ThreadRandom};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::session_log::open_or_disabled;
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;
use tui_blockfall::{Config, Session};

fn main() -> Result<()> {
    let config = Config::from_env();

    let (log, log_err) = open_or_disabled(config.log_path.as_deref());
    if let Some(e) = log_err {
        eprintln!("[Blockfall] session log disabled: {:#}", e);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match config.seed {
        Some(seed) => {
            let engine = Engine::new(SimpleRng::new(seed));
            run(&mut term, Session::with_seed(engine, config.gravity_ms, seed, log))
        }
        None => {
            let engine = Engine::new(ThreadRandom::new());
            run(&mut term, Session::new(engine, config.gravity_ms, log))
        }
    };

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(session_log) => {
            if let Err(e) = session_log.finish() {
                eprintln!("[Blockfall] {:#}", e);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run<R: PieceRng>(
    term: &mut TerminalRenderer,
    mut session: Session<R>,
) -> Result<tui_blockfall::SessionLog> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            session.engine().board(),
            session.status(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(session.into_log());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u32);
        }
    }
}
