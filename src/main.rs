//! Terminal Minesweeper runner (default binary).
//!
//! Menus and end screens are drawn by this thread after each key press.
//! During play a background render loop owns the terminal and redraws the
//! board on a fixed interval while this thread blocks on input.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use tracing::{error, info, warn};

use tui_minesweeper::config::AppConfig;
use tui_minesweeper::core::{
    GameSession, MainMenuChoice, Menu, NameEntry, RenderLoop, SessionSnapshot, SharedSession,
};
use tui_minesweeper::input::{handle_key_event, handle_menu_key, is_actionable, should_quit};
use tui_minesweeper::logging;
use tui_minesweeper::scores::{HighscoreEntry, Highscores};
use tui_minesweeper::term::{
    render_game_over, render_highscores, render_menu, render_name_entry, FrameBuffer,
    TerminalRenderer, TerminalSink, Tint,
};
use tui_minesweeper::types::{BoardSize, Difficulty, GameAction, GameSettings};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

/// Outcome of one finished game.
struct GameResult {
    board: SessionSnapshot,
    won: bool,
    score: u32,
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut highscores = Highscores::load(&config.scores_path);

    loop {
        let choice = match choose(term, &mut fb, Menu::main_menu())? {
            Some(index) => MainMenuChoice::from_index(index),
            None => Some(MainMenuChoice::Exit),
        };

        match choice {
            Some(MainMenuChoice::StartGame) => {
                let Some(settings) = choose_settings(term, &mut fb)? else {
                    continue;
                };
                let result = play(term, config, settings)?;

                present(term, &mut fb, |fb| {
                    render_game_over(fb, &result.board, result.won, result.score)
                })?;
                next_key()?;

                let mut notice = None;
                if let Some(name) = enter_name(term, &mut fb, &highscores, result.score)? {
                    info!(%name, score = result.score, "recording highscore");
                    highscores.record(HighscoreEntry::new(name, result.score));
                    if let Err(e) = highscores.save(&config.scores_path) {
                        warn!("failed to save highscores: {e}");
                        notice = Some(format!(" Could not save highscores: {e}"));
                    }
                }
                show_highscores(term, &mut fb, &highscores, notice.as_deref())?;
            }
            Some(MainMenuChoice::ViewHighscores) => show_highscores(term, &mut fb, &highscores, None)?,
            Some(MainMenuChoice::Exit) | None => return Ok(()),
        }
    }
}

/// Redraw a full screen. Screens clear the buffer themselves.
fn present<F>(term: &mut TerminalRenderer, fb: &mut FrameBuffer, draw: F) -> Result<()>
where
    F: FnOnce(&mut FrameBuffer),
{
    let (w, h) = TerminalRenderer::viewport_size();
    fb.resize(w, h);
    draw(fb);
    term.draw_swap(fb)
}

/// Block until a key is pressed (or auto-repeated).
fn next_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if is_actionable(&key) {
                return Ok(key);
            }
        }
    }
}

/// Run a menu until an entry is chosen. `None` when the player backs out.
fn choose(term: &mut TerminalRenderer, fb: &mut FrameBuffer, mut menu: Menu) -> Result<Option<usize>> {
    term.invalidate();
    loop {
        present(term, fb, |fb| render_menu(fb, &menu))?;
        let key = next_key()?;
        if should_quit(key) {
            return Ok(None);
        }
        if let Some(index) = handle_menu_key(key).and_then(|action| menu.handle(action)) {
            return Ok(Some(index));
        }
    }
}

fn choose_settings(term: &mut TerminalRenderer, fb: &mut FrameBuffer) -> Result<Option<GameSettings>> {
    let Some(size) = choose(term, fb, Menu::board_size())?.and_then(|i| BoardSize::ALL.get(i).copied())
    else {
        return Ok(None);
    };
    let Some(difficulty) =
        choose(term, fb, Menu::difficulty())?.and_then(|i| Difficulty::ALL.get(i).copied())
    else {
        return Ok(None);
    };
    Ok(Some(GameSettings::new(size, difficulty)))
}

fn lock(session: &SharedSession) -> Result<MutexGuard<'_, GameSession>> {
    session
        .lock()
        .map_err(|_| anyhow!("game session lock poisoned"))
}

/// Play one game with the render loop running, then finish the session.
fn play(term: &mut TerminalRenderer, config: &AppConfig, settings: GameSettings) -> Result<GameResult> {
    let session = match config.seed {
        Some(seed) => GameSession::with_seed(settings, seed),
        None => GameSession::new(settings),
    };
    info!(?settings, "new game");
    let session: SharedSession = Arc::new(Mutex::new(session));

    let sink = TerminalSink::new(std::mem::take(term));
    let render = RenderLoop::spawn(Arc::clone(&session), config.render_interval, sink);

    let outcome = drive(&session);

    // Join before drawing anything else so frames never land on the next screen.
    match render.stop() {
        Some(sink) => *term = sink.into_renderer(),
        None => warn!("render thread panicked"),
    }
    term.invalidate();
    outcome?;

    let mut game = lock(&session)?;
    let score = game.finish();
    Ok(GameResult {
        board: game.snapshot(),
        won: game.won(),
        score,
    })
}

/// Apply keys to the shared session until the game ends or the player quits.
fn drive(session: &SharedSession) -> Result<()> {
    loop {
        let key = next_key()?;
        if should_quit(key) {
            info!("game abandoned");
            return Ok(());
        }
        let Some(action) = handle_key_event(key) else {
            continue;
        };

        let mut game = lock(session)?;
        match action {
            GameAction::Move(direction) => {
                game.move_cursor(direction);
            }
            GameAction::Flag => {
                game.flag_at_cursor()?;
            }
            GameAction::Reveal => {
                game.reveal_at_cursor()?;
            }
        }
        if game.is_over() {
            return Ok(());
        }
    }
}

/// Name picker. `None` when the player skips recording with Esc.
fn enter_name(
    term: &mut TerminalRenderer,
    fb: &mut FrameBuffer,
    highscores: &Highscores,
    score: u32,
) -> Result<Option<String>> {
    let mut entry = NameEntry::new();
    term.invalidate();
    loop {
        present(term, fb, |fb| render_name_entry(fb, highscores, &entry, score))?;
        let key = next_key()?;
        if key.code == KeyCode::Esc {
            return Ok(None);
        }
        if let Some(name) = handle_menu_key(key).and_then(|action| entry.handle(action)) {
            return Ok(Some(name));
        }
    }
}

/// Highscore table, with an optional notice on the last row.
fn show_highscores(
    term: &mut TerminalRenderer,
    fb: &mut FrameBuffer,
    highscores: &Highscores,
    notice: Option<&str>,
) -> Result<()> {
    term.invalidate();
    present(term, fb, |fb| {
        render_highscores(fb, highscores);
        if let Some(notice) = notice {
            fb.put_str(0, fb.height().saturating_sub(1), notice, Tint::Mine);
        }
    })?;
    next_key()?;
    Ok(())
}
