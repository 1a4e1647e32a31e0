//! Game session tests - reveal, flag, win/lose and scoring

use tui_minesweeper::core::{compute_score, BoardError, GameSession, TileGrid};
use tui_minesweeper::types::{
    BoardSize, Difficulty, Direction, GamePhase, GameSettings, TIME_BONUS_START,
};

/// Four corner mines on a 3x3 board: every safe tile is a number.
fn corners() -> GameSession {
    GameSession::from_grid(TileGrid::from_picture(&["*.*", "...", "*.*"]))
}

#[test]
fn test_win_on_last_safe_tile() {
    let mut session = corners();

    for index in [1, 3, 4, 5] {
        assert_eq!(session.reveal(index), Ok(true));
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    assert_eq!(session.reveal(7), Ok(false));
    assert_eq!(session.phase(), GamePhase::Won);
    assert!(session.won());
    assert_eq!(session.revealed_count(), 5);
    assert_eq!(session.score(), 5 + TIME_BONUS_START / 9 + 4 * 5);
}

#[test]
fn test_mine_loses_and_stays_lost() {
    let mut session = corners();
    session.reveal(1).unwrap();

    assert_eq!(session.reveal(0), Ok(false));
    assert_eq!(session.phase(), GamePhase::Lost);
    assert!(!session.won());

    // Finished games ignore further input.
    assert_eq!(session.reveal(3), Ok(false));
    assert_eq!(session.flag(3), Ok(false));
    assert_eq!(session.revealed_count(), 1);

    // Sweeping the board does not turn the loss into a win.
    let score = session.finish();
    assert!(!session.won());
    assert_eq!(score, 1);
    assert!(session.grid().tiles().iter().all(|t| t.is_revealed()));
}

#[test]
fn test_finish_keeps_flag_and_reveal_counts() {
    let mut session = GameSession::from_grid(TileGrid::from_picture(&["*...", "....", "...*"]));
    session.flag(0).unwrap();
    session.flag(5).unwrap();
    session.reveal(3).unwrap();
    let (flags, revealed) = (session.flag_count(), session.revealed_count());
    assert_eq!(flags, 2);

    session.finish();

    assert!(session.grid().tiles().iter().all(|t| t.is_revealed()));
    assert_eq!(session.flag_count(), flags);
    assert_eq!(session.revealed_count(), revealed);
    assert_eq!(session.phase(), GamePhase::Lost);
}

#[test]
fn test_flag_blocks_reveal_until_removed() {
    let mut session = corners();

    assert_eq!(session.flag(4), Ok(true));
    assert_eq!(session.flag_count(), 1);
    assert_eq!(session.reveal(4), Ok(true));
    assert!(session.grid().at(4).unwrap().is_flagged());
    assert_eq!(session.revealed_count(), 0);

    assert_eq!(session.flag(4), Ok(true));
    assert_eq!(session.flag_count(), 0);
    session.reveal(4).unwrap();
    assert!(session.grid().at(4).unwrap().is_revealed());

    // Revealed tiles cannot be flagged.
    assert_eq!(session.flag(4), Ok(false));
    assert_eq!(session.flag_count(), 0);
}

#[test]
fn test_first_reveal_is_always_safe() {
    for seed in 0..50 {
        let settings = GameSettings::new(BoardSize::Small, Difficulty::Hard);
        let mut session = GameSession::with_seed(settings, seed);
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert_eq!(session.num_bombs(), 0);

        session.reveal(112).unwrap();
        assert_ne!(session.phase(), GamePhase::Lost, "seed {seed}");
        assert!(session.grid().at(112).unwrap().is_revealed());

        let bombs = session.num_bombs();
        assert!((11..=67).contains(&bombs), "seed {seed}: {bombs} bombs");
        assert_eq!(session.grid().mine_count(), bombs);
        assert_eq!(session.time_bonus(), TIME_BONUS_START);
    }
}

#[test]
fn test_cursor_moves_and_stops_at_edges() {
    let settings = GameSettings::new(BoardSize::Small, Difficulty::Easy);
    let mut session = GameSession::with_seed(settings, 1);

    assert!(!session.move_cursor(Direction::Up));
    assert!(!session.move_cursor(Direction::Left));
    assert!(session.move_cursor(Direction::Right));
    assert!(session.move_cursor(Direction::Down));
    assert_eq!(session.cursor(), 16);

    for _ in 0..20 {
        session.move_cursor(Direction::Right);
    }
    assert_eq!(session.cursor(), 29);
}

#[test]
fn test_time_bonus_only_runs_during_play() {
    let settings = GameSettings::new(BoardSize::Small, Difficulty::Easy);
    let mut session = GameSession::with_seed(settings, 5);

    session.tick_time_bonus();
    assert_eq!(session.time_bonus(), 0);

    session.reveal_at_cursor().unwrap();
    if session.phase() == GamePhase::Playing {
        session.tick_time_bonus();
        assert_eq!(session.time_bonus(), TIME_BONUS_START - 1);
    }
}

#[test]
fn test_reveal_out_of_range() {
    let mut session = corners();
    assert_eq!(
        session.reveal(9),
        Err(BoardError::OutOfRange { index: 9, len: 9 })
    );
    assert_eq!(session.phase(), GamePhase::Playing);
}

#[test]
fn test_score_formula() {
    // 200 / (15 / 4) = 66, 100 / 9 + 20 * 5 = 111.
    assert_eq!(compute_score(15, 200, 100, 20, true), 177);
    assert_eq!(compute_score(15, 200, 100, 20, false), 66);
    assert_eq!(compute_score(24, 300, 8999, 60, true), 50 + 999 + 300);
}
