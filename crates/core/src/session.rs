//! Game session - one game from first move to final sweep
//!
//! The session owns the grid, the cursor and every counter. It decides when
//! mines are deployed (first reveal), runs the flood fill, and detects the
//! end of the game.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::cursor::Cursor;
use crate::deploy::{bomb_count, deploy};
use crate::error::BoardError;
use crate::grid::TileGrid;
use crate::reveal::reveal_from;
use crate::snapshot::SessionSnapshot;
use crate::types::{Direction, GamePhase, GameSettings, TileStatus, TIME_BONUS_START};

/// Final score of a game.
///
/// `revealed / (width / 4) + (time_bonus / 9 + bombs * 5) * win`, integer
/// division at every step. The win bonus vanishes on a loss. Boards narrower
/// than 4 tiles use a divisor of 1.
pub fn compute_score(
    width: usize,
    revealed_count: usize,
    time_bonus: u32,
    num_bombs: usize,
    win: bool,
) -> u32 {
    let divisor = (width / 4).max(1);
    let base = (revealed_count / divisor) as u32;
    let bonus = time_bonus / 9 + num_bombs as u32 * 5;
    base + bonus * u32::from(win)
}

/// Complete state of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: TileGrid,
    cursor: Cursor,
    difficulty_percent: u32,
    num_bombs: usize,
    flag_count: usize,
    revealed_count: usize,
    time_bonus: u32,
    phase: GamePhase,
    rng: StdRng,
}

impl GameSession {
    /// New game with an entropy-seeded RNG.
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// New game with a deterministic mine layout.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(settings: GameSettings, rng: StdRng) -> Self {
        let side = settings.size.side() as usize;
        Self::with_dimensions(side, side, settings.difficulty.percent(), rng)
    }

    /// New game on an arbitrary board. Debug builds panic below 3 tiles wide.
    pub fn with_dimensions(
        width: usize,
        height: usize,
        difficulty_percent: u32,
        rng: StdRng,
    ) -> Self {
        debug_assert!(width >= 3, "boards narrower than 3 tiles are unsupported");
        Self {
            grid: TileGrid::new(width, height),
            cursor: Cursor::new(),
            difficulty_percent,
            num_bombs: 0,
            flag_count: 0,
            revealed_count: 0,
            time_bonus: 0,
            phase: GamePhase::NotStarted,
            rng,
        }
    }

    /// Resume play on an already deployed grid.
    ///
    /// Tiles already revealed in `grid` count towards the revealed total.
    pub fn from_grid(grid: TileGrid) -> Self {
        let num_bombs = grid.mine_count();
        let revealed_count = grid.tiles().iter().filter(|t| t.is_revealed()).count();
        let flag_count = grid.tiles().iter().filter(|t| t.is_flagged()).count();
        Self {
            grid,
            cursor: Cursor::new(),
            difficulty_percent: 0,
            num_bombs,
            flag_count,
            revealed_count,
            time_bonus: TIME_BONUS_START,
            phase: GamePhase::Playing,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Mines on the board, 0 until the first reveal.
    pub fn num_bombs(&self) -> usize {
        self.num_bombs
    }

    pub fn flag_count(&self) -> usize {
        self.flag_count
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn time_bonus(&self) -> u32 {
        self.time_bonus
    }

    /// Move the cursor one tile. Returns false when the move would leave the board.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let (width, size) = (self.grid.width(), self.grid.len());
        self.cursor.try_move(direction, width, size)
    }

    /// Toggle the flag on a hidden tile.
    ///
    /// Revealed tiles and finished games are left alone. Returns whether the
    /// tile changed.
    pub fn flag(&mut self, index: usize) -> Result<bool, BoardError> {
        if self.phase.is_over() {
            return Ok(false);
        }
        let tile = self.grid.at_mut(index)?;
        match tile.status {
            TileStatus::Hidden => {
                tile.status = TileStatus::Flagged;
                self.flag_count += 1;
                Ok(true)
            }
            TileStatus::Flagged => {
                tile.status = TileStatus::Hidden;
                self.flag_count -= 1;
                Ok(true)
            }
            TileStatus::Revealed => Ok(false),
        }
    }

    pub fn flag_at_cursor(&mut self) -> Result<bool, BoardError> {
        self.flag(self.cursor.index())
    }

    /// Reveal a tile. Returns whether play continues.
    ///
    /// Flagged tiles are ignored. The first reveal deploys the mines around
    /// `index`, so it is always safe.
    pub fn reveal(&mut self, index: usize) -> Result<bool, BoardError> {
        if self.phase.is_over() {
            return Ok(false);
        }
        if self.grid.at(index)?.is_flagged() {
            return Ok(true);
        }

        if self.phase == GamePhase::NotStarted {
            self.start(index)?;
        }

        if self.grid.at(index)?.is_mine() {
            self.phase = GamePhase::Lost;
            info!(index, revealed = self.revealed_count, "mine revealed, game lost");
            return Ok(false);
        }

        let (x, y) = self.grid.coords_of(index);
        self.revealed_count += reveal_from(&mut self.grid, x as isize, y as isize);

        if self.revealed_count == self.grid.len() - self.num_bombs {
            self.phase = GamePhase::Won;
            info!(bombs = self.num_bombs, "all safe tiles revealed, game won");
            return Ok(false);
        }
        Ok(true)
    }

    pub fn reveal_at_cursor(&mut self) -> Result<bool, BoardError> {
        self.reveal(self.cursor.index())
    }

    /// Deploy mines away from `safe_index` and start the clock.
    fn start(&mut self, safe_index: usize) -> Result<(), BoardError> {
        let size = self.grid.len();
        let count = bomb_count(size, self.difficulty_percent, &mut self.rng)
            .min(size.saturating_sub(1));
        deploy(&mut self.grid, safe_index, count, &mut self.rng)?;
        self.num_bombs = count;
        self.time_bonus = TIME_BONUS_START;
        self.phase = GamePhase::Playing;
        debug!(bombs = count, safe_index, "game started");
        Ok(())
    }

    /// One render tick worth of time bonus. Floors at 1 and only runs during play.
    pub fn tick_time_bonus(&mut self) {
        if self.phase == GamePhase::Playing && self.time_bonus > 1 {
            self.time_bonus -= 1;
        }
    }

    /// Score for the current counters.
    pub fn score(&self) -> u32 {
        compute_score(
            self.grid.width(),
            self.revealed_count,
            self.time_bonus,
            self.num_bombs,
            self.won(),
        )
    }

    /// End the game: unfinished games count as lost, every tile is shown.
    ///
    /// Counters are left untouched. Returns the final score.
    pub fn finish(&mut self) -> u32 {
        if !self.phase.is_over() {
            self.phase = GamePhase::Lost;
        }
        self.grid.reveal_all();
        let score = self.score();
        info!(score, won = self.won(), "game finished");
        score
    }

    /// Copy the state into `out` and advance the cursor spinner.
    pub fn snapshot_into(&mut self, out: &mut SessionSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.tiles.clear();
        out.tiles.extend_from_slice(self.grid.tiles());
        out.cursor = self.cursor.index();
        out.cursor_glyph = self.cursor.next_glyph();
        out.num_bombs = self.num_bombs;
        out.flag_count = self.flag_count;
        out.revealed_count = self.revealed_count;
        out.time_bonus = self.time_bonus;
        out.phase = self.phase;
    }

    pub fn snapshot(&mut self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Difficulty};

    fn small() -> GameSession {
        GameSession::with_seed(GameSettings::new(BoardSize::Small, Difficulty::Hard), 42)
    }

    #[test]
    fn test_new_session_not_started() {
        let s = small();
        assert_eq!(s.phase(), GamePhase::NotStarted);
        assert_eq!(s.num_bombs(), 0);
        assert_eq!(s.time_bonus(), 0);
        assert_eq!(s.width(), 15);
        assert_eq!(s.height(), 15);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn test_first_reveal_is_safe_and_deploys() {
        for seed in 0..50 {
            let mut s = GameSession::with_seed(
                GameSettings::new(BoardSize::Small, Difficulty::Hard),
                seed,
            );
            let index = 7 * 15 + 7;
            s.reveal(index).unwrap();
            assert_ne!(s.phase(), GamePhase::Lost, "seed {seed}");
            assert!(s.num_bombs() > 0);
            assert_eq!(s.grid().mine_count(), s.num_bombs());
            assert!(s.grid().at(index).unwrap().is_revealed());
        }
    }

    #[test]
    fn test_time_bonus_only_ticks_while_playing() {
        let mut s = small();
        s.tick_time_bonus();
        assert_eq!(s.time_bonus(), 0);

        s.reveal(0).unwrap();
        if s.phase() == GamePhase::Playing {
            assert_eq!(s.time_bonus(), TIME_BONUS_START);
            s.tick_time_bonus();
            assert_eq!(s.time_bonus(), TIME_BONUS_START - 1);
        }
    }

    #[test]
    fn test_time_bonus_floors_at_one() {
        let grid = TileGrid::from_picture(&["*...", "....", "...."]);
        let mut s = GameSession::from_grid(grid);
        for _ in 0..(TIME_BONUS_START + 10) {
            s.tick_time_bonus();
        }
        assert_eq!(s.time_bonus(), 1);
    }

    #[test]
    fn test_snapshot_advances_spinner() {
        let mut s = small();
        let a = s.snapshot();
        let b = s.snapshot();
        assert_ne!(a.cursor_glyph, b.cursor_glyph);
        assert_eq!(a.tiles.len(), 225);
    }

    #[test]
    fn test_finish_marks_abandoned_game_lost() {
        let grid = TileGrid::from_picture(&["*...", "....", "...."]);
        let mut s = GameSession::from_grid(grid);
        assert!(s.reveal(1).unwrap());
        assert_eq!(s.revealed_count(), 1);

        let score = s.finish();
        assert!(s.is_over());
        assert!(!s.won());
        assert_eq!(s.revealed_count(), 1);
        // width 4 => divisor 1, no win bonus.
        assert_eq!(score, 1);
        assert!(s.grid().tiles().iter().all(|t| t.is_revealed()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "narrower than 3")]
    fn test_narrow_board_is_rejected() {
        GameSession::with_dimensions(2, 5, 10, StdRng::seed_from_u64(0));
    }
}
