//! Render loop tests - lock sharing between input and the render thread

use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tui_minesweeper::core::{
    render_tick, FrameSink, GameSession, RenderLoop, SessionSnapshot, SharedSession, TileGrid,
};
use tui_minesweeper::types::{GamePhase, TIME_BONUS_START};

#[derive(Default)]
struct Recorder {
    frames: Vec<SessionSnapshot>,
}

impl FrameSink for Recorder {
    type Error = Infallible;

    fn present(&mut self, frame: &SessionSnapshot) -> Result<(), Infallible> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn shared() -> SharedSession {
    let grid = TileGrid::from_picture(&["*...", "....", "...."]);
    Arc::new(Mutex::new(GameSession::from_grid(grid)))
}

#[test]
fn test_tick_is_skipped_while_input_holds_the_lock() {
    let session = shared();
    let mut frame = SessionSnapshot::default();

    let guard = session.lock().unwrap();
    assert!(!render_tick(&session, &mut frame));
    drop(guard);
    assert_eq!(frame.width, 0, "skipped tick must not touch the frame");

    assert!(render_tick(&session, &mut frame));
    assert_eq!(frame.width, 4);
    assert_eq!(frame.time_bonus, TIME_BONUS_START);
    assert_eq!(session.lock().unwrap().time_bonus(), TIME_BONUS_START - 1);
}

#[test]
fn test_loop_renders_and_burns_time_bonus() {
    let session = shared();
    let render = RenderLoop::spawn(Arc::clone(&session), Duration::from_millis(1), Recorder::default());

    thread::sleep(Duration::from_millis(50));
    let recorder = render.stop().expect("render thread panicked");

    assert!(!recorder.frames.is_empty());
    let burned = TIME_BONUS_START - session.lock().unwrap().time_bonus();
    assert!(burned as usize >= recorder.frames.len());

    // Frames are taken before each decrement, so the bonus only goes down.
    for pair in recorder.frames.windows(2) {
        assert!(pair[1].time_bonus < pair[0].time_bonus);
    }
}

#[test]
fn test_input_is_applied_between_frames() {
    let session = shared();
    let render = RenderLoop::spawn(Arc::clone(&session), Duration::from_millis(1), Recorder::default());

    {
        let mut game = session.lock().unwrap();
        game.reveal(0).unwrap();
        assert_eq!(game.phase(), GamePhase::Lost);
    }
    thread::sleep(Duration::from_millis(20));
    let recorder = render.stop().expect("render thread panicked");

    let last = recorder.frames.last().expect("no frames rendered");
    assert_eq!(last.phase, GamePhase::Lost);

    // Bonus freezes once the game is over.
    let frozen = session.lock().unwrap().time_bonus();
    assert!(recorder.frames.iter().filter(|f| f.phase == GamePhase::Lost).all(|f| f.time_bonus == frozen));
}
