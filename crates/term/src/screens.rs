//! Full-screen views outside of play: menus, highscores, name entry, game over.
//!
//! Like [`crate::game_view`], everything here only writes into a framebuffer.

use crate::core::menu::{Menu, NameEntry, NAME_KEYS, NAME_KEYS_PER_ROW};
use crate::core::SessionSnapshot;
use crate::fb::{FrameBuffer, Tint};
use crate::game_view::GameView;
use crate::scores::Highscores;
use crate::types::HIGHSCORE_CAPACITY;

const BANNER: [&str; 8] = [
    "  __  __ _               _____",
    " |  \\/  (_)             / ____|",
    " | \\  / |_ _ __   ___  | (_____      _____  ___ _ __   ___ _ __ ",
    " | |\\/| | | '_ \\ / _ \\  \\___ \\ \\ /\\ / / _ \\/ _ \\ '_ \\ / _ \\ '__|",
    " | |  | | | | | |  __/  ____) \\ V  V /  __/  __/ |_) |  __/ |   ",
    " |_|  |_|_|_| |_|\\___| |_____/ \\_/\\_/ \\___|\\___| .__/ \\___|_|   ",
    "                                               | |              ",
    "                                               |_|              ",
];

/// Left margin of menu entries.
const MENU_INDENT: u16 = 10;

/// Banner across the full width. Returns the next free row.
fn draw_banner(fb: &mut FrameBuffer, y: u16) -> u16 {
    for (i, line) in BANNER.iter().enumerate() {
        let row = y + i as u16;
        fb.fill_row(row, Tint::Banner);
        fb.put_str(0, row, line, Tint::Banner);
    }
    y + BANNER.len() as u16 + 1
}

fn draw_lines(fb: &mut FrameBuffer, mut y: u16, lines: &[&str]) -> u16 {
    for line in lines {
        fb.put_str(0, y, line, Tint::Plain);
        y += 1;
    }
    y
}

/// Banner, menu title and entries with the selection highlighted.
pub fn render_menu(fb: &mut FrameBuffer, menu: &Menu) {
    fb.clear();
    let mut y = draw_banner(fb, 0);

    fb.put_str(MENU_INDENT, y, menu.title(), Tint::Plain);
    y += 1;
    for (i, item) in menu.items().iter().enumerate() {
        let tint = if i == menu.selected() {
            Tint::Highlight
        } else {
            Tint::Plain
        };
        fb.put_str(MENU_INDENT, y, item, tint);
        y += 1;
    }

    draw_lines(fb, y + 1, &[" Press enter to select"]);
}

/// The highscore table. Returns the next free row.
pub fn draw_highscores(fb: &mut FrameBuffer, y: u16, scores: &Highscores) -> u16 {
    let mut y = draw_lines(fb, y, &["HIGHSCORES"]);
    for rank in 0..HIGHSCORE_CAPACITY {
        let (name, score) = match scores.entries().get(rank) {
            Some(e) => (e.name.clone(), e.score.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        fb.put_str(0, y, &format!(" {}. Name: {}", rank + 1, name), Tint::Plain);
        fb.put_str(0, y + 1, &format!("  Score: {}", score), Tint::Plain);
        y += 3;
    }
    y
}

pub fn render_highscores(fb: &mut FrameBuffer, scores: &Highscores) {
    fb.clear();
    let y = draw_highscores(fb, 0, scores);
    draw_lines(fb, y, &[" Press any key to return"]);
}

/// Name picker under the current highscores.
pub fn render_name_entry(fb: &mut FrameBuffer, scores: &Highscores, entry: &NameEntry, score: u32) {
    fb.clear();
    let y = draw_highscores(fb, 0, scores);
    let mut y = draw_lines(fb, y, &["-----------------------------------", "", "ENTER YOUR NAME"]);
    fb.put_str(0, y, &format!("  Name: {}", entry.name()), Tint::Plain);
    fb.put_str(0, y + 1, &format!(" Score: {}", score), Tint::Plain);
    y += 3;

    for (row, keys) in NAME_KEYS.chunks(NAME_KEYS_PER_ROW).enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let index = row * NAME_KEYS_PER_ROW + col;
            let tint = if index == entry.selection() {
                Tint::Highlight
            } else {
                Tint::Plain
            };
            fb.put_char(1 + col as u16 * 2, y, *key, tint);
        }
        y += 1;
    }

    draw_lines(
        fb,
        y + 1,
        &[" Press enter to select/confirm", " Press backspace to undo"],
    );
}

/// Fully revealed board with the result.
pub fn render_game_over(fb: &mut FrameBuffer, snap: &SessionSnapshot, won: bool, score: u32) {
    fb.clear();
    let y = GameView::new().draw_board(snap, fb);
    let outcome = if won { "You win!" } else { "You lose..." };
    let score_line = format!("Score: {}", score);
    draw_lines(
        fb,
        y,
        &[
            "GAME OVER",
            outcome,
            "",
            score_line.as_str(),
            "",
            "Press any key to record your score",
        ],
    );
}
