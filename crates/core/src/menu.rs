//! Menu state machines: the vertical menus and the highscore name entry.
//!
//! Both are pure; the terminal layer feeds them [`MenuAction`]s and draws
//! whatever state they end up in.

use crate::types::{BoardSize, Difficulty, MenuAction, NAME_LEN};

/// Letters offered for highscore names.
pub const NAME_KEYS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Letters per row in the name entry grid.
pub const NAME_KEYS_PER_ROW: usize = 10;

/// Placeholder for a name slot that is not filled yet.
pub const NAME_PLACEHOLDER: char = '-';

/// A titled, vertical list of choices with one highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: &'static str,
    items: Vec<&'static str>,
    selected: usize,
}

impl Menu {
    pub fn new(title: &'static str, items: &[&'static str]) -> Self {
        Self {
            title,
            items: items.to_vec(),
            selected: 0,
        }
    }

    pub fn main_menu() -> Self {
        Self::new("MAIN MENU", &["Start Game", "View High Scores", "Exit"])
    }

    pub fn board_size() -> Self {
        Self::new("SELECT BOARD SIZE", &BoardSize::ALL.map(BoardSize::label))
    }

    pub fn difficulty() -> Self {
        Self::new("SELECT DIFFICULTY", &Difficulty::ALL.map(Difficulty::label))
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn items(&self) -> &[&'static str] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Apply a key. Returns the chosen index on `Select`.
    pub fn handle(&mut self, action: MenuAction) -> Option<usize> {
        match action {
            MenuAction::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            MenuAction::Down => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
                None
            }
            MenuAction::Select => Some(self.selected),
            MenuAction::Left | MenuAction::Right | MenuAction::Back => None,
        }
    }
}

/// Main menu choices, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    StartGame,
    ViewHighscores,
    Exit,
}

impl MainMenuChoice {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(MainMenuChoice::StartGame),
            1 => Some(MainMenuChoice::ViewHighscores),
            2 => Some(MainMenuChoice::Exit),
            _ => None,
        }
    }
}

/// Five-letter name picker over a 10-per-row letter grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    name: [char; NAME_LEN],
    filled: usize,
    selection: usize,
}

impl NameEntry {
    pub fn new() -> Self {
        Self {
            name: [NAME_PLACEHOLDER; NAME_LEN],
            filled: 0,
            selection: 0,
        }
    }

    /// Name typed so far, placeholders included.
    pub fn name(&self) -> String {
        self.name.iter().collect()
    }

    /// Index of the highlighted letter in [`NAME_KEYS`].
    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn is_complete(&self) -> bool {
        self.filled == NAME_LEN
    }

    /// Apply a key. Returns the name once it is full and confirmed.
    ///
    /// `Select` writes the highlighted letter into the next slot, or confirms
    /// when all slots are filled. `Back` erases the last letter.
    pub fn handle(&mut self, action: MenuAction) -> Option<String> {
        match action {
            MenuAction::Left => self.selection = self.selection.saturating_sub(1),
            MenuAction::Right => {
                if self.selection + 1 < NAME_KEYS.len() {
                    self.selection += 1;
                }
            }
            MenuAction::Up => {
                if self.selection >= NAME_KEYS_PER_ROW {
                    self.selection -= NAME_KEYS_PER_ROW;
                }
            }
            MenuAction::Down => {
                if self.selection + NAME_KEYS_PER_ROW < NAME_KEYS.len() {
                    self.selection += NAME_KEYS_PER_ROW;
                }
            }
            MenuAction::Select => {
                if self.is_complete() {
                    return Some(self.name());
                }
                self.name[self.filled] = NAME_KEYS[self.selection];
                self.filled += 1;
            }
            MenuAction::Back => {
                self.filled = self.filled.saturating_sub(1);
                self.name[self.filled] = NAME_PLACEHOLDER;
            }
        }
        None
    }
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}
