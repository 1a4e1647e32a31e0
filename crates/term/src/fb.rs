//! Framebuffer and style types for terminal rendering.

/// Named colour roles; the renderer decides the actual terminal colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Bright white on black.
    #[default]
    Plain,
    /// Flagged tile.
    Flag,
    /// Revealed mine.
    Mine,
    /// Highlighted menu entry or letter.
    Highlight,
    /// Title banner.
    Banner,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tint: Tint,
}

impl Cell {
    pub const fn new(ch: char, tint: Tint) -> Self {
        Self { ch, tint }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Tint::Plain)
    }
}

/// 2D framebuffer of tinted character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, tint: Tint) {
        self.set(x, y, Cell::new(ch, tint));
    }

    /// Write `s` starting at `(x, y)`, clipped at the right edge.
    /// Returns the column after the last character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tint: Tint) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, tint);
            cx += 1;
        }
        cx
    }

    /// Tint a whole row (used for the banner background).
    pub fn fill_row(&mut self, y: u16, tint: Tint) {
        for x in 0..self.width {
            if let Some(i) = self.idx(x, y) {
                self.cells[i].tint = tint;
            }
        }
    }

    /// Characters of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        let mut s: String = (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect();
        s.truncate(s.trim_end().len());
        s
    }
}
