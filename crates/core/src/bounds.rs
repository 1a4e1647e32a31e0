//! Bounds checking for linear index offsets.
//!
//! Tiles are addressed by a single index, so a naive `index + offset` happily
//! wraps from the last column of one row to the first column of the next.
//! [`is_valid_move`] rejects those moves.

use arrayvec::ArrayVec;

/// The 8 neighbor steps as `(dx, dy)`.
pub const NEIGHBOR_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Linear offsets of the 8 neighbors on a board `width` tiles wide.
pub fn neighbor_offsets(width: usize) -> [isize; 8] {
    let w = width as isize;
    NEIGHBOR_STEPS.map(|(dx, dy)| dy * w + dx)
}

/// Check that moving `offset` from `current` stays on a `width`-wide board of `size` tiles.
///
/// - The target must be inside `[0, size)`.
/// - `±1` must not cross a row boundary.
/// - `+width+1` / `-width+1` are rejected from the right edge,
///   `-width-1` / `+width-1` from the left edge.
///
/// Vertical offsets only need the range check.
pub fn is_valid_move(offset: isize, current: usize, width: usize, size: usize) -> bool {
    if width == 0 || current >= size {
        return false;
    }

    let target = current as isize + offset;
    if target < 0 || target >= size as isize {
        return false;
    }

    let w = width as isize;
    let col = (current % width) as isize;

    if offset == 1 || offset == -1 {
        let next = col + offset;
        next >= 0 && next < w
    } else if offset == w + 1 || offset == -w + 1 {
        col != w - 1
    } else if offset == -w - 1 || offset == w - 1 {
        col != 0
    } else {
        true
    }
}

/// In-bounds neighbor indices of `current`, in [`NEIGHBOR_STEPS`] order.
pub fn neighbors(current: usize, width: usize, size: usize) -> ArrayVec<usize, 8> {
    neighbor_offsets(width)
        .into_iter()
        .filter(|&offset| is_valid_move(offset, current, width, size))
        .map(|offset| (current as isize + offset) as usize)
        .collect()
}
