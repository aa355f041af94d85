//! Immutable (row, column) view over a multi-line string, used to parse
//! literal maze text. Out-of-range reads yield the null byte instead of
//! failing, so callers can probe freely.

pub struct CharGrid {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl CharGrid {
    /// Builds a grid from multi-line text. Height is the number of non-empty
    /// lines, width the length of the longest line. Panics on input with no
    /// non-empty lines; that is a caller contract breach, not a runtime
    /// condition.
    pub fn new(text: &str) -> CharGrid {
        let rows: Vec<Vec<u8>> = text
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect();
        assert!(!rows.is_empty(), "char grid input must contain at least one non-empty line");
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        CharGrid { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell value at (row, col), or `0` when the position is outside the grid
    /// (including the ragged tail of a short line).
    pub fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied().unwrap_or(0)
    }
}
