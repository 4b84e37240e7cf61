use heartword_core::{Letter, LetterError, LetterGrid, Position};
use serde::{Deserialize, Serialize};

/// Saved letter grid: rows of nullable one-letter strings, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct GridDto(Vec<Vec<Option<String>>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum GridDtoError {
    #[display("expected {expected} rows, found {found}")]
    RowCount { expected: u8, found: usize },
    #[display("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: u8,
        expected: u8,
        found: usize,
    },
    #[display("invalid cell at {position}")]
    InvalidCell {
        position: Position,
        source: LetterError,
    },
}

impl From<&LetterGrid> for GridDto {
    fn from(grid: &LetterGrid) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|letter| letter.as_str().to_owned()))
                    .collect()
            })
            .collect();
        Self(rows)
    }
}

impl GridDto {
    /// Rebuilds a `size × size` grid.
    ///
    /// Cells are written in uppercase, but lowercase letters are read back as
    /// their uppercase form so hand-edited or older saves still restore.
    pub(crate) fn try_into_grid(self, size: u8) -> Result<LetterGrid, GridDtoError> {
        if self.0.len() != usize::from(size) {
            return Err(GridDtoError::RowCount {
                expected: size,
                found: self.0.len(),
            });
        }

        let mut grid = LetterGrid::new(size);
        for (row, cells) in (0..size).zip(self.0) {
            if cells.len() != usize::from(size) {
                return Err(GridDtoError::RowLength {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
            for (col, cell) in (0..size).zip(cells) {
                let position = Position::new(row, col);
                let letter = cell
                    .map(|text| text.parse::<Letter>())
                    .transpose()
                    .map_err(|source| GridDtoError::InvalidCell { position, source })?;
                grid.set(position, letter);
            }
        }
        Ok(grid)
    }
}
