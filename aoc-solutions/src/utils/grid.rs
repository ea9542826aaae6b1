//! Row-major 2D grid parsed from character maps.

use aoc_solver::ParseError;

/// Offsets of the eight surrounding cells, row-major order
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of cells.
///
/// ```
/// use aoc_solutions::utils::grid::Grid;
///
/// let grid = Grid::parse("#.\n.#", |c| Ok(c == '#')).unwrap();
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// assert_eq!(grid.get(1, 1), Some(&true));
/// assert_eq!(grid.neighbors8(0, 0).count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Parse one row per non-empty line, mapping each character with `map_char`.
    ///
    /// All rows must have the same length.
    pub fn parse<F>(input: &str, mut map_char: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Result<T, ParseError>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in input.lines().map(str::trim_end).filter(|l| !l.is_empty()).enumerate() {
            let before = cells.len();
            for c in line.chars() {
                cells.push(map_char(c)?);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(ParseError::InvalidFormat(format!(
                        "(line {}) row has {} cells, expected {}",
                        line_idx + 1,
                        row_width,
                        w
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.height && col < self.width {
            self.cells.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// In-bounds positions of the (up to) eight cells around `(row, col)`
    pub fn neighbors8(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |r| (0..width).map(move |c| (r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &str) -> Grid<u32> {
        Grid::parse(input, |c| {
            c.to_digit(10)
                .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {c}")))
        })
        .unwrap()
    }

    #[test]
    fn test_parse_dimensions_and_access() {
        let grid = digits("123\n456\n");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 2), Some(&6));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(1, 0), Some(&4));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Grid::parse("12\n345", |c| Ok(c)).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            Grid::parse("\n\n", |c| Ok(c)),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        let grid = digits("123\n456\n789");
        assert_eq!(grid.neighbors8(1, 1).count(), 8);
        assert_eq!(grid.neighbors8(0, 0).collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.neighbors8(2, 1).count(), 5);
    }

    #[test]
    fn test_positions_row_major() {
        let mut grid = digits("12\n34");
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
        *grid.get_mut(1, 0).unwrap() = 9;
        assert_eq!(grid.get(1, 0), Some(&9));
    }
}
