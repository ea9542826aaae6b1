use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::{debug, trace};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["packing", "search"])]
pub struct Solver;

/// A present shape as occupied `(row, col)` cells, normalized to the origin
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Shape {
    cells: Vec<(usize, usize)>,
}

impl Shape {
    fn from_cells(cells: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let cells: Vec<(i64, i64)> = cells.into_iter().collect();
        let min_r = cells.iter().map(|c| c.0).min().unwrap_or(0);
        let min_c = cells.iter().map(|c| c.1).min().unwrap_or(0);
        let cells = cells
            .into_iter()
            .map(|(r, c)| ((r - min_r) as usize, (c - min_c) as usize))
            .sorted_unstable()
            .collect();
        Self { cells }
    }

    fn height(&self) -> usize {
        self.cells.iter().map(|c| c.0 + 1).max().unwrap_or(0)
    }

    fn width(&self) -> usize {
        self.cells.iter().map(|c| c.1 + 1).max().unwrap_or(0)
    }

    /// Distinct rotations and reflections
    fn orientations(&self) -> Vec<Shape> {
        let base: Vec<(i64, i64)> = self.cells.iter().map(|&(r, c)| (r as i64, c as i64)).collect();
        (0..8)
            .map(|t| {
                Shape::from_cells(base.iter().map(|&(r, c)| {
                    let (r, c) = if t & 4 != 0 { (r, -c) } else { (r, c) };
                    match t & 3 {
                        0 => (r, c),
                        1 => (c, -r),
                        2 => (-r, -c),
                        _ => (-c, r),
                    }
                }))
            })
            .sorted_unstable()
            .dedup()
            .collect()
    }
}

#[derive(Debug)]
struct Region {
    width: usize,
    height: usize,
    /// How many presents of each shape must fit
    counts: Vec<usize>,
}

#[derive(Debug)]
pub struct Farm {
    shapes: Vec<Shape>,
    regions: Vec<Region>,
}

impl AocParser for Solver {
    type SharedData<'a> = Farm;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_farm(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_farm(input: &str) -> anyhow::Result<Farm> {
    let mut shapes = Vec::new();
    let mut regions = Vec::new();
    let mut current: Option<Vec<(i64, i64)>> = None;
    let mut row = 0i64;

    let finish_shape = |current: &mut Option<Vec<(i64, i64)>>, shapes: &mut Vec<Shape>| {
        if let Some(cells) = current.take() {
            shapes.push(Shape::from_cells(cells));
        }
    };

    for (line_idx, line) in input.lines().map(str::trim).enumerate() {
        let context = || format!("(line {})", line_idx + 1);
        if line.is_empty() {
            finish_shape(&mut current, &mut shapes);
        } else if let Some((size, counts)) = line.split_once(':').filter(|(size, _)| size.contains('x')) {
            finish_shape(&mut current, &mut shapes);
            regions.push(parse_region(size, counts).with_context(context)?);
        } else if let Some(index) = line.strip_suffix(':') {
            finish_shape(&mut current, &mut shapes);
            let index: usize = index.parse().with_context(context)?;
            if index != shapes.len() {
                return Err(anyhow!("{} expected shape {}, found {}", context(), shapes.len(), index));
            }
            current = Some(Vec::new());
            row = 0;
        } else {
            let cells = current
                .as_mut()
                .ok_or_else(|| anyhow!("{} shape rows without a shape header", context()))?;
            for (col, c) in line.chars().enumerate() {
                match c {
                    '#' => cells.push((row, col as i64)),
                    '.' => {}
                    _ => return Err(anyhow!("{} unexpected cell {c:?}", context())),
                }
            }
            row += 1;
        }
    }
    finish_shape(&mut current, &mut shapes);

    if let Some(idx) = shapes.iter().position(|s| s.cells.is_empty()) {
        return Err(anyhow!("shape {idx} has no cells"));
    }
    if let Some(region) = regions.iter().find(|r| r.counts.len() > shapes.len()) {
        return Err(anyhow!(
            "region {}x{} lists {} shapes but only {} are defined",
            region.width,
            region.height,
            region.counts.len(),
            shapes.len()
        ));
    }
    Ok(Farm { shapes, regions })
}

fn parse_region(size: &str, counts: &str) -> anyhow::Result<Region> {
    let (width, height) = size
        .split_once('x')
        .ok_or_else(|| anyhow!("expected `WxH`"))?;
    Ok(Region {
        width: width.trim().parse::<usize>()?,
        height: height.trim().parse::<usize>()?,
        counts: counts
            .split_whitespace()
            .map(str::parse::<usize>)
            .collect::<Result<_, _>>()?,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fitting = shared
            .regions
            .iter()
            .filter(|region| region_fits(&shared.shapes, region))
            .count();
        Ok(fitting.to_string())
    }
}

fn region_fits(shapes: &[Shape], region: &Region) -> bool {
    let area = region.width * region.height;
    let needed: usize = region
        .counts
        .iter()
        .zip(shapes)
        .map(|(&n, shape)| n * shape.cells.len())
        .sum();
    if needed > area {
        return false;
    }

    // Every present gets its own bounding box
    let block_h = shapes.iter().map(Shape::height).max().unwrap_or(1).max(1);
    let block_w = shapes.iter().map(Shape::width).max().unwrap_or(1).max(1);
    let presents: usize = region.counts.iter().sum();
    if (region.width / block_w) * (region.height / block_h) >= presents {
        return true;
    }

    debug!(
        width = region.width,
        height = region.height,
        presents,
        "falling back to exact packing search"
    );
    Packer::new(shapes, region).solve()
}

/// Placement as `(word index, bit mask)` pairs over the region's bitset
type Placement = Vec<(usize, u64)>;

/// Backtracking packer over precomputed placements
struct Packer {
    /// Shape index of each present, identical shapes adjacent
    pieces: Vec<usize>,
    placements: Vec<Vec<Placement>>,
    board: Vec<u64>,
    /// Placement chosen for each piece so far
    chosen: Vec<usize>,
}

impl Packer {
    fn new(shapes: &[Shape], region: &Region) -> Self {
        let placements = shapes
            .iter()
            .map(|shape| {
                shape
                    .orientations()
                    .iter()
                    .flat_map(|o| {
                        let (oh, ow) = (o.height(), o.width());
                        let rows = (region.height + 1).saturating_sub(oh);
                        let cols = (region.width + 1).saturating_sub(ow);
                        (0..rows).cartesian_product(0..cols).map(move |(r, c)| {
                            let mut words: Placement = Vec::new();
                            for &(dr, dc) in &o.cells {
                                let bit = (r + dr) * region.width + c + dc;
                                let (word, mask) = (bit / 64, 1u64 << (bit % 64));
                                match words.iter_mut().find(|(w, _)| *w == word) {
                                    Some((_, m)) => *m |= mask,
                                    None => words.push((word, mask)),
                                }
                            }
                            words
                        })
                    })
                    .collect()
            })
            .collect();

        let pieces = region
            .counts
            .iter()
            .enumerate()
            .flat_map(|(shape, &n)| std::iter::repeat_n(shape, n))
            .collect();

        Self {
            pieces,
            placements,
            board: vec![0; (region.width * region.height).div_ceil(64)],
            chosen: Vec::new(),
        }
    }

    fn solve(mut self) -> bool {
        let found = self.place(0);
        trace!(found, pieces = self.pieces.len(), "packing search finished");
        found
    }

    fn place(&mut self, piece: usize) -> bool {
        let Some(&shape) = self.pieces.get(piece) else {
            return true;
        };
        // Identical presents are interchangeable: only try later placements
        let first = match piece.checked_sub(1) {
            Some(prev) if self.pieces[prev] == shape => self.chosen[prev] + 1,
            _ => 0,
        };

        for idx in first..self.placements[shape].len() {
            let fits = self.placements[shape][idx]
                .iter()
                .all(|&(word, mask)| self.board[word] & mask == 0);
            if !fits {
                continue;
            }
            self.toggle(shape, idx);
            self.chosen.push(idx);
            if self.place(piece + 1) {
                return true;
            }
            self.chosen.pop();
            self.toggle(shape, idx);
        }
        false
    }

    fn toggle(&mut self, shape: usize, idx: usize) {
        for &(word, mask) in &self.placements[shape][idx] {
            self.board[word] ^= mask;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.shapes.len(), 6);
        assert_eq!(shared.regions.len(), 3);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn test_each_sample_region() {
        let farm = Solver::parse(SAMPLE).unwrap();
        let fits: Vec<bool> = farm.regions.iter().map(|r| region_fits(&farm.shapes, r)).collect();
        assert_eq!(fits, vec![true, true, false]);
    }

    #[test]
    fn test_orientation_counts() {
        let farm = Solver::parse(SAMPLE).unwrap();
        // Shape 5 (H-like) is symmetric under a half turn and both flips
        assert_eq!(farm.shapes[5].orientations().len(), 2);
        assert_eq!(farm.shapes[0].orientations().len(), 8);
        let square = Shape::from_cells([(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(square.orientations().len(), 1);
    }

    #[test]
    fn test_area_bound_rejects_early() {
        let farm = Solver::parse("0:\n##\n##\n\n3x3: 3\n").unwrap();
        assert!(!region_fits(&farm.shapes, &farm.regions[0]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("1:\n#\n").is_err());
        assert!(Solver::parse("0:\n#\n\n2x2: 1 1\n").is_err());
        assert!(Solver::parse("0:\n#?\n").is_err());
        assert!(Solver::parse("##\n").is_err());
    }
}
