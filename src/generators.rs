use tracing::{debug, trace};

use crate::cells::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::random::{seeded_rng, RandomSource};
use crate::units::{Height, Width};

/// Generate a perfect maze with a generator seeded from the operating system.
pub fn generate(width: Width, height: Height) -> Result<Grid> {
    let mut rng = rand::weak_rng();
    recursive_backtracker(width, height, &mut rng)
}

/// Generate a perfect maze that is fully determined by `seed`.
pub fn generate_seeded(width: Width, height: Height, seed: u32) -> Result<Grid> {
    let mut rng = seeded_rng(seed);
    recursive_backtracker(width, height, &mut rng)
}

/// Apply the recursive backtracker maze generation algorithm to a new grid.
///
/// This is a randomised depth first search. From a random start cell we keep carving into a
/// random unvisited neighbour of the cell on top of the stack. When a cell has no unvisited
/// neighbours left it is popped, backtracking towards the start until a cell with an unexplored
/// neighbour turns up. Every cell is visited exactly once, so the passages form a spanning tree:
/// `width * height - 1` of them, no loops and exactly one route between any two cells.
///
/// Long twisty passages with few dead ends are typical of this algorithm.
///
/// The random source picks the start column, then the start row, then one index into each list
/// of unvisited neighbours. Neighbours are listed Left, Right, Down, Up.
pub fn recursive_backtracker<R>(width: Width, height: Height, rng: &mut R) -> Result<Grid>
    where R: RandomSource + ?Sized
{
    let mut grid = Grid::new(width, height)?;
    debug!(width = width.0, height = height.0, "generating recursive backtracker maze");

    let start = Cartesian2DCoordinate::new(sample(rng, 0, width.0)? as u32,
                                           sample(rng, 0, height.0)? as u32);
    grid.mark_visited(start)?;

    let mut stack = Vec::with_capacity(grid.size());
    stack.push(start);
    let mut carved = 0;

    while let Some(current) = stack.pop() {
        let unvisited = grid.unvisited_neighbours(current);
        if unvisited.is_empty() {
            continue;
        }

        stack.push(current);
        let chosen = unvisited[sample(rng, 0, unvisited.len())?];
        let next = grid.carve(current, chosen.side)?;
        trace!(from = ?current, to = ?next, side = ?chosen.side, "carved passage");

        grid.mark_visited(next)?;
        stack.push(next);
        carved += 1;
    }

    debug_assert_eq!(carved, grid.size() - 1);
    debug!(passages = carved, "maze generation complete");
    Ok(grid)
}

/// Draw from `[low, high)` and refuse anything the source returns outside of it.
fn sample<R>(rng: &mut R, low: usize, high: usize) -> Result<usize>
    where R: RandomSource + ?Sized
{
    let value = rng.next_in_range(low, high);
    if value >= low && value < high {
        Ok(value)
    } else {
        Err(ErrorKind::OutOfRange(value, low, high).into())
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::cells::WallSide;
    use crate::random::SequenceSource;
    use crate::walls::WallFlags;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    // Flood fill along carved passages from the first cell.
    fn reachable_cells(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.size()];
        let mut frontier = vec![gc(0, 0)];
        seen[0] = true;
        let mut count = 1;
        while let Some(coord) = frontier.pop() {
            for link in grid.links(coord).iter() {
                let index = grid.coordinate_to_index(*link).unwrap();
                if !seen[index] {
                    seen[index] = true;
                    count += 1;
                    frontier.push(*link);
                }
            }
        }
        count
    }

    fn walls_are_symmetric(grid: &Grid) -> bool {
        grid.iter().all(|coord| {
            grid.neighbours(coord).iter().all(|neighbour| {
                let here = grid.get(coord.x, coord.y).unwrap().contains(neighbour.side.flag());
                let there = grid.get(neighbour.coord.x, neighbour.coord.y)
                    .unwrap()
                    .contains(neighbour.side.opposite().flag());
                here == there
            })
        })
    }

    #[test]
    fn golden_two_by_two_with_zero_source() {
        let mut zeroes = SequenceSource::constant(0);
        let grid = recursive_backtracker(Width(2), Height(2), &mut zeroes).unwrap();

        // (0,0) -> Right -> (1,0) -> Up -> (1,1) -> Left -> (0,1)
        assert!(grid.is_linked(gc(0, 0), WallSide::Right));
        assert!(grid.is_linked(gc(1, 0), WallSide::Up));
        assert!(grid.is_linked(gc(1, 1), WallSide::Left));
        assert!(!grid.is_linked(gc(0, 0), WallSide::Up));

        let bits = |x, y| grid.get(x, y).unwrap().bits();
        assert_eq!(bits(0, 0), 13);
        assert_eq!(bits(1, 0), 10);
        assert_eq!(bits(0, 1), 13);
        assert_eq!(bits(1, 1), 6);
    }

    #[test]
    fn single_cell_keeps_all_walls() {
        let grid = generate(Width(1), Height(1)).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), WallFlags::all_walls());
        assert!(grid.is_visited(gc(0, 0)));
        assert_eq!(grid.passages_count(), 0);
    }

    #[test]
    fn vertical_corridor() {
        let grid = generate_seeded(Width(1), Height(5), 99).unwrap();
        for y in 0..5 {
            let walls = grid.get(0, y).unwrap();
            assert!(walls.contains(WallFlags::LEFT));
            assert!(walls.contains(WallFlags::RIGHT));
            assert_eq!(walls.contains(WallFlags::DOWN), y == 0);
            assert_eq!(walls.contains(WallFlags::UP), y == 4);
        }
        assert_eq!(grid.passages_count(), 4);
    }

    #[test]
    fn horizontal_corridor() {
        let grid = generate_seeded(Width(4), Height(1), 3).unwrap();
        for x in 0..4 {
            let walls = grid.get(x, 0).unwrap();
            assert!(walls.contains(WallFlags::UP | WallFlags::DOWN));
            assert_eq!(walls.contains(WallFlags::LEFT), x == 0);
            assert_eq!(walls.contains(WallFlags::RIGHT), x == 3);
        }
    }

    #[test]
    fn invalid_dimensions() {
        match generate(Width(0), Height(5)) {
            Err(Error(ErrorKind::InvalidDimension(0, 5), _)) => (),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
        assert!(generate(Width(5), Height(0)).is_err());
    }

    #[test]
    fn out_of_range_start_is_refused() {
        let mut source = SequenceSource::constant(3);
        match recursive_backtracker(Width(3), Height(3), &mut source) {
            Err(Error(ErrorKind::OutOfRange(3, 0, 3), _)) => (),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_neighbour_choice_is_refused() {
        // Start at (0,0) where only two neighbours exist, then ask for the third.
        let mut source = SequenceSource::new(vec![0, 0, 2]);
        match recursive_backtracker(Width(3), Height(3), &mut source) {
            Err(Error(ErrorKind::OutOfRange(2, 0, 2), _)) => (),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn every_cell_visited_and_connected() {
        let grid = generate_seeded(Width(17), Height(9), 1234).unwrap();
        assert!(grid.iter().all(|coord| grid.is_visited(coord)));
        assert_eq!(reachable_cells(&grid), 17 * 9);
        assert_eq!(grid.passages_count(), 17 * 9 - 1);
        assert!(walls_are_symmetric(&grid));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_seeded(Width(12), Height(12), 5).unwrap();
        let b = generate_seeded(Width(12), Height(12), 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_sequence_same_maze() {
        let a = recursive_backtracker(Width(3), Height(3), &mut SequenceSource::constant(0))
            .unwrap();
        let b = recursive_backtracker(Width(3), Height(3), &mut SequenceSource::constant(0))
            .unwrap();
        assert_eq!(a, b);

        // Always the first unvisited neighbour: a serpentine from (0,0) ending at (2,2).
        let expected_rows: [[u8; 3]; 3] = [[13, 12, 10], [9, 12, 6], [5, 12, 14]];
        for grid in &[a, b] {
            let rows = grid.iter_row()
                .map(|row| row.iter().map(|c| grid.get(c.x, c.y).unwrap().bits()).collect())
                .collect::<Vec<Vec<u8>>>();
            assert_eq!(rows, expected_rows.iter().map(|row| row.to_vec()).collect::<Vec<_>>());
            assert_eq!(grid.passages_count(), 8);
        }
    }

    #[test]
    fn perfect_maze_properties() {
        fn p(w: u8, h: u8, seed: u32) -> TestResult {
            let (w, h) = (w as usize % 12, h as usize % 12);
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let grid = generate_seeded(Width(w), Height(h), seed).unwrap();
            TestResult::from_bool(reachable_cells(&grid) == w * h &&
                                  grid.passages_count() == w * h - 1 &&
                                  walls_are_symmetric(&grid))
        }
        quickcheck(p as fn(u8, u8, u32) -> TestResult);
    }
}
