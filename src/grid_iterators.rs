use std::fmt;

use crate::cells::{Cartesian2DCoordinate, WallSide};
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Row-major iterator over every coordinate of a rectangular grid.
#[derive(Clone)]
pub struct RectGridCellIter {
    width: Width,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub(crate) fn new(width: Width, height: Height) -> RectGridCellIter {
        RectGridCellIter {
            width,
            current_cell_number: 0,
            cells_count: width.0 * height.0,
        }
    }
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iterator over the rows of a rectangular grid, y = 0 first, each row a batch of coordinates.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    width: Width,
    height: Height,
    current_index: usize,
}

impl RectRowIter {
    pub(crate) fn new(width: Width, height: Height) -> RectRowIter {
        RectRowIter {
            width,
            height,
            current_index: 0,
        }
    }
}

impl ExactSizeIterator for RectRowIter {} // default impl using size_hint()
impl Iterator for RectRowIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let Height(count) = self.height;
        if self.current_index < count {
            let Width(length) = self.width;
            let y = self.current_index as u32;
            let coords = (0..length)
                .map(|x: usize| Cartesian2DCoordinate::new(x as u32, y))
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.height.0 - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Every carved passage of a grid, once each, as a pair of coordinates.
///
/// Only the Right and Up walls of each cell are inspected so an undirected passage is not
/// reported from both of its ends.
pub struct PassagesIter<'a> {
    grid: &'a Grid,
    cells: RectGridCellIter,
    pending: Option<Cartesian2DCoordinate>,
}

impl<'a> PassagesIter<'a> {
    pub(crate) fn new(grid: &'a Grid) -> PassagesIter<'a> {
        PassagesIter {
            grid,
            cells: grid.iter(),
            pending: None,
        }
    }

    fn passage_towards(&self,
                       coord: Cartesian2DCoordinate,
                       side: WallSide)
                       -> Option<(Cartesian2DCoordinate, Cartesian2DCoordinate)> {
        if self.grid.is_linked(coord, side) {
            self.grid
                .neighbour_at_side(coord, side)
                .map(|neighbour| (coord, neighbour))
        } else {
            None
        }
    }
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (Cartesian2DCoordinate, Cartesian2DCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // The Up side of a cell is still to be checked after its Right side.
            if let Some(coord) = self.pending.take() {
                if let Some(passage) = self.passage_towards(coord, WallSide::Up) {
                    return Some(passage);
                }
            }

            let coord = self.cells.next()?;
            self.pending = Some(coord);
            if let Some(passage) = self.passage_towards(coord, WallSide::Right) {
                return Some(passage);
            }
        }
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PassagesIter :: cells iter : {:?}", self.cells)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn cell_iter() {
        let iter = RectGridCellIter::new(Width(2), Height(2));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<Cartesian2DCoordinate>>(),
                   &[Cartesian2DCoordinate::new(0, 0),
                     Cartesian2DCoordinate::new(1, 0),
                     Cartesian2DCoordinate::new(0, 1),
                     Cartesian2DCoordinate::new(1, 1)]);
    }

    #[test]
    fn cell_iter_size_hint_shrinks() {
        let mut iter = RectGridCellIter::new(Width(3), Height(1));
        let _ = iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn row_iter() {
        let iter = RectRowIter::new(Width(2), Height(3));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<Vec<Cartesian2DCoordinate>>>(),
                   &[&[Cartesian2DCoordinate::new(0, 0), Cartesian2DCoordinate::new(1, 0)],
                     &[Cartesian2DCoordinate::new(0, 1), Cartesian2DCoordinate::new(1, 1)],
                     &[Cartesian2DCoordinate::new(0, 2), Cartesian2DCoordinate::new(1, 2)]]);
    }
}
