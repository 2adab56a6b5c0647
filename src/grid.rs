use std::fmt;

use bit_set::BitSet;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, Neighbour, WallSide, NEIGHBOUR_ORDER};
use crate::errors::*;
use crate::grid_iterators::{PassagesIter, RectGridCellIter, RectRowIter};
use crate::units::{EdgesCount, Height, NodesCount, Width};
use crate::walls::WallFlags;

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type NeighbourSmallVec = SmallVec<[Neighbour; 4]>;

/// Passage graph of a maze. Node indices are the row-major cell indices.
pub type PassageGraph = Graph<Cartesian2DCoordinate, (), Undirected, u32>;

/// A rectangular grid of cells, each holding the walls still standing around it.
///
/// Walls live in one flat row-major buffer. Which cells the generator has reached is tracked in a
/// separate bit set, never in the wall bits.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    width: Width,
    height: Height,
    walls: Vec<WallFlags>,
    visited: BitSet,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, passages: {:?}",
               self.width,
               self.height,
               self.passages_count())
    }
}

impl Grid {
    /// A fully walled grid with no cell visited.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        let coordinates_fit = w <= u32::MAX as usize && h <= u32::MAX as usize;
        let cells_count = w.checked_mul(h);

        match cells_count {
            Some(count) if w > 0 && h > 0 && coordinates_fit => {
                Ok(Grid {
                    width,
                    height,
                    walls: vec![WallFlags::all_walls(); count],
                    visited: BitSet::with_capacity(count),
                })
            }
            _ => Err(ErrorKind::InvalidDimension(w, h).into()),
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.walls.len()
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, coord: Cartesian2DCoordinate) -> Result<usize> {
        self.coordinate_to_index(coord)
            .ok_or_else(|| ErrorKind::OutOfBounds(coord.x, coord.y).into())
    }

    /// The walls standing around the cell at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Result<WallFlags> {
        let index = self.checked_index(Cartesian2DCoordinate::new(x, y))?;
        Ok(self.walls[index])
    }

    /// Walls plus the `VISITED` marker, the combined byte layout some renderers expect.
    pub fn flags(&self, coord: Cartesian2DCoordinate) -> Result<WallFlags> {
        let index = self.checked_index(coord)?;
        let mut flags = self.walls[index];
        if self.visited.contains(index) {
            flags.insert(WallFlags::VISITED);
        }
        Ok(flags)
    }

    pub fn has_flag(&self, coord: Cartesian2DCoordinate, flag: WallFlags) -> Result<bool> {
        self.flags(coord).map(|flags| flags.contains(flag))
    }

    /// Unsets `flag` on one cell only. Use `carve` to keep the shared wall consistent.
    /// Clearing `VISITED` drops the cell's visited marker.
    pub fn clear_wall(&mut self, coord: Cartesian2DCoordinate, flag: WallFlags) -> Result<()> {
        let index = self.checked_index(coord)?;
        self.walls[index].remove(flag.walls());
        if flag.contains(WallFlags::VISITED) {
            let _ = self.visited.remove(index);
        }
        Ok(())
    }

    pub fn mark_visited(&mut self, coord: Cartesian2DCoordinate) -> Result<()> {
        let index = self.checked_index(coord)?;
        let _ = self.visited.insert(index);
        Ok(())
    }

    /// Visited state of an in-grid cell. Out of grid coordinates are never visited.
    #[inline]
    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.coordinate_to_index(coord)
            .map_or(false, |index| self.visited.contains(index))
    }

    /// The cell next to `coord` on `side`, if it is inside the grid.
    pub fn neighbour_at_side(&self,
                             coord: Cartesian2DCoordinate,
                             side: WallSide)
                             -> Option<Cartesian2DCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        side.offset_coordinate(coord)
            .and_then(|neighbour_coord| if self.is_valid_coordinate(neighbour_coord) {
                Some(neighbour_coord)
            } else {
                None
            })
    }

    /// All in-grid neighbours of a cell, linked or not, in Left, Right, Down, Up order.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> NeighbourSmallVec {
        NEIGHBOUR_ORDER.iter()
            .filter_map(|&side| {
                self.neighbour_at_side(coord, side)
                    .map(|neighbour_coord| Neighbour { coord: neighbour_coord, side })
            })
            .collect()
    }

    /// Neighbours the generator has not reached yet, in Left, Right, Down, Up order.
    pub fn unvisited_neighbours(&self, coord: Cartesian2DCoordinate) -> NeighbourSmallVec {
        self.neighbours(coord)
            .into_iter()
            .filter(|neighbour| !self.is_visited(neighbour.coord))
            .collect()
    }

    /// Knock down the wall between `coord` and its neighbour on `side`, on both cells.
    /// Returns the neighbour's coordinate.
    pub fn carve(&mut self,
                 coord: Cartesian2DCoordinate,
                 side: WallSide)
                 -> Result<Cartesian2DCoordinate> {
        let index = self.checked_index(coord)?;
        let neighbour_coord = self.neighbour_at_side(coord, side)
            .ok_or_else(|| -> Error {
                let (x, y) = match side.offset_coordinate(coord) {
                    Some(off_grid) => (off_grid.x, off_grid.y),
                    None => (coord.x, coord.y),
                };
                ErrorKind::OutOfBounds(x, y).into()
            })?;
        let neighbour_index = self.checked_index(neighbour_coord)?;

        self.walls[index].remove(side.flag());
        self.walls[neighbour_index].remove(side.opposite().flag());
        Ok(neighbour_coord)
    }

    /// Is there a passage out of `coord` on `side`? Grid edges are never linked.
    pub fn is_linked(&self, coord: Cartesian2DCoordinate, side: WallSide) -> bool {
        match (self.coordinate_to_index(coord), self.neighbour_at_side(coord, side)) {
            (Some(index), Some(_)) => !self.walls[index].contains(side.flag()),
            _ => false,
        }
    }

    /// Cells reachable from `coord` in one step through a carved passage.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        NEIGHBOUR_ORDER.iter()
            .filter(|&&side| self.is_linked(coord, side))
            .filter_map(|&side| self.neighbour_at_side(coord, side))
            .collect()
    }

    /// Number of carved undirected passages.
    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(self.width, self.height)
    }

    pub fn iter_passages(&self) -> PassagesIter<'_> {
        PassagesIter::new(self)
    }

    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (NodesCount(cells_count), EdgesCount(cells_count.saturating_sub(1)))
    }

    /// The carved passages as an undirected graph, one node per cell.
    pub fn passage_graph(&self) -> PassageGraph {
        let (NodesCount(nodes), EdgesCount(edges)) = self.graph_size();
        let mut graph = PassageGraph::with_capacity(nodes, edges);
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }

        for (a, b) in self.iter_passages() {
            // Both coordinates come from the grid itself.
            if let (Some(a_index), Some(b_index)) = (self.coordinate_to_index(a),
                                                     self.coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }

        graph
    }
}
