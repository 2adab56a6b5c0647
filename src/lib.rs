//! **mazes** is a perfect maze generation library.
//!
//! A maze is generated over a rectangular grid of square cells and handed back as the walls
//! standing around each cell, ready for any renderer to draw.
//!
//! ```no_run
//! use mazes::{generators, units::{Height, Width}};
//!
//! let maze = generators::generate_seeded(Width(8), Height(4), 7).unwrap();
//! let walls = maze.get(0, 0).unwrap();
//! println!("{:?}", walls);
//! ```

#![recursion_limit = "1024"]

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod random;
pub mod units;
pub mod walls;
