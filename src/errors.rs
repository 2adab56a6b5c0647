// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::*;

error_chain! {

    errors {
        // A grid needs at least one row and one column, and must fit the coordinate space.
        InvalidDimension(width: usize, height: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} x {}", width, height)
        }

        // A cell query addressed a coordinate outside the grid.
        OutOfBounds(x: u32, y: u32) {
            description("coordinate out of grid bounds")
            display("coordinate ({}, {}) is outside the grid", x, y)
        }

        // The random source broke its contract of sampling from `[low, high)`.
        OutOfRange(value: usize, low: usize, high: usize) {
            description("random value out of range")
            display("random source returned {} which is outside [{}, {})", value, low, high)
        }
    }
}
