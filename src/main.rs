use docopt::Docopt;
use serde_derive::Deserialize;
use mazes::{
    generators,
    grid::Grid,
    units::{Height, Width},
};
use std::io::{self, Write};
use tracing::info;

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--grid-width=<w> --grid-height=<h>] [--seed=<s>] [--edges]

Options:
    -h --help              Show this screen.
    --grid-width=<w>       The grid width in a w*h grid [default: 10].
    --grid-height=<h>      The grid height in a w*h grid [default: 10].
    --seed=<s>             Seed for a reproducible maze. A random seed is used when not given.
    --edges                Print the maze as a graph instead of wall bits. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.

By default each output line is one row of the maze, starting at y = 0. Every cell is printed as
its wall bits: LEFT = 1, RIGHT = 2, UP = 4, DOWN = 8.
";

// Driver errors: the library's own errors plus the failures only the command line can hit.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u32>,
    flag_edges: bool,
}

fn main() -> Result<()> {

    setup_logging();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    info!(width = args.flag_grid_width, height = args.flag_grid_height, seed = ?args.flag_seed,
          "generating maze");

    let (width, height) = (Width(args.flag_grid_width), Height(args.flag_grid_height));
    let maze_grid = match args.flag_seed {
        Some(seed) => generators::generate_seeded(width, height, seed),
        None => generators::generate(width, height),
    }.chain_err(|| "Failed to generate the maze")?;

    let text = if args.flag_edges {
        maze_graph_text(&maze_grid)
    } else {
        maze_walls_text(&maze_grid)?
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();
}

fn maze_walls_text(maze_grid: &Grid) -> mazes::errors::Result<String> {
    let mut walls_data = String::new();

    for row in maze_grid.iter_row() {
        let cells = row.iter()
            .map(|coord| maze_grid.get(coord.x, coord.y).map(|walls| walls.bits().to_string()))
            .collect::<mazes::errors::Result<Vec<String>>>()?;
        walls_data.push_str(&cells.join(" "));
        walls_data.push('\n');
    }

    Ok(walls_data)
}

fn maze_graph_text(maze_grid: &Grid) -> String {

    let mut graph_data = String::new();
    let vertices_count = maze_grid.size();
    let edges_count = maze_grid.passages_count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze_grid.iter_passages() {
        let index_pair = (maze_grid.coordinate_to_index(src), maze_grid.coordinate_to_index(dst));
        if let (Some(index_a), Some(index_b)) = index_pair {
            let src_as_1_based_index = index_a + 1;
            let dst_as_1_based_index = index_b + 1;

            graph_data.push_str(src_as_1_based_index.to_string().as_ref());
            graph_data.push(' ');
            graph_data.push_str(dst_as_1_based_index.to_string().as_ref());
            graph_data.push('\n');
        }
    }

    graph_data
}
