use std::{
    error,
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use clap::Parser;
use tracing::info;

pub mod graph;
pub mod logging;
pub mod path;
pub mod report;

pub use graph::{Coordinate, Graph};
pub use path::{PathResult, ShortestPathEngine};

pub const CAVE_EXTENSION: &str = "cav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    NodeCount,
    CoordinateX(usize),         // Node index
    CoordinateY(usize),         // Node index
    Connectivity(usize, usize), // (outer, inner) position in connectivity block
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::NodeCount => write!(f, "node count"),
            TokenKind::CoordinateX(ind) => write!(f, "x coordinate of node {}", ind),
            TokenKind::CoordinateY(ind) => write!(f, "y coordinate of node {}", ind),
            TokenKind::Connectivity(outer, inner) => {
                write!(f, "connectivity flag ({}, {})", outer, inner)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    MissingToken(TokenKind),
    InvalidInteger(TokenKind, String),
    EmptyCave,
    TooManyCaves(usize), // Node count whose matrix size overflows
}

impl Display for MalformedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedInput::MissingToken(kind) => {
                write!(f, "Input ended before the {} was given.", kind)
            }
            MalformedInput::InvalidInteger(kind, text) => {
                write!(f, "Invalid text({}) for {}, expect an integer.", text, kind)
            }
            MalformedInput::EmptyCave => write!(f, "Expect at least one cave, given 0."),
            MalformedInput::TooManyCaves(node_n) => {
                write!(f, "Too many caves({}) to fit in a weight matrix.", node_n)
            }
        }
    }
}

#[derive(Debug)]
pub enum Error {
    SourceNotFound(PathBuf),
    ReadFailed(PathBuf, io::Error),
    MalformedInput(MalformedInput),
    InvalidSource(usize, usize), // (given source, node count)
    InvalidTarget(usize, usize), // (given target, node count)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SourceNotFound(path) => {
                write!(f, "Given cave file({}) doesn't exist.", path.display())
            }
            Error::ReadFailed(path, err) => write!(
                f,
                "Failed to read given cave file({}): {}.",
                path.display(),
                err
            ),
            Error::MalformedInput(reason) => write!(f, "Malformed cave input. {}", reason),
            Error::InvalidSource(source, node_n) => write!(
                f,
                "Invalid source node({}), expect one in [0, {}).",
                source, node_n
            ),
            Error::InvalidTarget(target, node_n) => write!(
                f,
                "Invalid target node({}), expect one in [0, {}).",
                target, node_n
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::ReadFailed(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<MalformedInput> for Error {
    fn from(value: MalformedInput) -> Self {
        Error::MalformedInput(value)
    }
}

#[derive(Debug, Parser)]
#[command(about = "Find the shortest route from the first cave to the last one.")]
pub struct CLIArgs {
    /// Cave file, ".cav" is appended if it has no extension.
    pub input_path: PathBuf,
    /// Zero-based index of the cave to start from.
    #[arg(short, long, default_value_t = 0)]
    pub source: usize,
    /// Zero-based index of the destination cave, the last cave if omitted.
    #[arg(short, long)]
    pub target: Option<usize>,
    /// Solution file, the input path with ".csn" extension if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Don't write the solution file.
    #[arg(long)]
    pub no_write: bool,
    /// Print the weight matrix of the loaded caves.
    #[arg(long)]
    pub print_matrix: bool,
    /// Raise log level, repeat for more details.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn resolve_cave_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(CAVE_EXTENSION)
    }
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::ReadFailed(path.to_path_buf(), e),
    })?;
    let graph = text.parse::<Graph>()?;
    info!(
        path = %path.display(),
        node_count = graph.node_count(),
        "Finished reading cave file."
    );

    Ok(graph)
}
