use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::PathResult;

pub const SOLUTION_EXTENSION: &str = "csn";
pub const NO_PATH_SOLUTION: &str = "0";

/// Route as 1-based cave numbers separated by spaces, empty if there's no route.
pub fn format_path(result: &PathResult) -> String {
    result
        .path()
        .iter()
        .map(|node| (node + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

pub fn format_distance(result: &PathResult) -> String {
    result
        .distance()
        .map(|distance| format!("{:.2}", distance))
        .unwrap_or_else(|| "unreachable".to_string())
}

impl Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cave {} -> cave {}: ", self.source() + 1, self.target() + 1)?;
        if self.is_reachable() {
            write!(
                f,
                "distance {}, path {}.",
                format_distance(self),
                format_path(self)
            )
        } else {
            write!(f, "unreachable.")
        }
    }
}

pub fn solution_path<P: AsRef<Path>>(input_path: P) -> PathBuf {
    input_path.as_ref().with_extension(SOLUTION_EXTENSION)
}

pub fn write_solution<P: AsRef<Path>>(path: P, result: &PathResult) -> Result<()> {
    let content = if result.is_reachable() {
        format_path(result)
    } else {
        NO_PATH_SOLUTION.to_string()
    };
    fs::write(&path, content).with_context(|| {
        format!(
            "Failed to write solution to given file({}).",
            path.as_ref().display()
        )
    })?;
    info!(path = %path.as_ref().display(), "Wrote solution file.");

    Ok(())
}
