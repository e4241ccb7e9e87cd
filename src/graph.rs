use std::{fmt::Display, str::FromStr};

use tracing::warn;

use crate::{Error, MalformedInput, TokenKind};

pub const DELIMITER: char = ',';
pub const CONNECTED_FLAG: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: i64,
    y: i64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Caves and the tunnels between them, as a dense weight matrix.
///
/// A positive weight at (from, to) is the length of the tunnel from `from` to `to`, 0 means
/// there's no tunnel. The graph can't be changed once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    coordinates: Vec<Coordinate>,
    weights: Vec<f64>,
    node_n: usize,
}

impl Graph {
    /// Build graph from tokens of a cave file, in the order they appear in file.
    ///
    /// Tokens are: the number of caves, then x and y of each cave, then the connectivity
    /// flags of each pair of caves. A flag at (outer, inner) equal to "1" connects cave
    /// `inner` to cave `outer`, any other text means they're not connected.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reader = TokenReader::new(tokens.into_iter());
        let node_n = reader.next_integer::<usize>(TokenKind::NodeCount)?;
        if node_n == 0 {
            return Err(MalformedInput::EmptyCave.into());
        }

        let coordinates = (0..node_n)
            .map(|ind| -> Result<Coordinate, MalformedInput> {
                let x = reader.next_integer(TokenKind::CoordinateX(ind))?;
                let y = reader.next_integer(TokenKind::CoordinateY(ind))?;
                Ok(Coordinate::new(x, y))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cell_n = node_n
            .checked_mul(node_n)
            .ok_or(MalformedInput::TooManyCaves(node_n))?;
        // Matrix is allocated only after every flag is given.
        let mut flags = Vec::new();
        for outer in 0..node_n {
            for inner in 0..node_n {
                let flag = reader.next_token(TokenKind::Connectivity(outer, inner))?;
                flags.push(flag.as_ref() == CONNECTED_FLAG);
            }
        }

        let mut weights = vec![0.0; cell_n];
        for (ind, _) in flags.iter().enumerate().filter(|(_, connected)| **connected) {
            let (outer, inner) = (ind / node_n, ind % node_n);
            // Flag (outer, inner) is the tunnel from inner to outer.
            weights[inner * node_n + outer] = coordinates[outer].distance_to(&coordinates[inner]);
        }

        let rest_n = reader.rest_n();
        if rest_n > 0 {
            warn!(
                rest_n,
                "Ignored tokens after the connectivity flags of {} cave(s).", node_n
            );
        }

        Ok(Self {
            coordinates,
            weights,
            node_n,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_n
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn coordinate(&self, node: usize) -> Option<&Coordinate> {
        self.coordinates.get(node)
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.node_n
    }

    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        if self.contains(from) && self.contains(to) {
            self.weights.get(from * self.node_n + to).copied()
        } else {
            None
        }
    }

    pub fn weights_from(&self, from: usize) -> Option<&[f64]> {
        if self.contains(from) {
            let start = from * self.node_n;
            Some(&self.weights[start..(start + self.node_n)])
        } else {
            None
        }
    }

    /// Caves reachable from given cave in one step, with the tunnel lengths.
    pub fn neighbors(&self, from: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights_from(from)
            .into_iter()
            .flatten()
            .enumerate()
            .filter(|(_, weight)| **weight > 0.0)
            .map(|(to, weight)| (to, *weight))
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.node_n).flat_map(move |from| {
            self.neighbors(from).map(move |(to, weight)| (from, to, weight))
        })
    }
}

impl FromStr for Graph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(tokenize(s))
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        for from in 0..self.node_n {
            let row = self
                .weights_from(from)
                .unwrap_or_default()
                .iter()
                .map(|weight| format!("{:.2}", weight))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(f, "{}", row)?;
        }
        write!(f, "}}")
    }
}

/// Split text of a cave file into tokens.
///
/// Lines don't matter, fields of all non-blank lines are joined as one stream.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(|line| line.split(DELIMITER))
        .map(str::trim)
        .collect()
}

struct TokenReader<I> {
    tokens: I,
}

impl<I, S> TokenReader<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn new(tokens: I) -> Self {
        Self { tokens }
    }

    fn next_token(&mut self, kind: TokenKind) -> Result<S, MalformedInput> {
        self.tokens.next().ok_or(MalformedInput::MissingToken(kind))
    }

    fn next_integer<T: FromStr>(&mut self, kind: TokenKind) -> Result<T, MalformedInput> {
        let token = self.next_token(kind)?;
        token
            .as_ref()
            .parse::<T>()
            .map_err(|_| MalformedInput::InvalidInteger(kind, token.as_ref().to_string()))
    }

    fn rest_n(self) -> usize {
        self.tokens.count()
    }
}
