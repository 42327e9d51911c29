//! Loader for the line-oriented city map format.
//!
//! ```text
//! NAME: square
//! NODE_COORD_SECTION
//! A 0 0
//! B 0 1
//! EDGE_WEIGHT_SECTION
//! A B 1
//! EOF
//! ```
//!
//! Lines outside a section are ignored, as are blank lines and trailing fields.
//! Edges that name an unknown city are dropped, not reported as errors.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, Read},
    path::Path,
    str::FromStr,
};

use crate::{City, Edge, Error, Point, Result};

const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";
const EDGE_WEIGHT_SECTION: &str = "EDGE_WEIGHT_SECTION";
const EOF_MARKER: &str = "EOF";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Section {
    Preamble,
    Nodes,
    Edges,
}

/// Cities and edges read from a map, with ids in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityMap {
    pub cities: Vec<City>,
    pub edges: Vec<Edge>,
    /// Edge lines dropped because a city name did not resolve.
    pub skipped_edges: usize,
}

impl CityMap {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut map = Self::default();
        let mut ids: HashMap<String, usize> = HashMap::new();
        let mut section = Section::Preamble;

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            match line {
                NODE_COORD_SECTION => {
                    section = Section::Nodes;
                    continue;
                }
                EDGE_WEIGHT_SECTION => {
                    section = Section::Edges;
                    continue;
                }
                EOF_MARKER => break,
                _ => {}
            }

            match section {
                Section::Preamble => {}
                Section::Nodes => {
                    let [name, x, y] = fields(line, line_no, "<name> <x> <y>")?;
                    let id = map.cities.len();
                    let location = Point::new(
                        number(x, line_no, "x coordinate")?,
                        number(y, line_no, "y coordinate")?,
                    );
                    map.cities.push(City::new(id, name, location));
                    ids.insert(name.to_string(), id);
                }
                Section::Edges => {
                    let [u_name, v_name, weight] = fields(line, line_no, "<from> <to> <weight>")?;
                    let weight = finite_weight(weight, line_no)?;
                    match (ids.get(u_name), ids.get(v_name)) {
                        (Some(&u), Some(&v)) => map.edges.push(Edge::new(u, v, weight)),
                        _ => {
                            map.skipped_edges += 1;
                            log::debug!(
                                "loader: skipping edge with unknown city line={line_no} from={u_name} to={v_name}"
                            );
                        }
                    }
                }
            }
        }

        log::info!(
            "loader: cities={} edges={} skipped_edges={}",
            map.cities.len(),
            map.edges.len(),
            map.skipped_edges
        );
        Ok(map)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

fn fields<'a>(line: &'a str, line_no: usize, expected: &str) -> Result<[&'a str; 3]> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c)) => Ok([a, b, c]),
        _ => Err(Error::parse(
            line_no,
            format!("expected '{expected}' but got: {line}"),
        )),
    }
}

fn finite_weight(raw: &str, line_no: usize) -> Result<f64> {
    let weight: f64 = number(raw, line_no, "weight")?;
    if !weight.is_finite() {
        return Err(Error::parse(line_no, format!("invalid weight: {raw}")));
    }
    Ok(weight)
}

fn number<T: FromStr>(raw: &str, line_no: usize, what: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::parse(line_no, format!("invalid {what}: {raw}")))
}
