use std::fmt;

/// Planar location of a city as read from `NODE_COORD_SECTION`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.x), b2.format(self.y))
    }
}

/// A named city. Ids are assigned sequentially by the loader and are the only
/// handle the solver knows.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub id: usize,
    pub name: String,
    pub location: Point,
}

impl City {
    pub fn new(id: usize, name: impl Into<String>, location: Point) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
