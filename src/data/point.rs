#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

impl Point {
  pub const fn new(x: i32, y: i32) -> Point {
    Point { x, y }
  }
}

impl From<(i32, i32)> for Point {
  fn from(point: (i32, i32)) -> Point {
    Point {
      x: point.0,
      y: point.1,
    }
  }
}
