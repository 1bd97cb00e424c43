/// Axis-aligned rectangle with `f32` min/max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
  pub min_x: f32,
  pub min_y: f32,
  pub max_x: f32,
  pub max_y: f32,
}

impl Rect {
  /// The degenerate rectangle at the origin. This is what an empty
  /// contour's bounds computation yields.
  pub const ZERO: Rect = Rect {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 0.0,
    max_y: 0.0,
  };

  pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Rect {
    Rect {
      min_x,
      min_y,
      max_x,
      max_y,
    }
  }

  pub fn width(&self) -> f32 {
    self.max_x - self.min_x
  }

  pub fn height(&self) -> f32 {
    self.max_y - self.min_y
  }

  /// Point containment, inclusive of all four edges.
  pub fn contains(&self, x: f32, y: f32) -> bool {
    self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
  }

  /// True iff `other` lies entirely within `self`, edges inclusive.
  pub fn contains_rect(&self, other: &Rect) -> bool {
    self.min_x <= other.min_x
      && other.max_x <= self.max_x
      && self.min_y <= other.min_y
      && other.max_y <= self.max_y
  }

  /// Overlap test. Rectangles sharing only a boundary edge count as
  /// intersecting.
  pub fn intersects(&self, other: &Rect) -> bool {
    self.min_x <= other.max_x
      && other.min_x <= self.max_x
      && self.min_y <= other.max_y
      && other.min_y <= self.max_y
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;

  #[test]
  fn contains_is_edge_inclusive() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(0.0, 0.0));
    assert!(r.contains(10.0, 10.0));
    assert!(r.contains(0.0, 10.0));
    assert!(r.contains(5.0, 5.0));
    assert!(!r.contains(10.1, 5.0));
    assert!(!r.contains(5.0, -0.1));
  }

  #[test]
  fn contains_rect_edges() {
    let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(outer.contains_rect(&Rect::new(2.0, 2.0, 8.0, 8.0)));
    assert!(!outer.contains_rect(&Rect::new(-1.0, 0.0, 10.0, 10.0)));
    assert!(!outer.contains_rect(&Rect::new(0.0, 0.0, 10.0, 11.0)));
  }

  #[test]
  fn intersects_counts_touching_edges() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    // Shares only the x = 10 edge.
    let b = Rect::new(10.0, 0.0, 20.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    // Shares only the corner (10, 10).
    let c = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(a.intersects(&c));
    // Strictly apart.
    let d = Rect::new(10.5, 0.0, 20.0, 10.0);
    assert!(!a.intersects(&d));
    assert!(!d.intersects(&a));
  }
}
