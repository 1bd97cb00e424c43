use ordered_float::OrderedFloat;

use crate::data::Rect;

/// A committed contour drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verb {
  MoveTo { x: f32, y: f32 },
  LineTo { x: f32, y: f32 },
  Close,
}

/// Contour-building primitive: an ordered sequence of move/line/close
/// commands with straight segments only.
#[derive(Debug, Clone, Default)]
pub struct Path {
  verbs: Vec<Verb>,
}

impl Path {
  pub fn new() -> Path {
    Path { verbs: Vec::new() }
  }

  /// Begin a new subpath at (x, y).
  pub fn move_to(&mut self, x: f32, y: f32) {
    self.verbs.push(Verb::MoveTo { x, y });
  }

  /// Extend the current subpath to (x, y) with a straight segment.
  pub fn line_to(&mut self, x: f32, y: f32) {
    self.verbs.push(Verb::LineTo { x, y });
  }

  /// Close the current subpath back to its start point. Closing an
  /// already-closed subpath appends another close command; this is
  /// permitted and does not affect the committed geometry.
  pub fn close(&mut self) {
    self.verbs.push(Verb::Close);
  }

  /// Discard all subpath state, returning to empty.
  pub fn reset(&mut self) {
    self.verbs.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.verbs.is_empty()
  }

  pub fn verbs(&self) -> &[Verb] {
    &self.verbs
  }

  /// Axis-aligned bounding rectangle of all committed coordinates.
  ///
  /// With straight segments only, the fast conservative path and the exact
  /// path coincide: the box is the extent of the committed vertices. The
  /// `exact` flag is kept for contract fidelity with curve-capable
  /// primitives; callers in this crate always pass `false`.
  ///
  /// An empty path yields [`Rect::ZERO`].
  pub fn compute_bounds(&self, _exact: bool) -> Rect {
    let mut coords = self.verbs.iter().filter_map(|verb| match *verb {
      Verb::MoveTo { x, y } | Verb::LineTo { x, y } => Some((x, y)),
      Verb::Close => None,
    });
    let (x0, y0) = match coords.next() {
      None => return Rect::ZERO,
      Some(first) => first,
    };
    let mut min_x = OrderedFloat(x0);
    let mut max_x = OrderedFloat(x0);
    let mut min_y = OrderedFloat(y0);
    let mut max_y = OrderedFloat(y0);
    for (x, y) in coords {
      min_x = min_x.min(OrderedFloat(x));
      max_x = max_x.max(OrderedFloat(x));
      min_y = min_y.min(OrderedFloat(y));
      max_y = max_y.max(OrderedFloat(y));
    }
    Rect::new(
      min_x.into_inner(),
      min_y.into_inner(),
      max_x.into_inner(),
      max_y.into_inner(),
    )
  }
}
