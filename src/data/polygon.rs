use claims::debug_assert_le;

use crate::data::{Path, Point, Rect};
use crate::Error;

const DEFAULT_CAPACITY: usize = 16;

/// Mutable polygon accumulating integer vertices into an owned contour
/// [`Path`], with a cached axis-aligned bounding box.
///
/// Vertices are appended one at a time with [`add_point`](Polygon::add_point)
/// and committed with [`close`](Polygon::close), which recomputes the bounds.
/// All containment and intersection queries answer against the cached
/// bounding box only, not the polygon silhouette. A point inside the box but
/// outside the actual outline is still reported as contained.
///
/// The coordinate stores are fixed-capacity. Appending past capacity fails
/// with [`Error::OutOfCapacity`].
#[derive(Debug, Clone)]
pub struct Polygon {
  xs: Vec<i32>,
  ys: Vec<i32>,
  vertex_count: usize,
  bounds: Option<Rect>,
  path: Path,
}

impl Polygon {
  /// Empty polygon with the default capacity of 16 vertices.
  pub fn new() -> Polygon {
    Polygon {
      xs: vec![0; DEFAULT_CAPACITY],
      ys: vec![0; DEFAULT_CAPACITY],
      vertex_count: 0,
      bounds: None,
      path: Path::new(),
    }
  }

  /// Empty polygon expecting the given number of vertices.
  ///
  /// Capacity is validated eagerly: anything below 1 cannot hold a vertex
  /// and fails with [`Error::InvalidArgument`] here rather than on the
  /// first append.
  pub fn with_capacity(capacity: usize) -> Result<Polygon, Error> {
    if capacity < 1 {
      return Err(Error::InvalidArgument);
    }
    Ok(Polygon {
      xs: vec![0; capacity],
      ys: vec![0; capacity],
      vertex_count: 0,
      bounds: None,
      path: Path::new(),
    })
  }

  /// Polygon initialized from pre-supplied coordinate arrays.
  ///
  /// Requires `count >= 1` and both arrays at least `count` long. The first
  /// `count` entries are replayed into the contour and the contour is
  /// closed, so [`get_bounds`](Polygon::get_bounds) is populated right after
  /// construction. Trailing array capacity stays appendable.
  pub fn from_coords(xs: Vec<i32>, ys: Vec<i32>, count: usize) -> Result<Polygon, Error> {
    if count < 1 || xs.len() < count || ys.len() < count {
      return Err(Error::InvalidArgument);
    }
    let mut path = Path::new();
    path.move_to(xs[0] as f32, ys[0] as f32);
    for i in 1..count {
      path.line_to(xs[i] as f32, ys[i] as f32);
    }
    let mut polygon = Polygon {
      xs,
      ys,
      vertex_count: count,
      bounds: None,
      path,
    };
    polygon.close();
    Ok(polygon)
  }

  pub fn vertex_count(&self) -> usize {
    self.vertex_count
  }

  pub fn capacity(&self) -> usize {
    std::cmp::min(self.xs.len(), self.ys.len())
  }

  /// Committed vertex at index `i`, or `None` past the current count.
  pub fn vertex(&self, i: usize) -> Option<Point> {
    if i < self.vertex_count {
      Some(Point::new(self.xs[i], self.ys[i]))
    } else {
      None
    }
  }

  /// Read access to the owned contour. The polygon keeps sole mutation
  /// rights over it.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Appends (x, y) as the next vertex. The first vertex issues a move,
  /// later vertices a line. The cached bounds are left untouched; call
  /// [`close`](Polygon::close) after the final point to refresh them.
  pub fn add_point(&mut self, x: i32, y: i32) -> Result<(), Error> {
    if self.vertex_count >= self.capacity() {
      return Err(Error::OutOfCapacity);
    }
    self.xs[self.vertex_count] = x;
    self.ys[self.vertex_count] = y;
    if self.vertex_count > 0 {
      self.path.line_to(x as f32, y as f32);
    } else {
      self.path.move_to(x as f32, y as f32);
    }
    self.vertex_count += 1;
    debug_assert_le!(self.vertex_count, self.capacity());
    Ok(())
  }

  /// Closes the current contour and unconditionally recomputes the cached
  /// bounding box, overwriting any previous value.
  ///
  /// Repeated calls re-issue the close command on the contour and recompute
  /// identical bounds as long as no vertex was appended in between.
  pub fn close(&mut self) {
    self.path.close();
    self.bounds = Some(self.path.compute_bounds(false));
  }

  /// The cached bounding box, or `None` if the contour was never closed.
  ///
  /// Pure read: vertices appended after the last close are not reflected
  /// until the next [`close`](Polygon::close).
  pub fn get_bounds(&self) -> Option<Rect> {
    self.bounds
  }

  /// Whether the point lies within the cached bounding box, edges
  /// inclusive. `false` when the bounds are absent.
  pub fn contains_point(&self, p: Point) -> bool {
    self.contains(p.x, p.y)
  }

  /// Whether (x, y) lies within the cached bounding box, edges inclusive.
  pub fn contains(&self, x: i32, y: i32) -> bool {
    match self.bounds {
      Some(bounds) => bounds.contains(x as f32, y as f32),
      None => false,
    }
  }

  /// Whether the rectangle spanned from (x, y) by `w` rightward and `h`
  /// downward in the negative-y direction lies entirely within the cached
  /// bounding box.
  pub fn contains_coords(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
    match self.bounds {
      Some(bounds) => bounds.contains_rect(&Self::span_bounds(x, y, w, h)),
      None => false,
    }
  }

  /// Whether the rectangle lies entirely within the cached bounding box.
  pub fn contains_rect(&self, r: &Rect) -> bool {
    match self.bounds {
      Some(bounds) => bounds.contains_rect(r),
      None => false,
    }
  }

  /// Whether the rectangle spanned from (x, y) by `w` rightward and `h`
  /// downward in the negative-y direction overlaps the cached bounding box.
  /// Touching edges count as overlapping.
  pub fn intersects_coords(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
    match self.bounds {
      Some(bounds) => bounds.intersects(&Self::span_bounds(x, y, w, h)),
      None => false,
    }
  }

  /// Whether the rectangle overlaps the cached bounding box. Touching edges
  /// count as overlapping.
  pub fn intersects_rect(&self, r: &Rect) -> bool {
    match self.bounds {
      Some(bounds) => bounds.intersects(r),
      None => false,
    }
  }

  /// Flushes the contour and the cached bounds, reallocating both
  /// coordinate stores to exactly the current vertex count.
  ///
  /// The vertex count itself is kept, so the reallocated stores start out
  /// full: the next [`add_point`](Polygon::add_point) fails with
  /// [`Error::OutOfCapacity`] unless a fresh polygon is constructed.
  pub fn invalidate(&mut self) {
    self.path.reset();
    self.xs = vec![0; self.vertex_count];
    self.ys = vec![0; self.vertex_count];
    self.bounds = None;
  }

  // Bounds of the scratch contour (x,y) -> (x+w,y) -> (x+w,y-h) -> (x,y-h),
  // closed. Note the negative-y height convention.
  fn span_bounds(x: f64, y: f64, w: f64, h: f64) -> Rect {
    let fx = x as f32;
    let fy = y as f32;
    let fw = w as f32;
    let fh = h as f32;
    let mut that = Path::new();
    that.move_to(fx, fy);
    that.line_to(fx + fw, fy);
    that.line_to(fx + fw, fy - fh);
    that.line_to(fx, fy - fh);
    that.close();
    that.compute_bounds(false)
  }
}

impl Default for Polygon {
  fn default() -> Polygon {
    Polygon::new()
  }
}
