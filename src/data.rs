mod path;
mod point;
pub mod polygon;
mod rect;

pub use path::{Path, Verb};
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;
