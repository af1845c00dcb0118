//! Ballloop Core
//!
//! Foundational geometry shared by the loader engine and its hosts:
//!
//! - **Geometry**: points and viewport sizes in viewport-local coordinates
//! - **Colors**: RGBA colors passed through to the host renderer
//! - **Paths**: command-list paths and cubic segments that can be evaluated
//!   at a fraction of their length, like a trimmed path's end point
//!
//! # Example
//!
//! ```rust
//! use ballloop_core::{PathBuilder, Point};
//!
//! let path = PathBuilder::new()
//!     .move_to(0.0, 0.0)
//!     .line_to(0.0, 10.0)
//!     .line_to(0.0, 0.0)
//!     .build();
//!
//! assert_eq!(path.point_at_fraction(0.5), Some(Point::new(0.0, 10.0)));
//! ```

pub mod color;
pub mod geometry;
pub mod path;

pub use color::Color;
pub use geometry::{Point, Size};
pub use path::{CubicSegment, Path, PathBuilder, PathCommand};
