//! Path building, representation and evaluation
//!
//! Paths are recorded as a flat list of commands. Besides being handed to a
//! renderer, a path can be *evaluated*: [`Path::point_at_fraction`] returns
//! the point a trimmed copy of the path (from 0 to `fraction`) would end at.
//!
//! Trimming distributes `fraction` over the drawn pieces by their length.
//! Inside a cubic piece the remaining fraction is used directly as the curve
//! parameter, so motion along a single curve follows the curve's own
//! parameterization rather than a constant speed.

use smallvec::SmallVec;

use crate::geometry::Point;

/// Number of chords used to approximate the length of a cubic piece
const CUBIC_LENGTH_STEPS: usize = 16;

/// One cubic Bezier piece
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubicSegment {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicSegment {
    pub const fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Evaluate B(t) for `t` in [0, 1] (clamped)
    pub fn point_at(&self, t: f32) -> Point {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }

    /// Approximate arc length (sum of chords)
    pub fn length(&self) -> f32 {
        let mut length = 0.0;
        let mut prev = self.start;
        for step in 1..=CUBIC_LENGTH_STEPS {
            let next = self.point_at(step as f32 / CUBIC_LENGTH_STEPS as f32);
            length += prev.distance(next);
            prev = next;
        }
        length
    }

    /// A standalone path containing just this segment
    pub fn to_path(&self) -> Path {
        PathBuilder::new()
            .move_to(self.start.x, self.start.y)
            .cubic_to(
                self.control1.x,
                self.control1.y,
                self.control2.x,
                self.control2.y,
                self.end.x,
                self.end.y,
            )
            .build()
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

/// A drawn piece of a path, resolved to absolute endpoints
#[derive(Clone, Copy, Debug)]
enum Piece {
    Line(Point, Point),
    Cubic(CubicSegment),
}

impl Piece {
    fn length(&self) -> f32 {
        match self {
            Piece::Line(from, to) => from.distance(*to),
            Piece::Cubic(segment) => segment.length(),
        }
    }

    fn point_at(&self, t: f32) -> Point {
        match self {
            Piece::Line(from, to) => from.lerp(*to, t),
            Piece::Cubic(segment) => segment.point_at(t),
        }
    }

    fn end(&self) -> Point {
        match self {
            Piece::Line(_, to) => *to,
            Piece::Cubic(segment) => segment.end,
        }
    }
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First point of the path, if any command places one
    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        })
    }

    /// Approximate total drawn length
    pub fn length(&self) -> f32 {
        self.pieces().iter().map(Piece::length).sum()
    }

    /// End point of the path trimmed to `[0, fraction]` of its length.
    ///
    /// Returns `None` for an empty path. `fraction` is clamped to [0, 1].
    pub fn point_at_fraction(&self, fraction: f32) -> Option<Point> {
        let start = self.start_point()?;
        let pieces = self.pieces();
        let Some(last) = pieces.last() else {
            return Some(start);
        };

        let fraction = fraction.clamp(0.0, 1.0);
        if fraction <= 0.0 {
            return Some(start);
        }
        if fraction >= 1.0 {
            return Some(last.end());
        }

        let lengths: SmallVec<[f32; 8]> = pieces.iter().map(Piece::length).collect();
        let total: f32 = lengths.iter().sum();
        if total <= f32::EPSILON {
            return Some(start);
        }

        let mut remaining = fraction * total;
        for (piece, length) in pieces.iter().zip(lengths.iter()) {
            if remaining <= *length {
                if *length <= f32::EPSILON {
                    return Some(piece.end());
                }
                return Some(piece.point_at(remaining / length));
            }
            remaining -= *length;
        }

        Some(last.end())
    }

    fn pieces(&self) -> SmallVec<[Piece; 8]> {
        let mut pieces = SmallVec::new();
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    current = Some(p);
                    subpath_start = Some(p);
                }
                PathCommand::LineTo(p) => {
                    let from = current.unwrap_or(p);
                    pieces.push(Piece::Line(from, p));
                    current = Some(p);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let from = current.unwrap_or(end);
                    pieces.push(Piece::Cubic(CubicSegment::new(from, control1, control2, end)));
                    current = Some(end);
                }
                PathCommand::Close => {
                    if let (Some(from), Some(to)) = (current, subpath_start) {
                        pieces.push(Piece::Line(from, to));
                        current = Some(to);
                    }
                }
            }
        }

        pieces
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
