//! Track geometry
//!
//! Four anchors sit on a horizontal line through the middle of the viewport,
//! at x = 0, w/3, 2w/3 and w. Segment `i` runs from anchor `i` to anchor
//! `(i + 1) % 4` as a cubic Bezier, and the four segments close into a loop:
//!
//! ```text
//!   seg 0: 0 -> 1, bulges up to h/6
//!   seg 1: 1 -> 2, dips to the bottom edge
//!   seg 2: 2 -> 3, rises to the top edge
//!   seg 3: 3 -> 0, sweeps back along the bottom edge
//! ```

use ballloop_core::{CubicSegment, Path, Point, Size};
use tracing::debug;

use crate::ball::Ball;
use crate::error::{LoaderError, Result};

/// Number of anchors and of curve segments in the loop
pub const SEGMENT_COUNT: usize = 4;

/// Progress span of one quarter-loop stagger window
const START_WINDOW_SPAN: f32 = 0.05;

/// Number of stagger windows scanned when seeding a ball
const START_LOOKAHEAD: usize = 5;

/// The closed four-segment loop for one viewport size
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    size: Size,
    anchors: [Point; SEGMENT_COUNT],
    segments: [CubicSegment; SEGMENT_COUNT],
}

impl Track {
    /// Build the track for a viewport.
    ///
    /// Any size is accepted; degenerate sizes produce a degenerate loop.
    /// Use [`Track::try_new`] to reject them.
    pub fn new(size: Size) -> Self {
        let w = size.width;
        let h = size.height;

        let anchors = anchor_points(size);
        let controls = [
            [Point::new(0.0, h / 6.0), Point::new(w / 3.0, h / 6.0)],
            [Point::new(w / 3.0, h), Point::new(w / 3.0 * 2.0, h)],
            [Point::new(w / 3.0 * 2.0, 0.0), Point::new(w, 0.0)],
            [Point::new(w, h), Point::new(0.0, h)],
        ];

        let segments = std::array::from_fn(|i| {
            CubicSegment::new(
                anchors[i],
                controls[i][0],
                controls[i][1],
                anchors[(i + 1) % SEGMENT_COUNT],
            )
        });

        debug!("Built track for {}x{}", w, h);

        Self {
            size,
            anchors,
            segments,
        }
    }

    /// Build the track, rejecting non-finite or non-positive sizes
    pub fn try_new(size: Size) -> Result<Self> {
        if !size.is_drawable() {
            return Err(LoaderError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self::new(size))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn anchors(&self) -> &[Point; SEGMENT_COUNT] {
        &self.anchors
    }

    /// Anchor `index`, wrapping around the loop
    pub fn anchor(&self, index: usize) -> Point {
        self.anchors[index % SEGMENT_COUNT]
    }

    pub fn segments(&self) -> &[CubicSegment; SEGMENT_COUNT] {
        &self.segments
    }

    /// Segment `index`, wrapping around the loop
    pub fn segment(&self, index: usize) -> &CubicSegment {
        &self.segments[index % SEGMENT_COUNT]
    }

    /// One path per segment, for hosts that stroke the track
    pub fn paths(&self) -> [Path; SEGMENT_COUNT] {
        std::array::from_fn(|i| self.segments[i].to_path())
    }
}

/// Build the track for a `width` x `height` viewport
pub fn build_track(width: f32, height: f32) -> Track {
    Track::new(Size::new(width, height))
}

fn anchor_points(size: Size) -> [Point; SEGMENT_COUNT] {
    std::array::from_fn(|i| Point::new(size.width / 3.0 * i as f32, size.height / 2.0))
}

/// Staggered starting anchor of `ball` at `progress`.
///
/// Scans the next stagger windows (each 0.05 of the loop wide, offset by the
/// ball number) for the first one not yet elapsed and returns its anchor.
pub fn initial_position(ball: Ball, track: &Track, progress: f32) -> Point {
    let number = ball.number() as f32;

    for i in 0..START_LOOKAHEAD {
        if progress < (number + i as f32 * 5.0) * START_WINDOW_SPAN {
            return track.anchor(ball.index() + i);
        }
    }

    track.anchor(ball.index())
}
