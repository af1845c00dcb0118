//! Choreography tables
//!
//! Two fixed schedules, one row per ball and one column per loop iteration,
//! say when each ball travels along a track segment (main windows) and when
//! it plays a bounce (bounce windows). The windows were measured against the
//! rendered curve and eased motion, so they are calibration data rather than
//! the output of a formula. Ball 4's main row in particular does not follow
//! the pattern of the others and must stay as is.

use crate::ball::Ball;
use crate::bounce::bounce_number;
use crate::track::SEGMENT_COUNT;

/// Loop iterations per animation cycle
pub const ITERATIONS: usize = 4;

type WindowTable = [[TimeWindow; ITERATIONS]; Ball::COUNT];

/// A span of normalized progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    pub start: f32,
    pub end: f32,
}

impl TimeWindow {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Strictly inside the window; the boundaries belong to no window
    pub fn contains(&self, progress: f32) -> bool {
        progress > self.start && progress < self.end
    }

    /// Position of `progress` within the window, 0 at `start` and 1 at `end`.
    ///
    /// # Panics
    ///
    /// Panics on an empty window; the tables never contain one.
    pub fn local_progress(&self, progress: f32) -> f32 {
        let span = self.end - self.start;
        assert!(
            span > 0.0,
            "empty time window {:?}: calibration tables are broken",
            self
        );
        (progress - self.start) / span
    }

    /// True when the open intervals of both windows intersect
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

const fn w(start: f32, end: f32) -> TimeWindow {
    TimeWindow::new(start, end)
}

/// Track traversal windows
pub const MAIN_WINDOWS: WindowTable = [
    [w(0.0, 0.05), w(0.238, 0.301), w(0.488, 0.551), w(0.738, 0.801)],
    [w(0.047, 0.097), w(0.298, 0.348), w(0.548, 0.598), w(0.798, 0.848)],
    [w(0.346, 0.396), w(0.596, 0.646), w(0.845, 0.895), w(0.095, 0.145)],
    [w(0.643, 0.693), w(0.893, 0.943), w(0.143, 0.193), w(0.394, 0.444)],
    [w(0.191, 0.241), w(0.44, 0.49), w(0.691, 0.741), w(0.941, 1.0)],
];

/// Bounce windows
pub const BOUNCE_WINDOWS: WindowTable = [
    [w(0.05, 0.06), w(0.301, 0.311), w(0.551, 0.561), w(0.801, 0.811)],
    [w(0.097, 0.107), w(0.348, 0.358), w(0.598, 0.608), w(0.848, 0.858)],
    [w(0.396, 0.406), w(0.646, 0.656), w(0.895, 0.905), w(0.145, 0.155)],
    [w(0.193, 0.203), w(0.444, 0.454), w(0.693, 0.703), w(0.943, 0.953)],
    [w(0.241, 0.251), w(0.49, 0.5), w(0.741, 0.751), w(0.0, 0.01)],
];

/// What a ball is doing at some instant of one loop iteration
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Travelling along track segment `segment`, `local` of the way through
    /// its window (before easing)
    Track { segment: usize, local: f32 },
    /// Playing bounce `bounce_num`, `local` of the way through its window
    Bounce { bounce_num: usize, local: f32 },
}

/// The fixed schedule of main and bounce windows
#[derive(Clone, Copy, Debug)]
pub struct Choreography {
    main: &'static WindowTable,
    bounce: &'static WindowTable,
}

impl Choreography {
    pub fn new() -> Self {
        Self {
            main: &MAIN_WINDOWS,
            bounce: &BOUNCE_WINDOWS,
        }
    }

    /// Main-track window of `ball` for `iteration` (0..4)
    pub fn main(&self, ball: Ball, iteration: usize) -> TimeWindow {
        self.main[ball.index()][iteration]
    }

    /// Bounce window of `ball` for `iteration` (0..4)
    pub fn bounce(&self, ball: Ball, iteration: usize) -> TimeWindow {
        self.bounce[ball.index()][iteration]
    }

    /// Every window a ball uses, main windows first
    pub fn windows(&self, ball: Ball) -> impl Iterator<Item = TimeWindow> + '_ {
        let row = ball.index();
        self.main[row].iter().chain(self.bounce[row].iter()).copied()
    }

    /// Track segment `ball` travels along during `iteration`
    pub fn segment_for(ball: Ball, iteration: usize) -> usize {
        match ball.number() {
            2 | 4 => (iteration + 1) % SEGMENT_COUNT,
            3 => (iteration + 3) % SEGMENT_COUNT,
            _ => iteration % SEGMENT_COUNT,
        }
    }

    /// Active motion of `ball` during `iteration` at `progress`, if any
    pub fn motion(&self, ball: Ball, iteration: usize, progress: f32) -> Option<Motion> {
        let main = self.main(ball, iteration);
        let bounce = self.bounce(ball, iteration);
        debug_assert!(
            !(main.contains(progress) && bounce.contains(progress)),
            "{ball} has overlapping windows at {progress}"
        );

        if bounce.contains(progress) {
            Some(Motion::Bounce {
                bounce_num: bounce_number(ball, iteration),
                local: bounce.local_progress(progress),
            })
        } else if main.contains(progress) {
            Some(Motion::Track {
                segment: Self::segment_for(ball, iteration),
                local: main.local_progress(progress),
            })
        } else {
            None
        }
    }
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new()
    }
}
