//! Position updater
//!
//! Evaluates the choreography at a progress value and writes each ball's
//! position. Track motion is eased with [`Easing::EaseOutIn`] and evaluated
//! on the segment's own curve parameter; bounce motion is linear along the
//! bounce polyline. A ball with no active window keeps its last position.

use ballloop_core::Point;

use crate::ball::{Ball, BallPositions};
use crate::bounce::bounce_path;
use crate::choreography::{Choreography, Motion, ITERATIONS};
use crate::easing::Easing;
use crate::track::{initial_position, Track};

/// Easing applied to main-track transitions
const TRACK_EASING: Easing = Easing::EaseOutIn;

/// Easing applied along bounce paths
const BOUNCE_EASING: Easing = Easing::Linear;

/// Advance `positions` to `progress`.
pub fn update_positions(
    positions: &mut BallPositions,
    track: &Track,
    choreography: &Choreography,
    progress: f32,
    bounce_enabled: bool,
) {
    for iteration in 0..ITERATIONS {
        for ball in Ball::ALL {
            let Some(motion) = choreography.motion(ball, iteration, progress) else {
                continue;
            };
            if let Some(point) = evaluate(ball, motion, track, bounce_enabled) {
                positions.set(ball, point);
            }
        }
    }

    if progress < 0.0 {
        let first = Ball::ALL[0];
        positions.set(first, initial_position(first, track, progress));
    }
}

fn evaluate(ball: Ball, motion: Motion, track: &Track, bounce_enabled: bool) -> Option<Point> {
    match motion {
        Motion::Track { segment, local } => {
            Some(track.segment(segment).point_at(TRACK_EASING.apply(local)))
        }
        Motion::Bounce { bounce_num, local } => {
            bounce_path(ball, bounce_num, track.size(), bounce_enabled)
                .point_at_fraction(BOUNCE_EASING.apply(local))
        }
    }
}

/// Staggered starting positions of all balls at `progress`
pub fn seed_positions(track: &Track, progress: f32) -> BallPositions {
    let mut positions = BallPositions::new();
    for ball in Ball::ALL {
        positions.set(ball, initial_position(ball, track, progress));
    }
    positions
}

/// Positions at `progress` starting from the seeded layout.
///
/// Matches a continuously ticked loader except for the small residual a
/// running loader keeps from its last in-window sample. A ball that left its
/// window between ticks shows the seeded anchor here instead.
pub fn positions_at(track: &Track, progress: f32, bounce_enabled: bool) -> BallPositions {
    let mut positions = seed_positions(track, progress);
    update_positions(
        &mut positions,
        track,
        &Choreography::new(),
        progress,
        bounce_enabled,
    );
    positions
}
