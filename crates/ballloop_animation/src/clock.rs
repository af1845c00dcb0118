//! Animation clock
//!
//! Counts fixed-rate ticks and loops back to zero once the configured
//! duration has elapsed. Elapsed time is derived from the tick count, so it
//! never accumulates floating-point drift across loops.

use std::time::Duration;

use tracing::trace;

use crate::error::{LoaderError, Result};

/// Number of animation segments the loop is subdivided into
pub const ANIMATION_SEGMENTS: u32 = 20;

/// Tick rate used for durations without a tuned pairing
pub const DEFAULT_TICKS_PER_SECOND: u32 = 65;

/// Tuned (duration in seconds, ticks per second) pairings. The segments are
/// short, so these rates keep each one evenly subdivided.
const TICK_RATES: [(f32, u32); 4] = [(45.0, 45), (15.0, 70), (13.0, 85), (12.0, 80)];

/// Tick rate for an animation of `duration_secs`
pub fn ticks_per_second(duration_secs: f32) -> u32 {
    TICK_RATES
        .iter()
        .find(|(duration, _)| *duration == duration_secs)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_TICKS_PER_SECOND)
}

/// Fixed-rate looping clock
#[derive(Clone, Debug)]
pub struct AnimationClock {
    duration_secs: f32,
    ticks_per_second: u32,
    ticks: u32,
    loops: u64,
}

impl AnimationClock {
    pub fn new(duration_secs: f32) -> Result<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(LoaderError::InvalidDuration(duration_secs));
        }
        Ok(Self {
            duration_secs,
            ticks_per_second: ticks_per_second(duration_secs),
            ticks: 0,
            loops: 0,
        })
    }

    /// Advance one tick; loops back to exactly zero once the duration is reached
    pub fn tick(&mut self) {
        if self.elapsed() >= self.duration_secs {
            self.ticks = 0;
            self.loops += 1;
            trace!("Animation clock wrapped (loop {})", self.loops);
        } else {
            self.ticks += 1;
        }
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
        self.loops = 0;
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Ticks since the current loop started
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Completed loops
    pub fn loops(&self) -> u64 {
        self.loops
    }

    /// Seconds since the current loop started
    pub fn elapsed(&self) -> f32 {
        self.ticks as f32 / self.ticks_per_second as f32
    }

    /// Normalized progress through the loop
    pub fn progress(&self) -> f32 {
        self.elapsed() / self.duration_secs
    }

    /// Wall-clock time between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second as f64)
    }

    pub fn segment_duration(&self) -> f32 {
        self.duration_secs / ANIMATION_SEGMENTS as f32
    }

    /// Progress through the current animation segment
    pub fn segment_progress(&self) -> f32 {
        let segment = self.segment_duration();
        (self.elapsed() % segment) / segment
    }
}
