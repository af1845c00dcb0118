//! Headless frame loop and frame reports

use anyhow::{bail, Result};
use ballloop_animation::{positions_at, AnimationClock, BallLoader, BallPositions, Track};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Instant;

use crate::config::BallloopConfig;

/// Options for a headless run
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Number of ticks to execute
    pub frames: u64,
    /// Report every n-th frame (1 = every frame)
    pub every: u64,
    /// Sleep between ticks to match the loader's tick rate
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: 1,
            every: 1,
            realtime: false,
        }
    }
}

/// Position of one ball in a report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallReport {
    pub ball: u8,
    pub x: f32,
    pub y: f32,
}

/// Machine-readable snapshot of one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub elapsed: f32,
    pub progress: f32,
    pub positions: Vec<BallReport>,
}

impl FrameReport {
    pub fn new(frame: u64, elapsed: f32, progress: f32, positions: &BallPositions) -> Self {
        Self {
            frame,
            elapsed,
            progress,
            positions: positions
                .iter()
                .filter_map(|(ball, point)| {
                    point.map(|p| BallReport {
                        ball: ball.number(),
                        x: p.x,
                        y: p.y,
                    })
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// One human-readable line
    pub fn to_text(&self) -> String {
        let mut line = format!(
            "frame {:>6}  t={:>7.3}s  p={:.4}",
            self.frame, self.elapsed, self.progress
        );
        for pos in &self.positions {
            let _ = write!(line, "  {}:({:.2}, {:.2})", pos.ball, pos.x, pos.y);
        }
        line
    }
}

/// Tick `loader` `opts.frames` times, handing every `opts.every`-th frame to
/// `on_frame`. Returns the number of reported frames.
pub fn run<F>(loader: &mut BallLoader, opts: RunOptions, mut on_frame: F) -> Result<u64>
where
    F: FnMut(&FrameReport) -> Result<()>,
{
    if opts.frames == 0 {
        bail!("frames must be > 0");
    }
    if opts.every == 0 {
        bail!("every must be > 0");
    }
    if loader.track().is_none() {
        bail!("loader has no viewport");
    }

    let interval = loader.clock().tick_interval();
    let started = Instant::now();
    let mut deadline = started;
    let mut reported = 0;

    for frame in 1..=opts.frames {
        loader.tick();

        if frame % opts.every == 0 {
            let clock = loader.clock();
            let report = FrameReport::new(frame, clock.elapsed(), clock.progress(), loader.positions());
            on_frame(&report)?;
            reported += 1;
        }

        if opts.realtime {
            deadline += interval;
            if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
                std::thread::sleep(remaining);
            }
        }
    }

    tracing::debug!(
        "Ran {} frames ({} reported) in {:?}",
        opts.frames,
        reported,
        started.elapsed()
    );

    Ok(reported)
}

/// Positions at one explicit `progress`, without running the clock
pub fn sample(config: &BallloopConfig, progress: f32) -> Result<FrameReport> {
    if !(0.0..=1.0).contains(&progress) {
        bail!("progress must be within [0, 1], got {progress}");
    }

    let loader_config = config.loader_config()?;
    let clock = AnimationClock::new(loader_config.duration)?;
    let track = Track::try_new(config.viewport())?;

    let positions = positions_at(&track, progress, loader_config.bounce);
    let elapsed = progress * clock.duration_secs();
    Ok(FrameReport::new(0, elapsed, progress, &positions))
}
