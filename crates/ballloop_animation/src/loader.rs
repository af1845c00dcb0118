//! Loader handle
//!
//! [`BallLoader`] owns everything one running loader needs: its config, the
//! clock, the track for the current viewport and the ball positions. Hosts
//! drive it with [`BallLoader::tick`] (or [`BallLoader::update`] for an
//! explicit progress) and read [`BallLoader::positions`] back.

use ballloop_core::{Color, Size};
use smallvec::SmallVec;
use tracing::debug;

use crate::ball::{Ball, BallPositions};
use crate::choreography::Choreography;
use crate::clock::AnimationClock;
use crate::error::Result;
use crate::sprite::{ball_colors, BallSprite};
use crate::track::Track;
use crate::updater::{seed_positions, update_positions};

/// Loader configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderConfig {
    /// Seconds per full loop of the animation
    pub duration: f32,
    pub primary_color: Color,
    pub secondary_color: Color,
    /// Flips which balls deflect up and which deflect down when bouncing
    pub bounce: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            duration: 15.0,
            primary_color: Color::from_hex(0x1E88E5),
            secondary_color: Color::from_hex(0xFB8C00),
            bounce: false,
        }
    }
}

impl LoaderConfig {
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_colors(mut self, primary: Color, secondary: Color) -> Self {
        self.primary_color = primary;
        self.secondary_color = secondary;
        self
    }

    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }
}

/// A running loader animation
#[derive(Clone, Debug)]
pub struct BallLoader {
    config: LoaderConfig,
    clock: AnimationClock,
    choreography: Choreography,
    track: Option<Track>,
    positions: BallPositions,
}

impl BallLoader {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        let clock = AnimationClock::new(config.duration)?;
        debug!(
            "Loader created: {}s loop at {} ticks/s, bounce={}",
            config.duration,
            clock.ticks_per_second(),
            config.bounce
        );

        Ok(Self {
            config,
            clock,
            choreography: Choreography::new(),
            track: None,
            positions: BallPositions::new(),
        })
    }

    /// Supply the viewport size.
    ///
    /// Rebuilds the track and re-seeds the balls when the size changed.
    /// Returns whether a rebuild happened.
    pub fn set_viewport(&mut self, size: Size) -> Result<bool> {
        if self.track.as_ref().map(Track::size) == Some(size) {
            return Ok(false);
        }

        let track = Track::try_new(size)?;
        debug!("Viewport set to {}x{}", size.width, size.height);

        let progress = self.clock.progress();
        self.positions = seed_positions(&track, progress);
        self.track = Some(track);
        self.apply(progress);
        Ok(true)
    }

    /// Advance the clock one tick and update positions
    pub fn tick(&mut self) {
        self.clock.tick();
        self.apply(self.clock.progress());
    }

    /// Update positions for an explicit progress, leaving the clock alone
    pub fn update(&mut self, progress: f32) {
        self.apply(progress);
    }

    fn apply(&mut self, progress: f32) {
        let Some(track) = &self.track else {
            return;
        };
        update_positions(
            &mut self.positions,
            track,
            &self.choreography,
            progress,
            self.config.bounce,
        );
    }

    pub fn positions(&self) -> &BallPositions {
        &self.positions
    }

    /// Draw descriptions for every placed ball
    pub fn sprites(&self) -> SmallVec<[BallSprite; Ball::COUNT]> {
        let Some(track) = &self.track else {
            return SmallVec::new();
        };
        let colors = ball_colors(self.config.primary_color, self.config.secondary_color);

        self.positions
            .iter()
            .filter_map(|(ball, position)| {
                position.map(|center| BallSprite::new(ball, center, track.size(), colors[ball.index()]))
            })
            .collect()
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Current normalized progress of the clock
    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    /// Rewind to the start of the loop
    pub fn reset(&mut self) {
        self.clock.reset();
        if let Some(track) = &self.track {
            self.positions = seed_positions(track, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoaderError;

    #[test]
    fn test_unplaced_until_viewport() {
        let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
        loader.tick();
        assert!(loader.positions().iter().all(|(_, p)| p.is_none()));
        assert!(loader.sprites().is_empty());
        assert!(loader.track().is_none());
    }

    #[test]
    fn test_viewport_seeds_positions() {
        let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
        assert!(loader.set_viewport(Size::new(200.0, 300.0)).unwrap());

        let track = loader.track().unwrap().clone();
        assert_eq!(loader.positions(), &seed_positions(&track, 0.0));
        assert_eq!(loader.sprites().len(), Ball::COUNT);
    }

    #[test]
    fn test_same_viewport_does_not_rebuild() {
        let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
        assert!(loader.set_viewport(Size::new(200.0, 300.0)).unwrap());
        assert!(!loader.set_viewport(Size::new(200.0, 300.0)).unwrap());
        assert!(loader.set_viewport(Size::new(400.0, 300.0)).unwrap());
        assert_eq!(loader.track().unwrap().size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_bad_viewport_keeps_previous_track() {
        let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
        loader.set_viewport(Size::new(200.0, 300.0)).unwrap();

        let err = loader.set_viewport(Size::new(0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            LoaderError::InvalidViewport {
                width: 0.0,
                height: 0.0
            }
        );
        assert_eq!(loader.track().unwrap().size(), Size::new(200.0, 300.0));
    }

    #[test]
    fn test_bad_duration() {
        let config = LoaderConfig::default().with_duration(-1.0);
        assert!(matches!(
            BallLoader::new(config),
            Err(LoaderError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_tick_moves_first_ball() {
        let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
        loader.set_viewport(Size::new(200.0, 300.0)).unwrap();
        let start = loader.positions().get(Ball::ALL[0]);

        // 15s at 70 ticks/s: ball 1 is on segment 0 for the first 52 ticks
        for _ in 0..20 {
            loader.tick();
        }
        assert_ne!(loader.positions().get(Ball::ALL[0]), start);
    }

    #[test]
    fn test_reset_reseeds() {
        let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
        loader.set_viewport(Size::new(200.0, 300.0)).unwrap();
        for _ in 0..200 {
            loader.tick();
        }
        loader.reset();

        let track = loader.track().unwrap().clone();
        assert_eq!(loader.progress(), 0.0);
        assert_eq!(loader.positions(), &seed_positions(&track, 0.0));
    }
}
