//! Ballloop Animation Engine
//!
//! Drives five balls around a closed track of four cubic Bezier segments,
//! producing a looping loader animation with periodic bounce overlays.
//!
//! # Features
//!
//! - **Track**: anchors and curve segments derived from the viewport size
//! - **Easing**: sampled "ease-out-in" curve for track traversal
//! - **Bounces**: short out-and-back vertical polylines at segment boundaries
//! - **Choreography**: fixed time-window tables deciding who moves when
//! - **Clock**: fixed-rate tick counter looping at the configured duration
//!
//! The engine follows a pull model: the host feeds ticks (or an explicit
//! progress) and reads positions back, so it runs headless.
//!
//! ```rust
//! use ballloop_animation::{BallLoader, LoaderConfig};
//! use ballloop_core::Size;
//!
//! let mut loader = BallLoader::new(LoaderConfig::default()).unwrap();
//! loader.set_viewport(Size::new(200.0, 300.0)).unwrap();
//!
//! for _ in 0..10 {
//!     loader.tick();
//! }
//!
//! assert!(loader.positions().iter().all(|(_, p)| p.is_some()));
//! ```

pub mod ball;
pub mod bounce;
pub mod choreography;
pub mod clock;
pub mod easing;
pub mod error;
pub mod loader;
pub mod sprite;
pub mod track;
pub mod updater;

pub use ball::{Ball, BallPositions};
pub use bounce::{bounce_number, bounce_path};
pub use choreography::{Choreography, Motion, TimeWindow};
pub use clock::{ticks_per_second, AnimationClock};
pub use easing::{ease_out_in, Easing};
pub use error::{LoaderError, Result};
pub use loader::{BallLoader, LoaderConfig};
pub use sprite::{BallSprite, SpriteStyle};
pub use track::{build_track, initial_position, Track};
pub use updater::{positions_at, seed_positions, update_positions};
