//! Integration tests for the loader loop
//!
//! These tests drive `BallLoader` the way a host does (viewport, then ticks)
//! and check that:
//! - The clock, choreography and track cooperate over whole loops
//! - Positions stay deterministic and inside the viewport
//! - Resizing rebuilds the track and carries on from the same progress

use ballloop_animation::{
    positions_at, AnimationClock, Ball, BallLoader, Choreography, LoaderConfig, SpriteStyle,
};
use ballloop_core::{Point, Size};

fn ball(n: u8) -> Ball {
    Ball::new(n).unwrap()
}

fn running_loader(config: LoaderConfig, viewport: Size) -> BallLoader {
    let mut loader = BallLoader::new(config).unwrap();
    loader.set_viewport(viewport).unwrap();
    loader
}

/// Tick rates come from the tuned duration table
#[test]
fn test_tick_rate_follows_duration() {
    let loader = BallLoader::new(LoaderConfig::default().with_duration(15.0)).unwrap();
    assert_eq!(loader.clock().ticks_per_second(), 70);

    let loader = BallLoader::new(LoaderConfig::default().with_duration(100.0)).unwrap();
    assert_eq!(loader.clock().ticks_per_second(), 65);
}

/// A whole loop visits every progress value once and wraps to zero
#[test]
fn test_full_loop_wraps() {
    let mut loader = running_loader(LoaderConfig::default().with_duration(12.0), Size::new(200.0, 300.0));
    let ticks_per_loop = 12 * 80;

    let mut last = 0.0;
    for _ in 0..ticks_per_loop {
        loader.tick();
        assert!(loader.progress() > last);
        last = loader.progress();
    }
    assert_eq!(last, 1.0);

    loader.tick();
    assert_eq!(loader.progress(), 0.0);
    assert_eq!(loader.clock().loops(), 1);
}

/// Balls never leave the viewport over several loops
#[test]
fn test_positions_stay_in_viewport() {
    let viewport = Size::new(200.0, 300.0);
    for bounce in [false, true] {
        let mut loader = running_loader(
            LoaderConfig::default().with_duration(13.0).with_bounce(bounce),
            viewport,
        );

        for _ in 0..(13 * 85 * 3) {
            loader.tick();
            for (b, p) in loader.positions().iter() {
                let p = p.unwrap();
                assert!(
                    (-0.01..=200.01).contains(&p.x) && (-0.01..=300.01).contains(&p.y),
                    "{b} left the viewport at {p:?} (bounce={bounce})"
                );
            }
        }
    }
}

/// Two loaders with the same config produce the same frames
#[test]
fn test_frames_are_deterministic() {
    let config = LoaderConfig::default().with_duration(45.0).with_bounce(true);
    let mut a = running_loader(config, Size::new(320.0, 240.0));
    let mut b = running_loader(config, Size::new(320.0, 240.0));

    for _ in 0..2000 {
        a.tick();
        b.tick();
        assert_eq!(a.positions(), b.positions());
    }
}

/// Balls 1-4 end each loop back on the anchor they started from
#[test]
fn test_balls_return_to_start_anchor() {
    let viewport = Size::new(200.0, 300.0);
    let mut loader = running_loader(LoaderConfig::default(), viewport);
    let track = loader.track().unwrap().clone();

    // Late in the loop, just before each ball's final bounce window closes
    for (n, progress) in [(1, 0.8109), (2, 0.8579), (4, 0.9529)] {
        loader.update(progress);
        let p = loader.positions().get(ball(n)).unwrap();
        let anchor = track.anchor(ball(n).index());
        assert!(p.approx_eq(anchor, 0.5), "ball {n} ended at {p:?}, expected {anchor:?}");
    }

    // Ball 3's last bounce of the loop is its iteration-2 window
    loader.update(0.9049);
    let p = loader.positions().get(ball(3)).unwrap();
    assert!(p.approx_eq(track.anchor(2), 0.5));
}

/// The bounce flag only changes bounce frames
#[test]
fn test_bounce_flag_only_affects_bounces() {
    let viewport = Size::new(200.0, 300.0);
    let track = running_loader(LoaderConfig::default(), viewport)
        .track()
        .unwrap()
        .clone();

    // Ball 2 on its first track window
    let off = positions_at(&track, 0.07, false);
    let on = positions_at(&track, 0.07, true);
    assert_eq!(off.get(ball(2)), on.get(ball(2)));

    // Ball 2 half way through its first bounce
    let off = positions_at(&track, 0.102, false).get(ball(2)).unwrap();
    let on = positions_at(&track, 0.102, true).get(ball(2)).unwrap();
    let rest = viewport.height / 2.0;
    assert_eq!(off.x, on.x);
    assert!((off.y - rest) * (on.y - rest) < 0.0, "off={off:?} on={on:?}");
}

/// At most one window is active for any ball at any tick
#[test]
fn test_single_active_window_per_tick() {
    let choreo = Choreography::new();
    let mut clock = AnimationClock::new(15.0).unwrap();

    for _ in 0..(15 * 70) {
        clock.tick();
        let progress = clock.progress();
        for b in Ball::ALL {
            for iteration in 0..4 {
                let main = choreo.main(b, iteration).contains(progress);
                let bounce = choreo.bounce(b, iteration).contains(progress);
                assert!(!(main && bounce), "{b} iteration {iteration} at {progress}");
            }
        }
    }
}

/// Resizing keeps the progress and rescales the positions
#[test]
fn test_resize_rescales_positions() {
    let mut loader = running_loader(LoaderConfig::default(), Size::new(200.0, 300.0));
    for _ in 0..20 {
        loader.tick();
    }
    let before = loader.positions().get(ball(1)).unwrap();

    assert!(loader.set_viewport(Size::new(400.0, 600.0)).unwrap());
    let after = loader.positions().get(ball(1)).unwrap();

    assert!(after.approx_eq(Point::new(before.x * 2.0, before.y * 2.0), 1e-3));
}

/// Sprites mirror the current positions
#[test]
fn test_sprites_follow_positions() {
    let mut loader = running_loader(LoaderConfig::default(), Size::new(210.0, 300.0));
    for _ in 0..30 {
        loader.tick();
    }

    let sprites = loader.sprites();
    assert_eq!(sprites.len(), Ball::COUNT);
    for sprite in &sprites {
        assert_eq!(Some(sprite.center), loader.positions().get(sprite.ball));
    }
    assert_eq!(sprites[0].style, SpriteStyle::Fill);
    assert_eq!(sprites[0].color, loader.config().secondary_color);
    assert_eq!(sprites[1].color, loader.config().primary_color);
}

/// Sampling a progress value lands where a ticked loader is, up to the
/// residual left from each ball's last in-window tick
#[test]
fn test_sampled_positions_track_running_loader() {
    let mut loader = running_loader(LoaderConfig::default(), Size::new(200.0, 300.0));
    let track = loader.track().unwrap().clone();

    for _ in 0..(15 * 70) {
        loader.tick();
        let progress = loader.progress();
        // Ball 5 is mid-flight into anchor 0 when the loop wraps
        if progress >= 1.0 {
            continue;
        }

        let sampled = positions_at(&track, progress, false);
        for (b, p) in loader.positions().iter() {
            let p = p.unwrap();
            let s = sampled.get(b).unwrap();
            assert!(p.approx_eq(s, 3.0), "{b} at {progress}: ran {p:?}, sampled {s:?}");
        }
    }
}
