//! Bounce overlays
//!
//! A bounce is a three-point vertical polyline at one of the track anchors:
//! down (or up) to a deflected y, then back to the centre line. Which way a
//! ball deflects alternates with the bounce number and is flipped for odd or
//! even balls depending on the `bounce` configuration flag.

use ballloop_core::{Path, PathBuilder, Size};

use crate::ball::Ball;
use crate::track::SEGMENT_COUNT;

/// Height divisor for the deflection that lands below the centre line
const DEFLECT_LOW: f32 = 1.9;

/// Height divisor for the deflection that lands above the centre line
const DEFLECT_HIGH: f32 = 2.1;

/// Bounce number played by `ball` during loop iteration `iteration` (0..4).
///
/// Ball 3 runs one step ahead of the others and wraps back to 1.
pub fn bounce_number(ball: Ball, iteration: usize) -> usize {
    if ball.number() == 3 {
        ((iteration + 2) % 5).max(1)
    } else {
        iteration + 1
    }
}

/// Deflected y coordinate of a bounce
pub fn deflection_y(ball: Ball, bounce_num: usize, height: f32, bounce_enabled: bool) -> f32 {
    let odd_bounce = bounce_num % 2 == 1;
    let divisor = if ball.is_odd() != bounce_enabled {
        if odd_bounce {
            DEFLECT_LOW
        } else {
            DEFLECT_HIGH
        }
    } else if odd_bounce {
        DEFLECT_HIGH
    } else {
        DEFLECT_LOW
    };
    height / divisor
}

/// Out-and-back bounce path for `ball`'s `bounce_num`-th bounce
pub fn bounce_path(ball: Ball, bounce_num: usize, viewport: Size, bounce_enabled: bool) -> Path {
    let anchor = (bounce_num + ball.index() % SEGMENT_COUNT) % SEGMENT_COUNT;
    let x = viewport.width / 3.0 * anchor as f32;
    let rest_y = viewport.height / 2.0;
    let peak_y = deflection_y(ball, bounce_num, viewport.height, bounce_enabled);

    PathBuilder::new()
        .move_to(x, rest_y)
        .line_to(x, peak_y)
        .line_to(x, rest_y)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballloop_core::{PathCommand, Point};

    fn ball(n: u8) -> Ball {
        Ball::new(n).unwrap()
    }

    #[test]
    fn test_bounce_number_offsets() {
        assert_eq!(bounce_number(ball(1), 0), 1);
        assert_eq!(bounce_number(ball(5), 3), 4);

        let ball3: Vec<usize> = (0..4).map(|i| bounce_number(ball(3), i)).collect();
        assert_eq!(ball3, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_ball_three_last_iteration_wraps_to_one() {
        // max(1, (3 + 2) % 5) = max(1, 0) = 1, not 4
        assert_eq!(bounce_number(ball(3), 3), 1);
    }

    #[test]
    fn test_path_is_vertical_out_and_back() {
        let viewport = Size::new(300.0, 380.0);
        let path = bounce_path(ball(1), 1, viewport, false);
        let points: Vec<Point> = path
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();

        // anchor (1 + 0) % 4 = 1 -> x = 100
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.x == 100.0));
        assert_eq!(points[0].y, 190.0);
        assert!((points[1].y - 200.0).abs() < 1e-3);
        assert_eq!(points[2].y, 190.0);
    }

    #[test]
    fn test_anchor_wraps() {
        let viewport = Size::new(300.0, 300.0);
        // ball 4, bounce 4: (4 + 3) % 4 = 3 -> x = 300
        let start = bounce_path(ball(4), 4, viewport, true).start_point().unwrap();
        assert_eq!(start.x, 300.0);
        // ball 5, bounce 1: (1 + 0) % 4 = 1 -> x = 100
        let start = bounce_path(ball(5), 1, viewport, true).start_point().unwrap();
        assert_eq!(start.x, 100.0);
    }

    #[test]
    fn test_direction_alternates_with_bounce_number() {
        let h = 380.0;
        assert_eq!(deflection_y(ball(1), 1, h, false), h / 1.9);
        assert_eq!(deflection_y(ball(1), 2, h, false), h / 2.1);
        assert_eq!(deflection_y(ball(2), 1, h, false), h / 2.1);
        assert_eq!(deflection_y(ball(2), 2, h, false), h / 1.9);
    }

    #[test]
    fn test_bounce_flag_inverts_even_ball() {
        let h = 380.0;
        let off = deflection_y(ball(2), 1, h, false);
        let on = deflection_y(ball(2), 1, h, true);
        let rest = h / 2.0;

        assert_ne!(off, on);
        // One lands above the centre line, the other below
        assert!((off - rest) * (on - rest) < 0.0);
    }

    #[test]
    fn test_bounce_flag_inverts_odd_ball() {
        let h = 380.0;
        for bounce_num in 1..=4 {
            assert_ne!(
                deflection_y(ball(3), bounce_num, h, false),
                deflection_y(ball(3), bounce_num, h, true)
            );
        }
    }

    #[test]
    fn test_peak_at_half_way() {
        let viewport = Size::new(300.0, 380.0);
        let path = bounce_path(ball(2), 2, viewport, false);
        let peak = path.point_at_fraction(0.5).unwrap();
        // anchor (2 + 1) % 4 = 3 -> x = 300
        assert!(peak.approx_eq(Point::new(300.0, 380.0 / 1.9), 1e-3));
        assert_eq!(path.point_at_fraction(1.0), Some(Point::new(300.0, 190.0)));
    }
}
