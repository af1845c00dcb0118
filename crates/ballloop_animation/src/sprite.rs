//! Draw descriptions for the balls
//!
//! The engine never rasterizes. Hosts turn each [`BallSprite`] into a filled
//! or stroked circle.

use ballloop_core::{Color, Point, Size};

use crate::ball::Ball;

/// Viewports narrower than this get hairline outlines
const THIN_OUTLINE_BELOW: f32 = 150.0;

/// How a ball is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteStyle {
    Fill,
    Stroke { line_width: f32 },
}

/// One ball, ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallSprite {
    pub ball: Ball,
    pub center: Point,
    pub diameter: f32,
    pub color: Color,
    pub style: SpriteStyle,
}

/// Colors of balls 1..=5
pub fn ball_colors(primary: Color, secondary: Color) -> [Color; Ball::COUNT] {
    [secondary, primary, primary, secondary, primary]
}

impl BallSprite {
    /// Sprite for `ball` at `center`.
    ///
    /// Balls with an even zero-based index are filled at a sixth of the
    /// viewport width; the others are outlined at a seventh.
    pub fn new(ball: Ball, center: Point, viewport: Size, color: Color) -> Self {
        let (diameter, style) = if ball.index() % 2 == 0 {
            (viewport.width / 6.0, SpriteStyle::Fill)
        } else {
            let line_width = if viewport.width < THIN_OUTLINE_BELOW {
                1.0
            } else {
                2.0
            };
            (viewport.width / 7.0, SpriteStyle::Stroke { line_width })
        };

        Self {
            ball,
            center,
            diameter,
            color,
            style,
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}
