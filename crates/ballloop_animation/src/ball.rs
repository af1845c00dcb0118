//! Ball identifiers and per-ball state

use std::fmt;
use std::ops::Index;

use ballloop_core::Point;

use crate::error::{LoaderError, Result};

/// A ball number, always in `1..=5`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ball(u8);

impl Ball {
    pub const COUNT: usize = 5;

    pub const ALL: [Ball; Ball::COUNT] = [Ball(1), Ball(2), Ball(3), Ball(4), Ball(5)];

    pub fn new(number: u8) -> Result<Self> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LoaderError::BallOutOfRange(number))
        }
    }

    /// 1-based ball number
    pub const fn number(self) -> u8 {
        self.0
    }

    /// 0-based index into per-ball tables
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub const fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }
}

impl TryFrom<u8> for Ball {
    type Error = LoaderError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ball {}", self.0)
    }
}

/// Current position of every ball, `None` until first placed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BallPositions {
    slots: [Option<Point>; Ball::COUNT],
}

impl BallPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ball: Ball) -> Option<Point> {
        self.slots[ball.index()]
    }

    pub fn set(&mut self, ball: Ball, position: Point) {
        self.slots[ball.index()] = Some(position);
    }

    pub fn clear(&mut self) {
        self.slots = [None; Ball::COUNT];
    }

    /// True once every ball has a position
    pub fn is_placed(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ball, Option<Point>)> + '_ {
        Ball::ALL.iter().map(move |ball| (*ball, self.get(*ball)))
    }
}

impl Index<Ball> for BallPositions {
    type Output = Option<Point>;

    fn index(&self, ball: Ball) -> &Self::Output {
        &self.slots[ball.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_range() {
        assert!(Ball::new(1).is_ok());
        assert!(Ball::new(5).is_ok());
        assert_eq!(Ball::new(0), Err(LoaderError::BallOutOfRange(0)));
        assert_eq!(Ball::try_from(6), Err(LoaderError::BallOutOfRange(6)));
    }

    #[test]
    fn test_ball_indexing() {
        let numbers: Vec<u8> = Ball::ALL.iter().map(|b| b.number()).collect();
        let indices: Vec<usize> = Ball::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert!(Ball::ALL[0].is_odd());
        assert!(!Ball::ALL[1].is_odd());
    }

    #[test]
    fn test_positions_start_unplaced() {
        let mut positions = BallPositions::new();
        assert!(!positions.is_placed());
        assert!(positions.iter().all(|(_, p)| p.is_none()));

        for ball in Ball::ALL {
            positions.set(ball, Point::new(ball.number() as f32, 0.0));
        }
        assert!(positions.is_placed());
        assert_eq!(positions[Ball::ALL[2]], Some(Point::new(3.0, 0.0)));

        positions.clear();
        assert_eq!(positions.get(Ball::ALL[2]), None);
    }
}
