//! Ball factory: build one of a closed set of variants from a type tag.

mod ball;

pub use ball::{AnyBall, Ball, BallFactory, BallKind, Basketball, Football};
