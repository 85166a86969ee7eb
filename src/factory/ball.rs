//! Ball variants and the factory that creates them.

use crate::error::{HubError, Result};
use std::fmt;
use std::str::FromStr;

/// Behavior shared by every ball variant.
pub trait Ball {
    /// The variant this ball belongs to.
    fn kind(&self) -> BallKind;

    /// Roll the ball.
    fn roll(&self) -> String {
        format!("The {} is rolling.", self.kind())
    }
}

/// The set of ball variants the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallKind {
    /// Built from the `football` or `soccer` tags.
    Football,
    /// Built from the `basketball` tag.
    Basketball,
}

impl BallKind {
    /// Name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Basketball => "basketball",
        }
    }
}

impl FromStr for BallKind {
    type Err = HubError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "football" | "soccer" => Ok(Self::Football),
            "basketball" => Ok(Self::Basketball),
            other => Err(HubError::InvalidArgument(format!(
                "Unsupported ball type '{}'. Supported: football, soccer, basketball",
                other
            ))),
        }
    }
}

impl fmt::Display for BallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ball that can be kicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Football;

impl Football {
    /// Kick the ball.
    pub fn kick(&self) -> String {
        "You kicked the football".to_string()
    }
}

impl Ball for Football {
    fn kind(&self) -> BallKind {
        BallKind::Football
    }
}

/// A ball that can be bounced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Basketball;

impl Basketball {
    /// Bounce the ball.
    pub fn bounce(&self) -> String {
        "You bounced the basketball.".to_string()
    }
}

impl Ball for Basketball {
    fn kind(&self) -> BallKind {
        BallKind::Basketball
    }
}

/// A ball built by [`BallFactory`].
///
/// Exposes the shared [`Ball`] operations directly and the variant-specific
/// ones through [`AnyBall::as_football`] and [`AnyBall::as_basketball`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyBall {
    /// A football.
    Football(Football),
    /// A basketball.
    Basketball(Basketball),
}

impl AnyBall {
    /// The football, if this is one.
    pub fn as_football(&self) -> Option<&Football> {
        match self {
            Self::Football(ball) => Some(ball),
            Self::Basketball(_) => None,
        }
    }

    /// The basketball, if this is one.
    pub fn as_basketball(&self) -> Option<&Basketball> {
        match self {
            Self::Basketball(ball) => Some(ball),
            Self::Football(_) => None,
        }
    }
}

impl Ball for AnyBall {
    fn kind(&self) -> BallKind {
        match self {
            Self::Football(ball) => ball.kind(),
            Self::Basketball(ball) => ball.kind(),
        }
    }
}

impl From<BallKind> for AnyBall {
    fn from(kind: BallKind) -> Self {
        match kind {
            BallKind::Football => Self::Football(Football),
            BallKind::Basketball => Self::Basketball(Basketball),
        }
    }
}

/// Creates balls from type tags.
///
/// # Examples
///
/// ```rust
/// use signal_hub::factory::{Ball, BallFactory};
///
/// let factory = BallFactory::new();
/// let ball = factory.create_ball("basketball").unwrap();
///
/// assert_eq!(ball.roll(), "The basketball is rolling.");
/// assert_eq!(ball.as_basketball().unwrap().bounce(), "You bounced the basketball.");
///
/// assert!(factory.create_ball("frisbee").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BallFactory;

impl BallFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        Self
    }

    /// Build the ball named by `tag`.
    ///
    /// # Errors
    ///
    /// Returns `HubError::InvalidArgument` if the tag is not one of
    /// `football`, `soccer` or `basketball`.
    pub fn create_ball(&self, tag: &str) -> Result<AnyBall> {
        let kind = match tag.parse::<BallKind>() {
            Ok(kind) => kind,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(tag, "rejected unknown ball type");
                return Err(err);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(tag, %kind, "created ball");

        Ok(AnyBall::from(kind))
    }
}
