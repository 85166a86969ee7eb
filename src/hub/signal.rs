//! Signals broadcast by the hub.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A discrete notification delivered to every subscribed observer.
///
/// Tags are matched exactly and parsing never fails: anything that is not
/// one of `INC`, `INCREMENT`, `DEC`, `DECREMENT` or `RESET` becomes
/// [`Signal::Unknown`], which the built-in observers treat exactly like
/// [`Signal::Reset`]. Lowercase or padded tags are unknown.
///
/// # Examples
///
/// ```rust
/// use signal_hub::hub::Signal;
///
/// assert_eq!("INC".parse::<Signal>().unwrap(), Signal::Increment);
/// assert_eq!("DECREMENT".parse::<Signal>().unwrap(), Signal::Decrement);
/// assert_eq!("inc".parse::<Signal>().unwrap(), Signal::Unknown);
/// assert_eq!("SHUFFLE".parse::<Signal>().unwrap(), Signal::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Add one to the observer state.
    Increment,
    /// Subtract one from the observer state.
    Decrement,
    /// Restore the observer's initial state.
    Reset,
    /// Any tag outside the known set.
    Unknown,
}

impl Signal {
    /// Map a tag to a signal.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "INC" | "INCREMENT" => Self::Increment,
            "DEC" | "DECREMENT" => Self::Decrement,
            "RESET" => Self::Reset,
            _ => Self::Unknown,
        }
    }

    /// Canonical tag for this signal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Reset => "RESET",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for Signal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
