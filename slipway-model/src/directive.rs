//! Move directives and the parser that builds them.
//!
//! A directive string is one direction symbol followed by an optional step
//! payload: `">"`, `"<2"`, `"=4"`, `">>"`. Parsing never fails. Anything the
//! navigator cannot act on is carried through as-is and turned into a no-op
//! by the resolver.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which way a move travels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `>`: towards the end.
    Forward,
    /// `<`: towards the start.
    Backward,
    /// `=`: absolute jump to an index.
    Jump,
    /// Any other leading symbol. Empty for an empty directive string.
    Unrecognized(String),
}

impl Direction {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '>' => Direction::Forward,
            '<' => Direction::Backward,
            '=' => Direction::Jump,
            other => Direction::Unrecognized(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Direction::Forward => ">",
            Direction::Backward => "<",
            Direction::Jump => "=",
            Direction::Unrecognized(raw) => raw,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Step payload of a directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Steps {
    /// `>` sentinel: go to the last reachable index.
    ToLast,
    /// `<` sentinel: go to the first index.
    ToFirst,
    /// Payload with a leading integer (`"3"`, `"-2"`, `"4px"`).
    Count(i64),
    /// Payload with no leading integer, kept verbatim.
    Other(String),
}

impl Steps {
    fn from_payload(payload: &str) -> Self {
        match payload {
            ">" => Steps::ToLast,
            "<" => Steps::ToFirst,
            _ => match leading_int(payload) {
                Some(count) => Steps::Count(count),
                None => Steps::Other(payload.to_string()),
            },
        }
    }

    /// Number of slides a relative move travels. Zero and non-numeric
    /// payloads count as a single step.
    pub fn magnitude(&self) -> usize {
        match self {
            Steps::Count(count) if *count != 0 => {
                usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX)
            }
            _ => 1,
        }
    }

    /// The payload read as an absolute index, for `=` jumps.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Steps::Count(count) => usize::try_from(*count).ok(),
            _ => None,
        }
    }
}

impl Display for Steps {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Steps::ToLast => f.write_str(">"),
            Steps::ToFirst => f.write_str("<"),
            Steps::Count(count) => write!(f, "{count}"),
            Steps::Other(raw) => f.write_str(raw),
        }
    }
}

/// A parsed move request. Built once per move and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDirective {
    pub direction: Direction,
    pub steps: Steps,
}

impl MoveDirective {
    pub fn new(direction: Direction, steps: Steps) -> Self {
        Self { direction, steps }
    }

    /// Decode a directive string.
    ///
    /// The first character selects the direction. With no payload the steps
    /// default to the direction symbol itself, so `">"` means "to the last
    /// slide" and `"<"` means "to the first".
    pub fn parse(input: &str) -> Self {
        let mut chars = input.chars();
        let Some(symbol) = chars.next() else {
            return Self {
                direction: Direction::Unrecognized(String::new()),
                steps: Steps::Other(String::new()),
            };
        };

        let payload = chars.as_str();
        let steps = if payload.is_empty() {
            Steps::from_payload(&symbol.to_string())
        } else {
            Steps::from_payload(payload)
        };

        Self {
            direction: Direction::from_symbol(symbol),
            steps,
        }
    }

    /// Relative move forward by `count` slides.
    pub fn forward(count: i64) -> Self {
        Self::new(Direction::Forward, Steps::Count(count))
    }

    /// Relative move backward by `count` slides.
    pub fn backward(count: i64) -> Self {
        Self::new(Direction::Backward, Steps::Count(count))
    }

    /// Absolute jump to `index`.
    pub fn jump(index: usize) -> Self {
        Self::new(
            Direction::Jump,
            Steps::Count(i64::try_from(index).unwrap_or(i64::MAX)),
        )
    }

    pub fn is_boundary_move(&self) -> bool {
        matches!(
            (&self.direction, &self.steps),
            (Direction::Forward, Steps::ToLast)
                | (Direction::Backward, Steps::ToFirst)
        )
    }
}

impl FromStr for MoveDirective {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for MoveDirective {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for MoveDirective {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl Display for MoveDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_boundary_move() {
            return write!(f, "{}", self.direction);
        }
        write!(f, "{}{}", self.direction, self.steps)
    }
}

// Leading-integer read: optional whitespace, optional sign, then digits.
// Trailing garbage is ignored ("3px" reads as 3).
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
