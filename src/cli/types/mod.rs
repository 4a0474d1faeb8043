//! Type-safe wrappers and enums for ESPN Fantasy Football data.

/// Numeric newtype with `new`, a raw accessor, `Display`, trimmed `FromStr`
/// and transparent serde.
macro_rules! numeric_newtype {
    ($(#[$meta:meta])* $name:ident($inner:ty), $accessor:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            pub fn new(value: $inner) -> Self {
                Self(value)
            }

            pub fn $accessor(&self) -> $inner {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::RecapError;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::{LineupSlot, Position};
pub use time::{Season, Week};
