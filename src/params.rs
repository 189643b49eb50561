//! Closed sets of query parameter values accepted by the news API.
//!
//! Each enum serializes to the literal string the server expects
//! (`gb`, `science-and-nature`, `top`, ...). Values are only ever compared
//! and rendered; the server is the authority on which combinations make sense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a known parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseParamError {
    kind: &'static str,
    value: String,
    expected: String,
}

/// Generates the enum plus `as_str`, `ALL`, `Display` and `FromStr`.
macro_rules! param_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Literal form used on the wire.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseParamError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseParamError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

param_enum! {
    /// Country a source publishes for.
    Country, "country" {
        Au => "au",
        De => "de",
        Gb => "gb",
        In => "in",
        It => "it",
        Us => "us",
    }
}

param_enum! {
    /// Language a source publishes in.
    Language, "language" {
        En => "en",
        De => "de",
        Fr => "fr",
    }
}

param_enum! {
    /// Editorial category of a source.
    Category, "category" {
        Business => "business",
        Entertainment => "entertainment",
        Gaming => "gaming",
        General => "general",
        Music => "music",
        ScienceAndNature => "science-and-nature",
        Sport => "sport",
        Technology => "technology",
    }
}

param_enum! {
    /// Ordering of the articles returned for a source.
    ///
    /// Not every source supports every order; see
    /// [`Source::sort_bys_available`](crate::models::Source::sort_bys_available).
    SortBy, "sort order" {
        Top => "top",
        Latest => "latest",
        Popular => "popular",
    }
}
