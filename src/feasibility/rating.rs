//! GREEN / YELLOW / RED classification

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating attached to each metric
///
/// Ordered from best to worst so that `max` picks the weakest metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    Green,
    Yellow,
    Red,
}

impl Rating {
    /// Upper-case tag as shown in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Green => "GREEN",
            Rating::Yellow => "YELLOW",
            Rating::Red => "RED",
        }
    }

    /// Worst of a set of ratings, GREEN when empty
    pub fn worst(ratings: impl IntoIterator<Item = Rating>) -> Rating {
        ratings.into_iter().max().unwrap_or(Rating::Green)
    }

    /// Lower-is-better bands: GREEN strictly below `green_max`, YELLOW up to
    /// and including `yellow_max`
    pub fn below(value: Decimal, green_max: Decimal, yellow_max: Decimal) -> Rating {
        if value < green_max {
            Rating::Green
        } else if value <= yellow_max {
            Rating::Yellow
        } else {
            Rating::Red
        }
    }

    /// Higher-is-better bands, both lower bounds inclusive
    pub fn at_least(value: Decimal, green_min: Decimal, yellow_min: Decimal) -> Rating {
        if value >= green_min {
            Rating::Green
        } else if value >= yellow_min {
            Rating::Yellow
        } else {
            Rating::Red
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
