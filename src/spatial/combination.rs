//! Side-pairing combinations
//!
//! A combination assigns every side of an n-gon a partner side. Entry `p`
//! at side `i` means: `p >= 0` pairs side `i` with side `p` of a same-
//! handed copy of the tile (`p == i` folds the side onto itself), while a
//! negative entry `-k-1` pairs side `i` with side `k` of a mirrored copy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The partner a side maps to, with mirror handedness resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideMatch {
    /// Index of the matched side on the neighboring tile
    pub side: usize,
    /// Whether the neighbor is a mirrored copy
    pub mirrored: bool,
}

impl SideMatch {
    /// Decode a raw combination entry
    pub const fn from_entry(entry: i32) -> Self {
        if entry >= 0 {
            Self {
                side: entry as usize,
                mirrored: false,
            }
        } else {
            Self {
                side: (-entry - 1) as usize,
                mirrored: true,
            }
        }
    }

    /// Re-encode as a raw combination entry
    pub const fn to_entry(self) -> i32 {
        if self.mirrored {
            -(self.side as i32) - 1
        } else {
            self.side as i32
        }
    }
}

/// A validated involutive side pairing for one polygon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination {
    pairing: Vec<i32>,
}

impl Combination {
    /// Validate a raw pairing sequence
    ///
    /// # Errors
    ///
    /// Returns a description of the violation when the sequence has fewer
    /// than 3 entries, an entry out of range, or is not an involution
    /// (following the pairing twice from any side must return to it with
    /// matching mirror sign).
    pub fn new(pairing: Vec<i32>) -> Result<Self, String> {
        let n = pairing.len();
        if n < 3 {
            return Err(format!("a polygon needs at least 3 sides, got {n}"));
        }
        for (side, &entry) in pairing.iter().enumerate() {
            let matched = SideMatch::from_entry(entry);
            if matched.side >= n {
                return Err(format!("side {side} pairs out of range entry {entry}"));
            }
            let back = pairing.get(matched.side).copied().unwrap_or(i32::MAX);
            let expected = SideMatch {
                side,
                mirrored: matched.mirrored,
            }
            .to_entry();
            if back != expected {
                return Err(format!(
                    "pairing is not involutive: side {side} -> {} -> {back}",
                    matched.side
                ));
            }
        }
        Ok(Self { pairing })
    }

    /// Construct without validation, for sequences built by enumeration
    pub(crate) const fn from_raw(pairing: Vec<i32>) -> Self {
        Self { pairing }
    }

    /// Number of polygon sides
    pub const fn sides(&self) -> usize {
        self.pairing.len()
    }

    /// Partner of `side`, or `None` if the index is out of range
    pub fn partner(&self, side: usize) -> Option<SideMatch> {
        self.pairing.get(side).map(|&e| SideMatch::from_entry(e))
    }

    /// Raw entries, one per side
    pub fn entries(&self) -> &[i32] {
        &self.pairing
    }

    /// Whether `side` is paired with itself on a same-handed copy
    pub fn is_self_paired(&self, side: usize) -> bool {
        self.pairing.get(side).copied() == Some(side as i32)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.pairing.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", entries.join(","))
    }
}
