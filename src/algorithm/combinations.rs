//! Enumeration of valid side pairings
//!
//! A pairing is an involution of the side indices: every side maps to one
//! partner (possibly itself) and the partner maps back. Enumeration is a
//! recursive backtracking search; the count grows combinatorially (4, 10,
//! 26, 76, .. for n = 3, 4, 5, 6), so side counts are capped.

use crate::io::configuration::MAX_COMBINATION_SIDES;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::combination::{Combination, SideMatch};

/// Enumerate every involutive pairing of `nr_sides` sides
///
/// At position `i`, an entry forced by an earlier pair assignment is
/// copied; otherwise the search branches over every unused partner
/// `j >= i`, including `i` itself for a self-pairing. Branches are taken
/// in ascending order, so the output order is deterministic.
///
/// # Errors
///
/// Returns an invalid-parameter error when `nr_sides` is below 3 or above
/// [`MAX_COMBINATION_SIDES`].
pub fn find_combinations(nr_sides: usize) -> Result<Vec<Combination>> {
    if nr_sides < 3 {
        return Err(invalid_parameter(
            "nr_sides",
            &nr_sides,
            &"a polygon needs at least 3 sides",
        ));
    }
    if nr_sides > MAX_COMBINATION_SIDES {
        return Err(invalid_parameter(
            "nr_sides",
            &nr_sides,
            &format!("enumeration is capped at {MAX_COMBINATION_SIDES} sides"),
        ));
    }

    let mut results = Vec::new();
    let mut partial = Vec::with_capacity(nr_sides);
    extend_pairing(nr_sides, &mut partial, &mut results);
    Ok(results)
}

fn extend_pairing(nr_sides: usize, partial: &mut Vec<i32>, results: &mut Vec<Combination>) {
    let index = partial.len();
    if index == nr_sides {
        results.push(Combination::from_raw(partial.clone()));
        return;
    }

    // An earlier side may have already claimed this position as its partner
    if let Some(forced) = partial.iter().position(|&p| p == index as i32) {
        partial.push(forced as i32);
        extend_pairing(nr_sides, partial, results);
        partial.pop();
        return;
    }

    for candidate in index..nr_sides {
        if partial.contains(&(candidate as i32)) {
            continue;
        }
        partial.push(candidate as i32);
        extend_pairing(nr_sides, partial, results);
        partial.pop();
    }
}

/// Extend combinations with mirror-pairing variants
///
/// For every non-empty subset of a combination's proper pairs (side `i`
/// paired with a larger side), a variant is emitted in which both entries
/// of each chosen pair are re-encoded as mirror pairings. The input
/// combinations are all retained at the front of the result. Note the
/// blow-up: a combination with `p` pairs contributes `2^p - 1` variants.
pub fn add_mirror_combinations(combinations: Vec<Combination>) -> Vec<Combination> {
    let mut extended = combinations;
    let mut variants = Vec::new();

    for combination in &extended {
        let pairs: Vec<usize> = (0..combination.sides())
            .filter(|&i| {
                combination
                    .partner(i)
                    .is_some_and(|m| !m.mirrored && m.side > i)
            })
            .collect();

        // Every non-empty subset of the pair list, by counter bits
        for subset in 1..(1_u32 << pairs.len()) {
            let mut entries = combination.entries().to_vec();
            for (bit, &side) in pairs.iter().enumerate() {
                if subset & (1 << bit) == 0 {
                    continue;
                }
                let Some(matched) = combination.partner(side) else {
                    continue;
                };
                if let Some(slot) = entries.get_mut(side) {
                    *slot = SideMatch {
                        side: matched.side,
                        mirrored: true,
                    }
                    .to_entry();
                }
                if let Some(slot) = entries.get_mut(matched.side) {
                    *slot = SideMatch {
                        side,
                        mirrored: true,
                    }
                    .to_entry();
                }
            }
            variants.push(Combination::from_raw(entries));
        }
    }

    extended.append(&mut variants);
    extended
}
