//! Expected-output evaluation for fixture command sequences
//!
//! Replays a command sequence against an ordered key set and renders the output the program
//! under test is expected to produce: one count per well-formed range query, space separated,
//! terminated by a newline.

use std::collections::BTreeSet;
use std::ops::Bound::Included;

use crate::command::Command;

/// Evaluate `commands` and render the expected output text
///
/// A `KeyLookup` inserts its value into the key set (duplicates collapse). A `RangeQuery`
/// appends the count of stored keys within `[lo, hi]`, both ends included; an inverted range
/// (`hi < lo`) appends nothing.
pub fn expected_output(commands: &[Command]) -> String {
    let mut keys = BTreeSet::new();
    let mut ret = String::new();

    for command in commands {
        match command {
            Command::KeyLookup(value) => {
                keys.insert(*value);
            },
            Command::RangeQuery(lo, hi) => {
                if hi < lo {
                    continue;
                }
                let count = keys.range((Included(*lo), Included(*hi))).count();
                ret.push_str(&format!("{} ", count));
            }
        }
    }

    ret.push('\n');
    ret
}
