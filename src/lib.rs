use anyhow::{anyhow, Result};

pub mod ranges;
pub mod solutions;

use solutions::*;

pub type Solution = fn(&str) -> Result<(u64, u64)>;

pub const ALL_SOLUTIONS: [(usize, Solution); 3] = [(4, day4), (5, day5), (6, day6)];

const INPUTS: [(usize, &str); 3] = [
    (4, include_str!("../inputs/4.txt")),
    (5, include_str!("../inputs/5.txt")),
    (6, include_str!("../inputs/6.txt")),
];

pub fn default_input(n: usize) -> Result<&'static str> {
    INPUTS
        .iter()
        .find(|(day, _)| *day == n)
        .map(|(_, input)| *input)
        .ok_or_else(|| anyhow!("no input bundled for day {}", n))
}

/// Result is only correct if bytes represents a valid positive number without any additional
/// characters!
pub fn parse_u64_from_bytes(bytes: &[u8]) -> u64 {
    let mut ret = 0;
    for b in bytes {
        ret = ret * 10 + (b - b'0') as u64;
    }
    ret
}
