use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};

use aoc2025::{default_input, ALL_SOLUTIONS};

fn main() -> Result<()> {
    let mut total = Duration::default();
    for (n, day) in ALL_SOLUTIONS {
        let input = default_input(n)?;
        total += execute_day(n, day, input).with_context(|| format!("day {} failed", n))?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

/// Unindented `Part 1: ..` / `Part 2: ..` lines.
fn format_answers(part1: impl Display, part2: impl Display) -> String {
    format!("Part 1: {}\nPart 2: {}", part1, part2)
}

fn execute_day<S: Display, T: Display>(
    n: usize,
    f: fn(&str) -> Result<(S, T)>,
    input: &str,
) -> Result<Duration> {
    println!("Day {}:", n);

    let start = Instant::now();
    let (part1, part2) = f(input)?;
    let elapsed = start.elapsed();

    println!("{}", format_answers(part1, part2));
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}
