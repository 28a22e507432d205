use std::{mem, str::FromStr};

use anyhow::{anyhow, bail, ensure, Context, Result};
use memchr::memchr_iter;
use rustc_hash::FxHashSet;

use crate::{parse_u64_from_bytes, ranges};

type Position = (i64, i64);

fn parse_rolls(input: &str) -> FxHashSet<Position> {
    let mut rolls = FxHashSet::default();
    for (y, line) in input.lines().enumerate() {
        for x in memchr_iter(b'@', line.as_bytes()) {
            rolls.insert((x as i64, y as i64));
        }
    }
    rolls
}

/// Rolls with fewer than four of their eight neighbours occupied.
fn accessible_rolls(rolls: &FxHashSet<Position>) -> Vec<Position> {
    rolls
        .iter()
        .copied()
        .filter(|&(x, y)| {
            let neighbours = (-1..=1)
                .flat_map(|dy| (-1..=1).map(move |dx| (x + dx, y + dy)))
                .filter(|&pos| pos != (x, y) && rolls.contains(&pos))
                .count();
            neighbours < 4
        })
        .collect()
}

pub fn day4(input: &str) -> Result<(u64, u64)> {
    let mut rolls = parse_rolls(input);
    let part1 = accessible_rolls(&rolls).len() as u64;

    let mut removed = 0;
    loop {
        let accessible = accessible_rolls(&rolls);
        if accessible.is_empty() {
            break;
        }
        removed += accessible.len() as u64;
        for roll in accessible {
            rolls.remove(&roll);
        }
    }

    Ok((part1, removed))
}

pub fn day5(input: &str) -> Result<(u64, u64)> {
    // `lines` drops any `\r`; the separator may carry stray whitespace.
    let lines: Vec<&str> = input.lines().collect();
    let blank = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or_else(|| anyhow!("missing blank line between ranges and ingredient IDs"))?;
    let declared = ranges::parse_intervals(&lines[..blank].join("\n"))?;

    let mut fresh = 0;
    for line in lines[blank + 1..].iter().map(|line| line.trim()) {
        if line.is_empty() {
            continue;
        }
        let id: u64 = line
            .parse()
            .with_context(|| format!("invalid ingredient ID {:?}", line))?;
        if ranges::contains(id, &declared) {
            fresh += 1;
        }
    }

    let total = ranges::fuse_all(declared).total_coverage();
    let total = u64::try_from(total)
        .with_context(|| format!("fresh ID coverage {} does not fit in u64", total))?;
    Ok((fresh, total))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operation::Add),
            "*" => Ok(Operation::Multiply),
            _ => bail!("unknown operation {:?}", s),
        }
    }
}

#[derive(Debug)]
struct Problem {
    operation: Operation,
    operands: Vec<u64>,
}

impl Problem {
    fn new(operation: Operation, operands: Vec<u64>) -> Self {
        Self {
            operation,
            operands,
        }
    }

    fn solve(&self) -> u64 {
        match self.operation {
            Operation::Add => self.operands.iter().sum(),
            Operation::Multiply => self.operands.iter().product(),
        }
    }
}

/// Splits off the trailing operator row.
fn split_worksheet(input: &str) -> Result<(Vec<&str>, Vec<Operation>)> {
    let mut rows: Vec<&str> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let operations = rows
        .pop()
        .ok_or_else(|| anyhow!("empty worksheet"))?
        .split_ascii_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Operation>>>()?;
    Ok((rows, operations))
}

/// Numbers are whitespace separated; problem `i` is the `i`-th number of every row.
fn simple_problems(rows: &[&str], operations: &[Operation]) -> Result<Vec<Problem>> {
    let mut problems: Vec<Problem> = operations
        .iter()
        .map(|&op| Problem::new(op, Vec::with_capacity(rows.len())))
        .collect();

    for row in rows {
        let numbers = row
            .split_ascii_whitespace()
            .map(|n| {
                n.parse::<u64>()
                    .with_context(|| format!("invalid number {:?} in row {:?}", n, row))
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(
            numbers.len() == problems.len(),
            "row {:?} has {} numbers for {} operations",
            row,
            numbers.len(),
            problems.len()
        );
        for (problem, n) in problems.iter_mut().zip(numbers) {
            problem.operands.push(n);
        }
    }

    Ok(problems)
}

/// Every character column read top to bottom is one number; blank columns separate problems.
fn column_problems(rows: &[&str], operations: &[Operation]) -> Result<Vec<Problem>> {
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    let mut groups = Vec::with_capacity(operations.len());
    let mut current = Vec::new();
    let mut digits = Vec::with_capacity(rows.len());
    for col in 0..width {
        digits.clear();
        for row in rows {
            // Rows may be shorter than the widest one; a missing cell counts as blank.
            match row.as_bytes().get(col) {
                Some(&b) if b.is_ascii_digit() => digits.push(b),
                Some(&b' ') | None => {}
                Some(&b) => bail!("unexpected {:?} in column {}", b as char, col),
            }
        }

        if !digits.is_empty() {
            current.push(parse_u64_from_bytes(&digits));
        } else if !current.is_empty() {
            groups.push(mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    ensure!(
        groups.len() == operations.len(),
        "found {} problem columns for {} operations",
        groups.len(),
        operations.len()
    );
    Ok(operations
        .iter()
        .zip(groups)
        .map(|(&op, operands)| Problem::new(op, operands))
        .collect())
}

pub fn day6(input: &str) -> Result<(u64, u64)> {
    let (rows, operations) = split_worksheet(input)?;

    let part1 = simple_problems(&rows, &operations)?
        .iter()
        .map(Problem::solve)
        .sum();
    let part2 = column_problems(&rows, &operations)?
        .iter()
        .map(Problem::solve)
        .sum();

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    use std::fmt::Display;

    use indoc::indoc;

    fn execute_day<I: ?Sized, J: AsRef<I>, S: Display, T: Display>(
        n: usize,
        f: fn(&I) -> Result<(S, T)>,
        input_loader: fn(usize) -> Result<J>,
    ) -> Result<(S, T)> {
        f(input_loader(n)?.as_ref())
    }

    fn execute_day_input<I: ?Sized, S: Display, T: Display>(
        f: fn(&I) -> Result<(S, T)>,
        input: &I,
    ) -> Result<(S, T)> {
        f(input)
    }

    #[test]
    fn test_day4() -> Result<()> {
        assert_eq!(execute_day(4, day4, default_input)?, (13, 43));
        assert_eq!(execute_day_input(day4, "@@@@@\n")?, (5, 5));
        let cross = indoc! {"
            @.@
            .@.
            @.@
        "};
        assert_eq!(execute_day_input(day4, cross)?, (4, 5));
        let block = indoc! {"
            @@@
            @@@
            @@@
        "};
        assert_eq!(execute_day_input(day4, block)?, (4, 9));
        assert_eq!(execute_day_input(day4, "...\n")?, (0, 0));
        Ok(())
    }

    #[test]
    fn test_day5() -> Result<()> {
        assert_eq!(execute_day(5, day5, default_input)?, (3, 14));
        let example = indoc! {"
            1-5
            3-8
            10-12

            4
            9
            11
        "};
        assert_eq!(execute_day_input(day5, example)?, (2, 11));
        assert!(execute_day_input(day5, "1-5\n3-8\n").is_err());
        assert!(execute_day_input(day5, "1-5\n3:8\n\n4\n").is_err());
        assert!(execute_day_input(day5, "1-5\n\nfour\n").is_err());

        let crlf = "1-5\r\n3-8\r\n10-12\r\n  \r\n4\r\n9\r\n11\r\n";
        assert_eq!(execute_day_input(day5, crlf)?, (2, 11));
        assert_eq!(execute_day_input(day5, "1-5\n \t\n5\n")?, (1, 5));

        let near_whole = "0-18446744073709551614\n\n18446744073709551614\n";
        assert_eq!(execute_day_input(day5, near_whole)?, (1, u64::MAX));
        assert!(execute_day_input(day5, "0-18446744073709551615\n\n7\n").is_err());
        Ok(())
    }

    #[test]
    fn test_day6() -> Result<()> {
        assert_eq!(execute_day(6, day6, default_input)?, (4277556, 3263827));
        // Trailing spaces trimmed away.
        let example = indoc! {"
            123 328  51 64
             45 64  387 23
              6 98  215 314
            *   +   *   +
        "};
        assert_eq!(execute_day_input(day6, example)?, (4277556, 3263827));
        assert_eq!(execute_day_input(day6, "1 2\n3 4\n+ *\n")?, (12, 37));
        assert_eq!(execute_day_input(day6, "  7\n 12\n  *\n")?, (84, 72));
        assert_eq!(execute_day_input(day6, "10  3\n 2  4\n+   *\n")?, (24, 37));
        Ok(())
    }

    #[test]
    fn test_day6_malformed() {
        assert!(execute_day_input(day6, "").is_err());
        assert!(execute_day_input(day6, "1 2\n3 4\n+ -\n").is_err());
        assert!(execute_day_input(day6, "1 2\n3\n+ *\n").is_err());
        assert!(execute_day_input(day6, "1 2 3\n+ *\n").is_err());
    }
}
