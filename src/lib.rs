use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    num::IntErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use thiserror::Error;
use tracing::{debug, trace};

pub mod sort;

pub use sort::{counting_sort, max_value, MAX_VALUE};

#[derive(Debug, Error)]
pub enum ListsError {
    #[error("Expected 2 numbers on line #{line_no}, got {tokens:?}.")]
    MalformedLine { line_no: usize, tokens: Vec<String> },
    #[error("Could not parse {token:?} on line #{line_no} as non-negative integer.")]
    InvalidInteger { line_no: usize, token: String },
    #[error("Location ID {token} on line #{line_no} is larger than {}.", MAX_VALUE)]
    TooLarge { line_no: usize, token: String },
    #[error("Can't count sort numbers up to {max}, the limit is {}.", MAX_VALUE)]
    SortRange { max: usize },
    #[error("Sum of {0} overflowed.")]
    Overflow(&'static str),
    #[error("{}", mode_message(.0))]
    InvalidMode(Option<i64>),
    #[error("Failed to read line #{line_no} of input.")]
    Io {
        line_no: usize,
        #[source]
        source: io::Error,
    },
}

fn mode_message(part: &Option<i64>) -> String {
    match part {
        Some(n) => format!("Invalid part {} supplied, expected 1 or 2.", n),
        None => "No part supplied, expected --part 1 or --part 2.".to_string(),
    }
}

#[derive(Debug, Parser)]
#[command(about = "Compare two columns of location IDs.")]
pub struct CLIArgs {
    /// Part of the problem to solve, 1 (distance) or 2 (similarity).
    #[arg(long, allow_negative_numbers = true)]
    pub part: Option<i64>,
    /// Read the lists from this file instead of standard input.
    #[arg(long)]
    pub input_path: Option<PathBuf>,
}

pub type Solver = fn(&mut Vec<usize>, &mut Vec<usize>) -> Result<u64, ListsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Distance,
    Similarity,
}

impl TryFrom<Option<i64>> for Part {
    type Error = ListsError;

    fn try_from(value: Option<i64>) -> Result<Self, Self::Error> {
        match value {
            Some(1) => Ok(Part::Distance),
            Some(2) => Ok(Part::Similarity),
            other => Err(ListsError::InvalidMode(other)),
        }
    }
}

impl Part {
    pub fn solver(self) -> Solver {
        match self {
            Part::Distance => total_distance,
            Part::Similarity => |left: &mut Vec<usize>, right: &mut Vec<usize>| {
                similarity_score(left, right)
            }
        }
    }
}

/// Read both location lists from the file at given path.
pub fn read_lists<P: AsRef<Path>>(path: P) -> anyhow::Result<(Vec<usize>, Vec<usize>)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    parse_lists(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to read location ID lists from given file({}).",
            path.as_ref().display()
        )
    })
}

/// Read both location lists, one pair per line, skipping blank lines.
/// Nothing is returned on failure.
pub fn parse_lists<R: BufRead>(reader: R) -> Result<(Vec<usize>, Vec<usize>), ListsError> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line_no = ind + 1;
        let s = line.map_err(|source| ListsError::Io { line_no, source })?;
        if s.trim().is_empty() {
            continue;
        }

        let (l, r) = parse_line(&s, line_no)?;
        left.push(l);
        right.push(r);
    }

    debug!(pairs = left.len(), "Parsed location ID lists.");
    Ok((left, right))
}

pub fn parse_line(s: &str, line_no: usize) -> Result<(usize, usize), ListsError> {
    let tokens = s.split_whitespace().collect::<Vec<_>>();
    let [l, r] = tokens[..] else {
        return Err(ListsError::MalformedLine {
            line_no,
            tokens: tokens.into_iter().map(String::from).collect(),
        });
    };

    let parse = |token: &str| match token.parse::<usize>() {
        Ok(n) if n <= MAX_VALUE => Ok(n),
        Ok(_) => Err(ListsError::TooLarge {
            line_no,
            token: token.to_string(),
        }),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(ListsError::TooLarge {
            line_no,
            token: token.to_string(),
        }),
        Err(_) => Err(ListsError::InvalidInteger {
            line_no,
            token: token.to_string(),
        }),
    };
    Ok((parse(l)?, parse(r)?))
}

/// Sum of differences between both lists once each is sorted.
pub fn total_distance(left: &mut Vec<usize>, right: &mut Vec<usize>) -> Result<u64, ListsError> {
    counting_sort(left)?;
    counting_sort(right)?;
    left.iter()
        .zip(right.iter())
        .try_fold(0u64, |sum, (l, r)| sum.checked_add(l.abs_diff(*r) as u64))
        .ok_or(ListsError::Overflow("distances"))
}

pub fn similarity_score(left: &[usize], right: &[usize]) -> Result<u64, ListsError> {
    let mut right_counts = HashMap::<usize, usize>::new();
    for &n in right {
        *right_counts.entry(n).or_default() += 1;
    }
    debug!(distinct = right_counts.len(), "Counted right list values.");
    trace!(?right_counts);

    left.iter()
        .try_fold(0u64, |sum, n| {
            let count = right_counts.get(n).copied().unwrap_or(0) as u64;
            (*n as u64).checked_mul(count)?.checked_add(sum)
        })
        .ok_or(ListsError::Overflow("similarity scores"))
}

pub fn solve(part: Part, left: &mut Vec<usize>, right: &mut Vec<usize>) -> Result<u64, ListsError> {
    part.solver()(left, right)
}

#[cfg(test)]
const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

#[test]
fn test_parse_lists() {
    let (left, right) = parse_lists(SAMPLE.as_bytes()).unwrap();
    assert_eq!(left, vec![3, 4, 2, 1, 3, 3]);
    assert_eq!(right, vec![4, 3, 5, 3, 9, 3]);
}

#[test]
fn test_parse_lists_skips_blank_lines() {
    let (left, right) = parse_lists("1 2\n\n   \n3\t4\n".as_bytes()).unwrap();
    assert_eq!(left, vec![1, 3]);
    assert_eq!(right, vec![2, 4]);
}

#[test]
fn test_parse_malformed_line() {
    let err = parse_lists("1 2\n1 2 3\n".as_bytes()).unwrap_err();
    match err {
        ListsError::MalformedLine { line_no, tokens } => {
            assert_eq!(line_no, 2);
            assert_eq!(tokens, vec!["1", "2", "3"]);
        }
        other => panic!("Unexpected error {:?}", other),
    }

    assert!(matches!(
        parse_line("7", 1),
        Err(ListsError::MalformedLine { .. })
    ));
}

#[test]
fn test_parse_invalid_integer() {
    let err = parse_lists("1 x\n".as_bytes()).unwrap_err();
    assert!(
        matches!(err, ListsError::InvalidInteger { line_no: 1, ref token } if token == "x")
    );
    assert!(matches!(
        parse_line("-3 4", 5),
        Err(ListsError::InvalidInteger { line_no: 5, .. })
    ));
}

#[test]
fn test_parse_too_large() {
    let err = parse_lists("1 18446744073709551615
".as_bytes()).unwrap_err();
    assert!(
        matches!(err, ListsError::TooLarge { line_no: 1, ref token } if token == "18446744073709551615")
    );
    assert!(matches!(
        parse_line("99999999999999999999999 1", 3),
        Err(ListsError::TooLarge { line_no: 3, .. })
    ));
    assert!(matches!(
        parse_line(&format!("{} 1", MAX_VALUE + 1), 4),
        Err(ListsError::TooLarge { line_no: 4, .. })
    ));
    assert_eq!(
        parse_line(&format!("{} 0", MAX_VALUE), 1).unwrap(),
        (MAX_VALUE, 0)
    );
}

#[test]
fn test_parse_unreadable_line() {
    let err = parse_lists(&b"1 2\n\xff 3\n"[..]).unwrap_err();
    assert!(matches!(err, ListsError::Io { line_no: 2, .. }));
}

#[test]
fn test_part_try_from() {
    assert_eq!(Part::try_from(Some(1)).unwrap(), Part::Distance);
    assert_eq!(Part::try_from(Some(2)).unwrap(), Part::Similarity);
    for n in [0, 3, -1] {
        let err = Part::try_from(Some(n)).unwrap_err();
        assert!(matches!(err, ListsError::InvalidMode(Some(m)) if m == n));
        assert_eq!(
            err.to_string(),
            format!("Invalid part {} supplied, expected 1 or 2.", n)
        );
    }

    let err = Part::try_from(None).unwrap_err();
    assert!(matches!(err, ListsError::InvalidMode(None)));
    assert!(err.to_string().starts_with("No part supplied"));
}

#[test]
fn test_total_distance() {
    let (mut left, mut right) = parse_lists(SAMPLE.as_bytes()).unwrap();
    assert_eq!(total_distance(&mut left, &mut right).unwrap(), 11);
    assert_eq!(total_distance(&mut Vec::new(), &mut Vec::new()).unwrap(), 0);
    assert!(matches!(
        total_distance(&mut vec![usize::MAX], &mut vec![0]),
        Err(ListsError::SortRange { .. })
    ));
}

#[test]
fn test_similarity_score() {
    let (left, right) = parse_lists(SAMPLE.as_bytes()).unwrap();
    assert_eq!(similarity_score(&left, &right).unwrap(), 31);
    assert_eq!(similarity_score(&[1, 2], &[3, 4]).unwrap(), 0);
}

#[test]
fn test_similarity_score_overflow() {
    let big = u64::MAX as usize;
    assert!(matches!(
        similarity_score(&[big], &[big, big]),
        Err(ListsError::Overflow(_))
    ));
    assert!(matches!(
        similarity_score(&[big, big], &[big]),
        Err(ListsError::Overflow(_))
    ));
    assert_eq!(similarity_score(&[big], &[big]).unwrap(), u64::MAX);
}

#[test]
fn test_solve() {
    let (left, right) = parse_lists(SAMPLE.as_bytes()).unwrap();
    assert_eq!(
        solve(Part::Distance, &mut left.clone(), &mut right.clone()).unwrap(),
        11
    );
    assert_eq!(
        solve(Part::Similarity, &mut left.clone(), &mut right.clone()).unwrap(),
        31
    );
}
