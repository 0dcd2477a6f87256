//! Natural (numeric-aware) ordering of source images by file stem.
//!
//! `frame2` sorts before `frame10`, unlike a plain string comparison.

use std::cmp::Ordering;

use crate::frames::types::SourceImage;

/// One run of a stem: either consecutive ASCII digits or everything between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Chunk<'a> {
    fn cmp_run(&self, other: &Chunk<'a>) -> Ordering {
        match (self, other) {
            (Chunk::Digits(a), Chunk::Digits(b)) => cmp_numeric(a, b),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            // Numbers before words at the same position
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        }
    }
}

/// Iterator splitting a string into alternating digit and text runs
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();

        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if digits { Chunk::Digits(run) } else { Chunk::Text(run) })
    }
}

fn chunks(s: &str) -> Chunks<'_> {
    Chunks { rest: s }
}

/// Compare two digit runs by value without parsing, so any length works
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural comparison of two strings
///
/// Digit runs compare by numeric value ("01" and "1" are equal), text runs
/// compare as ordinary strings, and a shorter run list sorts first when it is
/// a prefix of the longer one.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match l.cmp_run(&r) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}

/// Sort source images into playback order by their file stems
///
/// The sort is stable: images whose stems compare equal keep the order in
/// which they were supplied.
pub fn order_sources(mut sources: Vec<SourceImage>) -> Vec<SourceImage> {
    sources.sort_by(|a, b| natural_cmp(a.stem(), b.stem()));
    sources
}
