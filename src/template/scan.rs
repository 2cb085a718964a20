//! Placeholder scanning and substitution.
//!
//! A placeholder is written `${name}`. Scanning is tolerant: an opening
//! `${` without a closing `}` is plain text.

use std::collections::HashMap;

const OPEN: &str = "${";
const CLOSE: char = '}';

/// A piece of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// Name between `${` and `}`.
    Placeholder(&'a str),
}

/// Iterator splitting text into literals and placeholders, left to right.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(OPEN) {
            Some(0) => {
                let after_open = &self.rest[OPEN.len()..];
                match after_open.find(CLOSE) {
                    Some(end) => {
                        let name = &after_open[..end];
                        self.rest = &after_open[end + CLOSE.len_utf8()..];
                        Some(Segment::Placeholder(name))
                    }
                    None => {
                        // unterminated
                        let literal = self.rest;
                        self.rest = "";
                        Some(Segment::Literal(literal))
                    }
                }
            }
            Some(start) => {
                let (literal, rest) = self.rest.split_at(start);
                self.rest = rest;
                Some(Segment::Literal(literal))
            }
            None => {
                let literal = self.rest;
                self.rest = "";
                Some(Segment::Literal(literal))
            }
        }
    }
}

/// Split `text` into literal and placeholder segments.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Join template lines into one text, each line followed by `\n`.
///
/// ```
/// use estampa::template::normalize;
///
/// assert_eq!(normalize(&["first", "second"]), "first\nsecond\n");
/// ```
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Distinct placeholder names in `text`, in order of first appearance.
///
/// ```
/// use estampa::template::find_placeholders;
///
/// let names = find_placeholders("Your id is ${id}, Mr. ${nickname}. Again: ${id}");
/// assert_eq!(names, vec!["id", "nickname"]);
/// ```
pub fn find_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in segments(text) {
        if let Segment::Placeholder(name) = segment
            && !name.is_empty()
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every `${name}` that has a value in `values`.
///
/// Placeholders without a value stay in the output unchanged.
pub fn interpolate(text: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Placeholder(name) => match values.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str(OPEN);
                    out.push_str(name);
                    out.push(CLOSE);
                }
            },
        }
    }
    out
}
