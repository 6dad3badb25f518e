//! Path patterns.

use crate::error::RouteError;
use std::fmt;

/// One segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Static(String),
    /// `:name`
    Param(String),
    /// `*` or `*name`; matches the rest of the path.
    Wildcard(String),
}

/// A parsed path pattern such as `/products/:category`.
///
/// The empty pattern matches without consuming anything, which is how
/// pathless layout groups and index routes are expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let parts: Vec<&str> = split_path(pattern).collect();
        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter without a name"));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if i + 1 != parts.len() {
                    return Err(invalid("wildcard must be the last segment"));
                }
                let name = if name.is_empty() { "any" } else { name };
                Segment::Wildcard(name.to_string())
            } else {
                Segment::Static((*part).to_string())
            };
            segments.push(segment);
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Match a prefix of `path`, returning the captures and how many path
    /// segments were consumed.
    pub fn match_prefix(&self, path: &[&str]) -> Option<(Vec<(String, String)>, usize)> {
        let mut captures = Vec::new();
        let mut consumed = 0;
        for segment in &self.segments {
            match segment {
                Segment::Static(expected) => {
                    let actual = path.get(consumed)?;
                    if *actual != expected.as_str() {
                        return None;
                    }
                    consumed += 1;
                }
                Segment::Param(name) => {
                    let actual = path.get(consumed)?;
                    captures.push((name.clone(), decode_segment(actual)));
                    consumed += 1;
                }
                Segment::Wildcard(name) => {
                    let rest: Vec<&str> = path.get(consumed..).unwrap_or_default().to_vec();
                    captures.push((name.clone(), rest.join("/")));
                    consumed = path.len();
                }
            }
        }
        Some((captures, consumed))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Static(s) => write!(f, "/{}", s)?,
                Segment::Param(name) => write!(f, "/:{}", name)?,
                Segment::Wildcard(name) => write!(f, "/*{}", name)?,
            }
        }
        Ok(())
    }
}

/// Non-empty segments of a path, ignoring query and fragment.
pub(crate) fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
