//! Route pattern parsing and segment matching.
//!
//! # Grammar
//!
//! ```text
//! pattern := "/" [ segment { "/" segment } ]
//! segment := literal | ":" identifier
//! ```
//!
//! Request paths ignore leading and trailing slashes, so `/user/john/` and
//! `/user/john` both split into `["user", "john"]`. Each request segment is
//! percent-decoded after splitting. Patterns are stricter: every segment
//! after the leading `/` must be non-empty, and they are compared as written.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::RouteError;
use crate::router::params::Params;

/// One `/`-delimited unit of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Matches any non-empty request segment and binds it under this name.
    Param(String),
}

/// A parsed, validated route pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern such as `/user/:id/posts`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the pattern does not start with `/`, has an
    /// empty segment, uses a wildcard, or has a missing, malformed or repeated
    /// parameter name.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(RouteError::MissingLeadingSlash {
                pattern: raw.to_string(),
            });
        };

        let mut segments = Vec::new();

        if !rest.is_empty() {
            for part in rest.split('/') {
                let segment = parse_segment(raw, part, &segments)?;
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Matches already-split request segments against this pattern.
    ///
    /// Returns the parameter bindings on success. Literal segments are
    /// checked before anything is allocated.
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        if self.segments.len() != path.len() {
            return None;
        }

        let structural = self
            .segments
            .iter()
            .zip(path)
            .all(|(segment, value)| match segment {
                Segment::Literal(literal) => literal == value,
                Segment::Param(_) => !value.is_empty(),
            });

        if !structural {
            return None;
        }

        let mut params = Params::default();
        for (segment, value) in self.segments.iter().zip(path) {
            if let Segment::Param(name) = segment {
                params.insert(name.clone(), (*value).to_string());
            }
        }

        Some(params)
    }
}

fn parse_segment(raw: &str, part: &str, seen: &[Segment]) -> Result<Segment, RouteError> {
    if part.is_empty() {
        return Err(RouteError::EmptySegment {
            pattern: raw.to_string(),
        });
    }

    if part.starts_with('*') {
        return Err(RouteError::Wildcard {
            pattern: raw.to_string(),
        });
    }

    let Some(name) = part.strip_prefix(':') else {
        return Ok(Segment::Literal(part.to_string()));
    };

    if !is_identifier(name) {
        return Err(RouteError::InvalidParamName {
            pattern: raw.to_string(),
            name: name.to_string(),
        });
    }

    if seen
        .iter()
        .any(|s| matches!(s, Segment::Param(existing) if existing == name))
    {
        return Err(RouteError::DuplicateParam {
            pattern: raw.to_string(),
            name: name.to_string(),
        });
    }

    Ok(Segment::Param(name.to_string()))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splits a request path into segments, dropping leading and trailing slashes.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Splits a raw request path and percent-decodes each segment.
///
/// Splitting happens before decoding, so `%2F` stays inside its segment.
/// Returns `None` if any segment decodes to invalid UTF-8; such a path
/// matches no route.
pub fn decode_path(path: &str) -> Option<Vec<Cow<'_, str>>> {
    split_path(path)
        .into_iter()
        .map(|segment| percent_decode_str(segment).decode_utf8().ok())
        .collect()
}
