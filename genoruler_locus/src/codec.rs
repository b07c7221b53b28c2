// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

static CHROMOSOME_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:chr)?(\d{1,2}|[XY])$").expect("chromosome pattern is valid")
});

static REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:chr)?(\d{1,2}|[XY]):([0-9,]+)-([0-9,]+)$")
        .expect("region pattern is valid")
});

/// A parsed locus: either a whole chromosome or a region of one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LocusQuery {
    /// Whole chromosome, e.g. `"chr5"` or `"5"`.
    Chromosome {
        /// Normalized chromosome name (`chr` + upper-cased token).
        chr: String,
    },
    /// Region of a chromosome, e.g. `"chr12:50,464,921-53,983,987"`.
    Region {
        /// Normalized chromosome name (`chr` + upper-cased token).
        chr: String,
        /// Region start in base pairs.
        start_bp: u64,
        /// Region end in base pairs; always greater than `start_bp`.
        end_bp: u64,
    },
}

impl LocusQuery {
    /// Chromosome named by the query.
    #[must_use]
    pub fn chr(&self) -> &str {
        match self {
            Self::Chromosome { chr } | Self::Region { chr, .. } => chr,
        }
    }
}

impl fmt::Display for LocusQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chromosome { chr } => f.write_str(chr),
            Self::Region {
                chr,
                start_bp,
                end_bp,
            } => f.write_str(&format_locus(chr, *start_bp, *end_bp)),
        }
    }
}

/// Reasons a locus string could not be parsed.
///
/// The [`Display`](fmt::Display) text is the user-facing validation message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input was empty or whitespace.
    Empty,
    /// A position field matched the pattern but is not a usable number.
    InvalidPosition,
    /// The start position is not strictly less than the end position.
    StartNotBeforeEnd,
    /// The input matched neither the chromosome nor the region pattern.
    InvalidFormat,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "Please enter a genomic locus",
            Self::InvalidPosition => "Invalid base pair position format",
            Self::StartNotBeforeEnd => "Start position must be less than end position",
            Self::InvalidFormat => "Invalid locus format",
        })
    }
}

impl core::error::Error for ParseError {}

/// Parses free locus text.
///
/// Accepted forms, case-insensitive on the `chr` prefix and chromosome token:
/// - `chr5`, `5`, `chrx` — whole chromosome.
/// - `chr12:50,464,921-53,983,987` — region, commas optional.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_locus(input: &str) -> Result<LocusQuery, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(caps) = CHROMOSOME_ONLY.captures(input) {
        return Ok(LocusQuery::Chromosome {
            chr: normalize_chromosome(&caps[1]),
        });
    }

    if let Some(caps) = REGION.captures(input) {
        let chr = normalize_chromosome(&caps[1]);
        let start_bp = parse_position(&caps[2])?;
        let end_bp = parse_position(&caps[3])?;
        if start_bp >= end_bp {
            return Err(ParseError::StartNotBeforeEnd);
        }
        return Ok(LocusQuery::Region {
            chr,
            start_bp,
            end_bp,
        });
    }

    Err(ParseError::InvalidFormat)
}

fn normalize_chromosome(token: &str) -> String {
    format!("chr{}", token.to_ascii_uppercase())
}

fn parse_position(field: &str) -> Result<u64, ParseError> {
    let digits: String = field.chars().filter(|c| *c != ',').collect();
    digits.parse().map_err(|_| ParseError::InvalidPosition)
}

/// Formats a base-pair count with `,` thousands separators.
#[must_use]
pub fn format_bp(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats `chr:start-end` with thousands separators.
#[must_use]
pub fn format_locus(chr: &str, start_bp: u64, end_bp: u64) -> String {
    format!("{chr}:{}-{}", format_bp(start_bp), format_bp(end_bp))
}
