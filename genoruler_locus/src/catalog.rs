// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::range::ChromosomeBounds;

/// Read-only lookup from chromosome identifier to length in base pairs.
///
/// The viewport engine is given a catalog at construction and never mutates
/// it. Implementations must return `None` for unknown names and never a
/// length of zero.
pub trait ChromosomeCatalog {
    /// Length of `chr` in base pairs, if known.
    fn length_of(&self, chr: &str) -> Option<u64>;

    /// Resolves `chr` into [`ChromosomeBounds`].
    fn bounds_of(&self, chr: &str) -> Option<ChromosomeBounds> {
        self.length_of(chr)
            .map(|length| ChromosomeBounds::new(chr, length))
    }
}

impl<C: ChromosomeCatalog + ?Sized> ChromosomeCatalog for &C {
    fn length_of(&self, chr: &str) -> Option<u64> {
        (**self).length_of(chr)
    }
}

// GRCh38 primary assembly lengths.
const GRCH38: &[(&str, u64)] = &[
    ("chr1", 248_956_422),
    ("chr2", 242_193_529),
    ("chr3", 198_295_559),
    ("chr4", 190_214_555),
    ("chr5", 181_538_259),
    ("chr6", 170_805_979),
    ("chr7", 159_345_973),
    ("chr8", 145_138_636),
    ("chr9", 138_394_717),
    ("chr10", 133_797_422),
    ("chr11", 135_086_622),
    ("chr12", 133_275_309),
    ("chr13", 114_364_328),
    ("chr14", 107_043_718),
    ("chr15", 101_991_189),
    ("chr16", 90_338_345),
    ("chr17", 83_257_441),
    ("chr18", 80_373_285),
    ("chr19", 58_617_616),
    ("chr20", 64_444_167),
    ("chr21", 46_709_983),
    ("chr22", 50_818_468),
    ("chrX", 156_040_895),
    ("chrY", 57_227_415),
];

/// In-memory [`ChromosomeCatalog`] that remembers insertion order.
#[derive(Clone, Debug, Default)]
pub struct ChromosomeTable {
    lengths: HashMap<String, u64>,
    order: Vec<String>,
}

impl ChromosomeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in human GRCh38 table (`chr1`..`chr22`, `chrX`, `chrY`).
    #[must_use]
    pub fn grch38() -> Self {
        GRCH38.iter().copied().collect()
    }

    /// Inserts or replaces a chromosome.
    ///
    /// Zero lengths cannot form a valid bound and are ignored. Returns the
    /// previous length, if any.
    pub fn insert(&mut self, chr: impl Into<String>, length: u64) -> Option<u64> {
        let chr = chr.into();
        if length == 0 {
            log::warn!("ignoring chromosome '{chr}' with zero length");
            return None;
        }
        let previous = self.lengths.insert(chr.clone(), length);
        if previous.is_none() {
            self.order.push(chr);
        }
        previous
    }

    /// Chromosome names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Number of chromosomes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the table holds no chromosomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl ChromosomeCatalog for ChromosomeTable {
    fn length_of(&self, chr: &str) -> Option<u64> {
        self.lengths.get(chr).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for ChromosomeTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (chr, length) in iter {
            table.insert(chr, length);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::{ChromosomeCatalog, ChromosomeTable};

    #[test]
    fn grch38_has_all_parser_tokens() {
        let t = ChromosomeTable::grch38();
        assert_eq!(t.len(), 24);
        for n in 1..=22 {
            assert!(t.length_of(&format!("chr{n}")).is_some(), "chr{n} missing");
        }
        assert_eq!(t.length_of("chrX"), Some(156_040_895));
        assert_eq!(t.length_of("chrY"), Some(57_227_415));
        assert_eq!(t.length_of("chrZ"), None);
    }

    #[test]
    fn bounds_of_starts_at_zero() {
        let t = ChromosomeTable::grch38();
        let b = t.bounds_of("chr7").unwrap();
        assert_eq!(b.chr, "chr7");
        assert_eq!(b.lower_bp, 0);
        assert_eq!(b.upper_bp, 159_345_973);
    }

    #[test]
    fn insert_keeps_order_and_rejects_zero() {
        let mut t = ChromosomeTable::new();
        assert_eq!(t.insert("b", 10), None);
        assert_eq!(t.insert("a", 20), None);
        assert_eq!(t.insert("b", 30), Some(10));
        assert_eq!(t.insert("empty", 0), None);
        assert_eq!(t.names().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(t.length_of("b"), Some(30));
        assert_eq!(t.length_of("empty"), None);
    }

    #[test]
    fn catalog_by_reference() {
        let t = ChromosomeTable::grch38();
        let r = &t;
        assert_eq!(r.length_of("chr1"), Some(248_956_422));
    }
}
