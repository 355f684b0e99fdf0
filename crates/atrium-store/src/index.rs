//! Secondary indexes maintained at project-creation time
//!
//! Both indexes hold project ids only; the registry resolves them against
//! its project table when answering a query. Nothing is ever removed.

use atrium_domain::{keyword_tokens, MAX_CONFIDENTIALITY};
use std::collections::HashMap;

/// Keyword -> project ids, one entry per token occurrence
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
    entries: HashMap<String, Vec<String>>,
}

impl KeywordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project under every token of its keyword string
    ///
    /// A token repeated in the string registers the project repeatedly.
    pub fn insert(&mut self, project: &str, keywords: &str) {
        for token in keyword_tokens(keywords) {
            self.entries
                .entry(token.to_string())
                .or_default()
                .push(project.to_string());
        }
    }

    /// Whether any project was registered under the keyword
    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Project ids registered under the keyword, in insertion order
    pub fn lookup(&self, keyword: &str) -> &[String] {
        self.entries.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }
}

const BUCKETS: usize = MAX_CONFIDENTIALITY as usize + 1;

/// One bucket of in-house project ids per confidentiality level
#[derive(Debug, Default, Clone)]
pub struct ConfidentialityBuckets {
    buckets: [Vec<String>; BUCKETS],
}

impl ConfidentialityBuckets {
    /// Create six empty buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// File a project under its level; returns `false` for levels above the maximum
    pub fn insert(&mut self, project: &str, level: u32) -> bool {
        match self.buckets.get_mut(level as usize) {
            Some(bucket) => {
                bucket.push(project.to_string());
                true
            }
            None => false,
        }
    }

    /// Union of the buckets in `[lower, upper]`, swapping reversed bounds
    ///
    /// Bounds above the maximum level are clamped. Order is bucket order,
    /// then insertion order; callers sort.
    pub fn range(&self, lower: u32, upper: u32) -> Vec<&str> {
        let (lower, upper) = normalize_range(lower, upper);
        let upper = upper.min(MAX_CONFIDENTIALITY);
        if lower > upper {
            return Vec::new();
        }
        self.buckets[lower as usize..=upper as usize]
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// Order a pair of bounds so the first is not greater than the second
pub fn normalize_range(lower: u32, upper: u32) -> (u32, u32) {
    if lower > upper {
        (upper, lower)
    } else {
        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_index_registers_every_token() {
        let mut index = KeywordIndex::new();
        index.insert("P1", "security audit");
        index.insert("P2", "audit");

        assert_eq!(index.lookup("security"), &["P1".to_string()]);
        assert_eq!(index.lookup("audit"), &["P1".to_string(), "P2".to_string()]);
        assert!(index.lookup("nothing").is_empty());
        assert!(!index.contains("nothing"));
    }

    #[test]
    fn test_keyword_index_keeps_empty_and_repeated_tokens() {
        let mut index = KeywordIndex::new();
        index.insert("P1", "web  web");

        assert!(index.contains(""));
        assert_eq!(index.lookup("web").len(), 2);
    }

    #[test]
    fn test_buckets_reject_levels_above_maximum() {
        let mut buckets = ConfidentialityBuckets::new();
        assert!(buckets.insert("P1", 5));
        assert!(!buckets.insert("P2", 6));
        assert_eq!(buckets.range(0, 5), vec!["P1"]);
    }

    #[test]
    fn test_range_swaps_and_clamps() {
        let mut buckets = ConfidentialityBuckets::new();
        buckets.insert("P3", 3);
        buckets.insert("P0", 0);
        buckets.insert("P5", 5);

        assert_eq!(buckets.range(5, 0), buckets.range(0, 5));
        assert_eq!(buckets.range(0, 99), vec!["P0", "P3", "P5"]);
        assert_eq!(buckets.range(1, 4), vec!["P3"]);
        assert!(buckets.range(7, 9).is_empty());
    }
}
