use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeSet;
use std::fmt;

/// Upper bound on slug length, suffix included.
pub const MAX_SLUG_LENGTH: usize = 100;

/// Base token used when a title normalizes to nothing.
pub const FALLBACK_SLUG: &str = "article";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A URL-safe article identifier: lowercase ASCII word characters and single
/// hyphens, never starting or ending with a hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {MAX_SLUG_LENGTH} characters"
            )));
        }
        if !Self::is_valid(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must contain only a-z, 0-9, `_` and single inner hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && value.len() <= MAX_SLUG_LENGTH
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

/// A normalized tag token: trimmed, lowercase and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let normalized = value.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::Validation("tag cannot be blank".into()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of distinct tags attached to an article or derived from a like history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<TagName>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw strings, dropping blanks and merging entries that
    /// normalize to the same tag.
    pub fn from_raw<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter_map(|value| TagName::new(value).ok())
            .collect()
    }

    pub fn extend_from(&mut self, other: &TagSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn intersection_len(&self, other: &TagSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    pub fn union_len(&self, other: &TagSet) -> usize {
        self.len() + other.len() - self.intersection_len(other)
    }

    pub fn shares_any(&self, other: &TagSet) -> bool {
        self.intersection_len(other) > 0
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|tag| tag.as_str().to_owned()).collect()
    }
}

impl FromIterator<TagName> for TagSet {
    fn from_iter<T: IntoIterator<Item = TagName>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a TagName;
    type IntoIter = std::collections::btree_set::Iter<'a, TagName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
