use std::borrow::Cow;
use std::fmt;

/// Identifier of a published advisory, e.g. `RUSTSEC-2022-0093`.
///
/// The id is opaque: it is never parsed, only checked for being non-empty.
/// The external auditor is the authority on whether it exists.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdvisoryId(Cow<'static, str>);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("advisory id must not be empty (got {raw:?})")]
pub struct InvalidAdvisoryId {
    pub raw: String,
}

impl AdvisoryId {
    /// Build an id from user-provided text. Surrounding whitespace is trimmed.
    pub fn new<S: AsRef<str>>(raw: S) -> Result<Self, InvalidAdvisoryId> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidAdvisoryId {
                raw: raw.as_ref().to_string(),
            });
        }
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// Compiled-in ids. Callers pass literals that are known to be non-empty.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdvisoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of advisories the audit should not fail on.
///
/// Order is preserved all the way to the generated arguments. `push` keeps
/// duplicates; use `push_unique` when merging lists from several sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreList(Vec<AdvisoryId>);

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(ids: &[&'static str]) -> Self {
        ids.iter().copied().map(AdvisoryId::from_static).collect()
    }

    pub fn push(&mut self, id: AdvisoryId) {
        self.0.push(id);
    }

    /// Append `id` unless it is already listed. Returns whether it was added.
    pub fn push_unique(&mut self, id: AdvisoryId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn contains(&self, id: &AdvisoryId) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdvisoryId> {
        self.0.iter()
    }
}

impl FromIterator<AdvisoryId> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = AdvisoryId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IgnoreList {
    type Item = &'a AdvisoryId;
    type IntoIter = std::slice::Iter<'a, AdvisoryId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
