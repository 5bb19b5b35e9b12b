use std::collections::HashSet;

/// Set of SAM tag keys, used to resolve tag inclusion/exclusion against the
/// tags actually present in a record. Duplicate input keys collapse to a
/// single member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    keys: HashSet<String>,
}

impl TagSet {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TagSet {
            keys: keys.into_iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn intersect(&self, other: &TagSet) -> TagSet {
        TagSet {
            keys: self.keys.intersection(&other.keys).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &TagSet) -> TagSet {
        TagSet {
            keys: self.keys.difference(&other.keys).cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Any key common to both sets, if one exists.
    pub fn any_common_key(&self, other: &TagSet) -> Option<&str> {
        self.keys
            .iter()
            .find(|k| other.keys.contains(k.as_str()))
            .map(|k| k.as_str())
    }
}
