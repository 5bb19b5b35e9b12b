use std::collections::HashMap;

use thiserror::Error;

/// Number of mandatory columns in a SAM alignment line.
pub const FIXED_FIELD_COUNT: usize = 11;

/// Canonical SAM field names, indexed by column position.
pub const FIELD_NAMES: [&str; FIXED_FIELD_COUNT] = [
    "QNAME", "FLAG", "RNAME", "POS", "MAPQ", "CIGAR", "RNEXT", "PNEXT", "TLEN", "SEQ", "QUAL",
];

/// Column position of a canonical field name, if the name is known.
pub fn field_column(name: &str) -> Option<usize> {
    FIELD_NAMES.iter().position(|&f| f == name)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("SAM record has {columns} tab-separated columns, expected at least 11")]
pub struct ParseError {
    pub columns: usize,
}

/// A single alignment line from a SAM file: the 11 fixed fields plus an
/// ordered collection of optional tags. Tag values keep their full
/// `KEY:TYPE:VALUE` form verbatim; no value is ever re-encoded.
#[derive(Debug, Clone)]
pub struct SamRecord {
    fields: Vec<String>,
    tag_keys: Vec<String>,
    tags: HashMap<String, String>,
}

impl SamRecord {
    /// Parses one raw tab-delimited alignment line. Columns 0-10 map
    /// positionally to the fixed fields; columns beyond that are tags, keyed
    /// by the text before the first colon. A duplicated tag key keeps its
    /// first position but takes the last occurrence's value.
    pub fn from_line(line: &str) -> Result<Self, ParseError> {
        let split: Vec<&str> = line.split('\t').collect();
        if split.len() < FIXED_FIELD_COUNT {
            return Err(ParseError {
                columns: split.len(),
            });
        }

        let fields = split[..FIXED_FIELD_COUNT]
            .iter()
            .map(|f| f.to_string())
            .collect();

        let mut tag_keys = Vec::new();
        let mut tags = HashMap::new();
        for &tagval in &split[FIXED_FIELD_COUNT..] {
            let tagkey = tagval.split(':').next().unwrap_or(tagval);
            if tags.insert(tagkey.to_string(), tagval.to_string()).is_none() {
                tag_keys.push(tagkey.to_string());
            }
        }

        Ok(SamRecord {
            fields,
            tag_keys,
            tags,
        })
    }

    /// Field value at a column position (0-10 inclusive).
    pub fn field(&self, col: usize) -> &str {
        &self.fields[col]
    }

    /// Field value by canonical name, or `None` for an unknown name.
    pub fn field_by_name(&self, name: &str) -> Option<&str> {
        field_column(name).map(|col| self.field(col))
    }

    /// A tag's full serialized value by key. An absent key is not an error.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }

    /// Tag keys in the order they appeared on the line.
    pub fn tag_keys(&self) -> &[String] {
        &self.tag_keys
    }

    /// All 11 fixed fields, unmodified, in canonical order.
    pub fn emit_fields(&self) -> &[String] {
        &self.fields
    }

    /// All tag values, unmodified, in the order they were parsed.
    pub fn emit_tags(&self) -> Vec<&str> {
        self.tag_keys
            .iter()
            .map(|key| self.tags[key].as_str())
            .collect()
    }
}
