use thiserror::Error;

use crate::sam_record::{field_column, SamRecord, FIXED_FIELD_COUNT};
use crate::tag_set::TagSet;

/// Replacement value emitted for each excluded field, indexed by column
/// position. These are the SAM-defined "information unavailable" sentinels,
/// not arbitrary choices.
const FIELD_REPLACEMENTS: [&str; FIXED_FIELD_COUNT] = [
    "*",   // QNAME
    "0",   // FLAG
    "*",   // RNAME
    "0",   // POS
    "255", // MAPQ
    "*",   // CIGAR
    "*",   // RNEXT
    "0",   // PNEXT
    "0",   // TLEN
    "*",   // SEQ
    "*",   // QUAL
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid field: '{0}'")]
    InvalidField(String),
    #[error("overlap between 'tags' and 'notags': '{0}'")]
    TagOverlap(String),
}

/// Emits SamRecords with fields and tags included/excluded according to a
/// configuration built once from three selection strings. Immutable after
/// construction; reused across every record in the stream.
#[derive(Debug, Clone)]
pub struct SamRecordEmitter {
    emit_all_fields: bool,
    emit_all_tags: bool,
    inclusion_emit: bool,
    fields: [bool; FIXED_FIELD_COUNT],
    tags: Vec<String>,
    notags: Vec<String>,
}

impl SamRecordEmitter {
    /// Builds an emitter from the `fields`, `tags`, and `notags` selection
    /// strings (comma-delimited, empty meaning "no selection"). All
    /// validation happens here; a returned emitter cannot fail to render.
    pub fn new(fields: &str, tags: &str, notags: &str) -> Result<Self, ConfigError> {
        let mut emitter = SamRecordEmitter {
            emit_all_fields: false,
            emit_all_tags: false,
            inclusion_emit: false,
            fields: [false; FIXED_FIELD_COUNT],
            tags: Vec::new(),
            notags: Vec::new(),
        };
        emitter.setup_fields(fields)?;
        emitter.setup_tags_notags(tags, notags)?;
        Ok(emitter)
    }

    fn setup_fields(&mut self, fields: &str) -> Result<(), ConfigError> {
        if fields.is_empty() {
            self.emit_all_fields = true;
            return Ok(());
        }
        for requested in fields.split(',') {
            match field_column(requested) {
                Some(col) => self.fields[col] = true,
                None => return Err(ConfigError::InvalidField(requested.to_string())),
            }
        }
        Ok(())
    }

    fn setup_tags_notags(&mut self, tags: &str, notags: &str) -> Result<(), ConfigError> {
        if tags.is_empty() && notags.is_empty() {
            self.emit_all_tags = true;
            return Ok(());
        }

        // 'tags' switches to inclusion mode: nothing is emitted unless
        // whitelisted. Without it, everything is emitted except what
        // 'notags' blacklists. The blacklist is recorded either way.
        if !tags.is_empty() {
            self.inclusion_emit = true;
            self.tags = tags.split(',').map(|t| t.to_string()).collect();
        }
        if !notags.is_empty() {
            self.notags = notags.split(',').map(|t| t.to_string()).collect();
        }

        let tags_set = TagSet::from_keys(&self.tags);
        let notags_set = TagSet::from_keys(&self.notags);
        if let Some(key) = tags_set.any_common_key(&notags_set) {
            return Err(ConfigError::TagOverlap(key.to_string()));
        }
        Ok(())
    }

    /// Renders one record as its projected, tab-joined output line. Never
    /// fails: a record either carries a tag or it does not.
    pub fn custom_emit(&self, record: &SamRecord) -> String {
        let mut emitted: Vec<&str> = Vec::with_capacity(FIXED_FIELD_COUNT + record.tag_keys().len());

        if self.emit_all_fields {
            emitted.extend(record.emit_fields().iter().map(|f| f.as_str()));
        } else {
            for col in 0..FIXED_FIELD_COUNT {
                if self.fields[col] {
                    emitted.push(record.field(col));
                } else {
                    emitted.push(FIELD_REPLACEMENTS[col]);
                }
            }
        }

        if self.emit_all_tags {
            emitted.extend(record.emit_tags());
        } else {
            let record_keys = TagSet::from_keys(record.tag_keys());
            let tags_to_emit = if self.inclusion_emit {
                record_keys.intersect(&TagSet::from_keys(&self.tags))
            } else {
                record_keys.difference(&TagSet::from_keys(&self.notags))
            };
            // iterate the record's own key order so output tag order is
            // always a sub-sequence of input tag order
            for key in record.tag_keys() {
                if tags_to_emit.has(key) {
                    if let Some(tagval) = record.tag(key) {
                        emitted.push(tagval);
                    }
                }
            }
        }

        emitted.join("\t")
    }
}
