use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::emitter::SamRecordEmitter;
use crate::sam_record::SamRecord;

/// Header detection is a one-way transition: once the first non-`@` line is
/// seen, every later line is treated as an alignment record, even if it
/// happens to start with `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    InHeader,
    Streaming,
}

/// Streams a SAM file line by line: header lines pass through unmodified,
/// alignment lines are parsed and re-emitted through the configured emitter.
/// A malformed alignment line aborts the run with its 1-based line number;
/// output already written stays written.
pub fn modify_sam<R: BufRead, W: Write>(
    emitter: &SamRecordEmitter,
    reader: R,
    writer: &mut W,
) -> Result<()> {
    let mut state = StreamState::InHeader;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.context("failed to read SAM line")?;

        if state == StreamState::InHeader {
            if line.starts_with('@') {
                writeln!(writer, "{}", line).context("failed to write header line")?;
                continue;
            }
            state = StreamState::Streaming;
        }

        let record = SamRecord::from_line(&line).with_context(|| {
            format!("failed to parse SAM record at line {}", line_number + 1)
        })?;
        writeln!(writer, "{}", emitter.custom_emit(&record))
            .context("failed to write SAM record")?;
    }

    Ok(())
}
