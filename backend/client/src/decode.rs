//! Incremental SSE record decoder.
//!
//! Network chunks do not respect record boundaries: one chunk may carry many
//! records, or a record (even a single UTF-8 character) may arrive split
//! across chunks. The decoder buffers raw bytes and only yields the payload
//! of complete records, so downstream JSON parsing never sees a torn frame.

/// Record delimiter per the SSE framing rules.
const RECORD_DELIMITER: &[u8] = b"\n\n";

#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk; returns the `data:` payload of every record
    /// completed by it, in arrival order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(pos) = find_delimiter(&self.buf) {
            let record: Vec<u8> = self.buf.drain(..pos + RECORD_DELIMITER.len()).collect();
            if let Some(payload) = parse_record(&record[..pos]) {
                payloads.push(payload);
            }
        }
        payloads
    }
}

fn find_delimiter(buf: &[u8]) -> Option<usize> {
    buf.windows(RECORD_DELIMITER.len())
        .position(|window| window == RECORD_DELIMITER)
}

/// Extract the payload of one complete record. Multiple `data:` lines join
/// with a newline per the SSE rules; comment lines (`:`) and unknown fields
/// are ignored. Records with no data field yield nothing.
fn parse_record(record: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(record);
    let mut data_lines = Vec::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("data:") {
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    if data_lines.is_empty() {
        None
    } else {
        Some(data_lines.join("\n"))
    }
}
