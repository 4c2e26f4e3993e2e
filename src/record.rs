//! Fixed-size binary codec for task records.
//!
//! Every record occupies exactly [`RECORD_SIZE`] bytes on disk:
//!
//! | offset | field       | width | encoding                              |
//! |--------|-------------|-------|---------------------------------------|
//! | 0      | id          | 4     | big-endian `i32`                      |
//! | 4      | completed   | 1     | `1` = true, `0` = false               |
//! | 5      | amount      | 4     | big-endian `i32`                      |
//! | 9      | description | 119   | UTF-8, left-justified, zero-padded    |
//!
//! Descriptions are truncated to [`MAX_DESCRIPTION_CHARS`] characters at
//! construction, so the 119-byte field always has at least 19 bytes of spare
//! padding for ASCII text. The padding must be preserved for wire
//! compatibility with files produced by the dataset generator.
//!
//! # Examples
//!
//! ```
//! use record_bench::{RECORD_SIZE, TaskRecord};
//!
//! let record = TaskRecord::new(7, "restock shelves", true, 250);
//! let bytes = record.encode();
//! assert_eq!(bytes.len(), RECORD_SIZE);
//!
//! let decoded = TaskRecord::decode(&bytes).expect("valid record buffer");
//! assert_eq!(decoded.id(), 7);
//! assert_eq!(decoded.description(), "restock shelves");
//! ```

use std::str;

use crate::error::Error;

/// Exact on-disk size of one encoded record in bytes.
pub const RECORD_SIZE: usize = 128;

/// Maximum number of characters kept from a description at construction.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Byte offset of the description field within an encoded record.
const DESCRIPTION_OFFSET: usize = 9;

/// Width of the description field: id (4) + completed (1) + amount (4)
/// leaves 119 bytes of the 128-byte record.
const DESCRIPTION_LEN: usize = RECORD_SIZE - DESCRIPTION_OFFSET;

/// A fixed-size task record, the sole entity persisted in the benchmark file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskRecord {
    id: i32,
    completed: bool,
    amount: i32,
    description: String,
}

impl TaskRecord {
    /// Constructs a record, truncating the description to its first
    /// [`MAX_DESCRIPTION_CHARS`] characters.
    ///
    /// Truncation is a deliberate lossy policy rather than an error. The
    /// kept prefix is additionally clamped to the 119-byte field width on a
    /// character boundary so multi-byte text can never overflow the field.
    pub fn new(id: i32, description: &str, completed: bool, amount: i32) -> Self {
        Self {
            id,
            completed,
            amount,
            description: clamp_description(description).to_string(),
        }
    }

    /// Encodes the record into a fresh [`RECORD_SIZE`]-byte buffer.
    ///
    /// The returned array is always exactly 128 bytes; the description field
    /// is zero-padded out to its full width.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        self.fill(&mut buf);
        buf
    }

    /// Encodes the record into a caller-provided [`RECORD_SIZE`]-byte span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordLength`] if the span is not exactly
    /// [`RECORD_SIZE`] bytes. In correct usage this is unreachable.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.len() != RECORD_SIZE {
            return Err(Error::RecordLength {
                expected: RECORD_SIZE,
                actual: buf.len(),
            });
        }
        self.fill(buf);
        Ok(())
    }

    /// Writes all fields into a span already verified to be 128 bytes.
    fn fill(&self, buf: &mut [u8]) {
        buf[..4].copy_from_slice(&self.id.to_be_bytes());
        buf[4] = u8::from(self.completed);
        buf[5..DESCRIPTION_OFFSET].copy_from_slice(&self.amount.to_be_bytes());

        let desc = self.description.as_bytes();
        buf[DESCRIPTION_OFFSET..DESCRIPTION_OFFSET + desc.len()].copy_from_slice(desc);
        buf[DESCRIPTION_OFFSET + desc.len()..].fill(0);
    }

    /// Decodes a record from a [`RECORD_SIZE`]-byte buffer.
    ///
    /// Trailing zero and whitespace bytes are stripped from the description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordLength`] if the buffer is not exactly
    /// [`RECORD_SIZE`] bytes, or [`Error::DescriptionEncoding`] if the
    /// description bytes are not valid UTF-8.
    pub fn decode(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() != RECORD_SIZE {
            return Err(Error::RecordLength {
                expected: RECORD_SIZE,
                actual: buf.len(),
            });
        }

        let id = i32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let completed = buf[4] == 1;
        let amount = i32::from_be_bytes([buf[5], buf[6], buf[7], buf[8]]);

        let description = str::from_utf8(&buf[DESCRIPTION_OFFSET..])
            .map_err(|err| Error::DescriptionEncoding {
                position: err.valid_up_to(),
            })?
            .trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
            .to_string();

        Ok(Self {
            id,
            completed,
            amount,
            description,
        })
    }

    /// Gets the record identifier.
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Gets the completion flag.
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Gets the amount.
    pub const fn amount(&self) -> i32 {
        self.amount
    }

    /// Gets the description text.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Returns the prefix of `description` that fits both the character cap and
/// the byte width of the on-disk field, ending on a character boundary.
fn clamp_description(description: &str) -> &str {
    let char_end = description
        .char_indices()
        .nth(MAX_DESCRIPTION_CHARS)
        .map_or(description.len(), |(idx, _)| idx);

    let mut end = char_end.min(DESCRIPTION_LEN);
    while !description.is_char_boundary(end) {
        end -= 1;
    }

    &description[..end]
}
