//! Zero-run compression.
//!
//! A reversible byte transform that collapses runs of `0x00` and passes every
//! other byte through unchanged. A run of `k` zeros becomes `ceil(k / 255)`
//! pairs `(0x00, count)` with every count in `1..=255`, the earlier pairs
//! always holding 255. The tagged encoding is zero-heavy (small lengths,
//! integral doubles), so this pass is applied to the whole buffer before it
//! leaves the crate.
//!
//! ```rust
//! use safeson::rle;
//!
//! let mut raw = vec![0u8; 1000];
//! raw.push(1);
//!
//! let packed = rle::encode(&raw);
//! assert_eq!(packed, [0, 255, 0, 255, 0, 255, 0, 235, 1]);
//! assert_eq!(rle::decode(&packed).unwrap(), raw);
//! ```

use crate::{Error, Result};

/// Longest zero run a single pair can describe.
pub const MAX_RUN: u8 = u8::MAX;

/// Compresses every run of zero bytes in `input`.
#[must_use]
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut position = 0;

    while position < input.len() {
        let byte = input[position];
        if byte != 0 {
            output.push(byte);
            position += 1;
            continue;
        }

        let run = input[position..].iter().take_while(|&&b| b == 0).count();
        let mut remaining = run;
        while remaining > 0 {
            let chunk = remaining.min(MAX_RUN as usize);
            output.push(0);
            output.push(chunk as u8);
            remaining -= chunk;
        }
        position += run;
    }

    output
}

/// Expands every `(0x00, count)` pair in `input`.
///
/// # Errors
///
/// Returns [`Error::MalformedRun`] if a zero byte is the last byte of the
/// input or is followed by a zero count.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(input.len());
    let mut position = 0;

    while position < input.len() {
        let byte = input[position];
        if byte != 0 {
            output.push(byte);
            position += 1;
            continue;
        }

        let count = match input.get(position + 1) {
            Some(0) => {
                return Err(Error::malformed_run(position + 1, "zero-length run"));
            }
            Some(&count) => count,
            None => {
                return Err(Error::malformed_run(position, "missing run length"));
            }
        };
        output.resize(output.len() + count as usize, 0);
        position += 2;
    }

    Ok(output)
}
