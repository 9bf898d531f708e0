//! Fixed-length sequence preparation for the scorer input.

/// The fixed model input length the network was trained with
pub const MAX_SEQUENCE_LEN: usize = 1000;

/// The id used to fill short sequences
pub const PAD_ID: u32 = 0;

/// Pad or truncate a token sequence to exactly [`MAX_SEQUENCE_LEN`] ids.
///
/// Padding is appended after the real tokens; excess tokens are dropped from
/// the end. A sequence that is already the right length is returned unchanged.
pub fn pad(mut ids: Vec<u32>) -> Vec<u32> {
    ids.truncate(MAX_SEQUENCE_LEN);
    ids.resize(MAX_SEQUENCE_LEN, PAD_ID);

    ids
}
