/// 8-byte magic written at the start of every LVF file.
pub const MAGIC: &[u8; 8] = b"LVFEAT\0\0";

/// The one supported format version.
pub const SUPPORTED_VERSION: u32 = 1;

/// Width of one matrix value (little-endian f32).
pub const MATRIX_VALUE_SIZE: u64 = 4;

/// Ceiling on `rows * cols` checked before the matrix buffer is allocated.
/// A corrupted dimension pair must not be able to request unbounded memory;
/// 2^28 values caps the matrix at 1 GiB of f32 data.
pub const MAX_MATRIX_VALUES: u64 = 1 << 28;

/// VAD flag byte that marks speech. Every other value is non-speech.
pub const VAD_SPEECH: u8 = 1;
