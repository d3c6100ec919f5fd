use thiserror::Error;

/// Fatal LVF decode errors.
///
/// Each variant aborts decoding at the stage where it occurs; no later
/// stage runs and no partial record is returned. Messages name the section
/// and the expected-vs-actual byte counts where applicable.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad magic {actual:?}: not an LVF feature file")]
    BadMagic { actual: [u8; 8] },
    #[error("unsupported LVF version: {version} (supported: {supported})")]
    UnsupportedVersion { version: u32, supported: u32 },
    #[error("unexpected EOF in {section}: need {needed} bytes, got {actual}")]
    UnexpectedEof {
        section: &'static str,
        needed: usize,
        actual: usize,
    },
    #[error("truncated matrix data: need {needed} bytes, got {actual}")]
    TruncatedMatrix { needed: u64, actual: u64 },
    #[error("truncated VAD flags: need {needed} bytes, got {actual}")]
    TruncatedVad { needed: u64, actual: u64 },
    #[error("matrix dimensions too large: {rows} x {cols} exceeds {limit} values")]
    MatrixTooLarge { rows: u32, cols: u32, limit: u64 },
}
