//! Core library for offline inspection of `.lvf` feature files.
//!
//! This crate implements the decode-and-report pipeline used by the CLI:
//! a forward-only binary decoder (layout/reader/parser) turns an LVF byte
//! stream into an immutable record, and the report layer resolves enum
//! labels and renders the diagnostic output. Decoding is byte-oriented and
//! side-effect free; all file I/O is isolated in `inspect_lvf_file`.
//!
//! Invariants:
//! - Decoding is a single forward pass with a strict stage order; the first
//!   fatal error aborts and no partial record escapes.
//! - Unknown enum integers decode successfully and resolve to "UNKNOWN"
//!   only at presentation time.
//! - Matrix and VAD buffer sizes are computed in widened integers and
//!   bounded before allocation.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur d'inspection des fichiers `.lvf` : décodeur
//! binaire strictement séquentiel (layout/reader/parser) -> enregistrement
//! immuable -> rapport. Les erreurs fatales interrompent immédiatement le
//! décodage ; les valeurs d'énumération inconnues restent licites et sont
//! rendues « UNKNOWN » à l'affichage.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use lvfinspect_core::inspect_lvf_file;
//!
//! let inspection = inspect_lvf_file(Path::new("features.lvf"))?;
//! println!(
//!     "matrix: {} x {}",
//!     inspection.file.matrix.rows,
//!     inspection.file.matrix.cols
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod format;
mod report;

pub use format::{FormatError, decode_lvf};
pub use report::{
    InspectError, Inspection, PreviewOptions, build_report, cepstral_type_label,
    compression_type_label, filterbank_type_label, inspect_lvf_file, mel_scale_label, render_text,
};

/// Current report schema version (not the LVF format version).
pub const REPORT_VERSION: u32 = 1;

/// Fixed 12-byte header of an LVF stream.
///
/// # Examples
/// ```
/// use lvfinspect_core::FileHeader;
///
/// let header = FileHeader {
///     magic: *b"LVFEAT\0\0",
///     version: 1,
/// };
/// assert_eq!(header.version, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FileHeader {
    /// Raw 8-byte magic as read from the stream.
    pub magic: [u8; 8],
    /// Format version (only version 1 is supported).
    pub version: u32,
}

/// Feature-extraction parameters stored in the options section.
///
/// Enum-valued fields keep the raw `u32` from the stream; values outside
/// the known ranges are legal and resolve to "UNKNOWN" in reports.
///
/// # Examples
/// ```
/// use lvfinspect_core::{FeatureOptions, cepstral_type_label};
///
/// let options = FeatureOptions {
///     cepstral_type: 0,
///     sample_rate: 16_000,
///     num_filters: 26,
///     num_coeffs: 13,
///     min_freq: 0.0,
///     max_freq: 8_000.0,
///     include_energy: true,
///     filterbank_type: 0,
///     mel_scale: 0,
///     compression_type: 0,
/// };
/// assert_eq!(cepstral_type_label(options.cepstral_type), "MFCC");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureOptions {
    /// Cepstral representation family (0 MFCC, 1 LFCC, 2 GFCC, 3 PNCC, 4 PLP).
    pub cepstral_type: u32,
    /// Audio sample rate in Hz.
    pub sample_rate: i32,
    /// Number of analysis filters.
    pub num_filters: i32,
    /// Number of cepstral coefficients.
    pub num_coeffs: i32,
    /// Lower analysis frequency bound in Hz.
    pub min_freq: f64,
    /// Upper analysis frequency bound in Hz.
    pub max_freq: f64,
    /// Whether the energy coefficient is appended.
    pub include_energy: bool,
    /// Filterbank family (0 Mel, 1 Linear, 2 Gammatone, 3 Bark).
    pub filterbank_type: u32,
    /// Mel scale variant (0 HTK, 1 Slaney).
    pub mel_scale: u32,
    /// Compression applied to filterbank energies (0 Log, 1 PowerNormalized,
    /// 2 CubeRoot).
    pub compression_type: u32,
}

/// Dense row-major feature matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    /// Number of frames.
    pub rows: u32,
    /// Coefficients per frame.
    pub cols: u32,
    /// Row-major values, `rows * cols` entries.
    pub data: Vec<f32>,
}

impl FeatureMatrix {
    /// Total number of values, widened so extreme dimensions cannot wrap.
    pub fn value_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// One row of the matrix, or `None` when `row >= rows`.
    ///
    /// # Examples
    /// ```
    /// use lvfinspect_core::FeatureMatrix;
    ///
    /// let matrix = FeatureMatrix {
    ///     rows: 2,
    ///     cols: 2,
    ///     data: vec![1.0, 2.0, 3.0, 4.0],
    /// };
    /// assert_eq!(matrix.row(1), Some(&[3.0f32, 4.0][..]));
    /// assert_eq!(matrix.row(2), None);
    /// ```
    pub fn row(&self, row: u32) -> Option<&[f32]> {
        if row >= self.rows {
            return None;
        }
        let cols = self.cols as usize;
        let start = row as usize * cols;
        self.data.get(start..start + cols)
    }
}

/// Per-frame voice-activity flags.
///
/// Byte value 1 marks speech; every other value counts as non-speech. The
/// decoder does not restrict flag values to {0, 1}.
///
/// # Examples
/// ```
/// use lvfinspect_core::VadFlags;
///
/// let vad = VadFlags {
///     flags: vec![1, 0, 1, 7],
/// };
/// assert_eq!(vad.speech_count(), 2);
/// assert_eq!(vad.non_speech_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VadFlags {
    /// Raw flag bytes in frame order.
    pub flags: Vec<u8>,
}

impl VadFlags {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the flag sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Frames whose flag byte equals exactly 1.
    pub fn speech_count(&self) -> u64 {
        self.flags
            .iter()
            .filter(|&&flag| flag == format::layout::VAD_SPEECH)
            .count() as u64
    }

    /// Frames with any other flag byte value.
    pub fn non_speech_count(&self) -> u64 {
        self.len() as u64 - self.speech_count()
    }
}

/// A fully decoded LVF file. Constructed once by the decoder and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct LvfFile {
    /// Magic and version.
    pub header: FileHeader,
    /// Feature-extraction parameters.
    pub options: FeatureOptions,
    /// Dense feature matrix.
    pub matrix: FeatureMatrix,
    /// Per-frame VAD flags.
    pub vad: VadFlags,
    /// True when bytes remain after the VAD section (warning, not an error).
    pub has_trailing_data: bool,
}

/// Structured inspection report with resolved enum labels.
///
/// # Examples
/// ```
/// use lvfinspect_core::{InputInfo, ToolInfo};
///
/// let tool = ToolInfo {
///     name: "lvfinspect".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// let input = InputInfo {
///     path: "features.lvf".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(tool.name, "lvfinspect");
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version.
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input file metadata.
    pub input: InputInfo,
    /// Header fields.
    pub header: HeaderSummary,
    /// Options with raw values and resolved labels.
    pub options: OptionsSummary,
    /// Matrix dimensions.
    pub matrix: MatrixSummary,
    /// VAD flag accounting.
    pub vad: VadSummary,
    /// True when trailing bytes were detected after the VAD section.
    pub trailing_data: bool,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "lvfinspect").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the inspector.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Header fields, magic rendered printable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSummary {
    /// Magic bytes with non-printable characters escaped.
    pub magic: String,
    /// Format version.
    pub version: u32,
}

/// Options section with enum fields carrying both value and label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsSummary {
    pub cepstral_type: EnumField,
    pub sample_rate: i32,
    pub num_filters: i32,
    pub num_coeffs: i32,
    pub min_freq: f64,
    pub max_freq: f64,
    pub include_energy: bool,
    pub filterbank_type: EnumField,
    pub mel_scale: EnumField,
    pub compression_type: EnumField,
}

/// Raw enum integer plus its resolved human label.
///
/// # Examples
/// ```
/// use lvfinspect_core::EnumField;
///
/// let field = EnumField::new(99, "UNKNOWN");
/// assert_eq!(field.value, 99);
/// assert_eq!(field.label, "UNKNOWN");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumField {
    /// Raw integer from the stream.
    pub value: u32,
    /// Resolved label, "UNKNOWN" when the value is unmapped.
    pub label: String,
}

impl EnumField {
    pub fn new(value: u32, label: &str) -> Self {
        Self {
            value,
            label: label.to_string(),
        }
    }
}

/// Matrix dimensions summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixSummary {
    pub rows: u32,
    pub cols: u32,
    /// `rows * cols`, widened.
    pub values: u64,
}

/// VAD flag accounting; `speech + non_speech == count` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadSummary {
    pub count: u64,
    pub speech: u64,
    pub non_speech: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_row_access() {
        let matrix = FeatureMatrix {
            rows: 3,
            cols: 2,
            data: vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        };
        assert_eq!(matrix.row(0), Some(&[0.0f32, 1.0][..]));
        assert_eq!(matrix.row(2), Some(&[4.0f32, 5.0][..]));
        assert_eq!(matrix.row(3), None);
        assert_eq!(matrix.value_count(), 6);
    }

    #[test]
    fn vad_accounting_sums_to_total() {
        let vad = VadFlags {
            flags: vec![1, 0, 1, 2, 255, 1, 0],
        };
        assert_eq!(vad.speech_count(), 3);
        assert_eq!(vad.non_speech_count(), 4);
        assert_eq!(vad.speech_count() + vad.non_speech_count(), vad.len() as u64);
    }

    #[test]
    fn vad_only_exact_one_is_speech() {
        let vad = VadFlags {
            flags: (0..=255).collect(),
        };
        assert_eq!(vad.speech_count(), 1);
        assert_eq!(vad.non_speech_count(), 255);
    }
}
