//! Report building and rendering over decoded LVF files.
//!
//! Everything here is presentation-only: label resolution, summary
//! building, and text formatting. Malformed input never reaches this layer;
//! the decoder has already rejected it.

mod labels;
mod text;

pub use labels::{
    cepstral_type_label, compression_type_label, filterbank_type_label, mel_scale_label,
};
pub use text::{PreviewOptions, render_text};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::format::{FormatError, decode_lvf};
use crate::{
    EnumField, HeaderSummary, InputInfo, LvfFile, MatrixSummary, OptionsSummary, REPORT_VERSION,
    Report, ToolInfo, VadSummary,
};

/// Errors surfaced by file-level inspection.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Format(#[from] FormatError),
}

/// A decoded LVF file together with the input metadata used in reports.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Path and size of the inspected file.
    pub input: InputInfo,
    /// The decoded record.
    pub file: LvfFile,
}

/// Open, decode, and validate an LVF file.
///
/// The file handle is scoped to this call and released on every exit path.
///
/// # Errors
/// Returns [`InspectError`] when the file cannot be read or is not a
/// well-formed LVF stream.
pub fn inspect_lvf_file(path: &Path) -> Result<Inspection, InspectError> {
    let bytes = path.metadata()?.len();
    let file = File::open(path)?;
    let decoded = decode_lvf(BufReader::new(file))?;

    Ok(Inspection {
        input: InputInfo {
            path: path.display().to_string(),
            bytes,
        },
        file: decoded,
    })
}

/// Build the structured report for a completed inspection.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use lvfinspect_core::{build_report, inspect_lvf_file};
///
/// let inspection = inspect_lvf_file(Path::new("features.lvf"))?;
/// let report = build_report(&inspection);
/// assert_eq!(report.report_version, lvfinspect_core::REPORT_VERSION);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build_report(inspection: &Inspection) -> Report {
    let file = &inspection.file;
    let opts = &file.options;

    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "lvfinspect".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: inspection.input.clone(),
        header: HeaderSummary {
            magic: escape_magic(&file.header.magic),
            version: file.header.version,
        },
        options: OptionsSummary {
            cepstral_type: EnumField::new(opts.cepstral_type, cepstral_type_label(opts.cepstral_type)),
            sample_rate: opts.sample_rate,
            num_filters: opts.num_filters,
            num_coeffs: opts.num_coeffs,
            min_freq: opts.min_freq,
            max_freq: opts.max_freq,
            include_energy: opts.include_energy,
            filterbank_type: EnumField::new(
                opts.filterbank_type,
                filterbank_type_label(opts.filterbank_type),
            ),
            mel_scale: EnumField::new(opts.mel_scale, mel_scale_label(opts.mel_scale)),
            compression_type: EnumField::new(
                opts.compression_type,
                compression_type_label(opts.compression_type),
            ),
        },
        matrix: MatrixSummary {
            rows: file.matrix.rows,
            cols: file.matrix.cols,
            values: file.matrix.value_count(),
        },
        vad: VadSummary {
            count: file.vad.len() as u64,
            speech: file.vad.speech_count(),
            non_speech: file.vad.non_speech_count(),
        },
        trailing_data: file.has_trailing_data,
    }
}

/// Render the magic bytes printable, escaping non-ASCII values.
pub(crate) fn escape_magic(magic: &[u8; 8]) -> String {
    let mut out = String::new();
    for &byte in magic {
        if (0x20..0x7f).contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("\\x{byte:02x}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_magic;

    #[test]
    fn escape_magic_keeps_printable_ascii() {
        assert_eq!(escape_magic(b"LVFEAT\0\0"), "LVFEAT\\x00\\x00");
    }

    #[test]
    fn escape_magic_escapes_high_bytes() {
        assert_eq!(
            escape_magic(&[0xff, b'A', 0x1f, b' ', b'~', 0x7f, b'z', 0x00]),
            "\\xffA\\x1f ~\\x7fz\\x00"
        );
    }
}
