//! Plain-text diagnostic report rendering.

use crate::FeatureMatrix;

use super::labels::{
    cepstral_type_label, compression_type_label, filterbank_type_label, mel_scale_label,
};
use super::{Inspection, escape_magic};

/// How many VAD flag values the report previews.
const VAD_PREVIEW_LEN: usize = 50;

/// Bounds on how much of the matrix the text report shows.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Matrix rows to print in preview mode.
    pub max_rows: u32,
    /// Columns per row to print in preview mode.
    pub max_cols: u32,
    /// Print every row and column, ignoring the bounds above.
    pub full_matrix: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_rows: 5,
            max_cols: 10,
            full_matrix: false,
        }
    }
}

/// Render the diagnostic report for a completed inspection.
///
/// Pure formatting; the decoder has already rejected malformed input, so
/// nothing here validates.
pub fn render_text(inspection: &Inspection, preview: &PreviewOptions) -> String {
    let file = &inspection.file;
    let opts = &file.options;
    let mut out = String::new();

    out.push_str(&format!(
        "File: {} ({} bytes)\n",
        inspection.input.path, inspection.input.bytes
    ));
    out.push_str(&format!("Magic: {}\n", escape_magic(&file.header.magic)));
    out.push_str(&format!("Version: {}\n", file.header.version));
    out.push('\n');

    out.push_str(&format!(
        "CepstralType: {} ({})\n",
        opts.cepstral_type,
        cepstral_type_label(opts.cepstral_type)
    ));
    out.push('\n');

    out.push_str("FeatureOptions:\n");
    out.push_str(&format!("  sampleRate: {}\n", opts.sample_rate));
    out.push_str(&format!("  numFilters: {}\n", opts.num_filters));
    out.push_str(&format!("  numCoeffs:  {}\n", opts.num_coeffs));
    out.push_str(&format!("  minFreq:    {}\n", opts.min_freq));
    out.push_str(&format!("  maxFreq:    {}\n", opts.max_freq));
    out.push_str(&format!("  includeEnergy: {}\n", opts.include_energy));
    out.push_str(&format!(
        "  filterbank: {} ({})\n",
        opts.filterbank_type,
        filterbank_type_label(opts.filterbank_type)
    ));
    out.push_str(&format!(
        "  melScale:   {} ({})\n",
        opts.mel_scale,
        mel_scale_label(opts.mel_scale)
    ));
    out.push_str(&format!(
        "  compressionType: {} ({})\n",
        opts.compression_type,
        compression_type_label(opts.compression_type)
    ));
    out.push('\n');

    out.push_str(&format!(
        "FeatureMatrix: {} x {} (float32)\n",
        file.matrix.rows, file.matrix.cols
    ));
    out.push('\n');

    if preview.full_matrix {
        render_full_matrix(&mut out, &file.matrix);
    } else {
        render_matrix_preview(&mut out, &file.matrix, preview);
    }
    out.push('\n');

    out.push_str(&format!("VADFlags: {} entries\n", file.vad.len()));
    out.push_str(&format!("  Speech:    {}\n", file.vad.speech_count()));
    out.push_str(&format!("  NonSpeech: {}\n", file.vad.non_speech_count()));
    let shown = file
        .vad
        .flags
        .iter()
        .take(VAD_PREVIEW_LEN)
        .map(|flag| flag.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let elided = if file.vad.len() > VAD_PREVIEW_LEN {
        " ..."
    } else {
        ""
    };
    out.push_str(&format!("  first {VAD_PREVIEW_LEN}:  {shown}{elided}\n"));
    out.push('\n');

    if file.has_trailing_data {
        out.push_str("[WARN] trailing bytes after the VAD section (format mismatch?)\n");
    } else {
        out.push_str("OK: file structure matches the expected LVF layout.\n");
    }

    out
}

fn render_matrix_preview(out: &mut String, matrix: &FeatureMatrix, preview: &PreviewOptions) {
    out.push_str("Matrix preview (first rows/cols):\n");
    let rows = matrix.rows.min(preview.max_rows);
    let cols = matrix.cols.min(preview.max_cols);
    let elided = if matrix.cols > cols { " ..." } else { "" };
    for row_index in 0..rows {
        let Some(row) = matrix.row(row_index) else {
            break;
        };
        let cells = row[..cols as usize]
            .iter()
            .map(|value| format!("{value:.5}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  row {row_index:>4}: {cells}{elided}\n"));
    }
}

fn render_full_matrix(out: &mut String, matrix: &FeatureMatrix) {
    out.push_str("Matrix (full):\n");
    for row_index in 0..matrix.rows {
        let Some(row) = matrix.row(row_index) else {
            break;
        };
        let cells = row
            .iter()
            .map(|value| format!("{value:.6}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {cells}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::{PreviewOptions, render_text};
    use crate::{
        FeatureMatrix, FeatureOptions, FileHeader, InputInfo, LvfFile, VadFlags,
        report::Inspection,
    };

    fn sample_inspection(rows: u32, cols: u32, vad: Vec<u8>, trailing: bool) -> Inspection {
        let values = (rows as usize) * (cols as usize);
        Inspection {
            input: InputInfo {
                path: "sample.lvf".to_string(),
                bytes: 128,
            },
            file: LvfFile {
                header: FileHeader {
                    magic: *b"LVFEAT\0\0",
                    version: 1,
                },
                options: FeatureOptions {
                    cepstral_type: 0,
                    sample_rate: 16_000,
                    num_filters: 26,
                    num_coeffs: 13,
                    min_freq: 20.0,
                    max_freq: 8_000.0,
                    include_energy: true,
                    filterbank_type: 0,
                    mel_scale: 1,
                    compression_type: 0,
                },
                matrix: FeatureMatrix {
                    rows,
                    cols,
                    data: (0..values).map(|index| index as f32).collect(),
                },
                vad: VadFlags { flags: vad },
                has_trailing_data: trailing,
            },
        }
    }

    #[test]
    fn report_resolves_labels() {
        let inspection = sample_inspection(2, 2, vec![1, 0], false);
        let text = render_text(&inspection, &PreviewOptions::default());
        assert!(text.contains("CepstralType: 0 (MFCC)"));
        assert!(text.contains("filterbank: 0 (Mel)"));
        assert!(text.contains("melScale:   1 (Slaney)"));
        assert!(text.contains("compressionType: 0 (Log)"));
    }

    #[test]
    fn unknown_enum_renders_unknown() {
        let mut inspection = sample_inspection(1, 1, vec![1], false);
        inspection.file.options.cepstral_type = 99;
        let text = render_text(&inspection, &PreviewOptions::default());
        assert!(text.contains("CepstralType: 99 (UNKNOWN)"));
    }

    #[test]
    fn preview_elides_columns_with_marker() {
        let inspection = sample_inspection(8, 12, vec![1, 0, 1], false);
        let preview = PreviewOptions::default();
        let text = render_text(&inspection, &preview);
        assert!(text.contains("Matrix preview (first rows/cols):"));
        assert!(text.contains("row    0:"));
        assert!(text.contains(" ...\n"));
        // 5 preview rows, not all 8
        assert!(!text.contains("row    5:"));
    }

    #[test]
    fn full_matrix_prints_every_row() {
        let inspection = sample_inspection(8, 2, vec![1], false);
        let preview = PreviewOptions {
            full_matrix: true,
            ..PreviewOptions::default()
        };
        let text = render_text(&inspection, &preview);
        assert!(text.contains("Matrix (full):"));
        assert!(text.contains("  0.000000 1.000000\n"));
        assert!(text.contains("  14.000000 15.000000\n"));
    }

    #[test]
    fn vad_section_counts_and_previews() {
        let mut flags = vec![1u8; 60];
        flags[10] = 0;
        let inspection = sample_inspection(1, 1, flags, false);
        let text = render_text(&inspection, &PreviewOptions::default());
        assert!(text.contains("VADFlags: 60 entries"));
        assert!(text.contains("Speech:    59"));
        assert!(text.contains("NonSpeech: 1"));
        assert!(text.contains("first 50:"));
        assert!(text.contains(" ...\n"));
    }

    #[test]
    fn trailing_data_renders_warning_line() {
        let inspection = sample_inspection(1, 1, vec![1], true);
        let text = render_text(&inspection, &PreviewOptions::default());
        assert!(text.contains("[WARN] trailing bytes"));
        assert!(!text.contains("OK:"));
    }

    #[test]
    fn clean_file_renders_ok_line() {
        let inspection = sample_inspection(1, 1, vec![1], false);
        let text = render_text(&inspection, &PreviewOptions::default());
        assert!(text.contains("OK: file structure matches the expected LVF layout."));
    }
}
