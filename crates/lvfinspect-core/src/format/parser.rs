use std::io::Read;

use crate::{FeatureMatrix, FeatureOptions, FileHeader, LvfFile, VadFlags};

use super::error::FormatError;
use super::layout;
use super::reader::FieldReader;

/// Decode a complete LVF stream into an immutable record.
///
/// Stages run in fixed order (header, options, matrix, VAD flags, trailer
/// probe) over a forward-only source; the first fatal error aborts the
/// decode and nothing partial is returned. Trailing bytes after the VAD
/// section are tolerated and flagged on the result instead of failing.
///
/// # Errors
/// Returns [`FormatError`] when the stream is not a well-formed LVF file
/// or the underlying source fails.
///
/// # Examples
/// ```
/// use lvfinspect_core::decode_lvf;
///
/// let mut bytes = Vec::new();
/// bytes.extend_from_slice(b"LVFEAT\0\0");
/// bytes.extend_from_slice(&1u32.to_le_bytes()); // version
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // cepstral type
/// bytes.extend_from_slice(&16_000i32.to_le_bytes());
/// bytes.extend_from_slice(&26i32.to_le_bytes());
/// bytes.extend_from_slice(&13i32.to_le_bytes());
/// bytes.extend_from_slice(&0.0f64.to_le_bytes());
/// bytes.extend_from_slice(&8_000.0f64.to_le_bytes());
/// bytes.push(1); // include energy
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // filterbank
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // mel scale
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // compression
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // rows
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // cols
/// bytes.extend_from_slice(&0u32.to_le_bytes()); // vad count
///
/// let decoded = decode_lvf(bytes.as_slice())?;
/// assert_eq!(decoded.options.sample_rate, 16_000);
/// assert!(!decoded.has_trailing_data);
/// # Ok::<(), lvfinspect_core::FormatError>(())
/// ```
pub fn decode_lvf<R: Read>(source: R) -> Result<LvfFile, FormatError> {
    let mut reader = FieldReader::new(source);

    let header = decode_header(&mut reader)?;
    let options = decode_options(&mut reader)?;
    let matrix = decode_matrix(&mut reader)?;
    let vad = decode_vad(&mut reader)?;
    let has_trailing_data = reader.has_more_data()?;

    Ok(LvfFile {
        header,
        options,
        matrix,
        vad,
        has_trailing_data,
    })
}

fn decode_header<R: Read>(reader: &mut FieldReader<R>) -> Result<FileHeader, FormatError> {
    let magic: [u8; 8] = reader.read_array("header magic")?;
    if &magic != layout::MAGIC {
        return Err(FormatError::BadMagic { actual: magic });
    }

    let version = reader.read_u32_le("header version")?;
    if version != layout::SUPPORTED_VERSION {
        return Err(FormatError::UnsupportedVersion {
            version,
            supported: layout::SUPPORTED_VERSION,
        });
    }

    Ok(FileHeader { magic, version })
}

fn decode_options<R: Read>(reader: &mut FieldReader<R>) -> Result<FeatureOptions, FormatError> {
    let cepstral_type = reader.read_u32_le("options")?;
    let sample_rate = reader.read_i32_le("options")?;
    let num_filters = reader.read_i32_le("options")?;
    let num_coeffs = reader.read_i32_le("options")?;
    let min_freq = reader.read_f64_le("options")?;
    let max_freq = reader.read_f64_le("options")?;
    let include_energy = reader.read_u8("options")? != 0;
    let filterbank_type = reader.read_u32_le("options")?;
    let mel_scale = reader.read_u32_le("options")?;
    let compression_type = reader.read_u32_le("options")?;

    Ok(FeatureOptions {
        cepstral_type,
        sample_rate,
        num_filters,
        num_coeffs,
        min_freq,
        max_freq,
        include_energy,
        filterbank_type,
        mel_scale,
        compression_type,
    })
}

fn decode_matrix<R: Read>(reader: &mut FieldReader<R>) -> Result<FeatureMatrix, FormatError> {
    let rows = reader.read_u32_le("matrix dims")?;
    let cols = reader.read_u32_le("matrix dims")?;

    // Widened product: two u32 factors cannot wrap a u64.
    let total = u64::from(rows) * u64::from(cols);
    if total > layout::MAX_MATRIX_VALUES {
        return Err(FormatError::MatrixTooLarge {
            rows,
            cols,
            limit: layout::MAX_MATRIX_VALUES,
        });
    }
    let needed = total * layout::MATRIX_VALUE_SIZE;

    let bytes = reader.read_payload(needed)?;
    if (bytes.len() as u64) < needed {
        return Err(FormatError::TruncatedMatrix {
            needed,
            actual: bytes.len() as u64,
        });
    }

    let data = bytes
        .chunks_exact(layout::MATRIX_VALUE_SIZE as usize)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Ok(FeatureMatrix { rows, cols, data })
}

fn decode_vad<R: Read>(reader: &mut FieldReader<R>) -> Result<VadFlags, FormatError> {
    let count = reader.read_u32_le("vad count")?;
    let needed = u64::from(count);

    let flags = reader.read_payload(needed)?;
    if (flags.len() as u64) < needed {
        return Err(FormatError::TruncatedVad {
            needed,
            actual: flags.len() as u64,
        });
    }

    Ok(VadFlags { flags })
}
