//! Static enum-to-label tables for LVF option fields.
//!
//! Tables are process-wide constants; lookups fall back to "UNKNOWN" so
//! forward-compatible files with new enum values still render.

/// Label returned for any unmapped enum integer.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

const CEPSTRAL_TYPES: &[(u32, &str)] = &[
    (0, "MFCC"),
    (1, "LFCC"),
    (2, "GFCC"),
    (3, "PNCC"),
    (4, "PLP"),
];

const FILTERBANK_TYPES: &[(u32, &str)] = &[
    (0, "Mel"),
    (1, "Linear"),
    (2, "Gammatone"),
    (3, "Bark"),
];

const MEL_SCALES: &[(u32, &str)] = &[(0, "HTK"), (1, "Slaney")];

const COMPRESSION_TYPES: &[(u32, &str)] = &[
    (0, "Log"),
    (1, "PowerNormalized"),
    (2, "CubeRoot"),
];

fn label_in(table: &'static [(u32, &'static str)], value: u32) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| *candidate == value)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_LABEL)
}

/// Human label for a cepstral type value.
pub fn cepstral_type_label(value: u32) -> &'static str {
    label_in(CEPSTRAL_TYPES, value)
}

/// Human label for a filterbank type value.
pub fn filterbank_type_label(value: u32) -> &'static str {
    label_in(FILTERBANK_TYPES, value)
}

/// Human label for a mel scale value.
pub fn mel_scale_label(value: u32) -> &'static str {
    label_in(MEL_SCALES, value)
}

/// Human label for a compression type value.
pub fn compression_type_label(value: u32) -> &'static str {
    label_in(COMPRESSION_TYPES, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_resolve() {
        assert_eq!(cepstral_type_label(0), "MFCC");
        assert_eq!(cepstral_type_label(4), "PLP");
        assert_eq!(filterbank_type_label(2), "Gammatone");
        assert_eq!(mel_scale_label(1), "Slaney");
        assert_eq!(compression_type_label(1), "PowerNormalized");
    }

    #[test]
    fn unmapped_values_fall_back_to_unknown() {
        assert_eq!(cepstral_type_label(5), UNKNOWN_LABEL);
        assert_eq!(cepstral_type_label(99), UNKNOWN_LABEL);
        assert_eq!(filterbank_type_label(4), UNKNOWN_LABEL);
        assert_eq!(mel_scale_label(2), UNKNOWN_LABEL);
        assert_eq!(compression_type_label(u32::MAX), UNKNOWN_LABEL);
    }
}
