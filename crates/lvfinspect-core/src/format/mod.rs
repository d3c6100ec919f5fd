//! LVF binary format decoding.
//!
//! The decoder follows a layered structure:
//! - `layout`: magic, version, field widths, ceilings (source of truth)
//! - `reader`: safe little-endian field access over a byte stream
//! - `parser`: stage-by-stage domain decoding (no direct byte unpacking)
//! - `error`: explicit, actionable errors
//!
//! Decoding is a single forward pass with a fixed stage order: header,
//! options, matrix dimensions, matrix data, VAD count, VAD data, trailer
//! probe. The first fatal error aborts the decode; only the trailer probe
//! tolerates extra input, downgrading it to a warning on the result.
//!
//! Version française (résumé):
//! Décodage du format LVF en une seule passe avant, ordre des étapes fixe,
//! échec immédiat à la première erreur fatale. Les positions et constantes
//! sont dans `layout`, l'accès aux champs dans `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::FormatError;
pub use parser::decode_lvf;
