use thiserror::Error;

/// Errors returned by the strict and name-based codec APIs.
///
/// The masking encoders and the decoders never produce these.
///
/// # Examples
/// ```
/// use openlasir_core::CodecError;
///
/// let err = CodecError::ModeOutOfRange { mode: 40 };
/// assert!(err.to_string().contains("mode out of range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("mode out of range: {mode} (max 31)")]
    ModeOutOfRange { mode: u8 },
    #[error("data out of range: {data} (max 7)")]
    DataOutOfRange { data: u8 },
    #[error("color out of range: {color} (max 7)")]
    ColorOutOfRange { color: u8 },
    #[error("mode {mode} has no name")]
    UnnamedMode { mode: u8 },
    #[error("unknown mode name: {name}")]
    UnknownModeName { name: String },
    #[error("unknown color name: {name}")]
    UnknownColorName { name: String },
}
