use thiserror::Error;

/// Argument and input errors raised by the extraction API.
///
/// Runtime absence (an out-of-bounds pixel, an empty candidate list, a
/// rasterizer that produced nothing) is reported through `Option` or an empty
/// histogram instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("image dimensions cannot be zero")]
    ZeroDimension,

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch { len: usize, width: u32, height: u32 },

    #[error("unknown {option} value: {value:?}")]
    InvalidOption { option: &'static str, value: String },

    #[error("invalid hex color {0:?}, expected 6 hex digits")]
    InvalidHex(String),

    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
