use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaintError {
    #[error(
        "mask is {mask_width}x{mask_height} but canvas is {canvas_width}x{canvas_height}"
    )]
    DimensionMismatch {
        mask_width: u32,
        mask_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
