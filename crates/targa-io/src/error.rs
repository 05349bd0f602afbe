/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] targa_image::ImageError),

    /// Error when the stream ends before the 18-byte TGA header.
    #[error("Truncated TGA header: expected 18 bytes, found {0}")]
    TruncatedHeader(usize),

    /// Error when the stream ends before the declared pixel data.
    #[error("Truncated TGA pixel data: expected {expected} bytes, found {found}")]
    TruncatedPixelData {
        /// Number of pixel bytes declared by the header.
        expected: usize,
        /// Number of pixel bytes present in the stream.
        found: usize,
    },

    /// Error when the image dimensions do not fit the 16-bit header fields.
    #[error("Image size {0}x{1} exceeds the TGA 16-bit dimension limit")]
    ImageTooLarge(usize, usize),
}
