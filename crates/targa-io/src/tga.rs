use std::{fs, path::Path};

use targa_image::{Image, ImageSize};

use crate::error::IoError;

/// Length of the legacy TGA header.
const TGA_HEADER_LEN: usize = 18;

/// Bytes per pixel for 24-bit truecolor.
const TGA_BYTES_PER_PIXEL: usize = 3;

/// Read a TGA image with three channels (rgb8).
///
/// Only the uncompressed 24-bit truecolor subset is supported. The pixel
/// buffer is kept in file order, i.e. bottom-left origin.
///
/// # Arguments
///
/// * `file_path` - The path to the TGA file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
pub fn read_image_tga_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if let Some(extension) = file_path.extension() {
        if extension != "tga" {
            return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
        }
    } else {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let bytes = fs::read(file_path)?;
    let image = decode_image_tga_rgb8(&bytes)?;

    log::debug!(
        "read {} ({}x{})",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Writes the given TGA _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the TGA image.
/// - `image` - The image containing the TGA image data.
pub fn write_image_tga_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let bytes = encode_image_tga_rgb8(image)?;
    fs::write(file_path, bytes)?;

    log::debug!(
        "wrote {} ({}x{})",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}

/// Decodes a TGA image with three channels (rgb8) from raw bytes.
///
/// The header is parsed for the width and height fields only; the image
/// descriptor and id fields are ignored. The blue-green-red file triples are
/// reordered to red-green-blue in memory.
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the TGA file.
///
/// # Errors
///
/// Returns [`IoError::TruncatedHeader`] if fewer than 18 bytes are available
/// and [`IoError::TruncatedPixelData`] if the stream ends before
/// `width * height` pixel triples.
pub fn decode_image_tga_rgb8(bytes: &[u8]) -> Result<Image<u8, 3>, IoError> {
    if bytes.len() < TGA_HEADER_LEN {
        return Err(IoError::TruncatedHeader(bytes.len()));
    }

    let width = u16::from_le_bytes([bytes[12], bytes[13]]) as usize;
    let height = u16::from_le_bytes([bytes[14], bytes[15]]) as usize;

    let pixel_bytes = &bytes[TGA_HEADER_LEN..];
    let expected = width * height * TGA_BYTES_PER_PIXEL;
    if pixel_bytes.len() < expected {
        return Err(IoError::TruncatedPixelData {
            expected,
            found: pixel_bytes.len(),
        });
    }

    let mut data = Vec::with_capacity(expected);
    for bgr in pixel_bytes[..expected].chunks_exact(TGA_BYTES_PER_PIXEL) {
        data.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
    }

    Ok(Image::new(ImageSize { width, height }, data)?)
}

/// Encodes a TGA image with three channels (rgb8) into raw bytes.
///
/// Emits an 18-byte header that is zero except for the width and height
/// little-endian u16 fields and the bits-per-pixel byte (24), followed by the
/// pixel triples in blue-green-red order. No footer or extension area is
/// written, so `decode_image_tga_rgb8(&encode_image_tga_rgb8(&img)?)` returns
/// `img` exactly.
///
/// # Arguments
///
/// - `image` - The image to encode.
///
/// # Errors
///
/// Returns [`IoError::ImageTooLarge`] if either dimension exceeds `u16::MAX`.
pub fn encode_image_tga_rgb8(image: &Image<u8, 3>) -> Result<Vec<u8>, IoError> {
    let (width, height) = (image.width(), image.height());
    if width > u16::MAX as usize || height > u16::MAX as usize {
        return Err(IoError::ImageTooLarge(width, height));
    }

    let mut bytes = vec![0u8; TGA_HEADER_LEN];
    bytes[12..14].copy_from_slice(&(width as u16).to_le_bytes());
    bytes[14..16].copy_from_slice(&(height as u16).to_le_bytes());
    bytes[16] = 24;

    bytes.reserve(width * height * TGA_BYTES_PER_PIXEL);
    for rgb in image.as_slice().chunks_exact(TGA_BYTES_PER_PIXEL) {
        bytes.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn decode_tga_smoke() -> Result<(), IoError> {
        // 2x1 image, pixels (r,g,b) = (200, 100, 50) and (10, 20, 30)
        let mut bytes = vec![0u8; 18];
        bytes[12] = 2;
        bytes[14] = 1;
        bytes[16] = 24;
        bytes.extend_from_slice(&[50, 100, 200, 30, 20, 10]);

        let image = decode_image_tga_rgb8(&bytes)?;
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.as_slice(), &[200, 100, 50, 10, 20, 30]);

        Ok(())
    }

    #[test]
    fn decode_tga_truncated_header() {
        let bytes = vec![0u8; 17];
        let result = decode_image_tga_rgb8(&bytes);
        assert!(matches!(result, Err(IoError::TruncatedHeader(17))));
    }

    #[test]
    fn decode_tga_truncated_pixels() {
        let mut bytes = vec![0u8; 18];
        bytes[12] = 2;
        bytes[14] = 2;
        bytes.extend_from_slice(&[0u8; 11]);

        let result = decode_image_tga_rgb8(&bytes);
        assert!(matches!(
            result,
            Err(IoError::TruncatedPixelData {
                expected: 12,
                found: 11
            })
        ));
    }

    #[test]
    fn encode_tga_header_layout() -> Result<(), IoError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 300,
                height: 2,
            },
            vec![0u8; 300 * 2 * 3],
        )?;

        let bytes = encode_image_tga_rgb8(&image)?;
        assert_eq!(bytes.len(), 18 + 300 * 2 * 3);
        assert_eq!(&bytes[..12], &[0u8; 12]);
        assert_eq!(bytes[12], 44); // 300 = 0x012c
        assert_eq!(bytes[13], 1);
        assert_eq!(bytes[14], 2);
        assert_eq!(bytes[15], 0);
        assert_eq!(bytes[16], 24);
        assert_eq!(bytes[17], 0);

        Ok(())
    }

    #[test]
    fn encode_decode_roundtrip() -> Result<(), IoError> {
        let mut rng = rand::rng();
        let size = ImageSize {
            width: 7,
            height: 5,
        };
        let data = (0..size.width * size.height * 3)
            .map(|_| rng.random::<u8>())
            .collect::<Vec<_>>();
        let image = Image::<u8, 3>::new(size, data)?;

        let decoded = decode_image_tga_rgb8(&encode_image_tga_rgb8(&image)?)?;
        assert_eq!(decoded, image);

        Ok(())
    }

    #[test]
    fn encode_decode_empty() -> Result<(), IoError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;

        let bytes = encode_image_tga_rgb8(&image)?;
        assert_eq!(bytes.len(), 18);

        let decoded = decode_image_tga_rgb8(&bytes)?;
        assert_eq!(decoded, image);

        Ok(())
    }

    #[test]
    fn read_write_tga_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.tga");

        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let data = (0..size.width * size.height * 3)
            .map(|i| i as u8)
            .collect::<Vec<_>>();
        let image = Image::<u8, 3>::new(size, data)?;

        write_image_tga_rgb8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_tga_rgb8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_tga_missing_file() {
        let result = read_image_tga_rgb8("missing.tga");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_tga_invalid_extension() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let file_path = tmp_dir.path().join("image.png");
        std::fs::write(&file_path, [0u8; 18]).unwrap();

        let result = read_image_tga_rgb8(&file_path);
        assert!(matches!(result, Err(IoError::InvalidFileExtension(_))));
    }
}
