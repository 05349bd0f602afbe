use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use targa_image::{Image, ImageError};

/// Rotate the input image by 180 degrees.
///
/// Result pixel `i` is source pixel `N - 1 - i` with `N = width * height`.
/// Because the pixel buffer is stored row-major, reversing the pixel sequence
/// flips the image both horizontally and vertically at once. Applying the
/// rotation twice returns the original image.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The rotated image.
///
/// # Example
///
/// ```
/// use targa_image::{Image, ImageSize};
/// use targa_blend::flip::rotate180;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let rotated: Image<u8, 3> = rotate180(&image).unwrap();
///
/// assert_eq!(rotated.size().width, 2);
/// assert_eq!(rotated.size().height, 3);
/// ```
pub fn rotate180<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Send + Sync,
{
    let mut dst = src.clone();

    dst.as_slice_mut()
        .par_chunks_exact_mut(C)
        .zip(src.as_slice().par_chunks_exact(C).rev())
        .for_each(|(dst_pixel, src_pixel)| {
            dst_pixel.copy_from_slice(src_pixel);
        });

    Ok(dst)
}
