use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use targa_image::{Image, ImageError};

use crate::parallel;

/// Replicate one channel of an image into all three channels.
///
/// Produces the grayscale visualization of a single channel: every pixel of
/// `dst` holds the selected channel value of the corresponding `src` pixel in
/// red, green and blue.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `channel` - The channel index to isolate (0 = red, 1 = green, 2 = blue).
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the channel index is out of bounds or the sizes of
/// `src` and `dst` do not match.
pub fn gray_from_channel(
    src: &Image<u8, 3>,
    channel: usize,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    if channel >= src.num_channels() {
        return Err(ImageError::ChannelIndexOutOfBounds(
            channel,
            src.num_channels(),
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.fill(src_pixel[channel]);
    });

    Ok(())
}

/// Combine the channels of three images into one.
///
/// Takes the red channel from `red`, the green channel from `green` and the
/// blue channel from `blue`, pixel for pixel.
///
/// # Arguments
///
/// * `red` - The image supplying the red channel.
/// * `green` - The image supplying the green channel.
/// * `blue` - The image supplying the blue channel.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of the inputs and `dst` do not match.
pub fn combine_channels(
    red: &Image<u8, 3>,
    green: &Image<u8, 3>,
    blue: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    for other in [green, blue, &*dst] {
        if red.size() != other.size() {
            return Err(ImageError::InvalidImageSize(
                red.cols(),
                red.rows(),
                other.cols(),
                other.rows(),
            ));
        }
    }

    let row_len = red.cols() * 3;
    if row_len == 0 {
        return Ok(());
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .zip(red.as_slice().par_chunks_exact(row_len))
        .zip(green.as_slice().par_chunks_exact(row_len))
        .zip(blue.as_slice().par_chunks_exact(row_len))
        .for_each(|(((dst_row, red_row), green_row), blue_row)| {
            dst_row
                .chunks_exact_mut(3)
                .zip(red_row.chunks_exact(3))
                .zip(green_row.chunks_exact(3))
                .zip(blue_row.chunks_exact(3))
                .for_each(|(((dst_pixel, red_pixel), green_pixel), blue_pixel)| {
                    dst_pixel[0] = red_pixel[0];
                    dst_pixel[1] = green_pixel[1];
                    dst_pixel[2] = blue_pixel[2];
                });
        });

    Ok(())
}
