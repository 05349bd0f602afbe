use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

use targa_image::Image;

/// Add a constant to the green channel of an image in place.
///
/// The red and blue channels are untouched. The sum saturates to [0, 255].
///
/// # Arguments
///
/// * `image` - The image to adjust.
/// * `delta` - The signed value added to every green sample.
pub fn adjust_green(image: &mut Image<u8, 3>, delta: i32) {
    image
        .as_slice_mut()
        .par_chunks_exact_mut(3)
        .for_each(|pixel| {
            pixel[1] = (pixel[1] as i32 + delta).clamp(0, 255) as u8;
        });
}

/// Scale the red and blue channels of an image in place.
///
/// The green channel is untouched. Each product saturates to [0, 255].
///
/// # Arguments
///
/// * `image` - The image to adjust.
/// * `red_scale` - The integer factor applied to every red sample.
/// * `blue_scale` - The integer factor applied to every blue sample.
pub fn scale_red_blue(image: &mut Image<u8, 3>, red_scale: i32, blue_scale: i32) {
    image
        .as_slice_mut()
        .par_chunks_exact_mut(3)
        .for_each(|pixel| {
            pixel[0] = (pixel[0] as i32 * red_scale).clamp(0, 255) as u8;
            pixel[2] = (pixel[2] as i32 * blue_scale).clamp(0, 255) as u8;
        });
}
