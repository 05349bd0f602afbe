use targa_image::{Image, ImageDtype, ImageError};

use crate::parallel;

/// Convert an 8-bit channel value to the normalized [0, 1] range.
pub fn normalize(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Convert a normalized [0, 1] channel value back to 8 bits.
///
/// Rounds half away from zero and saturates to [0, 255].
pub fn denormalize(value: f32) -> u8 {
    u8::from_f32(value * 255.0)
}

/// Multiply blend of two images.
///
/// Each channel is computed as `a * b` on normalized values:
///
/// dst(x,y,c) = denormalize(normalize(src1(x,y,c)) * normalize(src2(x,y,c)))
///
/// Multiplying by white leaves an image unchanged, multiplying by black
/// yields black.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src1`, `src2` and `dst` do not match.
pub fn multiply(
    src1: &Image<u8, 3>,
    src2: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    check_binary_op_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_val_two(src1, src2, dst, |&a, &b, out| {
        *out = denormalize(normalize(a) * normalize(b));
    });

    Ok(())
}

/// Screen blend of two images.
///
/// Each channel is computed on normalized values as:
///
/// dst(x,y,c) = denormalize(1 - (1 - a) * (1 - b))
///
/// Screen is the dual of [`multiply`]: screening two images equals inverting
/// the multiply of their inversions.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src1`, `src2` and `dst` do not match.
pub fn screen(
    src1: &Image<u8, 3>,
    src2: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    check_binary_op_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_val_two(src1, src2, dst, |&a, &b, out| {
        *out = denormalize(1.0 - (1.0 - normalize(a)) * (1.0 - normalize(b)));
    });

    Ok(())
}

/// Overlay blend of two images.
///
/// Per channel, the branch is selected on the **raw** byte of `src2`:
///
/// dst(x,y,c) = denormalize(2 * a * b)                  if src2(x,y,c) <= 128
/// dst(x,y,c) = denormalize(1 - 2 * (1 - a) * (1 - b))  otherwise
///
/// where `a` and `b` are the normalized channel values.
///
/// # Arguments
///
/// * `src1` - The base image.
/// * `src2` - The overlay image driving the branch selection.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src1`, `src2` and `dst` do not match.
pub fn overlay(
    src1: &Image<u8, 3>,
    src2: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    check_binary_op_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_val_two(src1, src2, dst, |&a, &b, out| {
        *out = if b <= 128 {
            denormalize(2.0 * normalize(a) * normalize(b))
        } else {
            denormalize(1.0 - 2.0 * (1.0 - normalize(a)) * (1.0 - normalize(b)))
        };
    });

    Ok(())
}

/// Subtract blend of two images.
///
/// Operates on raw bytes, not normalized values:
///
/// dst(x,y,c) = clamp(src1(x,y,c) - src2(x,y,c), 0, 255)
///
/// The subtraction saturates at zero and never wraps.
///
/// # Arguments
///
/// * `src1` - The image to subtract from.
/// * `src2` - The image to subtract.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src1`, `src2` and `dst` do not match.
pub fn subtract(
    src1: &Image<u8, 3>,
    src2: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
) -> Result<(), ImageError> {
    check_binary_op_sizes(src1, src2, dst)?;

    parallel::par_iter_rows_val_two(src1, src2, dst, |&a, &b, out| {
        *out = (a as i32 - b as i32).clamp(0, 255) as u8;
    });

    Ok(())
}

fn check_binary_op_sizes(
    src1: &Image<u8, 3>,
    src2: &Image<u8, 3>,
    dst: &Image<u8, 3>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    Ok(())
}
