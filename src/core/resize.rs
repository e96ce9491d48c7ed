use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;

use crate::error::{Error, Result};

/// Resample an interleaved RGB buffer to exactly the target dimensions
/// with Lanczos3 convolution. Same-size inputs are returned as-is.
pub fn resize_rgb(src: &RgbImage, target_width: u32, target_height: u32) -> Result<RgbImage> {
    if src.dimensions() == (target_width, target_height) {
        return Ok(src.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let (width, height) = src.dimensions();
    let src_image = Image::from_vec_u8(width, height, src.as_raw().clone(), PixelType::U8x3)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized buffer has unexpected size".to_string()))
}
