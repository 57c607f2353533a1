/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::{
    gaussian_blur, gaussian_box_blur, BlurError, BlurImageMut, FastBlurChannels,
    GaussianBoxBlurParams,
};
use image::{DynamicImage, RgbImage, RgbaImage};

/// Splits decoded image into 8-bit RGB or RGBA, other color types are converted first.
fn into_blur_image(image: DynamicImage) -> BlurImageMut<'static> {
    match image {
        DynamicImage::ImageRgb8(img) => {
            let (width, height) = img.dimensions();
            BlurImageMut::owned(img.into_raw(), width, height, FastBlurChannels::Channels3)
        }
        DynamicImage::ImageRgba8(img) => {
            let (width, height) = img.dimensions();
            BlurImageMut::owned(img.into_raw(), width, height, FastBlurChannels::Channels4)
        }
        other => {
            if other.color().has_alpha() {
                let img = other.into_rgba8();
                let (width, height) = img.dimensions();
                BlurImageMut::owned(img.into_raw(), width, height, FastBlurChannels::Channels4)
            } else {
                let img = other.into_rgb8();
                let (width, height) = img.dimensions();
                BlurImageMut::owned(img.into_raw(), width, height, FastBlurChannels::Channels3)
            }
        }
    }
}

fn into_dynamic_image(image: BlurImageMut<'_>) -> Result<DynamicImage, BlurError> {
    let (width, height, channels) = (image.width, image.height, image.channels);
    let data = image.into_vec();
    match channels {
        FastBlurChannels::Channels3 => RgbImage::from_raw(width, height, data)
            .map(DynamicImage::ImageRgb8)
            .ok_or(BlurError::ImagesMustMatch),
        FastBlurChannels::Channels4 => RgbaImage::from_raw(width, height, data)
            .map(DynamicImage::ImageRgba8)
            .ok_or(BlurError::ImagesMustMatch),
    }
}

/// Performs gaussian box blur on the image
///
/// 8-bit RGB and RGBA images are blurred as is, every other color type is converted
/// to 8-bit RGB, or to RGBA when it carries alpha. Alpha is not blurred.
///
/// # Arguments
///
/// * `image`: Dynamic image provided by image crate.
/// * `params`: See [GaussianBoxBlurParams] for more info.
pub fn gaussian_box_blur_image(
    image: DynamicImage,
    params: GaussianBoxBlurParams,
) -> Result<DynamicImage, BlurError> {
    let mut blur_image = into_blur_image(image);
    gaussian_box_blur(&mut blur_image, params)?;
    into_dynamic_image(blur_image)
}

/// Performs exact gaussian blur on the image, see [gaussian_blur].
///
/// Color types are handled as in [gaussian_box_blur_image].
pub fn gaussian_blur_image(image: DynamicImage, radius: u32) -> Result<DynamicImage, BlurError> {
    let mut blur_image = into_blur_image(image);
    gaussian_blur(&mut blur_image, radius)?;
    into_dynamic_image(blur_image)
}
