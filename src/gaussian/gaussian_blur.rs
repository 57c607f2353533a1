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
use crate::gaussian::gaussian_kernel::gaussian_kernel_from_radius;
use crate::working_buffer::BoxSample;
use crate::{BlurError, BlurImageMut, WorkingBuffer};
use std::time::Instant;

#[inline(always)]
fn clamp_tap(position: usize, tap: usize, radius: usize, last: usize) -> usize {
    (position + tap).saturating_sub(radius).min(last)
}

fn gaussian_horizontal_pass(
    image: &BlurImageMut<'_>,
    dst: &mut WorkingBuffer<f64>,
    kernel: &[f64],
    radius: usize,
) {
    let width = image.width as usize;
    let cn = image.channels.channels();
    let stride = image.row_stride();
    let last = width - 1;
    let src = image.data.borrow();
    let dst_data = dst.data_mut();

    for (src_row, dst_row) in src
        .chunks_exact(stride)
        .zip(dst_data.chunks_exact_mut(stride))
    {
        for (x, dst) in dst_row.chunks_exact_mut(cn).enumerate() {
            let mut sums = [0f64; 3];
            for (tap, &weight) in kernel.iter().enumerate() {
                let px = clamp_tap(x, tap, radius, last) * cn;
                sums[0] += f64::from_u8(src_row[px]) * weight;
                sums[1] += f64::from_u8(src_row[px + 1]) * weight;
                sums[2] += f64::from_u8(src_row[px + 2]) * weight;
            }
            dst[..3].copy_from_slice(&sums);
        }
    }
}

fn gaussian_vertical_pass(
    src: &WorkingBuffer<f64>,
    image: &mut BlurImageMut<'_>,
    kernel: &[f64],
    radius: usize,
) {
    let height = image.height as usize;
    let cn = image.channels.channels();
    let stride = image.row_stride();
    let last = height - 1;
    let src_data = src.data();
    let dst = image.data.borrow_mut();

    for (y, dst_row) in dst.chunks_exact_mut(stride).enumerate() {
        for (x, dst) in dst_row.chunks_exact_mut(cn).enumerate() {
            let mut sums = [0f64; 3];
            for (tap, &weight) in kernel.iter().enumerate() {
                let px = clamp_tap(y, tap, radius, last) * stride + x * cn;
                sums[0] += src_data[px] * weight;
                sums[1] += src_data[px + 1] * weight;
                sums[2] += src_data[px + 2] * weight;
            }
            dst[0] = sums[0].saturate_u8();
            dst[1] = sums[1].saturate_u8();
            dst[2] = sums[2].saturate_u8();
        }
    }
}

/// Performs an exact separable gaussian blur.
///
/// Kernel has `2 * radius + 1` taps with sigma `radius / 3`, edges are clamped.
/// O(radius) complexity per pixel, intended as a quality reference for [crate::gaussian_box_blur].
///
/// Only the first three channels are blurred. Radius 0 leaves the image unchanged.
/// All storage is reserved before the image is touched, so on error the image is unmodified.
///
/// # Arguments
///
/// * `image` - Image to blur in place, see [BlurImageMut] for more info.
/// * `radius` - Kernel radius in pixels.
pub fn gaussian_blur(image: &mut BlurImageMut<'_>, radius: u32) -> Result<(), BlurError> {
    image.check_layout()?;
    if radius == 0 {
        return Ok(());
    }
    let kernel = gaussian_kernel_from_radius(radius)?;
    let mut horizontal = WorkingBuffer::<f64>::try_alloc(
        image.width as usize,
        image.height as usize,
        image.channels,
    )?;
    log::debug!(
        "gaussian blur radius {radius} over {}x{}",
        image.width,
        image.height
    );

    let start = Instant::now();
    let radius = radius as usize;
    gaussian_horizontal_pass(image, &mut horizontal, &kernel, radius);
    gaussian_vertical_pass(&horizontal, image, &kernel, radius);
    log::debug!("gaussian blur took {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FastBlurChannels;

    #[test]
    fn test_uniform_is_preserved() {
        let mut data = vec![0u8; 9 * 7 * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&[12, 140, 255, 33]);
        }
        let mut image = BlurImageMut::borrow(&mut data, 9, 7, FastBlurChannels::Channels4);
        gaussian_blur(&mut image, 4).unwrap();
        for px in data.chunks_exact(4) {
            assert_eq!(px, &[12, 140, 255, 33]);
        }
    }

    #[test]
    fn test_zero_radius_is_identity() {
        let source = (0..5 * 5 * 3).map(|i| (i * 31 % 256) as u8).collect::<Vec<u8>>();
        let mut data = source.clone();
        let mut image = BlurImageMut::borrow(&mut data, 5, 5, FastBlurChannels::Channels3);
        gaussian_blur(&mut image, 0).unwrap();
        assert_eq!(data, source);
    }

    #[test]
    fn test_single_pixel_spreads_symmetrically() {
        let mut image = BlurImageMut::alloc(9, 9, FastBlurChannels::Channels3);
        let center = (4 * 9 + 4) * 3;
        image.data.borrow_mut()[center..center + 3].copy_from_slice(&[255, 255, 255]);
        gaussian_blur(&mut image, 3).unwrap();

        let data = image.data.borrow();
        let value = |x: usize, y: usize| data[(y * 9 + x) * 3];
        let peak = value(4, 4);
        assert!(peak > 0 && peak < 255, "Peak was {peak}");
        assert!(data.iter().all(|&v| v <= peak));
        assert_eq!(value(3, 4), value(5, 4));
        assert_eq!(value(4, 3), value(4, 5));
        assert_eq!(value(3, 4), value(4, 3));
        assert!(value(3, 4) > value(2, 4));
        assert_eq!(value(0, 0), 0);
    }

    #[test]
    fn test_zero_area_is_rejected() {
        let mut image = BlurImageMut::alloc(3, 0, FastBlurChannels::Channels4);
        assert_eq!(gaussian_blur(&mut image, 2), Err(BlurError::ZeroBaseSize));
    }
}
