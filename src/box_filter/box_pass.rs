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
use crate::box_filter::window::{MiddleRegime, WindowRegions};
use crate::util::try_alloc_zeroed;
use crate::working_buffer::BoxSample;
use crate::{BlurError, WorkingBuffer};

/// Location of one row or one column inside interleaved storage.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Lane {
    pub(crate) offset: usize,
    pub(crate) step: usize,
}

impl Lane {
    #[inline(always)]
    pub(crate) fn at(&self, k: usize) -> usize {
        self.offset + k * self.step
    }
}

#[inline(always)]
fn slide<F: BoxSample>(sums: &mut [F; 3], src: &[F], enter: usize, depart: usize) {
    sums[0] += src[enter] - src[depart];
    sums[1] += src[enter + 1] - src[depart + 1];
    sums[2] += src[enter + 2] - src[depart + 2];
}

#[inline(always)]
fn emit<F: BoxSample>(dst: &mut [F], position: usize, sums: &[F; 3], weight: F) {
    dst[position] = sums[0] * weight;
    dst[position + 1] = sums[1] * weight;
    dst[position + 2] = sums[2] * weight;
}

/// Running sum box average of `len` pixels along one lane.
///
/// Only the first three samples of each pixel are touched.
pub(crate) fn box_lane<F: BoxSample>(
    src: &[F],
    src_lane: Lane,
    dst: &mut [F],
    dst_lane: Lane,
    len: usize,
    radius: usize,
    regions: &WindowRegions,
    weight: F,
) {
    let first = src_lane.at(0);
    let last = src_lane.at(len - 1);

    // replicate edge
    let edge_count = F::from_usize(radius) + F::one();
    let mut sums = [
        src[first] * edge_count,
        src[first + 1] * edge_count,
        src[first + 2] * edge_count,
    ];
    let in_bounds = radius.min(len - 1);
    for k in 1..=in_bounds {
        let px = src_lane.at(k);
        sums[0] += src[px];
        sums[1] += src[px + 1];
        sums[2] += src[px + 2];
    }
    let overhang = radius - in_bounds;
    if overhang > 0 {
        let overhang = F::from_usize(overhang);
        sums[0] += src[last] * overhang;
        sums[1] += src[last + 1] * overhang;
        sums[2] += src[last + 2] * overhang;
    }

    emit(dst, dst_lane.at(0), &sums, weight);

    for i in regions.leading.clone() {
        slide(&mut sums, src, src_lane.at(i + radius), first);
        emit(dst, dst_lane.at(i), &sums, weight);
    }

    match regions.middle_regime {
        MiddleRegime::Interior => {
            for i in regions.middle.clone() {
                slide(
                    &mut sums,
                    src,
                    src_lane.at(i + radius),
                    src_lane.at(i - radius - 1),
                );
                emit(dst, dst_lane.at(i), &sums, weight);
            }
        }
        MiddleRegime::Saturated => {
            for i in regions.middle.clone() {
                slide(&mut sums, src, last, first);
                emit(dst, dst_lane.at(i), &sums, weight);
            }
        }
    }

    for i in regions.trailing.clone() {
        slide(&mut sums, src, last, src_lane.at(i - radius - 1));
        emit(dst, dst_lane.at(i), &sums, weight);
    }
}

fn box_blur_horizontal_pass<F: BoxSample>(
    src: &WorkingBuffer<F>,
    dst: &mut WorkingBuffer<F>,
    radius: usize,
    weight: F,
) {
    let width = src.width();
    let cn = src.channels().channels();
    let stride = src.row_stride();
    let regions = WindowRegions::new(width, radius);

    let src_data = src.data();
    let dst_data = dst.data_mut();

    for y in 0..src.height() {
        let lane = Lane {
            offset: y * stride,
            step: cn,
        };
        box_lane(src_data, lane, dst_data, lane, width, radius, &regions, weight);
    }

    if cn > src.channels().blurred_channels() {
        for (dst, src) in dst_data.chunks_exact_mut(cn).zip(src_data.chunks_exact(cn)) {
            dst[3..].copy_from_slice(&src[3..]);
        }
    }
}

/// Vertical pass in place, every column is staged into a contiguous line first.
fn box_blur_vertical_pass<F: BoxSample>(
    image: &mut WorkingBuffer<F>,
    radius: usize,
    weight: F,
) -> Result<(), BlurError> {
    let width = image.width();
    let height = image.height();
    let cn = image.channels().channels();
    let stride = image.row_stride();
    let regions = WindowRegions::new(height, radius);

    const LINE_CN: usize = 3;
    let mut line: Vec<F> = try_alloc_zeroed(height * LINE_CN)?;
    let line_lane = Lane {
        offset: 0,
        step: LINE_CN,
    };

    let data = image.data_mut();

    for x in 0..width {
        let column = Lane {
            offset: x * cn,
            step: stride,
        };
        for (y, dst) in line.chunks_exact_mut(LINE_CN).enumerate() {
            let px = column.at(y);
            dst.copy_from_slice(&data[px..px + LINE_CN]);
        }
        box_lane(&line, line_lane, data, column, height, radius, &regions, weight);
    }
    Ok(())
}

/// Performs one separable box blur pass: horizontal running average followed by vertical one.
///
/// Window has `2 * radius + 1` samples, samples outside of the image replicate the nearest
/// edge sample. Each output costs O(1) regardless of radius.
///
/// `src` is not modified, `dst` is completely overwritten and holds the blurred image
/// on success. Passthrough alpha samples are copied unchanged.
///
/// # Arguments
///
/// * `src` - Source working buffer.
/// * `dst` - Destination working buffer, must have the same shape as `src`.
/// * `radius` - Window half width, 0 copies the source.
pub fn box_blur_pass<F: BoxSample>(
    src: &WorkingBuffer<F>,
    dst: &mut WorkingBuffer<F>,
    radius: u32,
) -> Result<(), BlurError> {
    src.shape_matches(dst)?;
    if radius == 0 {
        return dst.copy_from(src);
    }
    let weight = F::one() / (F::from_usize(radius as usize) * (F::one() + F::one()) + F::one());
    let radius = radius as usize;
    box_blur_horizontal_pass(src, dst, radius, weight);
    box_blur_vertical_pass(dst, radius, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FastBlurChannels;

    fn distinct_image(width: usize, height: usize, channels: FastBlurChannels) -> WorkingBuffer<f32> {
        let cn = channels.channels();
        let data = (0..width * height * cn)
            .map(|i| ((i * 37 + (i / cn) * 11) % 251) as f32)
            .collect::<Vec<f32>>();
        WorkingBuffer::from_samples(data, width, height, channels).unwrap()
    }

    fn brute_force(src: &WorkingBuffer<f32>, radius: usize) -> Vec<f32> {
        let width = src.width() as i64;
        let height = src.height() as i64;
        let cn = src.channels().channels();
        let stride = src.row_stride();
        let r = radius as i64;
        let weight = (2 * radius + 1) as f32;
        let data = src.data();
        let mut horizontal = data.to_vec();
        for y in 0..height {
            for x in 0..width {
                for c in 0..3 {
                    let mut sum = 0f32;
                    for k in x - r..=x + r {
                        let cx = k.clamp(0, width - 1) as usize;
                        sum += data[y as usize * stride + cx * cn + c];
                    }
                    horizontal[y as usize * stride + x as usize * cn + c] = sum / weight;
                }
            }
        }
        let mut out = horizontal.clone();
        for y in 0..height {
            for x in 0..width {
                for c in 0..3 {
                    let mut sum = 0f32;
                    for k in y - r..=y + r {
                        let cy = k.clamp(0, height - 1) as usize;
                        sum += horizontal[cy * stride + x as usize * cn + c];
                    }
                    out[y as usize * stride + x as usize * cn + c] = sum / weight;
                }
            }
        }
        out
    }

    macro_rules! compare_with_brute_force {
        ($width: expr, $height: expr, $radius: expr, $channels: expr) => {{
            let src = distinct_image($width, $height, $channels);
            let mut dst = WorkingBuffer::try_alloc($width, $height, $channels).unwrap();
            box_blur_pass(&src, &mut dst, $radius as u32).unwrap();
            let expected = brute_force(&src, $radius);
            let cn = $channels.channels();
            for (i, (&v, &e)) in dst.data().iter().zip(expected.iter()).enumerate() {
                if i % cn >= 3 {
                    continue;
                }
                let diff = (v - e).abs();
                assert!(
                    diff <= 1e-3,
                    "Diff expected to be less than 1e-3, but it was {diff} at {i}, size {}x{}, radius {}",
                    $width,
                    $height,
                    $radius
                );
            }
        }};
    }

    #[test]
    fn test_radius_zero_is_identity() {
        for (width, height) in [(1usize, 1usize), (5, 5), (7, 2), (1, 9)] {
            let src = distinct_image(width, height, FastBlurChannels::Channels3);
            let mut dst = WorkingBuffer::try_alloc(width, height, FastBlurChannels::Channels3).unwrap();
            box_blur_pass(&src, &mut dst, 0).unwrap();
            assert_eq!(src, dst);
        }
    }

    #[test]
    fn test_sliding_window_matches_brute_force() {
        compare_with_brute_force!(5, 5, 1, FastBlurChannels::Channels3);
        compare_with_brute_force!(5, 5, 2, FastBlurChannels::Channels3);
        compare_with_brute_force!(17, 9, 3, FastBlurChannels::Channels3);
        compare_with_brute_force!(9, 17, 4, FastBlurChannels::Channels4);
        compare_with_brute_force!(1, 6, 2, FastBlurChannels::Channels3);
        compare_with_brute_force!(6, 1, 2, FastBlurChannels::Channels3);
    }

    #[test]
    fn test_large_radius_matches_brute_force() {
        compare_with_brute_force!(3, 3, 5, FastBlurChannels::Channels3);
        compare_with_brute_force!(4, 7, 6, FastBlurChannels::Channels3);
        compare_with_brute_force!(8, 3, 4, FastBlurChannels::Channels4);
        compare_with_brute_force!(2, 2, 40, FastBlurChannels::Channels3);
    }

    #[test]
    fn test_uniform_image_is_invariant() {
        for (width, height, radius) in [(1usize, 1usize, 3u32), (12, 7, 2), (3, 3, 9), (31, 2, 15)] {
            let mut data = vec![0f32; width * height * 3];
            for px in data.chunks_exact_mut(3) {
                px[0] = 126.;
                px[1] = 66.;
                px[2] = 77.;
            }
            let src = WorkingBuffer::from_samples(data, width, height, FastBlurChannels::Channels3)
                .unwrap();
            let mut dst = WorkingBuffer::try_alloc(width, height, FastBlurChannels::Channels3).unwrap();
            box_blur_pass(&src, &mut dst, radius).unwrap();
            for (i, (&v, &e)) in dst.data().iter().zip(src.data().iter()).enumerate() {
                let diff = (v - e).abs();
                assert!(
                    diff <= 1e-3,
                    "Diff expected to be less than 1e-3, but it was {diff} at {i}, radius {radius}"
                );
            }
        }
    }

    #[test]
    fn test_edge_clamp_single_row() {
        let mut data = Vec::new();
        for v in [10f32, 20., 30., 40., 50.] {
            data.extend_from_slice(&[v, v, v]);
        }
        let src = WorkingBuffer::from_samples(data, 5, 1, FastBlurChannels::Channels3).unwrap();
        let mut dst = WorkingBuffer::try_alloc(5, 1, FastBlurChannels::Channels3).unwrap();
        box_blur_pass(&src, &mut dst, 2).unwrap();
        let expected = [16f32, 22., 30., 38., 44.];
        for (px, &e) in dst.data().chunks_exact(3).zip(expected.iter()) {
            for &v in px {
                assert!((v - e).abs() < 1e-4, "Expected {e} but it was {v}");
            }
        }
    }

    #[test]
    fn test_wide_window_averages_whole_row() {
        let mut data = Vec::new();
        for v in [3f32, 9., 30.] {
            data.extend_from_slice(&[v, v * 2., v * 3.]);
        }
        let src = WorkingBuffer::from_samples(data, 3, 1, FastBlurChannels::Channels3).unwrap();
        let mut dst = WorkingBuffer::try_alloc(3, 1, FastBlurChannels::Channels3).unwrap();
        box_blur_pass(&src, &mut dst, 5).unwrap();
        // window of 11 samples: 6 copies of the first, 1 middle, 4 copies of the last at x = 0
        let at0 = (6. * 3. + 9. + 4. * 30.) / 11.;
        let at1 = (6. * 3. + 9. + 5. * 30.) / 11. - 3. / 11.;
        let at2 = (4. * 3. + 9. + 6. * 30.) / 11.;
        for (px, e) in dst.data().chunks_exact(3).zip([at0, at1, at2]) {
            assert!((px[0] - e).abs() < 1e-4, "Expected {e} but it was {}", px[0]);
            assert!((px[1] - 2. * e).abs() < 1e-4);
            assert!((px[2] - 3. * e).abs() < 1e-4);
        }
    }

    #[test]
    fn test_alpha_is_copied() {
        let src = distinct_image(4, 4, FastBlurChannels::Channels4);
        let mut dst = WorkingBuffer::try_alloc(4, 4, FastBlurChannels::Channels4).unwrap();
        box_blur_pass(&src, &mut dst, 1).unwrap();
        for (d, s) in dst.data().chunks_exact(4).zip(src.data().chunks_exact(4)) {
            assert_eq!(d[3], s[3]);
        }
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let src = WorkingBuffer::<f32>::try_alloc(4, 4, FastBlurChannels::Channels3).unwrap();
        let mut dst = WorkingBuffer::<f32>::try_alloc(4, 5, FastBlurChannels::Channels3).unwrap();
        assert_eq!(box_blur_pass(&src, &mut dst, 2), Err(BlurError::ImagesMustMatch));
    }
}
