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
use crate::box_filter::box_pass::Lane;
use crate::util::try_alloc_zeroed;
use crate::working_buffer::BoxSample;
use crate::{BlurError, WorkingBuffer};

/// Sums the full clamped window for every output, O(radius) per sample.
fn direct_lane<F: BoxSample>(
    src: &[F],
    src_lane: Lane,
    dst: &mut [F],
    dst_lane: Lane,
    len: usize,
    radius: usize,
    weight: F,
) {
    let last = len - 1;
    for i in 0..len {
        let mut sums = [F::zero(); 3];
        let start = i as i64 - radius as i64;
        let end = i as i64 + radius as i64;
        for k in start..=end {
            let px = src_lane.at(k.clamp(0, last as i64) as usize);
            sums[0] += src[px];
            sums[1] += src[px + 1];
            sums[2] += src[px + 2];
        }
        let position = dst_lane.at(i);
        dst[position] = sums[0] * weight;
        dst[position + 1] = sums[1] * weight;
        dst[position + 2] = sums[2] * weight;
    }
}

/// Performs one separable box blur pass by summing every window from scratch.
///
/// Same contract as [crate::box_blur_pass], but each output costs O(radius).
/// Kept as an exact reference for the running sum implementation.
pub fn box_blur_pass_direct<F: BoxSample>(
    src: &WorkingBuffer<F>,
    dst: &mut WorkingBuffer<F>,
    radius: u32,
) -> Result<(), BlurError> {
    src.shape_matches(dst)?;
    if radius == 0 {
        return dst.copy_from(src);
    }
    let radius = radius as usize;
    let weight = F::one() / (F::from_usize(radius) * (F::one() + F::one()) + F::one());

    let width = src.width();
    let height = src.height();
    let cn = src.channels().channels();
    let stride = src.row_stride();

    // Horizontal pass writes into the destination, alpha included
    dst.copy_from(src)?;
    {
        let src_data = src.data();
        let dst_data = dst.data_mut();
        for y in 0..height {
            let row = Lane {
                offset: y * stride,
                step: cn,
            };
            direct_lane(src_data, row, dst_data, row, width, radius, weight);
        }
    }

    const LINE_CN: usize = 3;
    let mut line: Vec<F> = try_alloc_zeroed(height * LINE_CN)?;
    let line_lane = Lane {
        offset: 0,
        step: LINE_CN,
    };
    let dst_data = dst.data_mut();
    for x in 0..width {
        let column = Lane {
            offset: x * cn,
            step: stride,
        };
        for (y, dst) in line.chunks_exact_mut(LINE_CN).enumerate() {
            let px = column.at(y);
            dst.copy_from_slice(&dst_data[px..px + LINE_CN]);
        }
        direct_lane(&line, line_lane, dst_data, column, height, radius, weight);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{box_blur_pass, FastBlurChannels};

    #[test]
    fn test_direct_edge_clamp() {
        let mut data = Vec::new();
        for v in [10f64, 20., 30., 40., 50.] {
            data.extend_from_slice(&[v, v, v]);
        }
        let src = WorkingBuffer::from_samples(data, 5, 1, FastBlurChannels::Channels3).unwrap();
        let mut dst = WorkingBuffer::try_alloc(5, 1, FastBlurChannels::Channels3).unwrap();
        box_blur_pass_direct(&src, &mut dst, 2).unwrap();
        let expected = [16f64, 22., 30., 38., 44.];
        for (px, &e) in dst.data().chunks_exact(3).zip(expected.iter()) {
            assert!((px[0] - e).abs() < 1e-9, "Expected {e} but it was {}", px[0]);
        }
    }

    #[test]
    fn test_direct_matches_sliding_window() {
        for (width, height) in [(1usize, 1usize), (5, 5), (13, 4), (3, 11), (2, 2)] {
            for radius in [1u32, 2, 3, 6, 13] {
                let data = (0..width * height * 4)
                    .map(|i| ((i * 53 + 7) % 256) as f64)
                    .collect::<Vec<f64>>();
                let src =
                    WorkingBuffer::from_samples(data, width, height, FastBlurChannels::Channels4)
                        .unwrap();
                let mut sliding =
                    WorkingBuffer::try_alloc(width, height, FastBlurChannels::Channels4).unwrap();
                let mut direct =
                    WorkingBuffer::try_alloc(width, height, FastBlurChannels::Channels4).unwrap();
                box_blur_pass(&src, &mut sliding, radius).unwrap();
                box_blur_pass_direct(&src, &mut direct, radius).unwrap();
                for (i, (a, b)) in sliding.data().iter().zip(direct.data().iter()).enumerate() {
                    let diff = (a - b).abs();
                    assert!(
                        diff <= 1e-9,
                        "Diff expected to be less than 1e-9, but it was {diff} at {i}, size {width}x{height}, radius {radius}"
                    );
                }
            }
        }
    }
}
