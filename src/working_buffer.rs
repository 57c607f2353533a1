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
use crate::util::{check_slice_size, checked_image_len, try_alloc_zeroed};
use crate::{BlurError, BlurImageMut, FastBlurChannels};
use num_traits::{AsPrimitive, Float};
use std::fmt::Debug;
use std::ops::{AddAssign, SubAssign};

/// Floating point sample type used by intermediate blur buffers.
pub trait BoxSample:
    Float + AddAssign + SubAssign + Default + Debug + Send + Sync + 'static
{
    fn from_u8(v: u8) -> Self;

    fn from_usize(v: usize) -> Self;

    /// Clamps into `[0, 255]` and rounds to nearest, NaN maps to 0.
    fn saturate_u8(self) -> u8;
}

macro_rules! impl_box_sample {
    ($t:ty) => {
        impl BoxSample for $t {
            #[inline(always)]
            fn from_u8(v: u8) -> Self {
                v.as_()
            }

            #[inline(always)]
            fn from_usize(v: usize) -> Self {
                v.as_()
            }

            #[inline(always)]
            fn saturate_u8(self) -> u8 {
                self.max(0.).min(255.).round().as_()
            }
        }
    };
}

impl_box_sample!(f32);
impl_box_sample!(f64);

/// Floating point image of the same shape as the pixels it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingBuffer<F> {
    data: Vec<F>,
    width: usize,
    height: usize,
    channels: FastBlurChannels,
}

impl<F: BoxSample> WorkingBuffer<F> {
    /// Allocates zeroed buffer, reports [BlurError::OutOfMemory] instead of aborting.
    pub fn try_alloc(
        width: usize,
        height: usize,
        channels: FastBlurChannels,
    ) -> Result<Self, BlurError> {
        if width == 0 || height == 0 {
            return Err(BlurError::ZeroBaseSize);
        }
        let len = checked_image_len(width, height, channels.channels())?;
        Ok(Self {
            data: try_alloc_zeroed(len)?,
            width,
            height,
            channels,
        })
    }

    /// Wraps existing samples, length must be exactly `width * height * channels`.
    pub fn from_samples(
        data: Vec<F>,
        width: usize,
        height: usize,
        channels: FastBlurChannels,
    ) -> Result<Self, BlurError> {
        check_slice_size(&data, width, height, channels.channels())?;
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> FastBlurChannels {
        self.channels
    }

    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width * self.channels.channels()
    }

    #[inline]
    pub fn data(&self) -> &[F] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [F] {
        &mut self.data
    }

    #[inline]
    pub fn shape_matches(&self, other: &WorkingBuffer<F>) -> Result<(), BlurError> {
        if self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
        {
            return Ok(());
        }
        Err(BlurError::ImagesMustMatch)
    }

    fn image_matches(&self, image: &BlurImageMut<'_>) -> Result<(), BlurError> {
        image.check_layout()?;
        if self.width != image.width as usize
            || self.height != image.height as usize
            || self.channels != image.channels
        {
            return Err(BlurError::ImagesMustMatch);
        }
        Ok(())
    }

    /// Converts every sample of the image into this buffer.
    pub fn load(&mut self, image: &BlurImageMut<'_>) -> Result<(), BlurError> {
        self.image_matches(image)?;
        for (dst, &src) in self.data.iter_mut().zip(image.data.borrow().iter()) {
            *dst = F::from_u8(src);
        }
        Ok(())
    }

    /// Writes the blurred channels back as clamped, rounded bytes.
    ///
    /// Samples of a passthrough alpha channel in the image are left untouched.
    pub fn store(&self, image: &mut BlurImageMut<'_>) -> Result<(), BlurError> {
        self.image_matches(image)?;
        let cn = self.channels.channels();
        let blurred = self.channels.blurred_channels();
        for (dst, src) in image
            .data
            .borrow_mut()
            .chunks_exact_mut(cn)
            .zip(self.data.chunks_exact(cn))
        {
            for (dst, src) in dst[..blurred].iter_mut().zip(src[..blurred].iter()) {
                *dst = src.saturate_u8();
            }
        }
        Ok(())
    }

    /// Copies all samples from a buffer of the same shape.
    pub(crate) fn copy_from(&mut self, other: &WorkingBuffer<F>) -> Result<(), BlurError> {
        self.shape_matches(other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_u8() {
        assert_eq!((-12.3f32).saturate_u8(), 0);
        assert_eq!(255.7f32.saturate_u8(), 255);
        assert_eq!(127.5f32.saturate_u8(), 128);
        assert_eq!(127.49f64.saturate_u8(), 127);
        assert_eq!(f32::NAN.saturate_u8(), 0);
    }

    #[test]
    fn test_load_store_keeps_alpha() {
        let mut pixels = vec![
            10u8, 20, 30, 40, //
            50, 60, 70, 80,
        ];
        let mut image = BlurImageMut::borrow(&mut pixels, 2, 1, FastBlurChannels::Channels4);
        let mut working = WorkingBuffer::<f32>::try_alloc(2, 1, FastBlurChannels::Channels4).unwrap();
        working.load(&image).unwrap();
        assert_eq!(working.data(), &[10., 20., 30., 40., 50., 60., 70., 80.]);

        for v in working.data_mut().iter_mut() {
            *v += 0.6;
        }
        working.data_mut()[3] = 300.;
        working.store(&mut image).unwrap();
        assert_eq!(pixels, vec![11, 21, 31, 40, 51, 61, 71, 80]);
    }

    #[test]
    fn test_shape_mismatch() {
        let image = BlurImageMut::alloc(3, 2, FastBlurChannels::Channels3);
        let mut working = WorkingBuffer::<f32>::try_alloc(2, 3, FastBlurChannels::Channels3).unwrap();
        assert_eq!(working.load(&image), Err(BlurError::ImagesMustMatch));
        assert_eq!(
            WorkingBuffer::<f32>::try_alloc(0, 3, FastBlurChannels::Channels3),
            Err(BlurError::ZeroBaseSize)
        );
        assert!(matches!(
            WorkingBuffer::from_samples(vec![0f32; 5], 2, 1, FastBlurChannels::Channels3),
            Err(BlurError::MinimumSliceSizeMismatch(_))
        ));
    }
}
