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
use crate::BlurError;

#[repr(C)]
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Declares channels count of an interleaved image.
///
/// Only the first three samples of each pixel are blurred. When the layout has a fourth
/// channel it is expected to be alpha and it is never read or written by the filters.
pub enum FastBlurChannels {
    /// RGB, BGR etc
    Channels3 = 3,
    /// RGBA, BGRA etc, alpha is passed through untouched
    Channels4 = 4,
}

impl FastBlurChannels {
    /// Samples per pixel in the interleaved layout
    #[inline]
    pub fn channels(&self) -> usize {
        match self {
            FastBlurChannels::Channels3 => 3,
            FastBlurChannels::Channels4 => 4,
        }
    }

    /// Samples per pixel that participate in blurring
    #[inline]
    pub const fn blurred_channels(&self) -> usize {
        3
    }
}

impl TryFrom<usize> for FastBlurChannels {
    type Error = BlurError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(FastBlurChannels::Channels3),
            4 => Ok(FastBlurChannels::Channels4),
            _ => Err(BlurError::UnsupportedChannels(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_from_count() {
        assert_eq!(
            FastBlurChannels::try_from(3),
            Ok(FastBlurChannels::Channels3)
        );
        assert_eq!(
            FastBlurChannels::try_from(4),
            Ok(FastBlurChannels::Channels4)
        );
        for cn in [0usize, 1, 2, 5] {
            assert_eq!(
                FastBlurChannels::try_from(cn),
                Err(BlurError::UnsupportedChannels(cn))
            );
        }
    }
}
