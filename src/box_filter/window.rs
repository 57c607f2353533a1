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
use std::ops::Range;

/// What happens to the window edges in the middle part of an axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum MiddleRegime {
    /// Both edges move freely, true sliding window.
    Interior,
    /// Window is wider than the axis, both edges stay clamped.
    Saturated,
}

/// Closed-form split of the steps `1..len` of one axis by window edge behavior.
///
/// Step `i` moves the window centered at `i - 1` to `i`: sample `i + radius` enters
/// and sample `i - radius - 1` departs. Entering samples past the end clamp to the
/// last sample, departing samples before the start clamp to the first one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct WindowRegions {
    /// Departing sample is clamped to the first sample.
    pub(crate) leading: Range<usize>,
    pub(crate) middle: Range<usize>,
    pub(crate) middle_regime: MiddleRegime,
    /// Entering sample is clamped to the last sample.
    pub(crate) trailing: Range<usize>,
}

impl WindowRegions {
    pub(crate) fn new(len: usize, radius: usize) -> WindowRegions {
        if len <= 1 {
            return WindowRegions {
                leading: 1..1,
                middle: 1..1,
                middle_regime: MiddleRegime::Interior,
                trailing: 1..1,
            };
        }
        // i < departs_free: i - radius - 1 < 0
        let departs_free = radius.saturating_add(1).min(len);
        // i >= enters_clamped: i + radius > len - 1
        let enters_clamped = len.saturating_sub(radius).max(1);

        let leading_end = departs_free.min(enters_clamped);
        let middle_end = departs_free.max(enters_clamped);
        let middle_regime = if departs_free <= enters_clamped {
            MiddleRegime::Interior
        } else {
            MiddleRegime::Saturated
        };

        WindowRegions {
            leading: 1..leading_end,
            middle: leading_end..middle_end,
            middle_regime,
            trailing: middle_end..len,
        }
    }
}
