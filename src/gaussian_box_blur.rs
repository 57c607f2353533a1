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
use crate::working_buffer::BoxSample;
use crate::{BlurError, BlurImageMut, BoxPassMode, RadiusPlan, WorkingBuffer};
use std::time::Instant;

/// Gaussian box blur parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianBoxBlurParams {
    /// Target gaussian sigma, negative or non finite values mean no blur.
    pub sigma: f32,
    /// How each box pass is computed, see [BoxPassMode].
    pub pass_mode: BoxPassMode,
}

impl GaussianBoxBlurParams {
    pub fn new(sigma: f32) -> GaussianBoxBlurParams {
        GaussianBoxBlurParams {
            sigma,
            pass_mode: BoxPassMode::default(),
        }
    }

    pub fn with_pass_mode(self, pass_mode: BoxPassMode) -> GaussianBoxBlurParams {
        GaussianBoxBlurParams { pass_mode, ..self }
    }

    /// Sigma clamped to be finite and non negative.
    pub fn sanitized_sigma(&self) -> f32 {
        if self.sigma.is_finite() {
            self.sigma.max(0.)
        } else {
            0.
        }
    }
}

/// Returns (source, destination) roles for the two working buffers.
fn pass_roles<F>(
    buffers: &mut [WorkingBuffer<F>; 2],
    source: usize,
) -> (&WorkingBuffer<F>, &mut WorkingBuffer<F>) {
    let (head, tail) = buffers.split_at_mut(1);
    if source == 0 {
        (&head[0], &mut tail[0])
    } else {
        (&tail[0], &mut head[0])
    }
}

fn gaussian_box_blur_impl<F: BoxSample>(
    image: &mut BlurImageMut<'_>,
    plan: &RadiusPlan,
    pass_mode: BoxPassMode,
) -> Result<(), BlurError> {
    let width = image.width as usize;
    let height = image.height as usize;
    let mut buffers = [
        WorkingBuffer::<F>::try_alloc(width, height, image.channels)?,
        WorkingBuffer::<F>::try_alloc(width, height, image.channels)?,
    ];
    buffers[0].load(image)?;

    let start = Instant::now();
    let mut source = 0usize;
    for (pass, &radius) in plan.radii().iter().enumerate() {
        log::trace!("box pass {pass} with radius {radius}");
        let (src, dst) = pass_roles(&mut buffers, source);
        pass_mode.run(src, dst, radius)?;
        source = 1 - source;
    }
    log::debug!(
        "{} box passes over {width}x{height} took {:?}",
        plan.radii().len(),
        start.elapsed()
    );

    buffers[source].store(image)
}

/// Performs gaussian blur approximation with three box blurs.
///
/// Three passes of box blur converge to a gaussian,
/// <https://en.wikipedia.org/wiki/Central_limit_theorem>.
/// Box radii come from [RadiusPlan::gaussian].
///
/// O(1) complexity per pixel with [BoxPassMode::SlidingWindow].
///
/// Image is blurred in place. Only the first three channels are blurred, alpha of a
/// [crate::FastBlurChannels::Channels4] image is left untouched. When the working storage
/// cannot be allocated [BlurError::OutOfMemory] is returned and the image is not modified.
///
/// # Arguments
///
/// * `image` - Image to blur, see [BlurImageMut] for more info.
/// * `params` - See [GaussianBoxBlurParams] for more info.
pub fn gaussian_box_blur(
    image: &mut BlurImageMut<'_>,
    params: GaussianBoxBlurParams,
) -> Result<(), BlurError> {
    image.check_layout()?;
    let plan = RadiusPlan::gaussian(params.sanitized_sigma());
    log::debug!(
        "gaussian box blur sigma {} with box radii {:?}",
        params.sanitized_sigma(),
        plan.radii()
    );
    if plan.is_identity() {
        return Ok(());
    }
    gaussian_box_blur_impl::<f32>(image, &plan, params.pass_mode)
}
