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
use crate::util::try_alloc_zeroed;
use crate::BlurError;

/// Normalized sampled gaussian of `width` taps centered at `width / 2`.
pub fn gaussian_kernel_1d_f64(width: usize, sigma: f64) -> Result<Vec<f64>, BlurError> {
    let mut kernel: Vec<f64> = try_alloc_zeroed(width)?;
    if sigma <= 0. || !sigma.is_finite() {
        if let Some(center) = kernel.get_mut(width / 2) {
            *center = 1.;
        }
        return Ok(kernel);
    }
    let mut sum_norm: f64 = 0.;
    let scale = 1. / (f64::sqrt(2. * std::f64::consts::PI) * sigma);
    let mean = (width / 2) as f64;

    for (x, item) in kernel.iter_mut().enumerate() {
        let dx = (x as f64 - mean) / sigma;
        let new_weight = f64::exp(-0.5 * dx * dx) * scale;
        *item = new_weight;
        sum_norm += new_weight;
    }

    if sum_norm != 0. {
        let sum_scale = 1. / sum_norm;
        for item in kernel.iter_mut() {
            *item *= sum_scale;
        }
    }

    Ok(kernel)
}

/// Kernel of `2 * radius + 1` taps, sigma is `radius / 3` so the kernel spans three deviations.
pub fn gaussian_kernel_from_radius(radius: u32) -> Result<Vec<f64>, BlurError> {
    let width = (radius as usize)
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .ok_or(BlurError::ExceedingPointerSize)?;
    gaussian_kernel_1d_f64(width, radius as f64 / 3.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_normalized_and_symmetric() {
        for radius in [1u32, 2, 5, 17] {
            let kernel = gaussian_kernel_from_radius(radius).unwrap();
            assert_eq!(kernel.len(), radius as usize * 2 + 1);
            let sum = kernel.iter().sum::<f64>();
            assert!((sum - 1.).abs() < 1e-9, "Sum was {sum} for radius {radius}");
            for (a, b) in kernel.iter().zip(kernel.iter().rev()) {
                assert!((a - b).abs() < 1e-12);
            }
            let center = kernel[radius as usize];
            assert!(kernel.iter().all(|&w| w <= center));
        }
    }

    #[test]
    fn test_zero_radius_kernel_is_identity() {
        assert_eq!(gaussian_kernel_from_radius(0).unwrap(), vec![1.]);
    }
}
