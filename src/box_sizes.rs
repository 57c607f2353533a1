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
/// Amount of box passes used to approximate a gaussian.
pub const GAUSSIAN_BOX_PASSES: usize = 3;

/// Box radii for successive passes whose combined variance approximates a gaussian.
///
/// Box widths are odd, at most two distinct widths are used and they differ by 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadiusPlan {
    radii: Vec<u32>,
}

impl RadiusPlan {
    /// Plans `passes` box radii for the given sigma.
    ///
    /// Ideal box width is `sqrt(12 * sigma^2 / n + 1)`, it is rounded down to an odd width `wl`
    /// and the next odd width `wu = wl + 2` is taken as well. The first `m` passes use `wl`
    /// where `m` is the rounded least squares solution for the remaining variance.
    ///
    /// Sigma that is negative, zero or not finite plans radius 0 for every pass.
    pub fn new(sigma: f32, passes: usize) -> RadiusPlan {
        if passes == 0 {
            return RadiusPlan { radii: Vec::new() };
        }
        let sigma = if sigma.is_finite() {
            sigma.max(0.) as f64
        } else {
            0.
        };
        let n = passes as f64;
        let variance12 = 12.0 * sigma * sigma;

        // Ideal averaging filter width
        let w_ideal = (variance12 / n + 1.0).sqrt();
        let mut wl = w_ideal.floor().min(u32::MAX as f64) as u32;
        if wl % 2 == 0 {
            wl -= 1;
        }
        let wu = wl.saturating_add(2);

        let wl_f = wl as f64;
        let m_ideal =
            (variance12 - n * wl_f * wl_f - 4.0 * n * wl_f - 3.0 * n) / (-4.0 * wl_f - 4.0);
        let m = m_ideal.round().clamp(0., n) as usize;

        let radii = (0..passes)
            .map(|i| if i < m { (wl - 1) / 2 } else { (wu - 1) / 2 })
            .collect();
        RadiusPlan { radii }
    }

    /// Plans the three passes of the gaussian box blur.
    pub fn gaussian(sigma: f32) -> RadiusPlan {
        RadiusPlan::new(sigma, GAUSSIAN_BOX_PASSES)
    }

    #[inline]
    pub fn radii(&self) -> &[u32] {
        &self.radii
    }

    /// Full box widths, `2 * radius + 1`
    pub fn box_widths(&self) -> Vec<u64> {
        self.radii.iter().map(|&r| r as u64 * 2 + 1).collect()
    }

    /// Standard deviation of the composed boxes, each box contributes `(w^2 - 1) / 12` variance.
    pub fn effective_sigma(&self) -> f64 {
        self.box_widths()
            .iter()
            .map(|&w| {
                let w = w as f64;
                (w * w - 1.) / 12.
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.radii.iter().all(|&r| r == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sigma_plans_no_blur() {
        for sigma in [0f32, -1., -100., f32::NAN, f32::NEG_INFINITY, f32::INFINITY] {
            let plan = RadiusPlan::gaussian(sigma);
            assert_eq!(plan.radii(), &[0, 0, 0], "Sigma {sigma}");
            assert!(plan.is_identity());
        }
    }

    #[test]
    fn test_sigma_three() {
        let plan = RadiusPlan::gaussian(3.);
        assert_eq!(plan.radii(), &[2, 2, 3]);
        assert_eq!(plan.box_widths(), vec![5, 5, 7]);
        let diff = (plan.effective_sigma() - 3.).abs();
        assert!(diff < 0.5, "Effective sigma {} is too far", plan.effective_sigma());
    }

    #[test]
    fn test_widths_are_odd_and_close() {
        let mut sigma = 0.1f32;
        while sigma < 60. {
            let plan = RadiusPlan::gaussian(sigma);
            let widths = plan.box_widths();
            assert_eq!(widths.len(), 3);
            let min = *widths.iter().min().unwrap();
            let max = *widths.iter().max().unwrap();
            assert!(max - min <= 2, "Widths {widths:?} for sigma {sigma}");
            assert!(widths.windows(2).all(|w| w[0] <= w[1]));
            let tolerance = 0.6;
            let diff = (plan.effective_sigma() - sigma as f64).abs();
            assert!(
                diff <= tolerance,
                "Effective sigma {} for {sigma}, widths {widths:?}",
                plan.effective_sigma()
            );
            sigma += 0.37;
        }
    }

    #[test]
    fn test_generalizes_to_other_pass_counts() {
        assert!(RadiusPlan::new(4., 0).radii().is_empty());
        let plan = RadiusPlan::new(4., 5);
        assert_eq!(plan.radii().len(), 5);
        let plan = RadiusPlan::new(4., 1);
        // single box of width 13 has sigma sqrt(14)
        assert_eq!(plan.radii(), &[6]);
    }
}
