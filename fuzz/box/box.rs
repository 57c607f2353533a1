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

#![no_main]

use arbitrary::Arbitrary;
use gaussbox::{
    box_blur_pass, box_blur_pass_direct, gaussian_blur, gaussian_box_blur, BlurImageMut,
    BoxPassMode, FastBlurChannels, GaussianBoxBlurParams, WorkingBuffer,
};
use libfuzzer_sys::fuzz_target;

#[derive(Clone, Debug, Arbitrary)]
pub struct SrcImage {
    pub src_width: u8,
    pub src_height: u8,
    pub seed: u8,
    pub radius: u16,
    pub sigma: f32,
    pub channels: u8,
}

fuzz_target!(|data: SrcImage| {
    let Ok(channels) = FastBlurChannels::try_from(data.channels as usize) else {
        return;
    };
    fuzz_pass(
        data.src_width as usize,
        data.src_height as usize,
        data.seed,
        data.radius as u32,
        channels,
    );
    fuzz_pipeline(
        data.src_width as u32,
        data.src_height as u32,
        data.seed,
        data.sigma,
        data.radius as u32 % 64,
        channels,
    );
});

fn pixels(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u32).wrapping_mul(seed as u32 | 1).wrapping_add(seed as u32) as u8)
        .collect()
}

fn fuzz_pass(width: usize, height: usize, seed: u8, radius: u32, channels: FastBlurChannels) {
    if width == 0 || height == 0 {
        return;
    }
    let samples = pixels(width * height * channels.channels(), seed)
        .iter()
        .map(|&v| v as f64)
        .collect::<Vec<f64>>();
    let src = WorkingBuffer::from_samples(samples, width, height, channels).unwrap();
    let mut sliding = WorkingBuffer::try_alloc(width, height, channels).unwrap();
    box_blur_pass(&src, &mut sliding, radius).unwrap();
    if radius <= 512 {
        let mut direct = WorkingBuffer::try_alloc(width, height, channels).unwrap();
        box_blur_pass_direct(&src, &mut direct, radius).unwrap();
        for (a, b) in sliding.data().iter().zip(direct.data().iter()) {
            assert!((a - b).abs() < 1e-6, "Sliding {a} and direct {b} differ");
        }
    }
    assert!(sliding.data().iter().all(|&v| (-1e-6..=255. + 1e-6).contains(&v)));
}

fn fuzz_pipeline(
    width: u32,
    height: u32,
    seed: u8,
    sigma: f32,
    radius: u32,
    channels: FastBlurChannels,
) {
    let len = width as usize * height as usize * channels.channels();
    let source = pixels(len, seed);
    for mode in [BoxPassMode::SlidingWindow, BoxPassMode::Direct] {
        if mode == BoxPassMode::Direct && sigma.abs() > 100. {
            continue;
        }
        let mut data = source.clone();
        let mut image = BlurImageMut::borrow(&mut data, width, height, channels);
        let params = GaussianBoxBlurParams::new(sigma).with_pass_mode(mode);
        let result = gaussian_box_blur(&mut image, params);
        if width == 0 || height == 0 {
            assert!(result.is_err());
        } else {
            result.unwrap();
        }
    }
    let mut data = source.clone();
    let mut image = BlurImageMut::borrow(&mut data, width, height, channels);
    let result = gaussian_blur(&mut image, radius);
    if width == 0 || height == 0 {
        assert!(result.is_err());
    } else {
        result.unwrap();
    }
}
