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

use criterion::{criterion_group, criterion_main, Criterion};
use gaussbox::{
    box_blur_pass, box_blur_pass_direct, gaussian_blur, gaussian_box_blur, BlurImageMut,
    BoxPassMode, FastBlurChannels, GaussianBoxBlurParams, WorkingBuffer,
};

fn synthetic_rgba(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 4)
        .map(|i| ((i * 37 + (i / (width * 4)) * 11) % 256) as u8)
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let dimensions = (1024u32, 768u32);
    let src_bytes = synthetic_rgba(dimensions.0 as usize, dimensions.1 as usize);

    for sigma in [2f32, 16., 64.] {
        c.bench_function(&format!("gaussbox: RGBA gaussian box blur, sigma {sigma}"), |b| {
            let mut dst_bytes = src_bytes.clone();
            b.iter(|| {
                dst_bytes.copy_from_slice(&src_bytes);
                let mut dst_image = BlurImageMut::borrow(
                    &mut dst_bytes,
                    dimensions.0,
                    dimensions.1,
                    FastBlurChannels::Channels4,
                );
                gaussian_box_blur(&mut dst_image, GaussianBoxBlurParams::new(sigma)).unwrap();
            })
        });
    }

    c.bench_function("gaussbox: RGBA gaussian box blur direct, sigma 16", |b| {
        let mut dst_bytes = src_bytes.clone();
        b.iter(|| {
            dst_bytes.copy_from_slice(&src_bytes);
            let mut dst_image = BlurImageMut::borrow(
                &mut dst_bytes,
                dimensions.0,
                dimensions.1,
                FastBlurChannels::Channels4,
            );
            gaussian_box_blur(
                &mut dst_image,
                GaussianBoxBlurParams::new(16.).with_pass_mode(BoxPassMode::Direct),
            )
            .unwrap();
        })
    });

    c.bench_function("gaussbox: RGBA gaussian blur, radius 48", |b| {
        let mut dst_bytes = src_bytes.clone();
        b.iter(|| {
            dst_bytes.copy_from_slice(&src_bytes);
            let mut dst_image = BlurImageMut::borrow(
                &mut dst_bytes,
                dimensions.0,
                dimensions.1,
                FastBlurChannels::Channels4,
            );
            gaussian_blur(&mut dst_image, 48).unwrap();
        })
    });

    let src_image = BlurImageMut::owned(
        src_bytes.clone(),
        dimensions.0,
        dimensions.1,
        FastBlurChannels::Channels4,
    );
    let mut src = WorkingBuffer::<f32>::try_alloc(
        dimensions.0 as usize,
        dimensions.1 as usize,
        FastBlurChannels::Channels4,
    )
    .unwrap();
    src.load(&src_image).unwrap();
    let mut dst = src.clone();

    c.bench_function("gaussbox: single box pass f32, radius 38", |b| {
        b.iter(|| {
            box_blur_pass(&src, &mut dst, 38).unwrap();
        })
    });

    c.bench_function("gaussbox: single direct box pass f32, radius 38", |b| {
        b.iter(|| {
            box_blur_pass_direct(&src, &mut dst, 38).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
