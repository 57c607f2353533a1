// Copyright (c) Radzivon Bartoshyk. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Gaussian blur approximation for 8-bit RGB and RGBA images.
//!
//! Three successive box blurs with planned radii, see [RadiusPlan], converge to a gaussian
//! with O(1) cost per pixel regardless of sigma. An exact separable [gaussian_blur]
//! is provided as a quality reference.

mod box_filter;
mod box_sizes;
mod channels_configuration;
mod gaussian;
mod gaussian_box_blur;
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
mod gaussian_box_blur_image;
mod image;
mod util;
mod working_buffer;

pub use box_filter::{box_blur_pass, box_blur_pass_direct, BoxPassMode};
pub use box_sizes::{RadiusPlan, GAUSSIAN_BOX_PASSES};
pub use channels_configuration::FastBlurChannels;
pub use gaussian::{gaussian_blur, gaussian_kernel_1d_f64, gaussian_kernel_from_radius};
pub use gaussian_box_blur::{gaussian_box_blur, GaussianBoxBlurParams};
#[cfg(feature = "image")]
#[cfg_attr(docsrs, doc(cfg(feature = "image")))]
pub use gaussian_box_blur_image::{gaussian_blur_image, gaussian_box_blur_image};
pub use crate::image::{BlurImageMut, BufferStore};
pub use util::{BlurError, MismatchedSize};
pub use working_buffer::{BoxSample, WorkingBuffer};
