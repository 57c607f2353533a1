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
use crate::error::AppError;
use gaussbox::BoxPassMode;
use std::path::PathBuf;
use std::str::FromStr;

pub const HELP: &str = "\
gaussbox blurs an RGB(A) image with a gaussian built from three box blurs.

USAGE:
  gaussbox [OPTIONS] <image-path> <sigma-or-radius>

  gaussbox photo.png 4.5
  gaussbox -m direct -o out.png photo.jpg 3
  gaussbox -m gaussian photo.png 12

OPTIONS:
  -h, --help                Prints help information
  -V, --version             Prints version information
  -o, --output PATH         Output image path [default: blurred.png]
  -m, --mode MODE           Blur algorithm [default: box]
                            [possible values: box, direct, gaussian]
      --perf                Prints timings of decoding, blurring and encoding
      --quiet               Disables warnings
      --verbose             Prints debug messages of the blur

ARGS:
  <image-path>              Input image, any format the image crate decodes
  <sigma-or-radius>         Gaussian sigma in box and direct modes,
                            integer kernel radius in gaussian mode
";

pub const DEFAULT_OUTPUT: &str = "blurred.png";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BlurMode {
    #[default]
    Box,
    Direct,
    Gaussian,
}

impl FromStr for BlurMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(BlurMode::Box),
            "direct" => Ok(BlurMode::Direct),
            "gaussian" => Ok(BlurMode::Gaussian),
            _ => Err(format!("'{s}' is not a blur mode")),
        }
    }
}

/// What to run once the image is decoded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    BoxBlur { sigma: f32, pass_mode: BoxPassMode },
    Gaussian { radius: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
    pub operation: Operation,
    pub perf: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Off
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Run(Args),
}

fn parse_operation(mode: BlurMode, amount: &str) -> Result<Operation, AppError> {
    match mode {
        BlurMode::Box | BlurMode::Direct => {
            let sigma = amount
                .parse::<f32>()
                .map_err(|_| AppError::Usage(format!("'{amount}' is not a valid sigma")))?;
            let pass_mode = if mode == BlurMode::Direct {
                BoxPassMode::Direct
            } else {
                BoxPassMode::SlidingWindow
            };
            Ok(Operation::BoxBlur { sigma, pass_mode })
        }
        BlurMode::Gaussian => {
            let radius = amount
                .parse::<i64>()
                .map_err(|_| AppError::Usage(format!("'{amount}' is not a valid radius")))?;
            Ok(Operation::Gaussian {
                radius: radius.clamp(0, u32::MAX as i64) as u32,
            })
        }
    }
}

pub fn parse_args(mut input: pico_args::Arguments) -> Result<Command, AppError> {
    if input.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if input.contains(["-V", "--version"]) {
        return Ok(Command::Version);
    }

    let output: Option<PathBuf> = input.opt_value_from_str(["-o", "--output"])?;
    let mode: BlurMode = input
        .opt_value_from_str(["-m", "--mode"])?
        .unwrap_or_default();
    let perf = input.contains("--perf");
    let quiet = input.contains("--quiet");
    let verbose = input.contains("--verbose");

    let image_path: PathBuf = input
        .free_from_str()
        .map_err(|_| AppError::Usage("<image-path> must be set".to_string()))?;
    let amount: String = input
        .free_from_str()
        .map_err(|_| AppError::Usage("<sigma-or-radius> must be set".to_string()))?;

    let remaining = input.finish();
    if !remaining.is_empty() {
        return Err(AppError::Usage(format!(
            "unexpected arguments {:?}",
            remaining
        )));
    }

    Ok(Command::Run(Args {
        input: image_path,
        output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        operation: parse_operation(mode, &amount)?,
        perf,
        quiet,
        verbose,
    }))
}
