//! Discrete Fourier evaluation and convolution for sampled signals.
//!
//! Two DFT flavors are provided: a batch kernel for signals that are fully
//! available, and a streaming accumulator for evaluating a handful of
//! frequencies while a simulation produces samples one step at a time. Both
//! evaluate a single frequency in closed form; this is not an FFT.

use num_complex::Complex64;
use num_traits::Float;
use std::f64::consts::PI;

use crate::error::GridBoxError;

fn unit_kernel(freq: f64, dt: f64) -> Complex64 {
    (-Complex64::i() * 2.0 * PI * freq * dt).exp()
}

/// Evaluates `Σ_n s[n]·e^(-2πi·f·n·dt)` over the whole sample buffer.
///
/// The plain accumulated sum is returned; multiply by `dt` for an integral
/// approximation (what [`StreamingDft::value`] reports).
pub fn dft(samples: &[f64], dt: f64, freq: f64) -> Complex64 {
    let kernel = unit_kernel(freq, dt);
    let mut transform = Complex64::new(0.0, 0.0);
    let mut addval = Complex64::new(1.0, 0.0);
    for &sample in samples {
        transform += addval * sample;
        addval *= kernel;
    }
    transform
}

/// Single-frequency DFT accumulator fed one sample per time step.
///
/// `accumulate_advance` is the common case; `accumulate_hold` plus
/// `advance_time` let several co-located samples land on the same step.
#[derive(Clone, Copy, Debug)]
pub struct StreamingDft {
    freq: f64,
    dt: f64,
    kernel: Complex64,
    transform: Complex64,
    addval: Complex64,
    n: u32,
}

impl StreamingDft {
    /// Creates an accumulator for one frequency at a fixed sample spacing.
    pub fn new(freq: f64, dt: f64) -> Self {
        let kernel = unit_kernel(freq, dt);
        Self {
            freq,
            dt,
            kernel,
            transform: Complex64::new(0.0, 0.0),
            addval: Complex64::new(1.0, 0.0),
            n: 0,
        }
    }

    /// Frequency being evaluated.
    pub fn freq(&self) -> f64 {
        self.freq
    }

    /// Sample spacing.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of completed time steps.
    pub fn steps(&self) -> u32 {
        self.n
    }

    /// The transform value so far, scaled by `dt` as an integral
    /// approximation.
    pub fn value(&self) -> Complex64 {
        self.transform * self.dt
    }

    /// Adds a sample for the current step and advances to the next one.
    pub fn accumulate_advance(&mut self, sample: f64) {
        self.transform += self.addval * sample;
        self.advance_time();
    }

    /// Adds a sample for the current step without advancing.
    pub fn accumulate_hold(&mut self, sample: f64) {
        self.transform += self.addval * sample;
    }

    /// Advances to the next time step.
    pub fn advance_time(&mut self) {
        self.n += 1;
        self.addval = self.kernel.powu(self.n);
    }
}

/// Full causal convolution: `out[j] = Σ_{k≤j} a[k]·b[j-k]`, truncated to
/// the input length. The inputs must have equal lengths.
pub fn convolve<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>, GridBoxError> {
    if a.len() != b.len() {
        return Err(GridBoxError::DataLengthMismatch {
            name: "convolve".into(),
            expected: a.len(),
            found: b.len(),
        });
    }
    let mut out = Vec::with_capacity(a.len());
    for j in 0..a.len() {
        let mut acc = T::zero();
        for k in 0..=j {
            acc = acc + a[k] * b[j - k];
        }
        out.push(acc);
    }
    Ok(out)
}
