//! Closed-form signal generators for driving simulations.
//!
//! Every generator is a small value type implementing [`Signal`]: an
//! amplitude as a function of time, an optional off-time after which the
//! signal is forced to zero, and the frequency band the signal occupies
//! (used to pick stable time steps downstream). Generators are plain data;
//! clone them freely or box them as `dyn Signal` for runtime selection.

pub mod processing;

use std::f64::consts::PI;
use std::fmt;

/// A time-dependent scalar signal.
pub trait Signal: fmt::Display {
    /// Signal amplitude at time `t`.
    fn value(&self, t: f64) -> f64;
    /// Peak amplitude scale.
    fn magnitude(&self) -> f64;
    /// Time after which the signal is forced to zero.
    fn off_time(&self) -> f64;
    /// Lower edge of the occupied frequency band.
    fn freq_min(&self) -> f64 {
        0.0
    }
    /// Upper edge of the occupied frequency band.
    fn freq_max(&self) -> f64 {
        0.0
    }
}

/// Samples `signal` at `n` uniformly spaced times starting at `t0`.
pub fn sample(signal: &dyn Signal, t0: f64, dt: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| signal.value(t0 + dt * i as f64)).collect()
}

#[inline]
fn gated(off_time: f64, t: f64, value: f64) -> f64 {
    if t > off_time { 0.0 } else { value }
}

/// A constant signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant {
    pub magnitude: f64,
    pub off_time: f64,
}

impl Constant {
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Constant {
    fn value(&self, t: f64) -> f64 {
        gated(self.off_time, t, self.magnitude)
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant: Mag={} Toff={}", self.magnitude, self.off_time)
    }
}

/// A signal that is Gaussian in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    pub sigma_t: f64,
    pub t0: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl Gaussian {
    pub fn new(sigma_t: f64, t0: f64) -> Self {
        Self {
            sigma_t,
            t0,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Gaussian {
    fn value(&self, t: f64) -> f64 {
        let arg = (t - self.t0) / self.sigma_t;
        gated(self.off_time, t, self.magnitude * (-0.5 * arg * arg).exp())
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
    fn freq_max(&self) -> f64 {
        1.0 / self.sigma_t
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gaussian: Mag={} Toff={} T0={} SigmaT={}",
            self.magnitude, self.off_time, self.t0, self.sigma_t
        )
    }
}

/// A sinusoid under a Gaussian envelope; Gaussian in frequency around `f0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianBurst {
    pub sigma_f: f64,
    pub f0: f64,
    pub t0: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl GaussianBurst {
    pub fn new(sigma_f: f64, f0: f64, t0: f64) -> Self {
        Self {
            sigma_f,
            f0,
            t0,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for GaussianBurst {
    fn value(&self, t: f64) -> f64 {
        // the envelope peak is delayed 3 sigma so the signal starts near zero
        let sigma_t = 1.0 / (2.0 * PI * self.sigma_f);
        let shifted = t - 3.0 * sigma_t - self.t0;
        let envelope =
            (-0.5 * 4.0 * PI * PI * self.sigma_f * self.sigma_f * shifted * shifted).exp();
        gated(
            self.off_time,
            t,
            self.magnitude * (2.0 * PI * self.f0 * (t - self.t0)).sin() * envelope,
        )
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
    fn freq_min(&self) -> f64 {
        (self.f0 - 3.0 * self.sigma_f).max(0.0)
    }
    fn freq_max(&self) -> f64 {
        self.f0 + 3.0 * self.sigma_f
    }
}

impl fmt::Display for GaussianBurst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GaussianBurst: Mag={} Toff={} T0={} F0={} SigmaF={}",
            self.magnitude, self.off_time, self.t0, self.f0, self.sigma_f
        )
    }
}

/// A single-frequency sinusoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sinusoid {
    pub freq: f64,
    /// Phase in radians.
    pub phase: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl Sinusoid {
    pub fn new(freq: f64) -> Self {
        Self {
            freq,
            phase: 0.0,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Sinusoid {
    fn value(&self, t: f64) -> f64 {
        gated(
            self.off_time,
            t,
            self.magnitude * (2.0 * PI * self.freq * t + self.phase).sin(),
        )
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
    fn freq_min(&self) -> f64 {
        self.freq
    }
    fn freq_max(&self) -> f64 {
        self.freq
    }
}

impl fmt::Display for Sinusoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sinusoid: Mag={} Toff={} Freq={} Phase={}",
            self.magnitude, self.off_time, self.freq, self.phase
        )
    }
}

/// Two superposed sinusoids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoSinusoids {
    pub freq_1: f64,
    pub magn_1: f64,
    pub phase_1: f64,
    pub freq_2: f64,
    pub magn_2: f64,
    pub phase_2: f64,
    pub off_time: f64,
}

impl TwoSinusoids {
    pub fn new(freq_1: f64, magn_1: f64, freq_2: f64, magn_2: f64) -> Self {
        Self {
            freq_1,
            magn_1,
            phase_1: 0.0,
            freq_2,
            magn_2,
            phase_2: 0.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for TwoSinusoids {
    fn value(&self, t: f64) -> f64 {
        gated(
            self.off_time,
            t,
            self.magn_1 * (2.0 * PI * self.freq_1 * t + self.phase_1).sin()
                + self.magn_2 * (2.0 * PI * self.freq_2 * t + self.phase_2).sin(),
        )
    }
    fn magnitude(&self) -> f64 {
        self.magn_1 + self.magn_2
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
    fn freq_min(&self) -> f64 {
        self.freq_1.min(self.freq_2)
    }
    fn freq_max(&self) -> f64 {
        self.freq_1.max(self.freq_2)
    }
}

impl fmt::Display for TwoSinusoids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TwoSinusoids: Freq1={} Mag1={} Phase1={} Freq2={} Mag2={} Phase2={} Toff={}",
            self.freq_1,
            self.magn_1,
            self.phase_1,
            self.freq_2,
            self.magn_2,
            self.phase_2,
            self.off_time
        )
    }
}

/// A linear ramp from zero up to the full magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
    /// Ramp start time.
    pub t0: f64,
    /// Ramp stop time.
    pub t1: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl Ramp {
    pub fn new(t1: f64) -> Self {
        Self {
            t0: 0.0,
            t1,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Ramp {
    fn value(&self, t: f64) -> f64 {
        if t > self.off_time {
            0.0
        } else if t > self.t1 {
            self.magnitude
        } else if t < self.t0 {
            0.0
        } else {
            self.magnitude / (self.t1 - self.t0) * t
        }
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ramp: Mag={} Toff={} T0={} T1={}",
            self.magnitude, self.off_time, self.t0, self.t1
        )
    }
}

/// A slow, smooth ramp to a constant value, shaped like a hyperbolic
/// tangent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tanh {
    /// Rise time scale.
    pub t_up: f64,
    pub t0: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl Tanh {
    pub fn new(t_up: f64, t0: f64) -> Self {
        Self {
            t_up,
            t0,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Tanh {
    fn value(&self, t: f64) -> f64 {
        gated(
            self.off_time,
            t,
            self.magnitude * ((t - self.t0) * PI / self.t_up).tanh(),
        )
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
}

impl fmt::Display for Tanh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tanh: Mag={} Tup={} Toff={} T0={}",
            self.magnitude, self.t_up, self.off_time, self.t0
        )
    }
}

/// A Ricker wavelet: zero DC component with a Gaussian-like spectrum
/// around `f0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ricker {
    pub f0: f64,
    pub t0: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl Ricker {
    pub fn new(f0: f64, t0: f64) -> Self {
        Self {
            f0,
            t0,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Ricker {
    fn value(&self, t: f64) -> f64 {
        let param = PI * self.f0 * (t - self.t0);
        gated(
            self.off_time,
            t,
            self.magnitude * (1.0 - 2.0 * param * param) * (-param * param).exp(),
        )
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
    fn freq_max(&self) -> f64 {
        3.0 * self.f0
    }
}

impl fmt::Display for Ricker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ricker: Mag={} Toff={} T0={} F0={}",
            self.magnitude, self.off_time, self.t0, self.f0
        )
    }
}

/// A Heaviside step: zero before `t0`, constant after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heaviside {
    pub t0: f64,
    pub magnitude: f64,
    pub off_time: f64,
}

impl Heaviside {
    pub fn new(t0: f64) -> Self {
        Self {
            t0,
            magnitude: 1.0,
            off_time: f64::INFINITY,
        }
    }
}

impl Signal for Heaviside {
    fn value(&self, t: f64) -> f64 {
        if t > self.off_time || t < self.t0 {
            0.0
        } else {
            self.magnitude
        }
    }
    fn magnitude(&self) -> f64 {
        self.magnitude
    }
    fn off_time(&self) -> f64 {
        self.off_time
    }
}

impl fmt::Display for Heaviside {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Heaviside: Mag={} Toff={} T0={}",
            self.magnitude, self.off_time, self.t0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_respects_off_time() {
        let mut s = Constant::new(2.5);
        s.off_time = 1.0;
        assert_eq!(s.value(0.5), 2.5);
        assert_eq!(s.value(1.5), 0.0);
    }

    #[test]
    fn gaussian_peaks_at_t0() {
        let s = Gaussian::new(0.1, 2.0);
        assert!((s.value(2.0) - 1.0).abs() < 1e-12);
        assert!(s.value(2.0) > s.value(2.05));
        assert!((s.value(2.1) - (-0.5f64).exp()).abs() < 1e-12);
        assert_eq!(s.freq_max(), 10.0);
    }

    #[test]
    fn sinusoid_quarter_period_is_the_peak() {
        let s = Sinusoid::new(1.0);
        assert!((s.value(0.25) - 1.0).abs() < 1e-12);
        assert!(s.value(0.0).abs() < 1e-12);
        assert_eq!(s.freq_min(), s.freq_max());
    }

    #[test]
    fn two_sinusoids_band_and_magnitude() {
        let s = TwoSinusoids::new(1.0, 0.5, 4.0, 1.5);
        assert_eq!(s.freq_min(), 1.0);
        assert_eq!(s.freq_max(), 4.0);
        assert_eq!(s.magnitude(), 2.0);
        assert!((s.value(0.125) - (0.5 * (PI / 4.0).sin() + 1.5 * (PI).sin())).abs() < 1e-12);
    }

    #[test]
    fn ramp_interpolates_between_bounds() {
        let s = Ramp::new(2.0);
        assert_eq!(s.value(-0.5), 0.0);
        assert!((s.value(1.0) - 0.5).abs() < 1e-12);
        assert_eq!(s.value(3.0), 1.0);
    }

    #[test]
    fn tanh_is_zero_at_t0_and_saturates() {
        let s = Tanh::new(0.5, 1.0);
        assert!(s.value(1.0).abs() < 1e-12);
        assert!((s.value(10.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ricker_peak_and_zero_crossing() {
        let s = Ricker::new(2.0, 0.5);
        assert!((s.value(0.5) - 1.0).abs() < 1e-12);
        // zeros where 2*(pi f0 (t-t0))^2 == 1
        let zero_t = 0.5 + 1.0 / (PI * 2.0 * 2.0f64.sqrt());
        assert!(s.value(zero_t).abs() < 1e-12);
        assert_eq!(s.freq_max(), 6.0);
    }

    #[test]
    fn heaviside_window() {
        let mut s = Heaviside::new(1.0);
        s.off_time = 2.0;
        assert_eq!(s.value(0.9), 0.0);
        assert_eq!(s.value(1.5), 1.0);
        assert_eq!(s.value(2.5), 0.0);
    }

    #[test]
    fn sample_walks_the_time_axis() {
        let s = Heaviside::new(0.15);
        assert_eq!(sample(&s, 0.0, 0.1, 4), vec![0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn summaries_name_their_parameters() {
        let s = Gaussian::new(0.1, 0.0);
        assert!(format!("{s}").starts_with("Gaussian: Mag=1"));
    }
}
