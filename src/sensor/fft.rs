use rustfft::{num_complex::Complex64, FftPlanner};
/// Magnitude spectrum of a single recording.
#[derive(Clone, Debug)]
pub struct FrequencySpectrum {
    pub sample_rate_hz: f64,
    pub frequencies_hz: Vec<f64>,
    pub magnitudes: Vec<f64>,
}
impl FrequencySpectrum {
    /// Mean-removed FFT over all samples; `None` for fewer than 4 samples.
    pub fn compute(samples: &[f64], sample_rate_hz: f64) -> Option<Self> {
        let n = samples.len();
        if n < 4 || sample_rate_hz <= 0.0 {
            return None;
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let mut buffer: Vec<Complex64> = samples
            .iter()
            .map(|v| Complex64::new(v - mean, 0.0))
            .collect();
        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(n).process(&mut buffer);
        let bins = n / 2;
        let frequencies_hz = (0..bins)
            .map(|k| k as f64 * sample_rate_hz / n as f64)
            .collect();
        let magnitudes = buffer
            .iter()
            .take(bins)
            .map(|c| c.norm() / n as f64)
            .collect();
        Some(Self {
            sample_rate_hz,
            frequencies_hz,
            magnitudes,
        })
    }
    /// Frequency of the strongest non-DC bin.
    pub fn dominant(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, m)| **m > 1e-9)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| self.frequencies_hz[k])
    }
}
/// Dominant vibration frequency of `samples`, if there is one.
pub fn dominant_frequency(samples: &[f64], sample_rate_hz: f64) -> Option<f64> {
    FrequencySpectrum::compute(samples, sample_rate_hz)?.dominant()
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn finds_the_generator_base_frequency() {
        // 0.2 rad per 30 ms tick is ~1.061 Hz
        let rate = 1000.0 / 30.0;
        let samples: Vec<f64> = (1..=300).map(|i| 0.2 * (i as f64 * 0.2).sin()).collect();
        let freq = dominant_frequency(&samples, rate).unwrap();
        let expected = 0.2 / 0.03 / (2.0 * std::f64::consts::PI);
        let resolution = rate / 300.0;
        assert!((freq - expected).abs() <= resolution, "got {freq}");
    }
    #[test]
    fn flat_signal_has_no_dominant_frequency() {
        assert_eq!(dominant_frequency(&[0.3; 64], 33.0), None);
        assert_eq!(dominant_frequency(&[1.0, 2.0], 33.0), None);
    }
    #[test]
    fn spectrum_has_half_the_bins() {
        let spectrum = FrequencySpectrum::compute(&[0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0], 8.0).unwrap();
        assert_eq!(spectrum.frequencies_hz.len(), 4);
        assert_eq!(spectrum.dominant(), Some(2.0));
    }
}
