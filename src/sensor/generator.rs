use std::time::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::DemoConfig;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::sensor::SampleWindow;
/// Shape of the synthetic vibration signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalShape {
    pub phase_step: f64,
    pub amplitude: f64,
    pub baseline_jitter: f64,
    pub burst_jitter: f64,
    pub burst_cycle: u64,
    pub burst_threshold: u64,
}
impl Default for SignalShape {
    fn default() -> Self {
        Self::from(&DemoConfig::default())
    }
}
impl From<&DemoConfig> for SignalShape {
    fn from(config: &DemoConfig) -> Self {
        Self {
            phase_step: config.phase_step,
            amplitude: config.amplitude,
            baseline_jitter: config.baseline_jitter,
            burst_jitter: config.burst_jitter,
            burst_cycle: config.burst_cycle.max(1),
            burst_threshold: config.burst_threshold,
        }
    }
}
impl SignalShape {
    /// `floor(phase) mod cycle > threshold`: the noisy part of every cycle.
    pub fn is_burst(&self, phase: f64) -> bool {
        let cycle = self.burst_cycle.max(1) as i64;
        (phase.floor() as i64).rem_euclid(cycle) as u64 > self.burst_threshold
    }
    pub fn jitter_bound(&self, phase: f64) -> f64 {
        if self.is_burst(phase) {
            self.burst_jitter
        } else {
            self.baseline_jitter
        }
    }
    pub fn base(&self, phase: f64) -> f64 {
        self.amplitude * phase.sin()
    }
}
/// What a single tick computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSample {
    pub phase: f64,
    pub base: f64,
    pub jitter: f64,
    pub value: f64,
    pub burst: bool,
}
/// Timer-driven sine-plus-jitter source feeding a [`SampleWindow`].
pub struct SignalGenerator {
    shape: SignalShape,
    window: SampleWindow,
    phase: f64,
    period: Duration,
    rng: StdRng,
    timer: Option<TimerHandle>,
}
impl SignalGenerator {
    pub fn new(shape: SignalShape, capacity: usize, period: Duration, rng: StdRng) -> Self {
        Self {
            shape,
            window: SampleWindow::new(capacity),
            phase: 0.0,
            period,
            rng,
            timer: None,
        }
    }
    pub fn from_config(config: &DemoConfig) -> Self {
        let rng = match config.jitter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(
            SignalShape::from(config),
            config.window_capacity,
            config.tick_period(),
            rng,
        )
    }
    /// Default shape with a deterministic jitter stream.
    pub fn with_seed(seed: u64) -> Self {
        let config = DemoConfig::default();
        Self::new(
            SignalShape::from(&config),
            config.window_capacity,
            config.tick_period(),
            StdRng::seed_from_u64(seed),
        )
    }
    /// Arms the periodic tick and resets the phase. A run that is already in
    /// progress is cancelled first, so there is never more than one timer.
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S, tick_msg: S::Msg) {
        self.stop(scheduler);
        self.phase = 0.0;
        self.timer = Some(scheduler.schedule_every(self.period, tick_msg));
        log::info!("signal generator started ({:?} period)", self.period);
    }
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
            log::info!("signal generator stopped at phase {:.1}", self.phase);
        }
    }
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }
    /// Advances the phase, draws jitter and pushes one sample.
    pub fn tick(&mut self) -> TickSample {
        self.phase += self.shape.phase_step;
        let phase = self.phase;
        let base = self.shape.base(phase);
        let burst = self.shape.is_burst(phase);
        let bound = self.shape.jitter_bound(phase);
        let jitter = self.rng.gen_range(-bound..=bound);
        let value = base + jitter;
        self.window.push(value);
        log::trace!("tick phase={phase:.2} value={value:.4} burst={burst}");
        TickSample {
            phase,
            base,
            jitter,
            value,
            burst,
        }
    }
    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
    pub fn phase(&self) -> f64 {
        self.phase
    }
    pub fn shape(&self) -> &SignalShape {
        &self.shape
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TimerQueue;
    #[test]
    fn window_length_is_invariant_across_ticks() {
        let mut gen = SignalGenerator::with_seed(1);
        for _ in 0..1000 {
            assert_eq!(gen.window().len(), 300);
            gen.tick();
            assert_eq!(gen.window().len(), 300);
        }
    }
    #[test]
    fn jitter_respects_phase_dependent_bound() {
        let mut gen = SignalGenerator::with_seed(42);
        let mut saw_burst = false;
        let mut saw_baseline = false;
        // two full burst cycles: 100 rad / 0.2 rad per tick = 500 ticks each
        for _ in 0..1200 {
            let s = gen.tick();
            let expected_burst = (s.phase.floor() as i64) % 100 > 80;
            assert_eq!(s.burst, expected_burst, "phase {}", s.phase);
            if s.burst {
                saw_burst = true;
                assert!(s.jitter.abs() <= 0.5);
            } else {
                saw_baseline = true;
                assert!(s.jitter.abs() <= 0.05, "jitter {} at {}", s.jitter, s.phase);
            }
            assert!((s.value - (0.2 * s.phase.sin() + s.jitter)).abs() < 1e-12);
        }
        assert!(saw_burst && saw_baseline);
    }
    #[test]
    fn burst_window_widens_the_noise() {
        let mut gen = SignalGenerator::with_seed(9);
        let mut max_burst = 0.0f64;
        for _ in 0..500 {
            let s = gen.tick();
            if s.burst {
                max_burst = max_burst.max(s.jitter.abs());
            }
        }
        assert!(max_burst > 0.05);
    }
    #[test]
    fn start_is_idempotent_and_resets_phase() {
        let mut q: TimerQueue<&str> = TimerQueue::new();
        let mut gen = SignalGenerator::with_seed(3);
        gen.start(&mut q, "tick");
        let first = gen.timer().unwrap();
        gen.tick();
        gen.tick();
        gen.start(&mut q, "tick");
        assert_eq!(gen.phase(), 0.0);
        assert_eq!(q.pending(), 1);
        assert!(!q.is_pending(first));
        assert!(gen.is_running());
    }
    #[test]
    fn stop_is_safe_when_idle() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        let mut gen = SignalGenerator::with_seed(3);
        gen.stop(&mut q);
        assert!(!gen.is_running());
        gen.start(&mut q, ());
        gen.stop(&mut q);
        gen.stop(&mut q);
        assert!(!gen.is_running());
        assert_eq!(q.pending(), 0);
    }
    #[test]
    fn negative_phase_uses_euclidean_modulo() {
        let shape = SignalShape::default();
        assert!(shape.is_burst(-10.5));
        assert!(!shape.is_burst(-50.0));
        assert!(shape.is_burst(81.0));
        assert!(!shape.is_burst(80.99));
    }
}
