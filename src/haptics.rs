// src/haptics.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HapticError {
    #[error("haptic engine unavailable: {0}")]
    Unavailable(String),
    #[error("{name} {value} outside [0, 1]")]
    OutOfRange { name: &'static str, value: f32 },
}

/// Something that can play a short vibration pulse.
pub trait HapticEngine {
    fn play_pulse(&mut self, intensity: f32, sharpness: f32) -> Result<(), HapticError>;
}

fn check_unit(name: &'static str, value: f32) -> Result<(), HapticError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HapticError::OutOfRange { name, value })
    }
}

/// Desktop stand-in: there is no motor, so each pulse is written to the log.
#[derive(Default)]
pub struct LogHaptics {
    pulses: usize,
}

impl LogHaptics {
    pub fn pulses(&self) -> usize {
        self.pulses
    }
}

impl HapticEngine for LogHaptics {
    fn play_pulse(&mut self, intensity: f32, sharpness: f32) -> Result<(), HapticError> {
        check_unit("intensity", intensity)?;
        check_unit("sharpness", sharpness)?;
        self.pulses += 1;
        log::info!("📳 pulse #{} (intensity {:.2}, sharpness {:.2})", self.pulses, intensity, sharpness);
        Ok(())
    }
}

/// Engine for hosts without any haptic hardware.
pub struct NoHaptics;

impl HapticEngine for NoHaptics {
    fn play_pulse(&mut self, _intensity: f32, _sharpness: f32) -> Result<(), HapticError> {
        Err(HapticError::Unavailable("no haptic device on this host".to_owned()))
    }
}

/// Fire-and-forget wrapper: failures are logged and dropped.
pub struct HapticFeedback {
    engine: Box<dyn HapticEngine>,
    intensity: f32,
    sharpness: f32,
    failures: usize,
}

impl HapticFeedback {
    pub fn new(engine: Box<dyn HapticEngine>, intensity: f32, sharpness: f32) -> Self {
        Self { engine, intensity, sharpness, failures: 0 }
    }

    pub fn pulse(&mut self) {
        if let Err(e) = self.engine.play_pulse(self.intensity, self.sharpness) {
            self.failures += 1;
            log::warn!("haptic pulse failed: {e}");
        }
    }

    pub fn failures(&self) -> usize {
        self.failures
    }
}
