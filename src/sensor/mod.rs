// src/sensor/mod.rs
pub mod error;
pub mod export;
pub mod fft;
pub mod generator;
pub mod plot;
pub mod recording;
pub mod window;
pub use error::ExportError;
pub use export::{export_logs, ExportSummary};
pub use fft::dominant_frequency;
pub use generator::{SignalGenerator, SignalShape, TickSample};
pub use recording::{Recording, RecordingLog};
pub use window::SampleWindow;
