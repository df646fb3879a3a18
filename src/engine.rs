// src/engine.rs
use crate::config::DemoConfig;
use crate::haptics::{HapticEngine, HapticFeedback};
use crate::scheduler::{Scheduler, TimerHandle, TimerQueue};
use crate::sensor::{dominant_frequency, export_logs, Recording, RecordingLog, SignalGenerator};
use crate::types::{Msg, Screen};
use std::time::Duration;

const STATUS_LINES: usize = 8;

/// Legal edges of the navigation state machine. `None` means the message has
/// no meaning on that screen and is dropped.
pub fn transition(screen: Screen, msg: &Msg) -> Option<Screen> {
    use Msg::*;
    use Screen::*;
    match (screen, msg) {
        (Welcome, Begin) => Some(Menu),
        (Menu, CaptureNew) => Some(Connecting),
        (Menu, OpenLogs) => Some(Logs),
        (Connecting, ConnectElapsed) => Some(Waveform),
        (Connecting, CancelConnect) => Some(Menu),
        (Waveform, Tick) => Some(Waveform),
        (Waveform, EndAndSave) => Some(Menu),
        (Logs, BackToMenu) => Some(Menu),
        (Logs, ExportLogs) => Some(Logs),
        _ => None,
    }
}

/// The whole application state. The GUI only reads it and sends [`Msg`]s.
pub struct Engine {
    config: DemoConfig,
    screen: Screen,
    generator: SignalGenerator,
    log: RecordingLog,
    timers: TimerQueue<Msg>,
    haptics: HapticFeedback,
    connect_timer: Option<TimerHandle>,
    status: Vec<String>,
}

impl Engine {
    pub fn new(config: DemoConfig, haptics: Box<dyn HapticEngine>) -> Self {
        let generator = SignalGenerator::from_config(&config);
        let log = RecordingLog::new(config.log_capacity);
        let haptics = HapticFeedback::new(haptics, config.pulse_intensity, config.pulse_sharpness);
        Self {
            config,
            screen: Screen::Welcome,
            generator,
            log,
            timers: TimerQueue::new(),
            haptics,
            connect_timer: None,
            status: vec!["VibeSense demo ready.".to_owned()],
        }
    }

    pub fn update(&mut self, msg: Msg) {
        let Some(next) = transition(self.screen, &msg) else {
            log::debug!("ignoring {:?} on {:?}", msg, self.screen);
            return;
        };

        match msg {
            Msg::CaptureNew => {
                self.haptics.pulse();
                let delay = self.config.connect_delay();
                self.connect_timer = Some(self.timers.schedule_after(delay, Msg::ConnectElapsed));
                self.push_status("Connecting to sensor...");
            }
            Msg::ConnectElapsed => {
                self.connect_timer = None;
                self.generator.start(&mut self.timers, Msg::Tick);
                self.push_status("✅ Sensor connected");
            }
            Msg::CancelConnect => {
                if let Some(handle) = self.connect_timer.take() {
                    self.timers.cancel(handle);
                }
                self.push_status("Connection cancelled");
            }
            Msg::Tick => {
                self.generator.tick();
            }
            Msg::EndAndSave => {
                // 先停止再截取，快照即最后状态
                self.generator.stop(&mut self.timers);
                let recording = self.log.capture(self.generator.window());
                log::info!(
                    "💾 recording {} saved ({} samples)",
                    recording.id(),
                    recording.samples().len()
                );
                self.log.add(recording);
                self.push_status("💾 Recording saved");
            }
            Msg::ExportLogs => self.export(),
            Msg::Begin | Msg::OpenLogs | Msg::BackToMenu => {}
        }

        if next != self.screen {
            log::info!("screen {} -> {}", self.screen.label(), next.label());
            self.screen = next;
        }
    }

    /// Fires every timer due up to `now` (time since session start) and
    /// returns how many messages were handled.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.timers.pop_due(now) {
            self.update(msg);
            handled += 1;
        }
        handled
    }

    fn export(&mut self) {
        if self.log.is_empty() {
            self.push_status("Nothing to export");
            return;
        }
        match export_logs(self.log.list(), &self.config.export_dir) {
            Ok(summary) => {
                let line = format!(
                    "📤 Exported {} recordings ({} files)",
                    summary.recordings,
                    summary.files.len()
                );
                self.push_status(&line);
            }
            Err(e) => {
                log::warn!("export failed: {e}");
                self.push_status(&format!("❌ Export failed: {e}"));
            }
        }
    }

    fn push_status(&mut self, msg: &str) {
        self.status.push(format!("> {}", msg));
        if self.status.len() > STATUS_LINES {
            self.status.remove(0);
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn generator(&self) -> &SignalGenerator {
        &self.generator
    }

    pub fn recordings(&self) -> &[Recording] {
        self.log.list()
    }

    pub fn status(&self) -> &[String] {
        &self.status
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the next timer fires, for scheduling repaints.
    pub fn until_next_timer(&self) -> Option<Duration> {
        self.timers.next_due().map(|due| due.saturating_sub(self.timers.now()))
    }

    pub fn haptic_failures(&self) -> usize {
        self.haptics.failures()
    }

    pub fn dominant_frequency(&self, recording: &Recording) -> Option<f64> {
        dominant_frequency(recording.samples(), self.config.sample_rate_hz())
    }
}
