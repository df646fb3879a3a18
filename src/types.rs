// src/types.rs

// 五个界面
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Screen {
    Welcome,
    Menu,
    Connecting,
    Waveform,
    Logs,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::Welcome => "WELCOME",
            Screen::Menu => "MENU",
            Screen::Connecting => "CONNECTING",
            Screen::Waveform => "LIVE",
            Screen::Logs => "LOGS",
        }
    }
}

// 界面和定时器发给模型的消息
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Welcome screen confirmation.
    Begin,
    /// "Capture new recording" from the menu.
    CaptureNew,
    /// Back out of the connecting screen before the delay elapses.
    CancelConnect,
    /// One-shot timer: the fake connection is up.
    ConnectElapsed,
    /// Periodic timer: generate one sample.
    Tick,
    /// "End & save" on the live screen.
    EndAndSave,
    OpenLogs,
    BackToMenu,
    ExportLogs,
}
