// src/gui.rs
use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints};
use std::time::{Duration, Instant};
use crate::engine::Engine;
use crate::types::*;

const ACCENT: Color32 = Color32::from_rgb(0, 255, 255);

pub struct VibeSenseApp {
    engine: Engine,
    // 会话开始的墙钟时间，定时器以此为零点
    started_at: Instant,
}

impl VibeSenseApp {
    pub fn new(engine: Engine) -> Self {
        Self { engine, started_at: Instant::now() }
    }

    fn big_button(ui: &mut egui::Ui, text: &str) -> bool {
        ui.add_sized([240.0, 40.0], egui::Button::new(RichText::new(text).size(16.0)))
            .clicked()
    }

    fn welcome(&self, ui: &mut egui::Ui, out: &mut Vec<Msg>) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(RichText::new("VibeSense").size(36.0).color(ACCENT));
            ui.label("Wearable vibration sensor demo");
            ui.add_space(40.0);
            if Self::big_button(ui, "Get started") {
                out.push(Msg::Begin);
            }
        });
    }

    fn menu(&self, ui: &mut egui::Ui, out: &mut Vec<Msg>) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Menu");
            ui.add_space(20.0);
            if Self::big_button(ui, "🔴 Capture new recording") {
                out.push(Msg::CaptureNew);
            }
            ui.add_space(10.0);
            let label = format!("📂 Past recordings ({})", self.engine.recordings().len());
            if Self::big_button(ui, &label) {
                out.push(Msg::OpenLogs);
            }
        });
    }

    fn connecting(&self, ui: &mut egui::Ui, out: &mut Vec<Msg>) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.spinner();
            ui.label("Connecting to sensor...");
            ui.add_space(20.0);
            if ui.button("Back").clicked() {
                out.push(Msg::CancelConnect);
            }
        });
    }

    fn waveform(&self, ui: &mut egui::Ui, out: &mut Vec<Msg>) {
        let generator = self.engine.generator();
        let burst = generator.shape().is_burst(generator.phase());
        ui.horizontal(|ui| {
            ui.heading("Live signal");
            if burst {
                ui.label(RichText::new("⚠ burst").color(Color32::YELLOW).strong());
            }
        });
        Plot::new("live_plot")
            .view_aspect(2.5)
            .include_y(-0.8)
            .include_y(0.8)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                let points = PlotPoints::new(generator.window().plot_points());
                plot_ui.line(Line::new(points).color(ACCENT).name("vibration"));
            });
        if let Some(v) = generator.window().latest() {
            ui.monospace(format!(
                "latest {:+.3}   phase {:.1} rad   {:.1} Hz   t={:.1}s",
                v,
                generator.phase(),
                self.engine.config().sample_rate_hz(),
                self.engine.now().as_secs_f64()
            ));
        }
        ui.add_space(10.0);
        if Self::big_button(ui, "⏹ End & save") {
            out.push(Msg::EndAndSave);
        }
    }

    fn logs(&self, ui: &mut egui::Ui, out: &mut Vec<Msg>) {
        ui.horizontal(|ui| {
            if ui.button("← Menu").clicked() {
                out.push(Msg::BackToMenu);
            }
            ui.heading("Past recordings");
            if ui.button("📤 Export logs").clicked() {
                out.push(Msg::ExportLogs);
            }
        });
        ui.separator();
        if self.engine.recordings().is_empty() {
            ui.label("No recordings yet.");
            return;
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            for rec in self.engine.recordings() {
                let freq = self
                    .engine
                    .dominant_frequency(rec)
                    .map(|f| format!("{f:.2} Hz"))
                    .unwrap_or_else(|| "-".to_owned());
                ui.label(
                    RichText::new(format!(
                        "{}   peak {:.3}   rms {:.3}   main {}",
                        rec.created_at().with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S"),
                        rec.peak(),
                        rec.rms(),
                        freq
                    ))
                    .monospace(),
                );
                let points: Vec<[f64; 2]> = rec
                    .samples()
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect();
                Plot::new(rec.id().to_string())
                    .height(80.0)
                    .include_y(-0.8)
                    .include_y(0.8)
                    .show_axes([false, false])
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(Line::new(PlotPoints::new(points)).color(ACCENT));
                    });
                ui.add_space(6.0);
            }
        });
    }
}

impl eframe::App for VibeSenseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. 定时器推进
        self.engine.advance(self.started_at.elapsed());

        // 2. UI 绘制，按钮事件先收集再交给模型
        let mut visuals = egui::Visuals::dark();
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(10, 10, 15);
        ctx.set_visuals(visuals);

        let mut out = Vec::new();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.engine.screen().label()).color(ACCENT).small());
                if let Some(line) = self.engine.status().last() {
                    ui.monospace(line);
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| match self.engine.screen() {
            Screen::Welcome => self.welcome(ui, &mut out),
            Screen::Menu => self.menu(ui, &mut out),
            Screen::Connecting => self.connecting(ui, &mut out),
            Screen::Waveform => self.waveform(ui, &mut out),
            Screen::Logs => self.logs(ui, &mut out),
        });
        for msg in out {
            self.engine.update(msg);
        }

        // 3. 下一个定时器到点时重绘
        if let Some(wait) = self.engine.until_next_timer() {
            ctx.request_repaint_after(wait.max(Duration::from_millis(1)));
        }
    }
}
