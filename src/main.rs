// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod engine;
mod gui;
mod haptics;
mod scheduler;
mod sensor;
mod types;
use anyhow::Context;
use eframe::egui;

// 入口函数
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = config::DemoConfig::from_env().context("loading configuration")?;
    log::info!("config: {:?}", config);
    let engine = engine::Engine::new(config, Box::new(haptics::LogHaptics::default()));
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([420.0, 760.0])
        .with_min_inner_size([360.0, 600.0])
        .with_title("VibeSense demo v0.1");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "VibeSense",
        options,
        Box::new(|_cc| Box::new(gui::VibeSenseApp::new(engine))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
