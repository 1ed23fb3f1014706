use eframe::egui;

use crate::config::WindowConfig;
use crate::error::{DemoError, Result};

/// Opens a native window and runs `build`'s app until the user closes it.
pub fn launch<A, F>(window: &WindowConfig, build: F) -> Result<()>
where
    A: eframe::App + 'static,
    F: FnOnce(&eframe::CreationContext<'_>) -> A + 'static,
{
    tracing::info!(
        target: "window",
        title = window.title,
        width = window.width,
        height = window.height,
        "opening window"
    );

    let options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        initial_window_size: Some(egui::vec2(window.width as f32, window.height as f32)),
        ..Default::default()
    };

    eframe::run_native(window.title, options, Box::new(move |cc| Box::new(build(cc))))
        .map_err(|err| DemoError::Window(err.to_string()))
}
