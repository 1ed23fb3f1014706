use eframe::egui;
use turtle_art::config::{DOODLE_WINDOW, WindowConfig};
use turtle_art::doodle::{self, REVEAL_BATCH, Reveal};
use turtle_art::render::{self, Viewport};
use turtle_art::{DemoError, DisplayList};

struct TurtleDoodle {
    window: WindowConfig,
    drawing: DisplayList,
    reveal: Reveal,
}

impl TurtleDoodle {
    fn new(_cc: &eframe::CreationContext, window: WindowConfig) -> Self {
        let mut drawing = DisplayList::new();
        let segments = doodle::draw_doodle(&mut drawing);
        tracing::info!(target: "doodle", segments, "doodle prepared");
        Self {
            window,
            drawing,
            reveal: Reveal::new(segments, REVEAL_BATCH),
        }
    }
}

impl eframe::App for TurtleDoodle {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.reveal.is_complete() {
            self.reveal.advance();
            if self.reveal.is_complete() {
                tracing::info!(target: "doodle", "doodle complete");
            } else {
                ctx.request_repaint();
            }
        }

        let shown = &self.drawing.primitives()[..self.reveal.shown()];
        render::show_canvas(ctx, self.window.background, Viewport::Centered, shown);
    }
}

fn main() -> Result<(), DemoError> {
    turtle_art::init_logging();

    let window = DOODLE_WINDOW;
    turtle_art::window::launch(&window, move |cc| TurtleDoodle::new(cc, window)).inspect_err(
        |err| tracing::error!(target: "doodle", %err, "turtle doodle could not run"),
    )
}
