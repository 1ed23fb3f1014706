use std::time::Instant;

use eframe::egui;
use turtle_art::config::{ART_WINDOW, WindowConfig};
use turtle_art::render::{self, Viewport};
use turtle_art::{ArtConfig, Artwork, DemoError, FrameDriver};

struct ParticleArt {
    window: WindowConfig,
    driver: FrameDriver,
}

impl ParticleArt {
    fn new(_cc: &eframe::CreationContext, window: WindowConfig) -> Self {
        let config = ArtConfig::default();
        tracing::info!(
            target: "art",
            particles = config.particle_count,
            fps = config.fps,
            "starting animation"
        );
        Self {
            window,
            driver: FrameDriver::new(Artwork::new(config), Instant::now()),
        }
    }
}

impl eframe::App for ParticleArt {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background = self.window.background;
        let now = Instant::now();
        if let Some(frame) = self.driver.poll(now) {
            render::show_canvas(ctx, background, Viewport::Centered, frame.primitives());
            ctx.request_repaint_after(self.driver.until_next(now));
        }
    }

    fn on_close_event(&mut self) -> bool {
        self.driver.stop();
        true
    }
}

fn main() -> Result<(), DemoError> {
    turtle_art::init_logging();

    let window = ART_WINDOW;
    turtle_art::window::launch(&window, move |cc| ParticleArt::new(cc, window)).inspect_err(
        |err| tracing::error!(target: "art", %err, "particle art could not run"),
    )
}
