use eframe::egui;
use turtle_art::config::{GALLERY_WINDOW, WindowConfig};
use turtle_art::gallery;
use turtle_art::render::{self, Viewport};
use turtle_art::{DemoError, DisplayList};

struct ShapeGallery {
    window: WindowConfig,
    shapes: DisplayList,
}

impl ShapeGallery {
    fn new(_cc: &eframe::CreationContext, window: WindowConfig) -> Self {
        let mut shapes = DisplayList::new();
        gallery::draw_gallery(&mut shapes);
        tracing::info!(target: "gallery", primitives = shapes.len(), "gallery prepared");
        Self { window, shapes }
    }
}

impl eframe::App for ShapeGallery {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render::show_canvas(
            ctx,
            self.window.background,
            Viewport::TopLeft,
            self.shapes.primitives(),
        );
    }
}

fn main() -> Result<(), DemoError> {
    turtle_art::init_logging();

    let window = GALLERY_WINDOW;
    turtle_art::window::launch(&window, move |cc| ShapeGallery::new(cc, window)).inspect_err(
        |err| tracing::error!(target: "gallery", %err, "shape gallery could not run"),
    )
}
