pub mod canvas;
pub mod color;
pub mod config;
pub mod doodle;
pub mod error;
pub mod gallery;
pub mod particle;
pub mod render;
pub mod scene;
pub mod sim;
pub mod turtle;
pub mod window;

pub use canvas::{Canvas, DisplayList, Primitive};
pub use color::Rgb;
pub use config::{ArtConfig, WindowConfig};
pub use error::{DemoError, Result};
pub use particle::{Attractor, Particle};
pub use render::Viewport;
pub use sim::{Artwork, DriverState, FrameDriver, SimState};

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` level. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
