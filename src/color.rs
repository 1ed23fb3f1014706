use eframe::egui::Color32;

// Simple 8-bit RGB color; the demos never need alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const DARK_RED: Rgb = Rgb::new(139, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const DARK_GREEN: Rgb = Rgb::new(0, 100, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const DARK_BLUE: Rgb = Rgb::new(0, 0, 139);
    pub const PURPLE: Rgb = Rgb::new(160, 32, 240);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const DARK_ORANGE: Rgb = Rgb::new(255, 140, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GOLD: Rgb = Rgb::new(255, 215, 0);
    pub const PINK: Rgb = Rgb::new(255, 192, 203);
    pub const HOT_PINK: Rgb = Rgb::new(255, 105, 180);
    pub const LIGHT_BLUE: Rgb = Rgb::new(173, 216, 230);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Builds a color from unit-interval channels, rounding to the nearest step.
    pub fn from_unit([r, g, b]: [f32; 3]) -> Rgb {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color32 {
    fn from(color: Rgb) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

/// Six-sector HSV conversion. The hue is cyclic and taken modulo 1.
pub fn hsv_to_unit_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    if s == 0.0 {
        return [v, v, v];
    }
    let h = h.rem_euclid(1.0);
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    // rem_euclid can round up to exactly 1.0, which lands in sector 6
    match sector as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// HSV to 8-bit RGB with saturation and value clamped into the unit interval.
/// Channels are truncated, not rounded.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let [r, g, b] = hsv_to_unit_rgb(h, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
    Rgb::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
