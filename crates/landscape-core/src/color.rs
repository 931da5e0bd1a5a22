use std::fmt;

/// 8-bit RGB color, as written into `fill` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        match digits.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            )),
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                Some(Self::new(nibble(0).ok()?, nibble(1).ok()?, nibble(2).ok()?))
            }
            _ => None,
        }
    }

    /// Lightens by `k` steps of 1/0.7, lifting near-black channels to 30
    /// first so that dark colors still brighten.
    pub fn brighter(self, k: f32) -> Self {
        let factor = 0.7_f32.powf(k);
        let floor = 30.0_f32;
        let (mut r, mut g, mut b) = (self.r as f32, self.g as f32, self.b as f32);
        if r == 0.0 && g == 0.0 && b == 0.0 {
            return Self::new(30, 30, 30);
        }
        for c in [&mut r, &mut g, &mut b] {
            if *c > 0.0 && *c < floor {
                *c = floor;
            }
        }
        let lift = |c: f32| (c / factor).min(255.0) as u8;
        Self::new(lift(r), lift(g), lift(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
