use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Reads from a `"#RRGGBB"` / `"#RRGGBBAA"` string or a `[r, g, b]` / `[r, g, b, a]` list and
/// writes back as a four entry list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorInput", into = "[f64; 4]")]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` string (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Return `true` when every channel is finite and inside `[0, 1]`.
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a),
        ]
    }

    /// `#rrggbb` without alpha, for SVG `fill` attributes.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Accepted wire forms: a picker-style hex string or a channel list.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorInput {
    Hex(String),
    Channels(Vec<f64>),
}

impl TryFrom<ColorInput> for Rgba {
    type Error = String;

    fn try_from(input: ColorInput) -> Result<Self, Self::Error> {
        match input {
            ColorInput::Hex(s) => parse_hex(&s),
            ColorInput::Channels(v) => match *v.as_slice() {
                [r, g, b] => Ok(Self::rgb(r, g, b)),
                [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(format!(
                    "color channel list needs 3 or 4 entries, got {}",
                    v.len()
                )),
            },
        }
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

fn parse_hex(s: &str) -> Result<Rgba, String> {
    let digits = s.trim().trim_start_matches('#');
    let has_alpha = match digits.len() {
        6 => false,
        8 => true,
        _ => return Err(format!("expected #RRGGBB or #RRGGBBAA, got \"{s}\"")),
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("\"{s}\" is not a hex color"));
    }
    let packed = u32::from_str_radix(digits, 16).map_err(|e| format!("\"{s}\": {e}"))?;
    let packed = if has_alpha { packed } else { (packed << 8) | 0xff };

    let [r, g, b, a] = packed.to_be_bytes().map(|byte| f64::from(byte) / 255.0);
    Ok(Rgba::rgba(r, g, b, a))
}
