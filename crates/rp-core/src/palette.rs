use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Clamp a channel value into `0..=255` and truncate it.
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// How a display intensity in `0.0..=1.0` is turned into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Equal intensity on every channel.
    #[default]
    Grayscale,
    /// Blue-tinted water look.
    Tinted,
}

impl Palette {
    /// Map an intensity factor to a color.
    pub fn color(self, factor: f64) -> Rgb {
        match self {
            Self::Grayscale => {
                let v = channel(factor * 255.0);
                Rgb::new(v, v, v)
            }
            Self::Tinted => Rgb::new(
                channel(factor * 100.0),
                channel(factor * 100.0),
                channel(factor * 255.0),
            ),
        }
    }

    /// The other palette.
    pub fn toggled(self) -> Self {
        match self {
            Self::Grayscale => Self::Tinted,
            Self::Tinted => Self::Grayscale,
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale => write!(f, "grayscale"),
            Self::Tinted => write!(f, "tinted"),
        }
    }
}

impl std::str::FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grayscale" | "gray" | "grey" => Ok(Self::Grayscale),
            "tinted" | "blue" => Ok(Self::Tinted),
            other => Err(format!("unknown palette \"{other}\"")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_extremes() {
        assert_eq!(Palette::Grayscale.color(0.0), Rgb::new(0, 0, 0));
        assert_eq!(Palette::Grayscale.color(1.0), Rgb::new(255, 255, 255));
        assert_eq!(Palette::Grayscale.color(0.5), Rgb::new(127, 127, 127));
    }

    #[test]
    fn tinted_mapping() {
        assert_eq!(Palette::Tinted.color(1.0), Rgb::new(100, 100, 255));
        assert_eq!(Palette::Tinted.color(0.5), Rgb::new(50, 50, 127));
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(Palette::Grayscale.color(2.0), Rgb::new(255, 255, 255));
        assert_eq!(Palette::Tinted.color(-1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn parse_and_toggle() {
        assert_eq!("blue".parse::<Palette>().unwrap(), Palette::Tinted);
        assert_eq!("Grayscale".parse::<Palette>().unwrap(), Palette::Grayscale);
        assert!("sepia".parse::<Palette>().is_err());
        assert_eq!(Palette::Grayscale.toggled(), Palette::Tinted);
        assert_eq!(Palette::Tinted.toggled().toggled(), Palette::Tinted);
    }
}
