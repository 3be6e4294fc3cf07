use std::fmt::{self, Display};

/// Position on the six-step hue cycle.
///
/// [The spec](https://www.dangermouse.net/esoteric/piet.html) orders the cycle as
///
/// > red -> yellow -> green -> cyan -> blue -> magenta -> red
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Red = 0,
    Yellow = 1,
    Green = 2,
    Cyan = 3,
    Blue = 4,
    Magenta = 5,
}

/// Position on the three-step lightness cycle (light -> normal -> dark).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lightness {
    Light = 0,
    Normal = 1,
    Dark = 2,
}

/// A single cell of a Piet program.
///
/// The 18 colored codels form the 6x3 (hue, lightness) matrix; white and black
/// stand outside both cycles and never belong to a colour block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Codel {
    Color(Hue, Lightness),
    White, //#FFFFFF
    Black, //#000000
}

impl Codel {
    /// Classifies a raw RGB triple.
    ///
    /// Any triple outside the 20 canonical Piet colors behaves as a wall, so
    /// anti-aliased or otherwise off-palette images still load and run.
    pub fn classify(r: u8, g: u8, b: u8) -> Self {
        use Hue::*;
        use Lightness::*;
        match (r, g, b) {
            (0xFF, 0xFF, 0xFF) => Codel::White,
            (0x00, 0x00, 0x00) => Codel::Black,

            (0xFF, 0xC0, 0xC0) => Codel::Color(Red, Light),
            (0xFF, 0x00, 0x00) => Codel::Color(Red, Normal),
            (0xC0, 0x00, 0x00) => Codel::Color(Red, Dark),

            (0xFF, 0xFF, 0xC0) => Codel::Color(Yellow, Light),
            (0xFF, 0xFF, 0x00) => Codel::Color(Yellow, Normal),
            (0xC0, 0xC0, 0x00) => Codel::Color(Yellow, Dark),

            (0xC0, 0xFF, 0xC0) => Codel::Color(Green, Light),
            (0x00, 0xFF, 0x00) => Codel::Color(Green, Normal),
            (0x00, 0xC0, 0x00) => Codel::Color(Green, Dark),

            (0xC0, 0xFF, 0xFF) => Codel::Color(Cyan, Light),
            (0x00, 0xFF, 0xFF) => Codel::Color(Cyan, Normal),
            (0x00, 0xC0, 0xC0) => Codel::Color(Cyan, Dark),

            (0xC0, 0xC0, 0xFF) => Codel::Color(Blue, Light),
            (0x00, 0x00, 0xFF) => Codel::Color(Blue, Normal),
            (0x00, 0x00, 0xC0) => Codel::Color(Blue, Dark),

            (0xFF, 0xC0, 0xFF) => Codel::Color(Magenta, Light),
            (0xFF, 0x00, 0xFF) => Codel::Color(Magenta, Normal),
            (0xC0, 0x00, 0xC0) => Codel::Color(Magenta, Dark),

            _ => Codel::Black,
        }
    }

    pub fn is_black(&self) -> bool {
        self == &Codel::Black
    }

    pub fn is_white(&self) -> bool {
        self == &Codel::White
    }

    /// The (hue, lightness) coordinates of a colored codel.
    pub fn hue_lightness(&self) -> Option<(Hue, Lightness)> {
        match self {
            Codel::Color(h, l) => Some((*h, *l)),
            _ => None,
        }
    }

    /// Number of steps along the hue and lightness cycles from `from` to `to`.
    ///
    /// `None` if either codel is white or black; those transitions carry no
    /// command.
    pub fn cycle_steps(from: &Codel, to: &Codel) -> Option<(u8, u8)> {
        let (h0, l0) = from.hue_lightness()?;
        let (h1, l1) = to.hue_lightness()?;
        let dh = (h1 as i32 - h0 as i32).rem_euclid(6);
        let dl = (l1 as i32 - l0 as i32).rem_euclid(3);
        Some((dh as u8, dl as u8))
    }

    fn rgb(&self) -> (u8, u8, u8) {
        use Hue::*;
        match self {
            Codel::White => (0xFF, 0xFF, 0xFF),
            Codel::Black => (0x00, 0x00, 0x00),
            Codel::Color(h, l) => {
                let (hi, lo) = match l {
                    Lightness::Light => (0xFF, 0xC0),
                    Lightness::Normal => (0xFF, 0x00),
                    Lightness::Dark => (0xC0, 0x00),
                };
                match h {
                    Red => (hi, lo, lo),
                    Yellow => (hi, hi, lo),
                    Green => (lo, hi, lo),
                    Cyan => (lo, hi, hi),
                    Blue => (lo, lo, hi),
                    Magenta => (hi, lo, hi),
                }
            }
        }
    }
}

impl Display for Codel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        //by the way, `38;2` can be used to change the foreground color
        write!(f, "\u{001B}[48;2;{};{};{}m　\u{001B}[0m", r, g, b)
    }
}
