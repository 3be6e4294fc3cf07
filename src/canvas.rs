use std::error::Error;
use std::fmt::{self, Display};

use super::codel::Codel;
use super::dp::DP;

/// The classified pixel grid of a Piet program.
///
/// Row-major, addressed `(x, y)` with the origin at the top-left codel.
/// Immutable for the lifetime of the interpreter.
pub struct Canvas {
    codels: Vec<Codel>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Builds a canvas from a row-major buffer of RGB triples.
    ///
    /// This is the core entry point; file decoding is the driver's business
    /// (see [`Canvas::from_file`]).
    pub fn new(
        pixels: &[(u8, u8, u8)],
        width: usize,
        height: usize,
    ) -> Result<Self, Box<dyn Error>> {
        if width == 0 || height == 0 {
            return Err("the image has zero dimensions".into());
        }
        if pixels.len() != width * height {
            return Err(format!(
                "the pixel buffer holds {} entries but the dimensions are {}x{}",
                pixels.len(),
                width,
                height,
            )
            .into());
        }
        let codels = pixels
            .iter()
            .map(|&(r, g, b)| Codel::classify(r, g, b))
            .collect();
        Ok(Self {
            codels,
            width,
            height,
        })
    }

    /// Decodes an image file and downsamples it to one pixel per codel.
    ///
    /// `codel_size` is the caller-supplied edge length of one codel in image
    /// pixels; the top-left pixel of each cell is taken as its color. The
    /// image dimensions must be divisible by it.
    pub fn from_file(path: &str, codel_size: usize) -> Result<Self, Box<dyn Error>> {
        if codel_size == 0 {
            return Err("the codel size must be non-zero".into());
        }
        let img = image::open(path)?.into_rgb8();
        let (w, h) = (img.width() as usize, img.height() as usize);
        if w == 0 || h == 0 {
            return Err("the image has zero dimensions".into());
        }
        if w % codel_size != 0 || h % codel_size != 0 {
            return Err(format!(
                "the image dimensions {}x{} are not divisible by the codel size {}",
                w, h, codel_size,
            )
            .into());
        }

        let width = w / codel_size;
        let height = h / codel_size;
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let p = img.get_pixel((x * codel_size) as u32, (y * codel_size) as u32);
                pixels.push((p[0], p[1], p[2]));
            }
        }
        Canvas::new(&pixels, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The codel at `(x, y)`. Out-of-range coordinates return `None`.
    pub fn at(&self, x: usize, y: usize) -> Option<Codel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.codels[y * self.width + x])
    }

    pub fn codel_at(&self, pos: (usize, usize)) -> Option<Codel> {
        self.at(pos.0, pos.1)
    }

    /// The coordinate one codel away from `pos` along `dp`, or `None` at the
    /// edge of the program graphic.
    pub fn neighbor(&self, pos: (usize, usize), dp: &DP) -> Option<(usize, usize)> {
        let (dx, dy) = dp.displacement();
        let x = pos.0.checked_add_signed(dx)?;
        let y = pos.1.checked_add_signed(dy)?;
        (x < self.width && y < self.height).then_some((x, y))
    }
}

impl Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.codels[y * self.width + x])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
