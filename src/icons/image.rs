use anyhow::Result;
use tray_icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl IconImage {
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            anyhow::bail!(
                "RGBA buffer is {} bytes, expected {} for {}x{}",
                rgba.len(),
                expected,
                width,
                height
            );
        }
        Ok(Self { width, height, rgba })
    }

    /// Fully transparent square canvas.
    pub fn blank(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            rgba: vec![0; size as usize * size as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.rgba.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Flips the color channels; alpha is kept so the silhouette survives.
    pub fn invert(&mut self) {
        for pixel in self.rgba.chunks_exact_mut(4) {
            pixel[0] = 255 - pixel[0];
            pixel[1] = 255 - pixel[1];
            pixel[2] = 255 - pixel[2];
        }
    }

    pub fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: i32, color: [u8; 4]) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let dx = x - center_x;
                let dy = y - center_y;
                if dx * dx + dy * dy <= radius * radius {
                    let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
                    self.rgba[idx..idx + 4].copy_from_slice(&color);
                }
            }
        }
    }

    pub fn to_tray_icon(&self) -> Result<Icon> {
        Ok(Icon::from_rgba(self.rgba.clone(), self.width, self.height)?)
    }
}

/// Decides whether an image is a dark glyph meant for a light menu bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackClassifier {
    /// Highest channel value still counted as black.
    pub threshold: u8,
    /// Share of visible pixels that must be black.
    pub ratio: f32,
}

impl BlackClassifier {
    pub fn new(threshold: u8, ratio: f32) -> Self {
        Self { threshold, ratio }
    }

    pub fn is_black(&self, image: &IconImage) -> bool {
        let mut visible = 0usize;
        let mut black = 0usize;

        for [r, g, b, a] in image.pixels() {
            if a == 0 {
                continue;
            }
            visible += 1;
            if r.max(g).max(b) <= self.threshold {
                black += 1;
            }
        }

        if visible == 0 {
            return false;
        }
        black as f32 / visible as f32 >= self.ratio
    }
}

impl Default for BlackClassifier {
    fn default() -> Self {
        Self::new(48, 0.75)
    }
}
