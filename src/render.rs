//! Stateless renderers for a finished module matrix
//!
//! Nothing here feeds back into the layout; the defaults come from
//! [`crate::config`], the `_with` variants take explicit settings.

use image::{GrayImage, Luma};

use crate::config;
use crate::models::ModuleMatrix;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Text rendering with the configured characters
pub fn render_text(matrix: &ModuleMatrix) -> String {
    render_text_with(matrix, config::text_dark(), config::text_light())
}

/// One line per row, one character per module
pub fn render_text_with(matrix: &ModuleMatrix, dark: char, light: char) -> String {
    let width = matrix.width();
    let mut out = String::with_capacity(width * (width + 1));
    for row in matrix.rows() {
        out.extend(row.into_iter().map(|d| if d { dark } else { light }));
        out.push('\n');
    }
    out
}

/// Grayscale image with the configured scale and quiet zone
pub fn render_image(matrix: &ModuleMatrix) -> GrayImage {
    render_image_with(matrix, config::render_scale(), config::quiet_zone())
}

/// Grayscale image, `scale` pixels per module, `quiet_zone` light modules of
/// border on every side
pub fn render_image_with(matrix: &ModuleMatrix, scale: u32, quiet_zone: u32) -> GrayImage {
    let scale = scale.max(1);
    let modules = matrix.width() as u32 + 2 * quiet_zone;
    let side = modules * scale;
    GrayImage::from_fn(side, side, |px, py| {
        let (mx, my) = (px / scale, py / scale);
        if mx < quiet_zone || my < quiet_zone {
            return LIGHT;
        }
        let (x, y) = ((mx - quiet_zone) as usize, (my - quiet_zone) as usize);
        if matrix.get_xy(x, y) { DARK } else { LIGHT }
    })
}
