//! Raster image rendering.
//!
//! Draws a tree onto an RGB canvas sized from its shape metrics: one
//! [`h_spacing`](RasterParams::h_spacing)-wide slot per leaf and one
//! [`v_spacing`](RasterParams::v_spacing)-tall band per split level, plus a
//! bottom margin for the deepest leaf labels. Split conditions print above
//! each fork, red lines connect a fork to its children, and the true branch
//! is drawn on the right.

use std::path::Path;

use bon::Builder;
use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::dataset::TableSchema;
use crate::repr::DecisionNode;

use super::font::{self, GLYPH_HEIGHT};
use super::layout::{depth, width};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const BRANCH: Rgb<u8> = Rgb([255, 0, 0]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Errors raised while exporting a rendering to disk.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Encoding or writing the image file failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Geometry of a raster rendering.
#[derive(Clone, Debug, Builder)]
pub struct RasterParams {
    /// Horizontal pixels allotted to each leaf slot.
    #[builder(default = 100)]
    pub h_spacing: u32,
    /// Vertical pixels between a fork and its children.
    #[builder(default = 100)]
    pub v_spacing: u32,
    /// Extra canvas height below the deepest fork, for leaf labels.
    #[builder(default = 120)]
    pub margin: u32,
}

impl Default for RasterParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Render `node` onto a fresh canvas.
///
/// Canvas dimensions are `width(node) · h_spacing` by
/// `depth(node) · v_spacing + margin`.
pub fn draw_tree(node: &DecisionNode, schema: &TableSchema, params: &RasterParams) -> RgbImage {
    let canvas_w = (width(node) as u32 * params.h_spacing).max(1);
    let canvas_h = (depth(node) as u32 * params.v_spacing + params.margin).max(1);

    let mut image = RgbImage::from_pixel(canvas_w, canvas_h, BACKGROUND);
    draw_node(&mut image, node, schema, params, (canvas_w / 2) as i32, 20);
    image
}

/// Render `node` and write the image to `path`.
///
/// The output format follows the file extension (`.png`, `.jpg`, ...).
pub fn save_tree(
    node: &DecisionNode,
    schema: &TableSchema,
    params: &RasterParams,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let image = draw_tree(node, schema, params);
    image.save(path)?;
    Ok(())
}

fn draw_node(
    image: &mut RgbImage,
    node: &DecisionNode,
    schema: &TableSchema,
    params: &RasterParams,
    x: i32,
    y: i32,
) {
    match node.split_info() {
        Some((column, value, true_branch, false_branch)) => {
            // Horizontal room claimed by each child, in leaf slots.
            let w_false = (width(false_branch) as u32 * params.h_spacing) as i32;
            let w_true = (width(true_branch) as u32 * params.h_spacing) as i32;

            let left = x - (w_false + w_true) / 2;
            let right = x + (w_false + w_true) / 2;
            let false_x = left + w_false / 2;
            let true_x = right - w_true / 2;
            let child_y = y + params.v_spacing as i32;

            let condition = format!("{}:{}?", schema.attribute_name(column), value);
            font::draw_text(image, &condition, x - 20, y - 10, INK);

            draw_line(image, x, y, false_x, child_y, BRANCH);
            draw_line(image, x, y, true_x, child_y, BRANCH);

            draw_node(image, false_branch, schema, params, false_x, child_y);
            draw_node(image, true_branch, schema, params, true_x, child_y);
        }
        None => {
            let counts = node.leaf_counts().expect("non-split node is a leaf");
            let line_height = (GLYPH_HEIGHT + 2) as i32;
            for (i, (label, count)) in counts.iter().enumerate() {
                let text = format!("{label}:{count}");
                font::draw_text(image, &text, x - 20, y + i as i32 * line_height, INK);
            }
        }
    }
}

/// Bresenham line, clipped to the canvas.
fn draw_line(image: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;

    loop {
        font::put_pixel_clipped(image, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }
}
