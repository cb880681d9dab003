//! PNG export compositing every placed patch at tile resolution

use crate::io::error::{AssemblyError, Result};
use crate::spatial::Canvas;
use crate::tiles::Patch;
use image::{Rgb, RgbImage};
use std::path::Path;

/// RGB color of one pixel of oriented patch data
///
/// Single-channel content is treated as grayscale.
fn pixel_at(data: &ndarray::Array3<u8>, row: usize, col: usize) -> Rgb<u8> {
    let channel = |c: usize| data.get((row, col, c)).copied();
    match (channel(0), channel(1), channel(2)) {
        (Some(r), Some(g), Some(b)) => Rgb([r, g, b]),
        (Some(gray), _, _) => Rgb([gray, gray, gray]),
        _ => Rgb([0, 0, 0]),
    }
}

/// Composite the canvas into one image, `tile_size` pixels per cell
///
/// Each filled slot is drawn with its oriented content; cells without a
/// patch stay black.
///
/// # Errors
///
/// Returns an error if:
/// - No patches have been placed on the canvas
/// - A placed patch is not `tile_size` pixels square
pub fn render_canvas(canvas: &Canvas<Patch<u8>>, tile_size: usize) -> Result<RgbImage> {
    if canvas.filled_count() == 0 {
        return Err(AssemblyError::InvalidSourceData {
            reason: "No patches have been placed on the canvas".to_string(),
        });
    }

    let (width, height) = canvas.size();
    let mut img = RgbImage::new((width * tile_size) as u32, (height * tile_size) as u32);

    for (position, patch) in canvas.placed() {
        let data = patch.data();
        let (rows, cols, _) = data.dim();
        if rows != tile_size || cols != tile_size {
            return Err(AssemblyError::InvalidSourceData {
                reason: format!(
                    "Patch at {position} is {cols}x{rows}, expected {tile_size}x{tile_size}"
                ),
            });
        }

        let origin_x = position.x as usize * tile_size;
        let origin_y = position.y as usize * tile_size;
        for row in 0..rows {
            for col in 0..cols {
                img.put_pixel(
                    (origin_x + col) as u32,
                    (origin_y + row) as u32,
                    pixel_at(&data, row, col),
                );
            }
        }
    }

    Ok(img)
}

/// Render the canvas and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_canvas`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(
    canvas: &Canvas<Patch<u8>>,
    tile_size: usize,
    output_path: &Path,
) -> Result<()> {
    let img = render_canvas(canvas, tile_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AssemblyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AssemblyError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
