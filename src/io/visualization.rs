//! Frame capture and GIF generation for assembly visualization

use crate::algorithm::scheduler::Placement;
use crate::io::error::{AssemblyError, Result};
use crate::spatial::{Canvas, Position};
use crate::tiles::Patch;
use crate::tiles::bands::channel_means;
use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

/// Color drawn for cells that have not received a patch yet
const EMPTY_COLOR: [u8; 4] = [24, 24, 24, 255];

/// Mean color of a patch as an opaque RGBA value
///
/// Single-channel content is treated as grayscale.
pub fn mean_color(patch: &Patch<u8>) -> [u8; 4] {
    let means = channel_means(patch.content().view());
    let channel = |c: usize| means.get(c).or_else(|| means.first()).copied();
    let to_byte = |value: Option<f64>| value.unwrap_or(0.0).round().clamp(0.0, 255.0) as u8;
    [
        to_byte(channel(0)),
        to_byte(channel(1)),
        to_byte(channel(2)),
        255,
    ]
}

/// Ordered placement events with the color each patch is drawn in
///
/// Each placed patch is reduced to a block of its mean color, so frames stay
/// small regardless of the source resolution.
pub struct AssemblyCapture {
    events: Vec<(Position, [u8; 4])>,
    grid: (usize, usize),
    cell_pixels: u32,
}

impl AssemblyCapture {
    /// Build a capture from a finished canvas and its placement history
    pub fn from_history(
        canvas: &Canvas<Patch<u8>>,
        history: &[Placement],
        cell_pixels: u32,
    ) -> Self {
        let events = history
            .iter()
            .filter_map(|placement| {
                canvas
                    .get(placement.position)
                    .ok()
                    .flatten()
                    .map(|patch| (placement.position, mean_color(patch)))
            })
            .collect();

        Self {
            events,
            grid: canvas.size(),
            cell_pixels: cell_pixels.max(1),
        }
    }

    /// Number of captured placement events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Export the captured placements as a GIF with automatic frame skipping
    ///
    /// If the requested delay is shorter than viewers support, only every
    /// n-th placement produces a frame so the apparent speed is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;

        if self.events.is_empty() {
            return Err(AssemblyError::InvalidSourceData {
                reason: "No placements captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AssemblyError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AssemblyError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AssemblyError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let (width, height) = self.grid;
        let mut img = RgbaImage::from_pixel(
            width as u32 * self.cell_pixels,
            height as u32 * self.cell_pixels,
            Rgba(EMPTY_COLOR),
        );
        let mut frames = vec![Self::frame(&img, delay_ms)];

        for (count, (position, color)) in self.events.iter().enumerate() {
            self.paint_cell(&mut img, *position, *color);
            if (count + 1) % skip_factor == 0 {
                frames.push(Self::frame(&img, delay_ms));
            }
        }

        if self.events.len() % skip_factor != 0 {
            frames.push(Self::frame(&img, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(Self::frame(&img, delay_ms * 25));
        frames
    }

    fn paint_cell(&self, img: &mut RgbaImage, position: Position, color: [u8; 4]) {
        let origin_x = position.x as u32 * self.cell_pixels;
        let origin_y = position.y as u32 * self.cell_pixels;
        for dy in 0..self.cell_pixels {
            for dx in 0..self.cell_pixels {
                if let Some(pixel) = img.get_pixel_mut_checked(origin_x + dx, origin_y + dy) {
                    *pixel = Rgba(color);
                }
            }
        }
    }

    fn frame(img: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            img.clone(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
