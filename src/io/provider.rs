//! Tile extraction from source images
//!
//! Cuts an image into square tiles on a fixed grid, discarding partial tiles
//! along the right and bottom edges, then turns the tiles into patches with
//! an explicit random generator so runs are reproducible.

use image::RgbImage;
use ndarray::Array3;
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::Path;

use crate::io::error::{AssemblyError, Result, invalid_parameter};
use crate::tiles::Patch;

/// Number of color channels in every extracted tile
pub const TILE_CHANNELS: usize = 3;

/// Square RGB tiles cut from one source image, in row-major order
pub struct TileProvider {
    tiles: Vec<Array3<u8>>,
    grid: (usize, usize),
    tile_size: usize,
}

impl TileProvider {
    /// Load an image file and cut it into tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or decoded
    /// - The tile size is zero or larger than the image
    pub fn from_path<P: AsRef<Path>>(path: P, tile_size: usize) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| AssemblyError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Self::from_image(&img.to_rgb8(), tile_size)
    }

    /// Cut an in-memory image into tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero or no complete tile fits
    pub fn from_image(image: &RgbImage, tile_size: usize) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"tile edge must be at least one pixel",
            ));
        }

        let cols = image.width() as usize / tile_size;
        let rows = image.height() as usize / tile_size;
        if cols == 0 || rows == 0 {
            return Err(AssemblyError::InvalidSourceData {
                reason: format!(
                    "{}x{} image is smaller than one {tile_size}px tile",
                    image.width(),
                    image.height()
                ),
            });
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        for tile_row in 0..rows {
            for tile_col in 0..cols {
                let origin_x = tile_col * tile_size;
                let origin_y = tile_row * tile_size;
                let tile = Array3::from_shape_fn(
                    (tile_size, tile_size, TILE_CHANNELS),
                    |(row, col, channel)| {
                        let pixel =
                            image.get_pixel((origin_x + col) as u32, (origin_y + row) as u32);
                        pixel.0.get(channel).copied().unwrap_or(0)
                    },
                );
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            grid: (cols, rows),
            tile_size,
        })
    }

    /// Source tile grid as `(columns, rows)`
    pub const fn grid_size(&self) -> (usize, usize) {
        self.grid
    }

    /// Tile edge length in pixels
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of extracted tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True if no tile was extracted
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Extracted tiles in row-major source order
    pub fn tiles(&self) -> &[Array3<u8>] {
        &self.tiles
    }

    /// Turn the tiles into a patch queue
    ///
    /// Orientations are drawn from `rng` first (one per tile, in source order),
    /// then the sequence is shuffled with the same generator.
    pub fn into_patches<R: Rng>(
        self,
        rng: &mut R,
        random_orientation: bool,
        shuffle: bool,
    ) -> Vec<Patch<u8>> {
        let mut patches: Vec<Patch<u8>> = self
            .tiles
            .into_iter()
            .map(|tile| {
                if random_orientation {
                    Patch::random(tile, rng)
                } else {
                    Patch::new(tile)
                }
            })
            .collect();

        if shuffle {
            patches.shuffle(rng);
        }

        patches
    }
}
