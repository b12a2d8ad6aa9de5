//! Column-major pixel grid shared by the decoder, the sampler and the encoder.
//!
//! Grids are indexed `[x][y]`: the outer vector holds columns, each column
//! holds `height` pixels in row order. Every column has the same length.

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Errors raised when building a grid from raw columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A column's length differs from the first column's.
    #[error("Jagged grid: column {column} has {actual} rows, expected {expected}")]
    Jagged {
        column: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular, column-major collection of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<P = Rgba<u8>> {
    columns: Vec<Vec<P>>,
    height: usize,
}

impl<P> PixelGrid<P> {
    /// Build a grid from columns, rejecting jagged input.
    ///
    /// An empty vector yields a grid of width and height zero.
    pub fn from_columns(columns: Vec<Vec<P>>) -> Result<Self, GridError> {
        let height = columns.first().map_or(0, Vec::len);
        if let Some((column, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, col)| col.len() != height)
        {
            return Err(GridError::Jagged {
                column,
                expected: height,
                actual: col.len(),
            });
        }
        Ok(Self { columns, height })
    }

    /// Caller guarantees every column holds `height` pixels.
    pub(crate) fn from_parts(columns: Vec<Vec<P>>, height: usize) -> Self {
        debug_assert!(columns.iter().all(|col| col.len() == height));
        let height = if columns.is_empty() { 0 } else { height };
        Self { columns, height }
    }

    /// Build a `width x height` grid by calling `f(x, y)` column by column.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> P) -> Self {
        let columns = (0..width)
            .map(|x| (0..height).map(|y| f(x, y)).collect())
            .collect();
        Self::from_parts(columns, height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows in every column.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height == 0
    }

    /// Pixel at column `x`, row `y`, or `None` off the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.columns.get(x).and_then(|col| col.get(y))
    }

    /// Columns in left-to-right order, each `height` pixels top to bottom.
    pub fn columns(&self) -> &[Vec<P>] {
        &self.columns
    }

    /// Consume the grid, returning its columns.
    pub fn into_columns(self) -> Vec<Vec<P>> {
        self.columns
    }
}

impl<P: Copy> PixelGrid<P> {
    /// Read a pixel at signed coordinates, returning `outside` for
    /// coordinates that fall off the grid.
    #[inline]
    pub fn sample_or(&self, x: i64, y: i64, outside: P) -> P {
        if x < 0 || y < 0 {
            return outside;
        }
        self.get(x as usize, y as usize).copied().unwrap_or(outside)
    }
}

/// Color returned for reads outside an RGBA grid.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

impl PixelGrid<Rgba<u8>> {
    /// Read a pixel at signed coordinates; outside reads are [`TRANSPARENT`].
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> Rgba<u8> {
        self.sample_or(x, y, TRANSPARENT)
    }

    /// Create a grid from a row-major RGBA image.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_fn(width as usize, height as usize, |x, y| {
            *img.get_pixel(x as u32, y as u32)
        })
    }

    /// Convert back to a row-major RGBA image for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height as u32, |x, y| {
            self.columns[x as usize][y as usize]
        })
    }
}
