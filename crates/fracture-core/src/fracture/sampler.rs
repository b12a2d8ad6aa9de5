//! Column-wise split-and-rotate pixel remapping.
//!
//! # Algorithm
//!
//! Columns are visited left to right, rows top to bottom. Each row either
//! copies its own source pixel (the unrotated branch) or samples the source
//! at a rotated and offset position (the rotated branch). A cursor `next`
//! decides between the two:
//!
//! ```text
//! y <= next  ->  out[x][y] = src(x, y)        next -= y
//! y >  next  ->  out[x][y] = src(x', y')      next = H - y' - y
//! ```
//!
//! where `(x', y')` is `(x, y)` rotated about the image center, with
//! `|x - y|` added to `x'`. Coordinates outside `[0, W]` / `[0, H]` fall
//! back to `x` / `y`. `next` starts at `H` and is never reset, so it drifts
//! from one column into the next.
//!
//! The rotation angle is drawn once up front and again for every column
//! where `x % ((W + x) / 2) == 0`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::angle::AngleSource;
use crate::grid::PixelGrid;

/// How the integer angle drawn from an [`AngleSource`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Feed the integer straight into `sin`/`cos`. This is the classic
    /// fracture look.
    #[default]
    Radians,
    /// Convert the integer from degrees first.
    Degrees,
}

impl AngleUnit {
    #[inline]
    fn to_radians(self, angle: i32) -> f64 {
        match self {
            AngleUnit::Radians => angle as f64,
            AngleUnit::Degrees => (angle as f64).to_radians(),
        }
    }
}

/// Options for [`fracture_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FractureConfig {
    /// Interpretation of each drawn angle. Defaults to radians.
    pub angle_unit: AngleUnit,
}

/// Which sampling mode produced a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    Unrotated,
    Rotated,
}

/// Fracture an image with the default configuration.
///
/// `sample(x, y)` must tolerate `x == width` and `y == height`: the range
/// check is inclusive at the upper end, so one extra column and row can be
/// read.
pub fn fracture<P, F, A>(width: usize, height: usize, sample: F, angles: A) -> PixelGrid<P>
where
    F: FnMut(i64, i64) -> P,
    A: AngleSource,
{
    fracture_with(&FractureConfig::default(), width, height, sample, angles)
}

/// Fracture an image with an explicit configuration.
///
/// The result has exactly `width` columns of `height` rows.
pub fn fracture_with<P, F, A>(
    config: &FractureConfig,
    width: usize,
    height: usize,
    sample: F,
    angles: A,
) -> PixelGrid<P>
where
    F: FnMut(i64, i64) -> P,
    A: AngleSource,
{
    fracture_traced(config, width, height, sample, angles, |_, _, _| {})
}

/// Fracture a decoded image. Reads that fall off the grid yield
/// [`TRANSPARENT`](crate::grid::TRANSPARENT).
pub fn fracture_grid<A: AngleSource>(source: &PixelGrid, angles: A) -> PixelGrid {
    fracture_grid_with(&FractureConfig::default(), source, angles)
}

/// Fracture a decoded image with an explicit configuration.
///
/// # Arguments
///
/// * `config` - Angle interpretation
/// * `source` - Decoded source image
/// * `angles` - Source of rotation angles, drawn once up front and on every
///   re-draw column
///
/// # Returns
///
/// A grid with the same dimensions as `source`.
pub fn fracture_grid_with<A: AngleSource>(
    config: &FractureConfig,
    source: &PixelGrid,
    angles: A,
) -> PixelGrid {
    fracture_with(
        config,
        source.width(),
        source.height(),
        |x, y| source.sample(x, y),
        angles,
    )
}

/// Same as [`fracture_with`], reporting the branch taken for every pixel.
pub(crate) fn fracture_traced<P, F, A, T>(
    config: &FractureConfig,
    width: usize,
    height: usize,
    mut sample: F,
    mut angles: A,
    mut trace: T,
) -> PixelGrid<P>
where
    F: FnMut(i64, i64) -> P,
    A: AngleSource,
    T: FnMut(usize, usize, Branch),
{
    let w = width as i64;
    let h = height as i64;

    // Integer halves, then widened.
    let cx = (w / 2) as f64;
    let cy = (h / 2) as f64;

    let mut angle = angles.next_angle();
    let mut next = h;

    let mut columns = Vec::with_capacity(width);

    for x in 0..w {
        if redraws_angle(w, x) {
            angle = angles.next_angle();
            debug!("column {}: angle redrawn to {}", x, angle);
        }

        let (sin, cos) = config.angle_unit.to_radians(angle).sin_cos();
        let mut column = Vec::with_capacity(height);

        for y in 0..h {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;

            let rot_x = dx * cos - dy * sin;
            let rot_y = dx * sin + dy * cos;

            // `as` truncates toward zero.
            let mut x_pos = (rot_x + cx) as i64 + (x - y).abs();
            if !within(x_pos, w) {
                x_pos = x;
            }

            if y <= next {
                column.push(sample(x, y));
                next -= y;
                trace(x as usize, y as usize, Branch::Unrotated);
            } else {
                let mut y_pos = (rot_y + cy) as i64;
                if !within(y_pos, h) {
                    y_pos = y;
                }

                column.push(sample(x_pos, y_pos));
                next = h - y_pos - y;
                trace(x as usize, y as usize, Branch::Rotated);
            }
        }

        columns.push(column);
    }

    PixelGrid::from_parts(columns, height)
}

/// Re-draw test for column `x` of a `width`-wide image.
///
/// The divisor is zero only for `width == 1, x == 0`, which counts as a
/// re-draw since zero is a multiple of everything.
#[inline]
pub(crate) fn redraws_angle(width: i64, x: i64) -> bool {
    match (width + x) / 2 {
        0 => true,
        divisor => x % divisor == 0,
    }
}

/// Inclusive range check `[0, bound]`.
#[inline]
fn within(pos: i64, bound: i64) -> bool {
    (0..=bound).contains(&pos)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
