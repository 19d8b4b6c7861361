// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The sampling loop.  Maps an integral pixel grid onto a rectangle
//! of the complex plane by an affine step in each axis, evaluates a
//! color map at every sample point, and collects the results into a
//! flat, row-major grid of RGBA pixels.
//!
//! Both edges of the domain are sampled in each axis, so a requested
//! width x height render produces a (width + 1) x (height + 1) grid:
//! the requested size counts the steps between samples, not the
//! samples themselves.  Row 0 of the grid is the *bottom* edge of the
//! domain; rows are stored bottom-up, and callers who want the
//! conventional top-down raster orientation must flip rows when they
//! encode.

extern crate crossbeam;

use itertools::iproduct;
use num::Complex;

use color::Color;
use planes::ComplexRect;

/// The ways a render request can be rejected before any sampling
/// begins.  There are no partial failures: a render either returns a
/// complete grid or one of these.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum RenderError {
    /// The requested pixel size was zero in at least one dimension.
    #[fail(display = "image size must be at least 1x1, got {}x{}", width, height)]
    InvalidSize {
        /// The requested width, in pixels.
        width: usize,
        /// The requested height, in pixels.
        height: usize,
    },
    /// A threaded render was asked to run on zero threads.
    #[fail(display = "thread count must be at least 1")]
    InvalidThreadCount,
}

/// The rasterized output of a render: a width x height grid of RGBA
/// colors in a single flat allocation, row-major, with row 0 at the
/// bottom edge of the sampled domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// The number of columns in the grid.  One more than the width
    /// requested from the render call, per the fencepost sampling
    /// above.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows in the grid.  One more than the height
    /// requested from the render call.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The color sampled at the given column and row.  Row 0 is the
    /// bottom edge of the domain.
    pub fn get(&self, column: usize, row: usize) -> Color {
        self.pixels[row * self.width + column]
    }

    /// All pixels, row-major from the bottom row up.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Flattens the grid to an RGBA8 byte stream, the layout image
    /// encoders consume.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            raw.extend_from_slice(&pixel.channels());
        }
        raw
    }
}

fn check_size(width: usize, height: usize) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        Err(RenderError::InvalidSize { width, height })
    } else {
        Ok(())
    }
}

/// Renders the color map over the domain on a single thread.
///
/// `pixel_width` and `pixel_height` are the number of sampling steps
/// along each axis and must both be at least 1.  The step sizes are
/// `domain.width() / pixel_width` and `domain.height() /
/// pixel_height`; a degenerate domain gives a zero step and every
/// sample in that axis collapses onto the domain's edge, which is
/// legal.  The color map is evaluated once per grid point and nowhere
/// else, so two calls with the same arguments produce identical grids.
pub fn render<C>(
    colormap: C,
    pixel_width: usize,
    pixel_height: usize,
    domain: ComplexRect,
) -> Result<PixelGrid, RenderError>
where
    C: Fn(Complex<f64>) -> Color,
{
    check_size(pixel_width, pixel_height)?;
    let dx = domain.width() / (pixel_width as f64);
    let dy = domain.height() / (pixel_height as f64);
    let columns = pixel_width + 1;
    let rows = pixel_height + 1;
    let mut pixels = vec![Color::default(); columns * rows];
    for (row, column) in iproduct!(0..rows, 0..columns) {
        let point = Complex::new(
            domain.left() + (column as f64) * dx,
            domain.bottom() + (row as f64) * dy,
        );
        pixels[row * columns + column] = colormap(point);
    }
    Ok(PixelGrid {
        width: columns,
        height: rows,
        pixels,
    })
}

/// Renders the color map over the domain across the given number of
/// threads, producing a grid byte-identical to the single-threaded
/// render's.
///
/// Every sample depends only on its own coordinates, so the grid is
/// split into contiguous bands of whole rows and each band is filled
/// on its own scoped thread.  The bands are disjoint slices of the
/// one output allocation; no locks, and nothing to merge afterward.
pub fn render_threaded<C>(
    colormap: &C,
    pixel_width: usize,
    pixel_height: usize,
    domain: ComplexRect,
    threads: usize,
) -> Result<PixelGrid, RenderError>
where
    C: Fn(Complex<f64>) -> Color + Sync,
{
    if threads == 0 {
        return Err(RenderError::InvalidThreadCount);
    }
    check_size(pixel_width, pixel_height)?;
    let dx = domain.width() / (pixel_width as f64);
    let dy = domain.height() / (pixel_height as f64);
    let columns = pixel_width + 1;
    let rows = pixel_height + 1;
    let band_rows = rows / threads + 1;
    let mut pixels = vec![Color::default(); columns * rows];
    crossbeam::scope(|spawner| {
        for (band, slab) in pixels.chunks_mut(band_rows * columns).enumerate() {
            let first_row = band * band_rows;
            spawner.spawn(move |_| {
                for (row, line) in slab.chunks_mut(columns).enumerate() {
                    let im = domain.bottom() + ((first_row + row) as f64) * dy;
                    for (column, slot) in line.iter_mut().enumerate() {
                        let point = Complex::new(domain.left() + (column as f64) * dx, im);
                        *slot = colormap(point);
                    }
                }
            });
        }
    })
    .unwrap();
    Ok(PixelGrid {
        width: columns,
        height: rows,
        pixels,
    })
}
