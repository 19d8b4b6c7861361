#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex function renderer
//!
//! Functions of one complex variable are hard to graph directly: both
//! the domain and the range are two-dimensional, so the full graph
//! lives in four dimensions.  The usual workaround is domain coloring:
//! sample the function over a rectangle of the complex plane, and turn
//! each sampled value into a color.  Poles, zeroes, and essential
//! singularities then show up as visible features of the image.
//!
//! This crate provides the rectangle abstraction, two coloring schemes
//! (a stereographic projection onto the Riemann sphere, and a
//! hue/lightness wheel), and the sampling loop that maps an integral
//! pixel grid onto the complex plane and produces the final grid of
//! RGBA pixels.  Encoding that grid to a file format is left to the
//! caller.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod color;
pub mod planes;
pub mod render;

pub use color::{hsl_wheel_map, riemann_map, Color};
pub use planes::ComplexRect;
pub use render::{render, render_threaded, PixelGrid, RenderError};
