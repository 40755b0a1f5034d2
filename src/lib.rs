//! Driver library for SSD1306-class and SSD1351-class dot matrix OLED display controllers, with
//! a small built-in graphics and text layer.
//!
//! The two controller families expose very different memory models: the SSD1306 is driven through
//! an in-RAM 1-bit-per-pixel paged buffer which is flushed to the chip in one burst, while the
//! SSD1351 is driven by arming a rectangular RAM window and streaming 16-bit RGB565 pixels
//! directly over the wire. Both are reconciled behind the [`frame::Frame`] trait, so the drawing
//! primitives in [`display::Display`] are written once against a single per-pixel contract.
//!
//! Out-of-range coordinates passed to any drawing primitive are silently dropped rather than
//! reported; the command stream to these chips is fire-and-forget, and callers rely on clipped
//! draws being harmless.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate core;

extern crate embedded_hal as hal;
#[macro_use]
extern crate itertools;

#[cfg(test)]
#[macro_use]
mod testing;

pub mod color;
pub mod command;
pub mod display;
pub mod font;
pub mod frame;
pub mod interface;
pub mod profile;

// Re-exports for primary API.
pub use color::{rgb565, Mono};
pub use display::{Display, DrawMode, PixelCoord};
pub use frame::{DirectFrame, Frame, PagedFrame};
pub use interface::bitbang::BitBangInterface;
pub use interface::spi::SpiInterface;
pub use interface::DisplayInterface;
pub use profile::{InitStep, SSD1306_128X64_INIT, SSD1351_128X128_INIT};
