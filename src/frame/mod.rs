//! The frame abstraction, which reconciles the two controller memory models behind one per-pixel
//! write contract.
//!
//! A [`PagedFrame`] owns an in-RAM 1-bit-per-pixel buffer laid out in the paged byte order the
//! SSD1306 consumes, and only touches the bus when flushed. A [`DirectFrame`] owns no pixel
//! state at all; every write is translated into a window command sequence and a pixel burst on
//! the wire. The drawing layer is written once against the [`Frame`] trait and does not know
//! which of the two it is driving.

pub mod direct;
pub mod paged;

pub use self::direct::DirectFrame;
pub use self::paged::PagedFrame;

use crate::interface::DisplayInterface;

pub trait Frame {
    /// The color written per pixel: [`crate::color::Mono`] for 1-bpp frames, packed RGB565 `u16`
    /// for direct frames.
    type Color: Copy + PartialEq;

    /// Viewable dimensions as (width, height) in pixels.
    fn dimensions(&self) -> (i16, i16);

    /// Write one pixel. Coordinates outside the frame are silently dropped.
    fn write_pixel<DI: DisplayInterface>(
        &mut self,
        iface: &mut DI,
        x: i16,
        y: i16,
        color: Self::Color,
    ) -> Result<(), ()>;

    /// Fill the entire frame with one color. For direct frames this streams the whole RAM
    /// window; for paged frames it only touches the buffer.
    fn clear<DI: DisplayInterface>(&mut self, iface: &mut DI, color: Self::Color)
        -> Result<(), ()>;

    /// Push any pending pixel state to the device. A no-op for frames that write through.
    fn flush<DI: DisplayInterface>(&mut self, iface: &mut DI) -> Result<(), ()>;
}
