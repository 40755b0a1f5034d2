//! The buffered 1-bit-per-pixel frame used with paged controllers.

use crate::color::Mono;
use crate::command::consts::*;
use crate::command::Command;
use crate::frame::Frame;
use crate::interface::DisplayInterface;

/// An owned frame buffer in the SSD1306's native paged layout: each byte covers 8 vertically
/// stacked pixels of one column, pages run top to bottom, columns left to right within a page.
/// The buffer is the sole source of truth for unsent pixel state; nothing reaches the device
/// until [`Frame::flush`] streams it in address order.
///
/// `N` is the backing storage size in bytes and must be at least `width * height / 8`; the
/// default fits a 128x64 module.
pub struct PagedFrame<const N: usize = 1024> {
    width: i16,
    height: i16,
    buf: [u8; N],
}

impl<const N: usize> PagedFrame<N> {
    /// Construct a frame buffer for a display of the given dimensions. The height must be a
    /// whole number of 8-pixel pages, and both axes must fit the chip's addressable range, or
    /// flush would emit a window the controller cannot hold.
    pub fn new(width: i16, height: i16) -> Self {
        if width <= 0
            || height <= 0
            || height % 8 != 0
            || width > NUM_PIXEL_COLS as i16
            || height / 8 > NUM_PAGES as i16
            || width as usize * (height as usize / 8) > N
        {
            panic!("Frame buffer dimensions not supported.");
        }
        PagedFrame {
            width,
            height,
            buf: [0; N],
        }
    }

    fn used(&self) -> usize {
        self.width as usize * (self.height as usize / 8)
    }

    /// The live portion of the backing buffer, in device address order.
    pub fn buffer(&self) -> &[u8] {
        &self.buf[..self.used()]
    }

    /// Complement every buffer byte, turning the image into its negative. The device is not
    /// touched until the next flush.
    pub fn invert(&mut self) {
        let used = self.used();
        for byte in &mut self.buf[..used] {
            *byte = !*byte;
        }
    }
}

impl<const N: usize> Frame for PagedFrame<N> {
    type Color = Mono;

    fn dimensions(&self) -> (i16, i16) {
        (self.width, self.height)
    }

    fn write_pixel<DI: DisplayInterface>(
        &mut self,
        _iface: &mut DI,
        x: i16,
        y: i16,
        color: Mono,
    ) -> Result<(), ()> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(());
        }
        let index = x as usize + (y as usize / 8) * self.width as usize;
        let bit = 1 << (y as usize % 8);
        match color {
            Mono::On => self.buf[index] |= bit,
            Mono::Off => self.buf[index] &= !bit,
        }
        Ok(())
    }

    fn clear<DI: DisplayInterface>(&mut self, _iface: &mut DI, color: Mono) -> Result<(), ()> {
        let fill = match color {
            Mono::On => 0xFF,
            Mono::Off => 0x00,
        };
        let used = self.used();
        for byte in &mut self.buf[..used] {
            *byte = fill;
        }
        Ok(())
    }

    fn flush<DI: DisplayInterface>(&mut self, iface: &mut DI) -> Result<(), ()> {
        Command::SetColumnRange(0, (self.width - 1) as u8).send(iface)?;
        Command::SetPageRange(0, (self.height / 8 - 1) as u8).send(iface)?;
        let used = self.used();
        iface.send_data(&self.buf[..used])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn write_pixel_sets_paged_bit() {
        let mut di = TestSpyInterface::new();
        let mut frame = PagedFrame::<1024>::new(128, 64);
        frame.write_pixel(&mut di, 0, 0, Mono::On).unwrap();
        assert_eq!(frame.buffer()[0], 0b0000_0001);
        frame.write_pixel(&mut di, 3, 10, Mono::On).unwrap();
        assert_eq!(frame.buffer()[3 + 128], 0b0000_0100);
        frame.write_pixel(&mut di, 3, 10, Mono::Off).unwrap();
        assert_eq!(frame.buffer()[3 + 128], 0);
        // Buffered writes never touch the bus.
        di.check_multi(&[]);
    }

    #[test]
    fn write_pixel_out_of_range_is_noop() {
        let mut di = TestSpyInterface::new();
        let mut frame = PagedFrame::<1024>::new(128, 64);
        frame.write_pixel(&mut di, 128, 0, Mono::On).unwrap();
        frame.write_pixel(&mut di, 0, 64, Mono::On).unwrap();
        frame.write_pixel(&mut di, -1, 0, Mono::On).unwrap();
        frame.write_pixel(&mut di, 0, -1, Mono::On).unwrap();
        assert!(frame.buffer().iter().all(|b| *b == 0));
    }

    #[test]
    fn clear_fills_from_color() {
        let mut di = TestSpyInterface::new();
        let mut frame = PagedFrame::<1024>::new(128, 64);
        frame.clear(&mut di, Mono::On).unwrap();
        assert!(frame.buffer().iter().all(|b| *b == 0xFF));
        frame.clear(&mut di, Mono::Off).unwrap();
        assert!(frame.buffer().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn invert_complements_every_byte() {
        let mut di = TestSpyInterface::new();
        let mut frame = PagedFrame::<1024>::new(128, 64);
        frame.write_pixel(&mut di, 5, 3, Mono::On).unwrap();
        frame.invert();
        assert_eq!(frame.buffer()[5], !0b0000_1000);
        assert!(frame.buffer()[6..].iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn flush_streams_whole_buffer_in_address_order() {
        let di = TestSpyInterface::new();
        let mut frame = PagedFrame::<16>::new(8, 8);
        frame.write_pixel(&mut di.split(), 0, 0, Mono::On).unwrap();
        frame.write_pixel(&mut di.split(), 7, 7, Mono::On).unwrap();
        frame.flush(&mut di.split()).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x21, [0, 7], // full column range
            0x22, [0, 0], // single page
            [0x01, 0, 0, 0, 0, 0, 0, 0x80]
        ));
    }

    #[test]
    #[should_panic]
    fn oversized_dimensions_rejected() {
        PagedFrame::<16>::new(128, 64);
    }

    #[test]
    #[should_panic]
    fn width_past_chip_columns_rejected() {
        // Would otherwise truncate to a wrong column range at flush time.
        PagedFrame::<4096>::new(300, 64);
    }

    #[test]
    #[should_panic]
    fn height_past_chip_pages_rejected() {
        PagedFrame::<4096>::new(64, 128);
    }
}
