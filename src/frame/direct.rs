//! The unbuffered RGB565 frame used with windowed-RAM controllers.

use core::cmp;

use crate::command::consts::*;
use crate::command::Command;
use crate::frame::Frame;
use crate::interface::DisplayInterface;

/// A write-through frame for controllers addressed by rectangular RAM windows, such as the
/// SSD1351. No pixel state is held on this side of the bus: every write arms a window and
/// streams 16-bit big-endian RGB565 pixels straight to the device.
pub struct DirectFrame {
    width: i16,
    height: i16,
}

impl DirectFrame {
    /// Construct a frame for a display of the given viewable dimensions.
    pub fn new(width: i16, height: i16) -> Self {
        if width <= 0
            || height <= 0
            || width > NUM_PIXEL_COLS as i16
            || height > NUM_PIXEL_ROWS as i16
        {
            panic!("Display size not supported by windowed-RAM controllers.");
        }
        DirectFrame { width, height }
    }

    /// Arm the device for sequential RAM writes into the given rectangle. A rectangle that does
    /// not fit the viewable area is silently dropped, matching the fire-and-forget nature of the
    /// command stream; nothing is sent and no error is surfaced.
    pub fn set_window<DI: DisplayInterface>(
        &self,
        iface: &mut DI,
        x0: i16,
        y0: i16,
        width: i16,
        height: i16,
    ) -> Result<(), ()> {
        if x0 < 0 || y0 < 0 || width <= 0 || height <= 0 {
            return Ok(());
        }
        let x1 = x0 + width - 1;
        let y1 = y0 + height - 1;
        if x1 >= self.width || y1 >= self.height {
            return Ok(());
        }
        Command::SetColumnAddress(x0 as u8, x1 as u8).send(iface)?;
        Command::SetRowAddress(y0 as u8, y1 as u8).send(iface)?;
        Command::WriteRam.send(iface)
    }
}

impl Frame for DirectFrame {
    type Color = u16;

    fn dimensions(&self) -> (i16, i16) {
        (self.width, self.height)
    }

    fn write_pixel<DI: DisplayInterface>(
        &mut self,
        iface: &mut DI,
        x: i16,
        y: i16,
        color: u16,
    ) -> Result<(), ()> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(());
        }
        self.set_window(iface, x, y, 1, 1)?;
        iface.send_data(&[(color >> 8) as u8, (color & 0xFF) as u8])
    }

    /// Repaint the full RAM window two bytes per pixel, with no shortcut; on larger panels this
    /// transmission is visibly slow.
    fn clear<DI: DisplayInterface>(&mut self, iface: &mut DI, color: u16) -> Result<(), ()> {
        self.set_window(iface, 0, 0, self.width, self.height)?;

        let mut pattern = [0u8; 32];
        for pixel in pattern.chunks_exact_mut(2) {
            pixel[0] = (color >> 8) as u8;
            pixel[1] = (color & 0xFF) as u8;
        }

        let total_bytes = self.width as usize * self.height as usize * 2;
        let mut sent = 0;
        while sent < total_bytes {
            let chunk_len = cmp::min(pattern.len(), total_bytes - sent);
            iface.send_data(&pattern[..chunk_len])?;
            sent += chunk_len;
        }
        Ok(())
    }

    fn flush<DI: DisplayInterface>(&mut self, _iface: &mut DI) -> Result<(), ()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn write_pixel_arms_window_then_sends_big_endian_color() {
        let di = TestSpyInterface::new();
        let mut frame = DirectFrame::new(128, 128);
        frame.write_pixel(&mut di.split(), 3, 5, 0xABCD).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [3, 3],
            0x75, [5, 5],
            0x5C,
            [0xAB, 0xCD]
        ));
    }

    #[test]
    fn write_pixel_out_of_range_sends_nothing() {
        let di = TestSpyInterface::new();
        let mut frame = DirectFrame::new(128, 128);
        frame.write_pixel(&mut di.split(), 128, 0, 0xFFFF).unwrap();
        frame.write_pixel(&mut di.split(), 0, 128, 0xFFFF).unwrap();
        frame.write_pixel(&mut di.split(), -1, -1, 0xFFFF).unwrap();
        di.check_multi(&[]);
    }

    #[test]
    fn set_window_rejects_overhanging_rectangles_silently() {
        let di = TestSpyInterface::new();
        let frame = DirectFrame::new(128, 128);
        frame.set_window(&mut di.split(), 120, 0, 16, 4).unwrap();
        frame.set_window(&mut di.split(), 0, 126, 4, 16).unwrap();
        frame.set_window(&mut di.split(), 0, 0, 0, 4).unwrap();
        di.check_multi(&[]);
    }

    #[test]
    fn clear_streams_pattern_across_full_window() {
        let di = TestSpyInterface::new();
        let mut frame = DirectFrame::new(4, 2);
        frame.clear(&mut di.split(), 0xF800).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [0, 3],
            0x75, [0, 1],
            0x5C,
            [0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00,
             0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00]
        ));
    }
}
