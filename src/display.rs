//! The main API of the driver: drawing state, raster primitives, and the text layer, written
//! once against the [`Frame`] contract so the same code drives both controller families.

use crate::command::Command;
use crate::font;
use crate::frame::{Frame, PagedFrame};
use crate::interface::DisplayInterface;
use crate::profile::InitStep;

/// A pixel coordinate pair of `column` and `row`. Coordinates may be negative or past the edge
/// of the display; pixels that fall outside the viewable area are silently dropped by every
/// drawing primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelCoord(pub i16, pub i16);

/// How background-colored pixels of glyphs, frames, and bitmaps are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Background pixels are left untouched, so shapes render transparently over whatever was
    /// drawn before.
    Compose,
    /// Background pixels are actively painted in the back color, erasing prior content.
    Override,
}

/// Horizontal cursor advance per glyph: the cell width plus one pixel of spacing.
const CURSOR_ADVANCE: i16 = font::GLYPH_WIDTH as i16 + 1;

/// A driver for one physical display.
///
/// The display is not usable until [`Display::init`] has run the controller's bring-up sequence.
/// There is no teardown and no error state: every runtime drawing fault is absorbed as a silent
/// no-op, and transport failures surface as `Err(())` without changing driver state.
pub struct Display<DI, F>
where
    DI: DisplayInterface,
    F: Frame,
{
    iface: DI,
    frame: F,
    draw_color: F::Color,
    back_color: F::Color,
    draw_mode: DrawMode,
    cursor: PixelCoord,
}

impl<DI, F> Display<DI, F>
where
    DI: DisplayInterface,
    F: Frame,
{
    /// Construct a new display driver from a transport, a frame matching the controller's memory
    /// model, and the initial draw/back colors.
    pub fn new(iface: DI, frame: F, draw_color: F::Color, back_color: F::Color) -> Self {
        Display {
            iface,
            frame,
            draw_color,
            back_color,
            draw_mode: DrawMode::Compose,
            cursor: PixelCoord(0, 0),
        }
    }

    /// Initialize the display: stream the controller's bring-up payload, then clear the display
    /// RAM to the back color. Bring-up sequences for the supported controllers are in the
    /// `profile` module.
    pub fn init(&mut self, sequence: &[InitStep]) -> Result<(), ()> {
        for step in sequence {
            match *step {
                InitStep::Cmd(cmd) => self.iface.send_command(cmd)?,
                InitStep::Data(data) => self.iface.send_data(&[data])?,
            }
        }
        self.clear()
    }

    /// Control sleep mode.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), ()> {
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }

    /// Clear the display to the back color and make it visible.
    pub fn clear(&mut self) -> Result<(), ()> {
        let back = self.back_color;
        self.frame.clear(&mut self.iface, back)?;
        self.frame.flush(&mut self.iface)
    }

    /// Fill the frame with one color. For buffered frames the device shows the fill on the next
    /// flush; for direct frames it is streamed immediately.
    pub fn fill(&mut self, color: F::Color) -> Result<(), ()> {
        self.frame.clear(&mut self.iface, color)
    }

    /// Push pending pixel state to the device. A no-op for direct frames.
    pub fn flush(&mut self) -> Result<(), ()> {
        self.frame.flush(&mut self.iface)
    }

    pub fn set_draw_color(&mut self, color: F::Color) {
        self.draw_color = color;
    }

    pub fn set_back_color(&mut self, color: F::Color) {
        self.back_color = color;
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    /// The frame this display draws into.
    pub fn frame(&self) -> &F {
        &self.frame
    }

    /// The current text cursor position in pixel space.
    pub fn cursor(&self) -> PixelCoord {
        self.cursor
    }

    /// Write one pixel. Out-of-range coordinates are dropped without effect; this is the single
    /// primitive every other shape reduces to.
    pub fn draw_pixel(&mut self, p: PixelCoord, color: F::Color) -> Result<(), ()> {
        let PixelCoord(x, y) = p;
        let (width, height) = self.frame.dimensions();
        if x < 0 || y < 0 || x >= width || y >= height {
            return Ok(());
        }
        self.frame.write_pixel(&mut self.iface, x, y, color)
    }

    /// Paint one pixel in the back color.
    pub fn clear_pixel(&mut self, p: PixelCoord) -> Result<(), ()> {
        let back = self.back_color;
        self.draw_pixel(p, back)
    }

    /// Draw a line between two points in the draw color, by integer Bresenham. The far endpoint
    /// is painted before the walk begins, so both endpoints always land even for zero-length
    /// lines.
    pub fn draw_line(&mut self, p0: PixelCoord, p1: PixelCoord) -> Result<(), ()> {
        let draw = self.draw_color;
        let PixelCoord(mut x0, mut y0) = p0;
        let PixelCoord(x1, y1) = p1;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx: i16 = if x0 < x1 { 1 } else { -1 };
        let sy: i16 = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        self.draw_pixel(PixelCoord(x1, y1), draw)?;
        while x0 != x1 || y0 != y1 {
            self.draw_pixel(PixelCoord(x0, y0), draw)?;
            let err2 = err * 2;
            if err2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if err2 < dx {
                err += dx;
                y0 += sy;
            }
        }
        Ok(())
    }

    /// Stroke a one-pixel-wide rectangle outline in the draw color. In `Override` mode the
    /// interior is painted in the back color in the same pass, erasing whatever it covered; in
    /// `Compose` mode the interior is untouched.
    pub fn draw_frame(&mut self, p: PixelCoord, width: i16, height: i16) -> Result<(), ()> {
        let draw = self.draw_color;
        let back = self.back_color;
        let PixelCoord(x, y) = p;

        for i in 0..height {
            self.draw_pixel(PixelCoord(x, y + i), draw)?;
            self.draw_pixel(PixelCoord(x + width - 1, y + i), draw)?;
        }
        for i in 1..width - 1 {
            self.draw_pixel(PixelCoord(x + i, y), draw)?;
            self.draw_pixel(PixelCoord(x + i, y + height - 1), draw)?;
        }
        if self.draw_mode == DrawMode::Override {
            for (i, j) in iproduct!(1..width - 1, 1..height - 1) {
                self.draw_pixel(PixelCoord(x + i, y + j), back)?;
            }
        }
        Ok(())
    }

    /// Fill a rectangle in the draw color. Unconditional; ignores the draw mode.
    pub fn draw_box(&mut self, p: PixelCoord, width: i16, height: i16) -> Result<(), ()> {
        let draw = self.draw_color;
        for (i, j) in iproduct!(0..width, 0..height) {
            self.draw_pixel(PixelCoord(p.0 + i, p.1 + j), draw)?;
        }
        Ok(())
    }

    /// Draw one character cell at a pixel position. Set font bits paint the draw color; clear
    /// bits paint the back color only in `Override` mode, so `Compose` renders text
    /// transparently. Characters with no glyph render as the replacement glyph.
    pub fn draw_ascii_char(&mut self, p: PixelCoord, code: u8) -> Result<(), ()> {
        let draw = self.draw_color;
        let back = self.back_color;
        let glyph = &font::GLYPHS[font::glyph_index(code)];

        for (col, row) in iproduct!(0..font::GLYPH_WIDTH as i16, 0..font::GLYPH_HEIGHT as i16) {
            let target = PixelCoord(p.0 + col, p.1 + row);
            if glyph[col as usize] & (1 << row) != 0 {
                self.draw_pixel(target, draw)?;
            } else if self.draw_mode == DrawMode::Override {
                self.draw_pixel(target, back)?;
            }
        }
        Ok(())
    }

    /// Move the text cursor. Positions outside the viewable area are rejected as a no-op.
    pub fn set_cursor(&mut self, p: PixelCoord) {
        let (width, height) = self.frame.dimensions();
        if p.0 < 0 || p.1 < 0 || p.0 >= width || p.1 >= height {
            return;
        }
        self.cursor = p;
    }

    /// Print a byte string at the cursor, advancing it one glyph cell plus a pixel of spacing
    /// per character. Output never wraps: once the cursor passes the right edge the remaining
    /// characters are dropped. Bytes 0xC0 and up select the CP1251 Cyrillic glyph range.
    pub fn print_string(&mut self, text: &[u8]) -> Result<(), ()> {
        let (width, _) = self.frame.dimensions();
        for &code in text {
            if self.cursor.0 >= width {
                break;
            }
            let at = self.cursor;
            self.draw_ascii_char(at, code)?;
            self.cursor.0 += CURSOR_ADVANCE;
        }
        Ok(())
    }

    /// Print a signed decimal integer at the cursor, most significant digit first. Digits are
    /// peeled with integer arithmetic only; the magnitude is held unsigned so `i32::MIN` and
    /// `i32::MAX` both format without overflow.
    pub fn print_num(&mut self, num: i32) -> Result<(), ()> {
        if num == 0 {
            return self.print_string(b"0");
        }
        if num < 0 {
            self.print_string(b"-")?;
        }

        // wrapping_abs keeps i32::MIN intact and the u32 cast reads it as the true magnitude.
        let mut magnitude = num.wrapping_abs() as u32;

        let mut length = 0;
        let mut probe = magnitude;
        while probe != 0 {
            length += 1;
            probe /= 10;
        }

        let mut divisor = 10u32.pow(length - 1);
        while divisor != 0 {
            let digit = (magnitude / divisor) as u8;
            self.print_string(&[b'0' + digit])?;
            magnitude %= divisor;
            divisor /= 10;
        }
        Ok(())
    }

    /// Blit a monochrome XBM bitmap with its top-left corner at `p`. Rows are byte-packed at
    /// `ceil(width / 8)` bytes per row, LSB first within each byte, restarting at every row.
    /// Set bits paint the draw color; clear bits follow the same `Compose`/`Override` rules as
    /// glyphs. Bytes missing from an undersized slice read as zero.
    pub fn draw_xbm(
        &mut self,
        p: PixelCoord,
        width: i16,
        height: i16,
        bitmap: &[u8],
    ) -> Result<(), ()> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        let draw = self.draw_color;
        let back = self.back_color;
        let row_stride = ((width as usize) + 7) / 8;

        for (row, col) in iproduct!(0..height, 0..width) {
            let byte = bitmap
                .get(col as usize / 8 + row as usize * row_stride)
                .copied()
                .unwrap_or(0);
            let target = PixelCoord(p.0 + col, p.1 + row);
            if byte & (1 << (col % 8)) != 0 {
                self.draw_pixel(target, draw)?;
            } else if self.draw_mode == DrawMode::Override {
                self.draw_pixel(target, back)?;
            }
        }
        Ok(())
    }
}

impl<DI, const N: usize> Display<DI, PagedFrame<N>>
where
    DI: DisplayInterface,
{
    /// Complement every byte of the frame buffer, turning the image into its negative. Visible
    /// after the next flush.
    pub fn invert(&mut self) {
        self.frame.invert();
    }
}
