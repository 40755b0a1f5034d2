//! Color types for the two display memory models.

/// A 1-bit monochrome color, as held in a paged frame buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mono {
    /// Pixel dark (bit clear).
    Off,
    /// Pixel lit (bit set).
    On,
}

pub mod rgb565 {
    //! Commonly used colors in 16-bit RGB565 packing, as sent over the wire to windowed-RAM
    //! controllers (high byte first).

    pub const BLACK: u16 = 0x0000;
    pub const RED: u16 = 0xF800;
    pub const GREEN: u16 = 0x07E0;
    pub const BLUE: u16 = 0x001F;
    pub const YELLOW: u16 = 0xFFE0;
    pub const CYAN: u16 = 0x07FF;
    pub const MAGENTA: u16 = 0xF81F;
    pub const BROWN: u16 = 0x9260;
    pub const WHITE: u16 = 0xFFFF;
}
