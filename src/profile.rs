//! Vendor bring-up sequences for the supported controllers.
//!
//! These are transcribed register-for-register from the module vendor's reference code. They
//! configure oscillator, multiplexing, remapping, charge pump, and drive voltages; none of it is
//! consulted again after `Display::init`, so the sequences are carried as opaque command/data
//! payloads rather than structured commands.

/// One step of a bring-up sequence: a raw command byte or a raw data byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    Cmd(u8),
    Data(u8),
}

use self::InitStep::{Cmd, Data};

/// Bring-up for a 128x64 SSD1306 module in horizontal addressing mode, charge pump enabled.
pub const SSD1306_128X64_INIT: &[InitStep] = &[
    Cmd(0xAE), // display off
    Cmd(0xD5), // clock divide ratio / oscillator frequency
    Cmd(0x80),
    Cmd(0xA8), // multiplex ratio, 64 lines
    Cmd(0x3F),
    Cmd(0xD3), // display offset 0
    Cmd(0x00),
    Cmd(0x40), // start line 0
    Cmd(0x8D), // charge pump on
    Cmd(0x14),
    Cmd(0x20), // horizontal addressing mode
    Cmd(0x00),
    Cmd(0xA1), // segment remap, column 127 -> SEG0
    Cmd(0xC8), // COM scan direction reversed
    Cmd(0xDA), // COM pins configuration
    Cmd(0x12),
    Cmd(0x81), // contrast
    Cmd(0x8F),
    Cmd(0xD9), // precharge period
    Cmd(0xF1),
    Cmd(0xDB), // VCOMH deselect level
    Cmd(0x10),
    Cmd(0xA4), // resume display from RAM contents
    Cmd(0xA6), // normal (non-inverted) mode
    Cmd(0xAF), // display on
];

/// Bring-up for a 128x128 SSD1351 module.
pub const SSD1351_128X128_INIT: &[InitStep] = &[
    Cmd(0xFD), // command lock
    Data(0x12),
    Cmd(0xFD),
    Data(0xB1),
    Cmd(0xAE), // display off
    Cmd(0xB3), // clock divide ratio / oscillator frequency
    Cmd(0xF1),
    Cmd(0xCA), // multiplex ratio, 128 lines
    Data(0x7F),
    Cmd(0xA0), // remap, RGB565 color depth
    Data(0x74),
    Cmd(0x15), // column address range
    Data(0x00),
    Data(0x7F),
    Cmd(0x75), // row address range
    Data(0x00),
    Data(0x7F),
    Cmd(0xA1), // start line 0
    Data(0x00),
    Cmd(0xA2), // display offset 0
    Data(0x00),
    Cmd(0xB5), // controller GPIO pins disabled
    Data(0x00),
    Cmd(0xAB), // internal VDD regulator
    Data(0x01),
    Cmd(0xB1), // phase lengths
    Data(0x32),
    Cmd(0xBE), // VCOMH voltage
    Data(0x05),
    Cmd(0xA6), // normal (non-inverted) mode
    Cmd(0xC1), // per-channel contrast
    Data(0xC8),
    Data(0x80),
    Data(0xC8),
    Cmd(0xC7), // master contrast
    Data(0x0F),
    Cmd(0xB4), // segment low voltage, external VSL
    Data(0xA0),
    Data(0xB5),
    Data(0x55),
    Cmd(0xB6), // second precharge period
    Data(0x01),
    Cmd(0xAF), // display on
];
