//! The structured command set emitted by the driver core.
//!
//! Only the commands the drawing layer actually issues at runtime are modeled here: the RAM
//! addressing commands of both controller families, and the sleep control they share. Vendor
//! bring-up sequences are register soup with no runtime behavior attached, and are carried as
//! opaque byte payloads in the `profile` module instead.
//!
//! Note 1: the SSD1351 addresses its RAM by pixel column and row directly (opcodes 0x15/0x75,
//! one pixel per 16-bit word), while the SSD1306 addresses columns and *pages*, where a page is
//! a row of bytes each covering 8 vertically stacked pixels (opcodes 0x21/0x22). Both chips cap
//! out at 128 columns; the SSD1351 at 128 rows and the SSD1306 at 8 pages.

use crate::interface::DisplayInterface;

pub mod consts {
    pub const NUM_PIXEL_COLS: u8 = 128;
    pub const NUM_PIXEL_ROWS: u8 = 128;
    pub const NUM_PAGES: u8 = 8;
    pub const PIXEL_COL_MAX: u8 = NUM_PIXEL_COLS - 1;
    pub const PIXEL_ROW_MAX: u8 = NUM_PIXEL_ROWS - 1;
    pub const PAGE_MAX: u8 = NUM_PAGES - 1;
}

use self::consts::*;

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the column start and end address of the RAM write window on a windowed-RAM (SSD1351)
    /// controller. The column address pointer is reset to the start column. Range is 0-127.
    SetColumnAddress(u8, u8),
    /// Set the row start and end address of the RAM write window on a windowed-RAM controller.
    /// The row address pointer is reset to the start row. Range is 0-127.
    SetRowAddress(u8, u8),
    /// Arm the windowed-RAM controller for sequential RAM writes; all data bytes that follow
    /// land in the window set by `SetColumnAddress`/`SetRowAddress`.
    WriteRam,
    /// Set the column start and end address for a paged (SSD1306) controller in horizontal
    /// addressing mode. Range is 0-127.
    SetColumnRange(u8, u8),
    /// Set the page start and end address for a paged controller in horizontal addressing mode.
    /// Each page is 8 pixel rows. Range is 0-7. (Note 1)
    SetPageRange(u8, u8),
    /// Control sleep mode. The opcode pair is shared by both controller families.
    SetSleepMode(bool),
}

macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[]) => {
        Ok(($cmd, &$buf[..0]))
    };
    ($buf:ident, $cmd:expr,[$arg0:expr]) => {{
        $buf[0] = $arg0;
        Ok(($cmd, &$buf[..1]))
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $arg0;
        $buf[1] = $arg1;
        Ok(($cmd, &$buf[..2]))
    }};
}

impl Command {
    /// Transmit the command, opcode byte first and argument bytes as one data run. Arguments
    /// outside the chip's addressable range are rejected with `Err(())` before anything touches
    /// the bus.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), ()>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 2];
        let (cmd, data) = match self {
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=PIXEL_COL_MAX, 0..=PIXEL_COL_MAX) => ok_command!(arg_buf, 0x15, [start, end]),
                _ => Err(()),
            },
            Command::SetRowAddress(start, end) => match (start, end) {
                (0..=PIXEL_ROW_MAX, 0..=PIXEL_ROW_MAX) => ok_command!(arg_buf, 0x75, [start, end]),
                _ => Err(()),
            },
            Command::WriteRam => ok_command!(arg_buf, 0x5C, []),
            Command::SetColumnRange(start, end) => match (start, end) {
                (0..=PIXEL_COL_MAX, 0..=PIXEL_COL_MAX) => ok_command!(arg_buf, 0x21, [start, end]),
                _ => Err(()),
            },
            Command::SetPageRange(start, end) => match (start, end) {
                (0..=PAGE_MAX, 0..=PAGE_MAX) => ok_command!(arg_buf, 0x22, [start, end]),
                _ => Err(()),
            },
            Command::SetSleepMode(ena) => ok_command!(
                arg_buf,
                match ena {
                    true => 0xAE,
                    false => 0xAF,
                },
                []
            ),
        }?;
        iface.send_command(cmd)?;
        if data.len() == 0 {
            Ok(())
        } else {
            iface.send_data(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn set_column_address() {
        let mut di = TestSpyInterface::new();
        Command::SetColumnAddress(23, 42).send(&mut di).unwrap();
        di.check(0x15, &[23, 42]);
        assert_eq!(Command::SetColumnAddress(128, 42).send(&mut di), Err(()));
        assert_eq!(Command::SetColumnAddress(23, 255).send(&mut di), Err(()));
    }

    #[test]
    fn set_row_address() {
        let mut di = TestSpyInterface::new();
        Command::SetRowAddress(23, 42).send(&mut di).unwrap();
        di.check(0x75, &[23, 42]);
        assert_eq!(Command::SetRowAddress(128, 42).send(&mut di), Err(()));
        assert_eq!(Command::SetRowAddress(23, 255).send(&mut di), Err(()));
    }

    #[test]
    fn write_ram() {
        let mut di = TestSpyInterface::new();
        Command::WriteRam.send(&mut di).unwrap();
        di.check(0x5C, &[]);
    }

    #[test]
    fn set_column_range() {
        let mut di = TestSpyInterface::new();
        Command::SetColumnRange(0, 127).send(&mut di).unwrap();
        di.check(0x21, &[0, 127]);
        assert_eq!(Command::SetColumnRange(128, 127).send(&mut di), Err(()));
        assert_eq!(Command::SetColumnRange(0, 128).send(&mut di), Err(()));
    }

    #[test]
    fn set_page_range() {
        let mut di = TestSpyInterface::new();
        Command::SetPageRange(0, 7).send(&mut di).unwrap();
        di.check(0x22, &[0, 7]);
        assert_eq!(Command::SetPageRange(8, 7).send(&mut di), Err(()));
        assert_eq!(Command::SetPageRange(0, 8).send(&mut di), Err(()));
    }

    #[test]
    fn sleep_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetSleepMode(true).send(&mut di).unwrap();
        di.check(0xAE, &[]);
        di.clear();
        Command::SetSleepMode(false).send(&mut di).unwrap();
        di.check(0xAF, &[]);
    }
}
