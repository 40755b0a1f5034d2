//! The transport contract between the driver core and the physical bus, plus the bundled
//! implementations of it.
//!
//! The display controllers are write-only devices with a command/data select line: every byte on
//! the bus is either a command opcode (or opcode argument) or raw display RAM data, distinguished
//! only by the level of the D/C pin while the byte is clocked out. The whole contract therefore
//! collapses to two primitives, and everything above this module is bus-agnostic.

pub trait DisplayInterface {
    /// Send one command byte with the D/C line low.
    fn send_command(&mut self, cmd: u8) -> Result<(), ()>;
    /// Send a run of data bytes with the D/C line high.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), ()>;
}

pub mod spi {
    //! The hardware SPI interface supports the "4-wire" wiring of these controllers, where each
    //! word on the SPI bus is 8 bits and the D/C GPIO carries the command/data distinction. The
    //! "3-wire" mode replaces the D/C GPIO with a 9th bit on each word, which is awkward to
    //! express with embedded_hal SPI and is not supported.

    use hal;

    use super::DisplayInterface;

    pub struct SpiInterface<SPI, DC> {
        /// The SPI master device connected to the display controller.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the controller.
        dc: DC,
    }

    impl<SPI, DC> SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8>,
        DC: hal::digital::OutputPin,
    {
        /// Create a new SPI interface to communicate with the display controller. `spi` is the
        /// SPI master device, and `dc` is the GPIO output pin connected to the D/C pin of the
        /// controller.
        pub fn new(spi: SPI, dc: DC) -> Self {
            Self { spi, dc }
        }
    }

    impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
    where
        SPI: hal::blocking::spi::Write<u8>,
        DC: hal::digital::OutputPin,
    {
        fn send_command(&mut self, cmd: u8) -> Result<(), ()> {
            self.dc.set_low();
            self.spi.write(&[cmd]).map_err(|_| ())?;
            self.dc.set_high();
            Ok(())
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), ()> {
            self.dc.set_high();
            self.spi.write(&buf).map_err(|_| ())?;
            Ok(())
        }
    }
}

pub mod bitbang {
    //! A software SPI interface bit-banged over plain GPIO, for targets whose SPI peripheral is
    //! already spoken for. Bytes go out MSB first, the clock idles low, and chip select frames
    //! each byte.

    use hal;

    use super::DisplayInterface;

    pub struct BitBangInterface<CLK, MOSI, DC, CS> {
        clk: CLK,
        mosi: MOSI,
        dc: DC,
        cs: CS,
    }

    impl<CLK, MOSI, DC, CS> BitBangInterface<CLK, MOSI, DC, CS>
    where
        CLK: hal::digital::OutputPin,
        MOSI: hal::digital::OutputPin,
        DC: hal::digital::OutputPin,
        CS: hal::digital::OutputPin,
    {
        /// Create a new bit-banged interface from four GPIO output pins: serial clock, serial
        /// data, D/C select, and chip select.
        pub fn new(clk: CLK, mosi: MOSI, dc: DC, cs: CS) -> Self {
            let mut iface = Self { clk, mosi, dc, cs };
            iface.cs.set_high();
            iface.clk.set_low();
            iface
        }

        fn write_byte(&mut self, byte: u8) {
            self.cs.set_low();
            for bit in (0..8).rev() {
                if byte & (1 << bit) != 0 {
                    self.mosi.set_high();
                } else {
                    self.mosi.set_low();
                }
                self.clk.set_high();
                self.clk.set_low();
            }
            self.cs.set_high();
        }
    }

    impl<CLK, MOSI, DC, CS> DisplayInterface for BitBangInterface<CLK, MOSI, DC, CS>
    where
        CLK: hal::digital::OutputPin,
        MOSI: hal::digital::OutputPin,
        DC: hal::digital::OutputPin,
        CS: hal::digital::OutputPin,
    {
        fn send_command(&mut self, cmd: u8) -> Result<(), ()> {
            self.dc.set_low();
            self.write_byte(cmd);
            Ok(())
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), ()> {
            self.dc.set_high();
            for byte in buf {
                self.write_byte(*byte);
            }
            Ok(())
        }
    }
}


#[cfg(test)]
pub mod test_spy {
    //! An interface for use in unit tests to spy on whatever was sent to it.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::DisplayInterface;

    /// One event observed on the spied bus.
    #[derive(Clone, Debug, PartialEq)]
    pub enum Sent {
        Cmd(u8),
        Data(Vec<u8>),
    }

    pub struct TestSpyInterface {
        sent: Rc<RefCell<Vec<Sent>>>,
    }

    impl TestSpyInterface {
        pub fn new() -> Self {
            TestSpyInterface {
                sent: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// Make a second handle to the same recording, so one copy can be moved into the code
        /// under test while the original stays behind for checking.
        pub fn split(&self) -> Self {
            TestSpyInterface {
                sent: self.sent.clone(),
            }
        }

        /// Check that exactly one command was sent, with the given opcode and argument data.
        pub fn check(&self, cmd: u8, data: &[u8]) {
            let sent = self.sent.borrow();
            assert_eq!(sent.first(), Some(&Sent::Cmd(cmd)));
            if data.is_empty() {
                assert_eq!(sent.len(), 1);
            } else {
                assert_eq!(sent.len(), 2);
                assert_eq!(sent[1], Sent::Data(data.to_vec()));
            }
        }

        /// Check the entire recorded stream against an expected sequence of events.
        pub fn check_multi(&self, expect: &[Sent]) {
            assert_eq!(&self.sent.borrow()[..], expect);
        }

        pub fn clear(&mut self) {
            self.sent.borrow_mut().clear()
        }
    }

    impl DisplayInterface for TestSpyInterface {
        fn send_command(&mut self, cmd: u8) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Cmd(cmd));
            Ok(())
        }
        fn send_data(&mut self, data: &[u8]) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Data(data.to_vec()));
            Ok(())
        }
    }
}
