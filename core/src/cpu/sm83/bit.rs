use super::{Flag, Sm83};
use crate::core::{Bus, BusMaster};

impl Sm83 {
    fn rotate_shift(&mut self, which: u8, val: u8) -> u8 {
        let (result, carry) = match which {
            0 => (val.rotate_left(1), val >> 7), // RLC
            1 => (val.rotate_right(1), val & 1),  // RRC
            2 => {
                // RL
                let old = if self.flag(Flag::C) { 1 } else { 0 };
                ((val << 1) | old, val >> 7)
            }
            3 => {
                // RR
                let old = if self.flag(Flag::C) { 0x80 } else { 0 };
                ((val >> 1) | old, val & 1)
            }
            4 => (val << 1, val >> 7),                 // SLA
            5 => (((val as i8) >> 1) as u8, val & 1),   // SRA
            6 => (val.rotate_left(4), 0),               // SWAP: no carry change
            7 => (val >> 1, val & 1),                   // SRL
            _ => unreachable!(),
        };
        self.f = 0;
        self.set_flag(Flag::Z, result == 0);
        if which != 6 {
            self.set_flag(Flag::C, carry != 0);
        }
        result
    }

    fn bit_test(&mut self, bit: u8, val: u8) {
        let tested = val & (1 << bit) == 0;
        self.set_flag(Flag::Z, tested);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }

    pub(super) fn dispatch_cb<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster) -> u32 {
        let op = self.fetch_u8(bus, master);
        let quadrant = op >> 6;
        let selector = (op >> 3) & 7;
        let r = op & 7;
        let indirect = r == 6;

        match quadrant {
            0 => {
                let val = self.read_r8(bus, master, r);
                let result = self.rotate_shift(selector, val);
                self.write_r8(bus, master, r, result);
            }
            1 => {
                let val = self.read_r8(bus, master, r);
                self.bit_test(selector, val);
                return if indirect { 3 } else { 2 };
            }
            2 => {
                let val = self.read_r8(bus, master, r);
                self.write_r8(bus, master, r, val & !(1 << selector));
            }
            3 => {
                let val = self.read_r8(bus, master, r);
                self.write_r8(bus, master, r, val | (1 << selector));
            }
            _ => unreachable!("CB quadrant is always 0..=3"),
        }
        if indirect { 4 } else { 2 }
    }
}
