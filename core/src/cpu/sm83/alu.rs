use super::{Flag, Sm83};
use crate::core::{Bus, BusMaster};

impl Sm83 {
    fn half_carry_add(a: u8, b: u8, carry: u8) -> bool {
        (a & 0xF) + (b & 0xF) + carry > 0xF
    }

    fn half_carry_sub(a: u8, b: u8, carry: u8) -> bool {
        (a & 0xF) < (b & 0xF) + carry
    }

    fn do_add(&mut self, val: u8, with_carry: bool) {
        let carry = if with_carry && self.flag(Flag::C) { 1 } else { 0 };
        let a = self.a;
        let sum = a as u16 + val as u16 + carry as u16;
        let result = sum as u8;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, Self::half_carry_add(a, val, carry));
        self.set_flag(Flag::C, sum > 0xFF);
        self.a = result;
    }

    fn do_sub(&mut self, val: u8, with_carry: bool) -> u8 {
        let carry = if with_carry && self.flag(Flag::C) { 1 } else { 0 };
        let a = self.a;
        let diff = (a as i16) - (val as i16) - (carry as i16);
        let result = diff as u8;
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, Self::half_carry_sub(a, val, carry));
        self.set_flag(Flag::C, diff < 0);
        result
    }

    fn do_and(&mut self, val: u8) {
        self.a &= val;
        self.set_flag(Flag::Z, self.a == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::C, false);
    }

    fn do_xor(&mut self, val: u8) {
        self.a ^= val;
        self.set_flag(Flag::Z, self.a == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, false);
    }

    fn do_or(&mut self, val: u8) {
        self.a |= val;
        self.set_flag(Flag::Z, self.a == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, false);
    }

    fn do_cp(&mut self, val: u8) {
        self.do_sub(val, false);
    }

    fn perform(&mut self, op: u8, val: u8) {
        match op {
            0 => self.do_add(val, false),
            1 => self.do_add(val, true),
            2 => {
                self.a = self.do_sub(val, false);
            }
            3 => {
                self.a = self.do_sub(val, true);
            }
            4 => self.do_and(val),
            5 => self.do_xor(val),
            6 => self.do_or(val),
            7 => self.do_cp(val),
            _ => unreachable!(),
        }
    }

    pub(super) fn op_alu_r<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let which = (op >> 3) & 7;
        let r = op & 7;
        let val = self.read_r8(bus, master, r);
        self.perform(which, val);
        if r == 6 { 2 } else { 1 }
    }

    pub(super) fn op_alu_n<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let which = (op >> 3) & 7;
        let val = self.fetch_u8(bus, master);
        self.perform(which, val);
        2
    }

    pub(super) fn op_inc_r<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let r = (op >> 3) & 7;
        let val = self.read_r8(bus, master, r);
        let result = val.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, val & 0xF == 0xF);
        self.write_r8(bus, master, r, result);
        if r == 6 { 3 } else { 1 }
    }

    pub(super) fn op_dec_r<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let r = (op >> 3) & 7;
        let val = self.read_r8(bus, master, r);
        let result = val.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, val & 0xF == 0);
        self.write_r8(bus, master, r, result);
        if r == 6 { 3 } else { 1 }
    }

    pub(super) fn op_add_hl_rp(&mut self, op: u8) -> u32 {
        let rp = (op >> 4) & 3;
        let hl = self.hl();
        let val = self.rp(rp);
        let sum = hl as u32 + val as u32;
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0xFFF) + (val & 0xFFF) > 0xFFF);
        self.set_flag(Flag::C, sum > 0xFFFF);
        self.set_hl(sum as u16);
        2
    }

    pub(super) fn op_rlca(&mut self) -> u32 {
        let carry = self.a >> 7;
        self.a = (self.a << 1) | carry;
        self.f = 0;
        self.set_flag(Flag::C, carry != 0);
        1
    }

    pub(super) fn op_rrca(&mut self) -> u32 {
        let carry = self.a & 1;
        self.a = (self.a >> 1) | (carry << 7);
        self.f = 0;
        self.set_flag(Flag::C, carry != 0);
        1
    }

    pub(super) fn op_rla(&mut self) -> u32 {
        let old_carry = if self.flag(Flag::C) { 1 } else { 0 };
        let new_carry = self.a >> 7;
        self.a = (self.a << 1) | old_carry;
        self.f = 0;
        self.set_flag(Flag::C, new_carry != 0);
        1
    }

    pub(super) fn op_rra(&mut self) -> u32 {
        let old_carry = if self.flag(Flag::C) { 0x80 } else { 0 };
        let new_carry = self.a & 1;
        self.a = (self.a >> 1) | old_carry;
        self.f = 0;
        self.set_flag(Flag::C, new_carry != 0);
        1
    }

    pub(super) fn op_daa(&mut self) -> u32 {
        let mut correction = 0u8;
        let mut carry = self.flag(Flag::C);
        if self.flag(Flag::N) {
            if self.flag(Flag::H) {
                correction |= 0x06;
            }
            if self.flag(Flag::C) {
                correction |= 0x60;
            }
            self.a = self.a.wrapping_sub(correction);
        } else {
            if self.flag(Flag::H) || (self.a & 0x0F) > 0x09 {
                correction |= 0x06;
            }
            if self.flag(Flag::C) || self.a > 0x99 {
                correction |= 0x60;
                carry = true;
            }
            self.a = self.a.wrapping_add(correction);
        }
        self.set_flag(Flag::Z, self.a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
        1
    }

    pub(super) fn op_cpl(&mut self) -> u32 {
        self.a = !self.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }

    pub(super) fn op_scf(&mut self) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        1
    }

    pub(super) fn op_ccf(&mut self) -> u32 {
        let c = self.flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !c);
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bus::IrqLines;

    struct NullBus;
    impl Bus for NullBus {
        fn read(&mut self, _master: BusMaster, _addr: u16) -> u8 {
            0
        }
        fn write(&mut self, _master: BusMaster, _addr: u16, _data: u8) {}
        fn irq_lines(&self) -> IrqLines {
            IrqLines::default()
        }
        fn ack_interrupts(&mut self, _mask: u8) {}
        fn set_ime(&mut self, _ime: bool) {}
    }

    #[test]
    fn sbc_matches_reference_formula() {
        let mut bus = NullBus;
        for a in 0u16..256 {
            for d in 0u16..256 {
                for c in [0u8, 1] {
                    let mut cpu = Sm83::new();
                    cpu.a = a as u8;
                    cpu.set_flag(Flag::C, c == 1);
                    let result = (a as i32 - d as i32 - c as i32).rem_euclid(256) as u8;
                    cpu.perform(3, d as u8);
                    let _ = &mut bus; // keep import exercised
                    assert_eq!(cpu.a, result, "a={a} d={d} c={c}");
                    assert_eq!(cpu.flag(Flag::Z), result == 0);
                    assert!(cpu.flag(Flag::N));
                    assert_eq!(cpu.flag(Flag::H), (a as u8 & 0xF) < (d as u8 & 0xF) + c);
                    assert_eq!(cpu.flag(Flag::C), (a as i32) < (d as i32 + c as i32));
                }
            }
        }
    }

    #[test]
    fn daa_round_trips_bcd_addition() {
        for a in 0u8..100 {
            for b in 0u8..100 {
                let bcd_a = (a / 10) << 4 | (a % 10);
                let bcd_b = (b / 10) << 4 | (b % 10);
                let mut cpu = Sm83::new();
                cpu.a = bcd_a;
                cpu.perform(0, bcd_b); // ADD
                cpu.op_daa();
                let expected = (a + b) % 100;
                let expected_bcd = (expected / 10) << 4 | (expected % 10);
                assert_eq!(cpu.a, expected_bcd, "a={a} b={b}");
            }
        }
    }

    #[test]
    fn daa_round_trips_bcd_subtraction() {
        for a in 0u8..100 {
            for b in 0..=a {
                let bcd_a = (a / 10) << 4 | (a % 10);
                let bcd_b = (b / 10) << 4 | (b % 10);
                let mut cpu = Sm83::new();
                cpu.a = bcd_a;
                cpu.perform(2, bcd_b); // SUB
                cpu.op_daa();
                let expected = a - b;
                let expected_bcd = (expected / 10) << 4 | (expected % 10);
                assert_eq!(cpu.a, expected_bcd, "a={a} b={b}");
            }
        }
    }
}
