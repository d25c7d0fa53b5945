use super::Sm83;
use crate::core::{Bus, BusMaster};

impl Sm83 {
    pub(super) fn op_ld_r_r<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let dst = (op >> 3) & 7;
        let src = op & 7;
        let val = self.read_r8(bus, master, src);
        self.write_r8(bus, master, dst, val);
        if dst == 6 || src == 6 { 2 } else { 1 }
    }

    pub(super) fn op_ld_r_n<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let dst = (op >> 3) & 7;
        let val = self.fetch_u8(bus, master);
        self.write_r8(bus, master, dst, val);
        if dst == 6 { 3 } else { 2 }
    }

    pub(super) fn op_ld_rp_nn<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, op: u8) -> u32 {
        let rp = (op >> 4) & 3;
        let val = self.fetch_u16(bus, master);
        self.set_rp(rp, val);
        3
    }

    /// `store == true`: write A to `addr`. `store == false`: load A from `addr`.
    pub(super) fn op_ld_indirect_a<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        master: BusMaster,
        addr: u16,
        store: bool,
    ) -> u32 {
        if store {
            bus.write(master, addr, self.a);
        } else {
            self.a = bus.read(master, addr);
        }
        2
    }

    pub(super) fn op_ld_a16_sp<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster) -> u32 {
        let addr = self.fetch_u16(bus, master);
        bus.write(master, addr, self.sp as u8);
        bus.write(master, addr.wrapping_add(1), (self.sp >> 8) as u8);
        5
    }

    pub(super) fn op_ld_a16_a<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, store: bool) -> u32 {
        let addr = self.fetch_u16(bus, master);
        if store {
            bus.write(master, addr, self.a);
        } else {
            self.a = bus.read(master, addr);
        }
        4
    }

    /// LDH (a8),A / LDH A,(a8) / LD (C),A / LD A,(C).
    /// `store == true` writes A into memory; `via_a8` selects an immediate
    /// offset byte over register C as the low address byte.
    pub(super) fn op_ldh<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        master: BusMaster,
        store: bool,
        via_a8: bool,
    ) -> u32 {
        let low = if via_a8 { self.fetch_u8(bus, master) } else { self.c };
        let addr = 0xFF00 | low as u16;
        if store {
            bus.write(master, addr, self.a);
        } else {
            self.a = bus.read(master, addr);
        }
        if via_a8 { 3 } else { 2 }
    }
}
