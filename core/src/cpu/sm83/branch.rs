use super::Sm83;
use crate::core::{Bus, BusMaster};

impl Sm83 {
    pub(super) fn op_jr<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, take: bool) -> u32 {
        let offset = self.fetch_i8(bus, master);
        if take {
            self.next_pc = self.next_pc.wrapping_add(offset as i16 as u16);
            3
        } else {
            2
        }
    }

    pub(super) fn op_jp<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, take: bool) -> u32 {
        let addr = self.fetch_u16(bus, master);
        if take {
            self.next_pc = addr;
            4
        } else {
            3
        }
    }

    pub(super) fn op_call<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, take: bool) -> u32 {
        let addr = self.fetch_u16(bus, master);
        if take {
            let ret = self.next_pc;
            self.push16(bus, master, ret);
            self.next_pc = addr;
            6
        } else {
            3
        }
    }

    /// `conditional` distinguishes RET cc (2/5 cycles) from plain RET/RETI
    /// (always 4); `reenable_ime` is set for RETI only.
    pub(super) fn op_ret<B: Bus + ?Sized>(
        &mut self,
        bus: &mut B,
        master: BusMaster,
        take: bool,
        conditional: bool,
        reenable_ime: bool,
    ) -> u32 {
        if conditional && !take {
            return 2;
        }
        let addr = self.pop16(bus, master);
        self.next_pc = addr;
        if reenable_ime {
            bus.set_ime(true);
        }
        if conditional { 5 } else { 4 }
    }

    pub(super) fn op_rst<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, vector: u8) -> u32 {
        let ret = self.next_pc;
        self.push16(bus, master, ret);
        self.next_pc = vector as u16;
        4
    }
}
