use super::{Flag, Sm83};
use crate::core::{Bus, BusMaster};

impl Sm83 {
    pub(super) fn op_push<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, rp: u8) -> u32 {
        let val = self.rp2(rp);
        self.push16(bus, master, val);
        4
    }

    pub(super) fn op_pop<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster, rp: u8) -> u32 {
        let val = self.pop16(bus, master);
        self.set_rp2(rp, val);
        3
    }

    fn add_sp_offset(&mut self, offset: i8) -> u16 {
        let sp = self.sp;
        let result = sp.wrapping_add(offset as i16 as u16);
        let unsigned = offset as u8;
        self.set_flag(Flag::Z, false);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (sp & 0xF) + (unsigned as u16 & 0xF) > 0xF);
        self.set_flag(Flag::C, (sp & 0xFF) + (unsigned as u16) > 0xFF);
        result
    }

    pub(super) fn op_add_sp_r8<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster) -> u32 {
        let offset = self.fetch_i8(bus, master);
        self.sp = self.add_sp_offset(offset);
        4
    }

    pub(super) fn op_ld_hl_sp_r8<B: Bus + ?Sized>(&mut self, bus: &mut B, master: BusMaster) -> u32 {
        let offset = self.fetch_i8(bus, master);
        let result = self.add_sp_offset(offset);
        self.set_hl(result);
        3
    }
}
