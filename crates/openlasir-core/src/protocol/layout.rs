//! Bit positions of the OpenLASIR command word.

pub const DEVICE_ID_MASK: u16 = 0x00FF;

pub const MODE_SHIFT: u32 = 8;
pub const MODE_MASK: u8 = 0x1F;
pub const MODE_MAX: u8 = MODE_MASK;

pub const DATA_SHIFT: u32 = 13;
pub const DATA_MASK: u8 = 0x07;
pub const DATA_MAX: u8 = DATA_MASK;

pub const MODE_LASER_TAG_FIRE: u8 = 0;
