//! OpenLASIR packet encoding.
//!
//! The protocol follows a layered structure:
//! - `layout`: bit shifts and masks of the command word (source of truth)
//! - `tables`: mode and color lookup tables
//! - `codec`: packing and unpacking of packets (no direct bit literals)
//! - `error`: explicit errors for the strict and named APIs
//!
//! Everything here is pure; moving the address/command pair onto an infrared
//! carrier is the transport's job.

pub mod codec;
pub mod error;
pub mod layout;
pub mod tables;

pub use codec::{
    decode_general_packet, decode_laser_tag_fire, encode_general_packet, encode_laser_tag_fire,
    summarize, try_encode_general_packet, try_encode_laser_tag_fire,
};
pub use error::CodecError;
pub use tables::{
    COLOR_COUNT, COLOR_NAMES, COLOR_RGB, Color, MODE_COUNT, MODE_NAMES, Mode, UNKNOWN_NAME,
    color_name, color_rgb, mode_name,
};
