//! OpenLASIR core library: packet encoding for interactive infrared devices.
//!
//! An OpenLASIR packet carries four fields (block ID, device ID, mode and a
//! mode-dependent data field) in an 8-bit address and a 16-bit command. This
//! crate packs and unpacks that pair and resolves mode and color codes to
//! their names and RGB values. The transport that modulates the pair onto an
//! infrared carrier lives outside this crate.
//!
//! Invariants:
//! - The command layout is bit-exact: device ID in bits 0-7, mode in bits
//!   8-12, data in bits 13-15.
//! - Encoding masks oversized mode/data values; decoding always yields
//!   in-range fields.
//! - Every operation is pure, total and constant time.
//!
//! # Examples
//! ```
//! use openlasir_core::{Color, decode_laser_tag_fire, encode_laser_tag_fire};
//!
//! let code = encode_laser_tag_fire(0, 42, Color::Red.code());
//! let (packet, matched) = decode_laser_tag_fire(code.address, code.command);
//! assert!(matched);
//! assert_eq!(packet.device_id, 42);
//! ```

use serde::{Deserialize, Serialize};

pub mod protocol;

pub use protocol::{
    COLOR_COUNT, CodecError, Color, MODE_COUNT, Mode, UNKNOWN_NAME, color_name, color_rgb,
    decode_general_packet, decode_laser_tag_fire, encode_general_packet, encode_laser_tag_fire,
    mode_name, summarize, try_encode_general_packet, try_encode_laser_tag_fire,
};

/// A decoded OpenLASIR packet.
///
/// `mode` fits in 5 bits and `data` in 3 bits whenever the packet comes from
/// a decoder.
///
/// # Examples
/// ```
/// use openlasir_core::Packet;
///
/// let packet = Packet {
///     block_id: 7,
///     device_id: 42,
///     mode: 0,
///     data: 4,
/// };
/// assert!(packet.is_laser_tag_fire());
/// assert_eq!(packet.encode().decode(), packet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Packet {
    /// Transmitter group, carried verbatim in the address byte.
    pub block_id: u8,
    /// Device within the block (command bits 0-7).
    pub device_id: u8,
    /// Mode code (command bits 8-12).
    pub mode: u8,
    /// Mode-dependent data, a color code for fire packets (command bits 13-15).
    pub data: u8,
}

impl Packet {
    /// Encodes this packet, masking `mode` and `data` to their field widths.
    pub fn encode(&self) -> IrCode {
        encode_general_packet(self.block_id, self.device_id, self.mode, self.data)
    }

    pub fn is_laser_tag_fire(&self) -> bool {
        self.mode == protocol::layout::MODE_LASER_TAG_FIRE
    }

    /// Resolves the mode name and, for color-carrying modes, the color.
    pub fn summary(&self) -> PacketSummary {
        let carries_color = Mode::try_from(self.mode).is_ok_and(Mode::carries_color);
        let color = if carries_color {
            Color::try_from(self.data).ok()
        } else {
            None
        };
        PacketSummary {
            block_id: self.block_id,
            device_id: self.device_id,
            mode: self.mode,
            data: self.data,
            mode_name: mode_name(self.mode).to_string(),
            color_name: color.map(|color| color.name().to_string()),
            color_rgb: color.map(Color::rgb),
        }
    }
}

/// Wire representation of a packet: the pair handed to an IR transport.
///
/// # Examples
/// ```
/// use openlasir_core::IrCode;
///
/// let code = IrCode::new(7, 0x802A);
/// let (packet, matched) = code.decode_laser_tag_fire();
/// assert!(matched);
/// assert_eq!(packet.block_id, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IrCode {
    /// 8-bit address (block ID).
    pub address: u8,
    /// 16-bit command (device ID, mode, data).
    pub command: u16,
}

impl IrCode {
    pub fn new(address: u8, command: u16) -> Self {
        Self { address, command }
    }

    pub fn decode(&self) -> Packet {
        decode_general_packet(self.address, self.command)
    }

    pub fn decode_laser_tag_fire(&self) -> (Packet, bool) {
        decode_laser_tag_fire(self.address, self.command)
    }
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Human-oriented view of a decoded packet.
///
/// # Examples
/// ```
/// use openlasir_core::summarize;
///
/// let summary = summarize(7, 0x802A);
/// assert_eq!(summary.mode_name, "laser_tag_fire");
/// assert_eq!(summary.color_name.as_deref(), Some("Red"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketSummary {
    pub block_id: u8,
    pub device_id: u8,
    pub mode: u8,
    pub data: u8,
    /// Mode name, or `"unknown"` for unnamed codes.
    pub mode_name: String,
    /// Color name, present only for color-carrying modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_name: Option<String>,
    /// Color RGB value, present only for color-carrying modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_rgb: Option<Rgb>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_json_shape() {
        let packet = Packet {
            block_id: 1,
            device_id: 2,
            mode: 3,
            data: 4,
        };
        let json = serde_json::to_string(&packet).unwrap();
        assert_eq!(json, r#"{"block_id":1,"device_id":2,"mode":3,"data":4}"#);
    }

    #[test]
    fn summary_omits_color_for_plain_modes() {
        let summary = IrCode::new(1, 0x0103).decode().summary();
        assert_eq!(summary.mode_name, "user_presence_announcement");
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("color_name"));
        assert!(!json.contains("color_rgb"));
    }

    #[test]
    fn summary_includes_color_for_color_set() {
        let code = encode_general_packet(3, 17, Mode::ColorSetTemporary.code(), 6);
        let summary = code.decode().summary();
        assert_eq!(summary.color_name.as_deref(), Some("Orange"));
        assert_eq!(summary.color_rgb, Some(Rgb::new(255, 165, 0)));
    }

    #[test]
    fn ir_code_decode_matches_free_functions() {
        let code = IrCode::new(9, 0xE5FF);
        assert_eq!(code.decode(), decode_general_packet(9, 0xE5FF));
        assert_eq!(code.decode_laser_tag_fire(), decode_laser_tag_fire(9, 0xE5FF));
    }
}
