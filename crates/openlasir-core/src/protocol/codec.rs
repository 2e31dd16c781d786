use super::error::CodecError;
use super::layout;
use crate::{IrCode, Packet, PacketSummary};

/// Packs a packet into its address/command pair.
///
/// `mode` is masked to 5 bits and `data` to 3 bits; extra high bits are
/// discarded rather than rejected.
///
/// # Examples
/// ```
/// use openlasir_core::encode_general_packet;
///
/// let code = encode_general_packet(1, 200, 11, 5);
/// assert_eq!(code.address, 1);
/// assert_eq!(code.command, 0xABC8);
/// ```
pub fn encode_general_packet(block_id: u8, device_id: u8, mode: u8, data: u8) -> IrCode {
    let command = (u16::from(data & layout::DATA_MASK) << layout::DATA_SHIFT)
        | (u16::from(mode & layout::MODE_MASK) << layout::MODE_SHIFT)
        | u16::from(device_id);
    IrCode {
        address: block_id,
        command,
    }
}

/// Packs a `laser_tag_fire` packet carrying `color` in its data field.
pub fn encode_laser_tag_fire(block_id: u8, device_id: u8, color: u8) -> IrCode {
    encode_general_packet(block_id, device_id, layout::MODE_LASER_TAG_FIRE, color)
}

/// Like [`encode_general_packet`], but rejects values wider than their field.
pub fn try_encode_general_packet(
    block_id: u8,
    device_id: u8,
    mode: u8,
    data: u8,
) -> Result<IrCode, CodecError> {
    if mode > layout::MODE_MAX {
        return Err(CodecError::ModeOutOfRange { mode });
    }
    if data > layout::DATA_MAX {
        return Err(CodecError::DataOutOfRange { data });
    }
    Ok(encode_general_packet(block_id, device_id, mode, data))
}

/// Like [`encode_laser_tag_fire`], but rejects colors past the color table.
pub fn try_encode_laser_tag_fire(
    block_id: u8,
    device_id: u8,
    color: u8,
) -> Result<IrCode, CodecError> {
    if color > layout::DATA_MAX {
        return Err(CodecError::ColorOutOfRange { color });
    }
    Ok(encode_laser_tag_fire(block_id, device_id, color))
}

/// Unpacks an address/command pair. Never fails.
pub fn decode_general_packet(address: u8, command: u16) -> Packet {
    Packet {
        block_id: address,
        device_id: (command & layout::DEVICE_ID_MASK) as u8,
        mode: (command >> layout::MODE_SHIFT) as u8 & layout::MODE_MASK,
        data: (command >> layout::DATA_SHIFT) as u8 & layout::DATA_MASK,
    }
}

/// Unpacks an address/command pair and reports whether it is a
/// `laser_tag_fire` packet.
///
/// The returned packet is the general decode either way; its data field is
/// only a fire color when the flag is `true`.
///
/// # Examples
/// ```
/// use openlasir_core::{decode_laser_tag_fire, encode_laser_tag_fire};
///
/// let code = encode_laser_tag_fire(7, 42, 4);
/// let (packet, matched) = decode_laser_tag_fire(code.address, code.command);
/// assert!(matched);
/// assert_eq!(packet.data, 4);
/// ```
pub fn decode_laser_tag_fire(address: u8, command: u16) -> (Packet, bool) {
    let packet = decode_general_packet(address, command);
    (packet, packet.mode == layout::MODE_LASER_TAG_FIRE)
}

/// Decodes an address/command pair and resolves its table names.
pub fn summarize(address: u8, command: u16) -> PacketSummary {
    decode_general_packet(address, command).summary()
}
