//! Mode and color lookup tables.
//!
//! Both tables are immutable `'static` data indexed by the numeric code
//! carried on the wire. Lookups outside a table never fail: names fall back
//! to [`UNKNOWN_NAME`] and RGB lookups return `None`.

use std::fmt;
use std::str::FromStr;

use super::error::CodecError;
use crate::Rgb;

/// Number of named modes (codes `0..MODE_COUNT`).
pub const MODE_COUNT: usize = 12;
/// Number of colors (codes `0..COLOR_COUNT`).
pub const COLOR_COUNT: usize = 8;
/// Name returned for codes without a table entry.
pub const UNKNOWN_NAME: &str = "unknown";

pub static MODE_NAMES: [&str; MODE_COUNT] = [
    "laser_tag_fire",
    "user_presence_announcement",
    "base_station_presence_announcement",
    "user_to_user_handshake_initiation",
    "user_to_user_handshake_response",
    "user_to_base_station_handshake_initiation",
    "user_to_base_station_handshake_response",
    "base_station_to_user_handshake_initiation",
    "base_station_to_user_handshake_response",
    "color_set_temporary",
    "color_set_permanent",
    "general_interact",
];

pub static COLOR_NAMES: [&str; COLOR_COUNT] = [
    "Cyan", "Magenta", "Yellow", "Green", "Red", "Blue", "Orange", "White",
];

pub static COLOR_RGB: [Rgb; COLOR_COUNT] = [
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 255),
];

/// Returns the display name of `mode`, or `"unknown"` for unnamed codes.
///
/// # Examples
/// ```
/// use openlasir_core::mode_name;
///
/// assert_eq!(mode_name(11), "general_interact");
/// assert_eq!(mode_name(12), "unknown");
/// ```
pub fn mode_name(mode: u8) -> &'static str {
    MODE_NAMES
        .get(usize::from(mode))
        .copied()
        .unwrap_or(UNKNOWN_NAME)
}

/// Returns the display name of `color`, or `"unknown"` past the table end.
pub fn color_name(color: u8) -> &'static str {
    COLOR_NAMES
        .get(usize::from(color))
        .copied()
        .unwrap_or(UNKNOWN_NAME)
}

/// Returns the RGB value of `color`, or `None` past the table end.
///
/// # Examples
/// ```
/// use openlasir_core::{Rgb, color_rgb};
///
/// assert_eq!(color_rgb(4), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(color_rgb(8), None);
/// ```
pub fn color_rgb(color: u8) -> Option<Rgb> {
    COLOR_RGB.get(usize::from(color)).copied()
}

/// Named packet modes.
///
/// Codes 12 through 31 are valid on the wire but have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    LaserTagFire = 0,
    UserPresenceAnnouncement = 1,
    BaseStationPresenceAnnouncement = 2,
    UserToUserHandshakeInitiation = 3,
    UserToUserHandshakeResponse = 4,
    UserToBaseStationHandshakeInitiation = 5,
    UserToBaseStationHandshakeResponse = 6,
    BaseStationToUserHandshakeInitiation = 7,
    BaseStationToUserHandshakeResponse = 8,
    ColorSetTemporary = 9,
    ColorSetPermanent = 10,
    GeneralInteract = 11,
}

impl Mode {
    /// All named modes in code order.
    pub const ALL: [Mode; MODE_COUNT] = [
        Mode::LaserTagFire,
        Mode::UserPresenceAnnouncement,
        Mode::BaseStationPresenceAnnouncement,
        Mode::UserToUserHandshakeInitiation,
        Mode::UserToUserHandshakeResponse,
        Mode::UserToBaseStationHandshakeInitiation,
        Mode::UserToBaseStationHandshakeResponse,
        Mode::BaseStationToUserHandshakeInitiation,
        Mode::BaseStationToUserHandshakeResponse,
        Mode::ColorSetTemporary,
        Mode::ColorSetPermanent,
        Mode::GeneralInteract,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        MODE_NAMES[usize::from(self.code())]
    }

    /// Whether the data field of this mode holds a color code.
    pub fn carries_color(self) -> bool {
        matches!(
            self,
            Mode::LaserTagFire | Mode::ColorSetTemporary | Mode::ColorSetPermanent
        )
    }
}

impl TryFrom<u8> for Mode {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CodecError::UnnamedMode { mode: code })
    }
}

impl FromStr for Mode {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| CodecError::UnknownModeName {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors carried in the 3-bit data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Cyan = 0,
    Magenta = 1,
    Yellow = 2,
    Green = 3,
    Red = 4,
    Blue = 5,
    Orange = 6,
    White = 7,
}

impl Color {
    /// All colors in code order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::White,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        COLOR_NAMES[usize::from(self.code())]
    }

    pub fn rgb(self) -> Rgb {
        COLOR_RGB[usize::from(self.code())]
    }
}

impl TryFrom<u8> for Color {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CodecError::ColorOutOfRange { color: code })
    }
}

impl FromStr for Color {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or_else(|| CodecError::UnknownColorName {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
