use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use openlasir_core::{CodecError, Color, IrCode, Mode, Rgb};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "openlasir")]
#[command(version)]
#[command(
    about = "Encode and decode OpenLASIR infrared packets.",
    long_about = None,
    after_help = "Examples:\n  openlasir fire --block 7 --device 42 --color Red\n  openlasir encode --block 1 --device 200 --mode general_interact --data 5\n  openlasir decode 7 0x802a"
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a packet into an address/command pair.
    Encode {
        /// Block ID (0-255)
        #[arg(long)]
        block: String,

        /// Device ID (0-255)
        #[arg(long)]
        device: String,

        /// Mode name or code
        #[arg(long, allow_hyphen_values = true)]
        mode: String,

        /// Color name or data code
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        data: String,

        /// Reject mode/data values wider than their field instead of masking
        #[arg(long)]
        strict: bool,
    },
    /// Encode a laser tag fire packet.
    Fire {
        /// Block ID (0-255)
        #[arg(long)]
        block: String,

        /// Device ID (0-255)
        #[arg(long)]
        device: String,

        /// Color name or code
        #[arg(long, allow_hyphen_values = true)]
        color: String,

        /// Reject color codes past the color table instead of masking
        #[arg(long)]
        strict: bool,
    },
    /// Decode an address/command pair (decimal or 0x hex).
    Decode {
        address: String,
        command: String,

        /// Fail unless the packet is a laser tag fire packet
        #[arg(long)]
        fire: bool,
    },
    /// List named modes.
    Modes,
    /// List colors and their RGB values.
    Colors,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let result = match cli.command {
        Commands::Encode {
            block,
            device,
            mode,
            data,
            strict,
        } => cmd_encode(&block, &device, &mode, &data, strict, pretty),
        Commands::Fire {
            block,
            device,
            color,
            strict,
        } => cmd_fire(&block, &device, &color, strict, pretty),
        Commands::Decode {
            address,
            command,
            fire,
        } => cmd_decode(&address, &command, fire, pretty),
        Commands::Modes => cmd_modes(pretty),
        Commands::Colors => cmd_colors(pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

impl From<CodecError> for CliError {
    fn from(err: CodecError) -> Self {
        let hint = match &err {
            CodecError::ModeOutOfRange { .. } => "modes are 5-bit codes (0-31)",
            CodecError::DataOutOfRange { .. } => "data is a 3-bit code (0-7)",
            CodecError::ColorOutOfRange { .. } => "colors are codes 0-7; see `openlasir colors`",
            CodecError::UnnamedMode { .. } => "pass the numeric code for unnamed modes",
            CodecError::UnknownModeName { .. } => "see `openlasir modes` for valid names",
            CodecError::UnknownColorName { .. } => "see `openlasir colors` for valid names",
        };
        CliError::new(err.to_string(), Some(hint.to_string()))
    }
}

#[derive(Serialize)]
struct ModeEntry {
    code: u8,
    name: &'static str,
}

#[derive(Serialize)]
struct ColorEntry {
    code: u8,
    name: &'static str,
    rgb: Rgb,
}

fn cmd_encode(
    block: &str,
    device: &str,
    mode: &str,
    data: &str,
    strict: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let block = parse_u8("block", block)?;
    let device = parse_u8("device", device)?;
    let mode = parse_mode(mode)?;
    let data = parse_color("data", data)?;

    let code = if strict {
        openlasir_core::try_encode_general_packet(block, device, mode, data)?
    } else {
        openlasir_core::encode_general_packet(block, device, mode, data)
    };
    print_json(&code, pretty)
}

fn cmd_fire(
    block: &str,
    device: &str,
    color: &str,
    strict: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let block = parse_u8("block", block)?;
    let device = parse_u8("device", device)?;
    let color = parse_color("color", color)?;

    let code = if strict {
        openlasir_core::try_encode_laser_tag_fire(block, device, color)?
    } else {
        openlasir_core::encode_laser_tag_fire(block, device, color)
    };
    print_json(&code, pretty)
}

fn cmd_decode(address: &str, command: &str, fire: bool, pretty: bool) -> Result<(), CliError> {
    let code = IrCode::new(parse_u8("address", address)?, parse_u16("command", command)?);

    let (packet, matched) = code.decode_laser_tag_fire();
    if fire && !matched {
        return Err(CliError::new(
            format!(
                "not a laser tag fire packet: mode {} ({})",
                packet.mode,
                openlasir_core::mode_name(packet.mode)
            ),
            Some("omit --fire to decode any packet".to_string()),
        ));
    }
    print_json(&packet.summary(), pretty)
}

fn cmd_modes(pretty: bool) -> Result<(), CliError> {
    let entries = Mode::ALL
        .into_iter()
        .map(|mode| ModeEntry {
            code: mode.code(),
            name: mode.name(),
        })
        .collect::<Vec<_>>();
    print_json(&entries, pretty)
}

fn cmd_colors(pretty: bool) -> Result<(), CliError> {
    let entries = Color::ALL
        .into_iter()
        .map(|color| ColorEntry {
            code: color.code(),
            name: color.name(),
            rgb: color.rgb(),
        })
        .collect::<Vec<_>>();
    print_json(&entries, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn parse_mode(raw: &str) -> Result<u8, CliError> {
    if looks_numeric(raw) {
        return parse_u8("mode", raw);
    }
    Ok(raw.parse::<Mode>()?.code())
}

fn parse_color(field: &str, raw: &str) -> Result<u8, CliError> {
    if looks_numeric(raw) {
        return parse_u8(field, raw);
    }
    Ok(raw.parse::<Color>()?.code())
}

fn parse_u8(field: &str, raw: &str) -> Result<u8, CliError> {
    parse_number(raw)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or_else(|| {
            CliError::new(
                format!("invalid {} '{}'", field, raw),
                Some("expected a number 0-255 (decimal or 0x hex)".to_string()),
            )
        })
}

fn parse_u16(field: &str, raw: &str) -> Result<u16, CliError> {
    parse_number(raw)
        .and_then(|value| u16::try_from(value).ok())
        .ok_or_else(|| {
            CliError::new(
                format!("invalid {} '{}'", field, raw),
                Some("expected a number 0-65535 (decimal or 0x hex)".to_string()),
            )
        })
}

// Table names start with a letter; anything else is a malformed number.
fn looks_numeric(raw: &str) -> bool {
    raw.trim()
        .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
}

fn parse_number(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}
