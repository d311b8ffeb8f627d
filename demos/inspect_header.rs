// ABOUTME: Example application that decodes an SMPP PDU header given as hex
// ABOUTME: Prints the header fields together with the command name and status description

use argh::FromArgs;
use smpp_header::{CodecError, PduHeader};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Decode a 16 byte SMPP PDU header and explain its fields
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// the header as hex, whitespace allowed
    /// (e.g. "00000010 80000000 00000001 0000000d")
    #[argh(positional)]
    hex: Vec<String>,
}

fn parse_hex(input: &str) -> smpp_header::Result<Vec<u8>> {
    let digits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("odd number of hex digits".into());
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let byte: String = pair.iter().collect();
        let value =
            u8::from_str_radix(&byte, 16).map_err(|e| format!("invalid hex {byte:?}: {e}"))?;
        bytes.push(value);
    }

    Ok(bytes)
}

fn main() -> smpp_header::Result<()> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let bytes = parse_hex(&cli_args.hex.join(" "))?;

    let header = match PduHeader::read_from(&mut bytes.as_slice()) {
        Ok(header) => header,
        Err(err @ CodecError::ShortRead { .. }) => {
            tracing::error!("need 16 bytes, got {}: {err}", bytes.len());
            return Err(err.into());
        }
        Err(err) => {
            tracing::error!(
                "rejected header ({}); a peer would answer with generic_nack status {:#010x}",
                err,
                err.to_command_status().value()
            );
            return Err(err.into());
        }
    };

    println!("command_length:  {}", header.command_length);
    println!(
        "command_id:      {:#010x} {}",
        header.command_id.value(),
        header.command_id.name().unwrap_or("(unknown)")
    );
    println!(
        "command_status:  {:#010x} {}",
        header.command_status.value(),
        header.command_status
    );
    println!("sequence_number: {}", header.sequence_number);
    println!("body bytes:      {}", header.body_len());

    if bytes.len() > header.command_length as usize {
        tracing::warn!(
            "{} bytes past the end of the PDU were ignored",
            bytes.len() - header.command_length as usize
        );
    }

    Ok(())
}
