//! SMPP v3.4 PDU header codec and command status registry.
//!
//! Every PDU starts with a 16 byte header carrying its length, command id,
//! command status and sequence number. [`PduHeader`] reads and writes that
//! header, rejecting lengths a body reader must never act on, and
//! [`CommandStatus`] turns any status value into a diagnostic.
//!
//! ```rust
//! use smpp_header::{CommandId, CommandStatus, PduHeader};
//!
//! let wire = [
//!     0x00, 0x00, 0x00, 0x10, // command_length
//!     0x80, 0x00, 0x00, 0x00, // generic_nack
//!     0x00, 0x00, 0x00, 0x01, // ESME_RINVMSGLEN
//!     0x00, 0x00, 0x00, 0x0D, // sequence_number
//! ];
//!
//! let header = PduHeader::read_from(&mut &wire[..])?;
//! assert_eq!(header.command_id, CommandId::GenericNack);
//! assert_eq!(header.command_status, CommandStatus::INVALID_MSG_LENGTH);
//! assert_eq!(header.command_status.to_string(), "invalid message length");
//! assert_eq!(header.to_bytes(), wire);
//! # Ok::<(), smpp_header::CodecError>(())
//! ```

#[macro_use]
mod macros;

pub mod codec;
pub mod datatypes;


pub use codec::{CodecError, HEADER_LEN, MAX_PDU_SIZE, PduHeader, frame_length};
pub use datatypes::{CommandId, CommandStatus};

/// Error returned by the demo binaries and other callers that mix header
/// errors with their own.
///
/// The codec itself returns the structured [`CodecError`]; it converts into
/// this boxed form with `?`.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for callers using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
