// SMPP v3.4 PDU header codec
//
// Every PDU starts with the same 16 byte header. This module is the only place
// that turns those bytes into a `PduHeader` and back, and the only place that
// enforces the length bounds body decoders rely on before they allocate.

use crate::datatypes::{CommandId, CommandStatus};
use bytes::{Buf, BufMut};
use std::io::{self, Read, Write};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of the PDU header in bytes.
pub const HEADER_LEN: usize = 16;

/// Maximum allowed PDU size to prevent memory exhaustion attacks.
///
/// A body reader allocates `command_length - HEADER_LEN` bytes based on a
/// field the peer controls, so every decode path rejects anything above this.
pub const MAX_PDU_SIZE: u32 = 65536 + 4096;

/// SMPP v3.4 PDU Header (16 bytes, common to all PDUs)
///
/// ```text
/// offset  width  field
///      0      4  command_length   total PDU size, header included
///      4      4  command_id
///      8      4  command_status   0 = ESME_ROK
///     12      4  sequence_number
/// ```
///
/// All fields are big-endian.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PduHeader {
    pub command_length: u32,
    pub command_id: CommandId,
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

/// Header codec errors. All of them are terminal for the call that produced
/// them; retrying is up to the connection layer.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The source ended (or failed) before a full header was read. `read` is
    /// the number of header bytes received, so `0` means no data at all.
    #[error("short read: got {read} of {expected} header bytes: {source}", expected = HEADER_LEN)]
    ShortRead {
        read: usize,
        #[source]
        source: io::Error,
    },

    #[error("PDU too small: {length} < {min}", min = HEADER_LEN)]
    HeaderTooSmall { length: u32 },

    #[error("PDU too large: {length} > {max}", max = MAX_PDU_SIZE)]
    HeaderTooLarge { length: u32 },

    #[error("failed to write PDU header: {source}")]
    WriteFailure {
        #[source]
        source: io::Error,
    },
}

impl CodecError {
    /// `true` when the source was already at end of input, i.e. the peer
    /// closed cleanly between PDUs rather than in the middle of one.
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            CodecError::ShortRead { read: 0, source } if source.kind() == io::ErrorKind::UnexpectedEof
        )
    }

    /// Status to report back to the peer (e.g. in a generic_nack) for this
    /// error.
    pub fn to_command_status(&self) -> CommandStatus {
        match self {
            CodecError::ShortRead { .. }
            | CodecError::HeaderTooSmall { .. }
            | CodecError::HeaderTooLarge { .. } => CommandStatus::INVALID_COMMAND_LENGTH,
            CodecError::WriteFailure { .. } => CommandStatus::SYSTEM_ERROR,
        }
    }
}

impl PduHeader {
    /// Header for a PDU without a body.
    pub fn new(command_id: CommandId, command_status: CommandStatus, sequence_number: u32) -> Self {
        PduHeader {
            command_length: HEADER_LEN as u32,
            command_id,
            command_status,
            sequence_number,
        }
    }

    /// Sets `command_length` for a body of `body_len` bytes.
    pub fn with_body_len(mut self, body_len: usize) -> Result<Self, CodecError> {
        let length = body_len
            .checked_add(HEADER_LEN)
            .and_then(|total| u32::try_from(total).ok())
            .unwrap_or(u32::MAX);
        check_length(length)?;
        self.command_length = length;
        Ok(self)
    }

    /// Number of body bytes that follow the header.
    pub fn body_len(&self) -> usize {
        (self.command_length as usize).saturating_sub(HEADER_LEN)
    }

    pub fn is_response(&self) -> bool {
        self.command_id.is_response()
    }

    /// Decode a header from exactly 16 bytes, validating `command_length`.
    ///
    /// The command id and status are not checked: unknown values are kept
    /// as they are.
    pub fn from_bytes(raw: &[u8; HEADER_LEN]) -> Result<Self, CodecError> {
        let mut buf = &raw[..];
        let command_length = buf.get_u32();
        check_length(command_length)?;

        let header = PduHeader {
            command_length,
            command_id: CommandId::from(buf.get_u32()),
            command_status: CommandStatus::from(buf.get_u32()),
            sequence_number: buf.get_u32(),
        };

        tracing::trace!(
            command_id = %header.command_id,
            command_status = header.command_status.value(),
            sequence_number = header.sequence_number,
            command_length,
            "decoded PDU header"
        );

        Ok(header)
    }

    /// Decode a header from a buffer of already received bytes.
    ///
    /// If fewer than 16 bytes are buffered nothing is consumed and
    /// `ShortRead` is returned. Otherwise the 16 header bytes are consumed,
    /// even when the length turns out to be out of bounds.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, CodecError> {
        let remaining = buf.remaining();
        if remaining < HEADER_LEN {
            return Err(CodecError::ShortRead {
                read: remaining,
                source: io::ErrorKind::UnexpectedEof.into(),
            });
        }

        let mut raw = [0u8; HEADER_LEN];
        buf.copy_to_slice(&mut raw);
        Self::from_bytes(&raw)
    }

    /// Read exactly one header from a blocking reader.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self, CodecError> {
        let mut raw = [0u8; HEADER_LEN];
        let mut read = 0;

        while read < HEADER_LEN {
            match reader.read(&mut raw[read..]) {
                Ok(0) => return Err(short_read(read, io::ErrorKind::UnexpectedEof.into())),
                Ok(n) => read += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(short_read(read, e)),
            }
        }

        Self::from_bytes(&raw)
    }

    /// Read exactly one header from an async reader.
    ///
    /// Cancel safety: if the future is dropped after some bytes arrived,
    /// those bytes are lost and the stream is no longer aligned on a PDU.
    pub async fn read<R>(reader: &mut R) -> Result<Self, CodecError>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let mut raw = [0u8; HEADER_LEN];
        let mut read = 0;

        while read < HEADER_LEN {
            match reader.read(&mut raw[read..]).await {
                Ok(0) => return Err(short_read(read, io::ErrorKind::UnexpectedEof.into())),
                Ok(n) => read += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(short_read(read, e)),
            }
        }

        Self::from_bytes(&raw)
    }

    /// Encode PDU header to buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32(self.command_length);
        buf.put_u32(self.command_id.into());
        buf.put_u32(self.command_status.into());
        buf.put_u32(self.sequence_number);
    }

    /// The 16 byte wire form of this header.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut raw = [0u8; HEADER_LEN];
        self.encode(&mut &mut raw[..]);
        raw
    }

    /// Write the header to a blocking writer.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), CodecError> {
        writer
            .write_all(&self.to_bytes())
            .map_err(|source| CodecError::WriteFailure { source })
    }

    /// Write the header to an async writer.
    ///
    /// The writer is not flushed; the body usually follows on the same
    /// buffered stream.
    pub async fn write<W>(&self, writer: &mut W) -> Result<(), CodecError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        writer
            .write_all(&self.to_bytes())
            .await
            .map_err(|source| CodecError::WriteFailure { source })
    }
}

/// Checks whether `buf` starts with a complete PDU.
///
/// Returns `Ok(None)` while the header or the body is still incomplete and
/// `Ok(Some(len))` with the full PDU length once it is buffered. The length
/// bounds are checked as soon as the header is available so an oversized
/// frame is rejected before the caller buffers its body.
pub fn frame_length(buf: &[u8]) -> Result<Option<usize>, CodecError> {
    if buf.len() < HEADER_LEN {
        return Ok(None);
    }

    let command_length = (&buf[..4]).get_u32();
    check_length(command_length)?;

    let len = command_length as usize;
    if buf.len() < len {
        return Ok(None);
    }

    Ok(Some(len))
}

fn check_length(length: u32) -> Result<(), CodecError> {
    if length < HEADER_LEN as u32 {
        tracing::debug!(
            length,
            "rejecting PDU header: command_length below header size"
        );
        return Err(CodecError::HeaderTooSmall { length });
    }

    if length > MAX_PDU_SIZE {
        tracing::debug!(
            length,
            max = MAX_PDU_SIZE,
            "rejecting PDU header: command_length too large"
        );
        return Err(CodecError::HeaderTooLarge { length });
    }

    Ok(())
}

fn short_read(read: usize, source: io::Error) -> CodecError {
    tracing::debug!(read, error = %source, "short read on PDU header");
    CodecError::ShortRead { read, source }
}
