use num_enum::{FromPrimitive, IntoPrimitive};
use std::fmt;

/// The command_id field of the PDU header identifies the SMPP operation.
///
/// Values outside the SMPP v3.4 command set are not rejected: they decode to
/// `Unknown` with the raw value preserved, so a header can always be
/// re-encoded bit for bit.
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandId {
    GenericNack = 0x8000_0000,
    BindReceiver = 0x0000_0001,
    BindReceiverResp = 0x8000_0001,
    BindTransmitter = 0x0000_0002,
    BindTransmitterResp = 0x8000_0002,
    QuerySm = 0x0000_0003,
    QuerySmResp = 0x8000_0003,
    SubmitSm = 0x0000_0004,
    SubmitSmResp = 0x8000_0004,
    DeliverSm = 0x0000_0005,
    DeliverSmResp = 0x8000_0005,
    Unbind = 0x0000_0006,
    UnbindResp = 0x8000_0006,
    ReplaceSm = 0x0000_0007,
    ReplaceSmResp = 0x8000_0007,
    CancelSm = 0x0000_0008,
    CancelSmResp = 0x8000_0008,
    BindTransceiver = 0x0000_0009,
    BindTransceiverResp = 0x8000_0009,
    // Reserved 0x0000000A - 0x8000000A
    Outbind = 0x0000_000B,
    // Reserved 0x0000000C - 0x00000014
    //          0x8000000B - 0x80000014
    EnquireLink = 0x0000_0015,
    EnquireLinkResp = 0x8000_0015,
    // Reserved 0x00000016 - 0x00000020
    //          0x80000016 - 0x80000020
    SubmitMulti = 0x0000_0021,
    SubmitMultiResp = 0x8000_0021,
    // Reserved 0x00000022 - 0x000000FF
    //          0x80000022 - 0x800000FF
    // Reserved 0x00000100
    // Reserved 0x80000100
    // Reserved 0x00000101 - 0x80000101
    AlertNotification = 0x0000_0102,
    // Reserved 0x80000102
    DataSm = 0x0000_0103,
    DataSmResp = 0x8000_0103,
    /// Any id outside the table above: reserved ranges, SMPP extensions and
    /// SMSC vendor specific commands.
    #[num_enum(catch_all)]
    Unknown(u32),
}

impl CommandId {
    /// Display name used in logs and diagnostics, or `None` for ids outside
    /// the SMPP v3.4 command set.
    pub const fn name(&self) -> Option<&'static str> {
        let name = match self {
            CommandId::GenericNack => "GenericNACK",
            CommandId::BindReceiver => "BindReceiver",
            CommandId::BindReceiverResp => "BindReceiverResp",
            CommandId::BindTransmitter => "BindTransmitter",
            CommandId::BindTransmitterResp => "BindTransmitterResp",
            CommandId::QuerySm => "QuerySM",
            CommandId::QuerySmResp => "QuerySMResp",
            CommandId::SubmitSm => "SubmitSM",
            CommandId::SubmitSmResp => "SubmitSMResp",
            CommandId::DeliverSm => "DeliverSM",
            CommandId::DeliverSmResp => "DeliverSMResp",
            CommandId::Unbind => "Unbind",
            CommandId::UnbindResp => "UnbindResp",
            CommandId::ReplaceSm => "ReplaceSM",
            CommandId::ReplaceSmResp => "ReplaceSMResp",
            CommandId::CancelSm => "CancelSM",
            CommandId::CancelSmResp => "CancelSMResp",
            CommandId::BindTransceiver => "BindTransceiver",
            CommandId::BindTransceiverResp => "BindTransceiverResp",
            CommandId::Outbind => "Outbind",
            CommandId::EnquireLink => "EnquireLink",
            CommandId::EnquireLinkResp => "EnquireLinkResp",
            CommandId::SubmitMulti => "SubmitMulti",
            CommandId::SubmitMultiResp => "SubmitMultiResp",
            CommandId::AlertNotification => "AlertNotification",
            CommandId::DataSm => "DataSM",
            CommandId::DataSmResp => "DataSMResp",
            CommandId::Unknown(_) => return None,
        };
        Some(name)
    }

    /// The raw wire value.
    pub fn value(&self) -> u32 {
        u32::from(*self)
    }

    /// Check if this command_id represents a response PDU
    pub fn is_response(&self) -> bool {
        self.value() & 0x8000_0000 != 0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#010x}", self.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_have_names() {
        assert_eq!(CommandId::from(0x8000_0000).name(), Some("GenericNACK"));
        assert_eq!(CommandId::from(0x0000_0004).name(), Some("SubmitSM"));
        assert_eq!(CommandId::from(0x8000_0015).name(), Some("EnquireLinkResp"));
        assert_eq!(CommandId::from(0x0000_0102).name(), Some("AlertNotification"));
    }

    #[test]
    fn unknown_ids_are_preserved_but_unnamed() {
        // 0x0000000A is reserved
        let id = CommandId::from(0x0000_000A);
        assert_eq!(id, CommandId::Unknown(0x0000_000A));
        assert_eq!(id.name(), None);
        assert_eq!(id.value(), 0x0000_000A);
        assert_eq!(id.to_string(), "0x0000000a");

        let vendor = CommandId::from(0x0001_0200);
        assert_eq!(u32::from(vendor), 0x0001_0200);
    }

    #[test]
    fn command_id_is_response() {
        assert!(!CommandId::EnquireLink.is_response());
        assert!(CommandId::EnquireLinkResp.is_response());
        assert!(!CommandId::SubmitSm.is_response());
        assert!(CommandId::SubmitSmResp.is_response());
        assert!(CommandId::GenericNack.is_response());
        assert!(CommandId::Unknown(0x8001_0200).is_response());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(CommandId::DataSmResp.to_string(), "DataSMResp");
        assert_eq!(CommandId::BindTransceiver.to_string(), "BindTransceiver");
    }
}
