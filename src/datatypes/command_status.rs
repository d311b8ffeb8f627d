use std::fmt;

/// The command_status field of an SMPP message response indicates the success
/// or failure of an SMPP request. It is relevant only in the SMPP response
/// message and should be set to NULL in SMPP request messages. The SMPP Error
/// status codes are returned by the SMSC in the command_status field of the
/// SMPP message header and in the error_status_code field of a
/// submit_multi_resp message.
///
/// The value is kept as the raw wire integer so that codes outside the table
/// (reserved ranges, vendor specific errors) survive a decode/encode cycle
/// untouched. `Display` always produces a diagnostic: the table description
/// for known codes and `unknown status: <n>` otherwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandStatus(u32);

command_statuses! {
    /// No Error
    OK = 0x0000_0000 => "OK";
    /// Message Length is invalid
    INVALID_MSG_LENGTH = 0x0000_0001 => "invalid message length";
    /// Command Length is invalid
    INVALID_COMMAND_LENGTH = 0x0000_0002 => "invalid command length";
    /// Invalid Command ID
    INVALID_COMMAND_ID = 0x0000_0003 => "invalid command id";
    /// Incorrect BIND Status for given command
    INCORRECT_BIND_STATUS = 0x0000_0004 => "incorrect bind status for given command";
    /// ESME Already in Bound State
    ALREADY_BOUND = 0x0000_0005 => "already in bound state";
    /// Invalid Priority Flag
    INVALID_PRIORITY_FLAG = 0x0000_0006 => "invalid priority flag";
    /// Invalid Registered Delivery Flag
    INVALID_REGISTERED_DELIVERY_FLAG = 0x0000_0007 => "invalid registered delivery flag";
    /// System Error
    SYSTEM_ERROR = 0x0000_0008 => "system error";
    // Reserved 0x00000009
    /// Invalid Source Address
    INVALID_SOURCE_ADDRESS = 0x0000_000A => "invalid source address";
    /// Invalid Dest Addr
    INVALID_DESTINATION_ADDRESS = 0x0000_000B => "invalid destination address";
    /// Message ID is invalid
    INVALID_MESSAGE_ID = 0x0000_000C => "invalid message id";
    /// Bind Failed
    BIND_FAILED = 0x0000_000D => "bind failed";
    /// Invalid Password
    INVALID_PASSWORD = 0x0000_000E => "invalid password";
    /// Invalid System ID
    INVALID_SYSTEM_ID = 0x0000_000F => "invalid system id";
    // Reserved 0x00000010
    /// Cancel SM Failed
    CANCEL_SM_FAILED = 0x0000_0011 => "cancelsm failed";
    // Reserved 0x00000012
    /// Replace SM Failed
    REPLACE_SM_FAILED = 0x0000_0013 => "replacesm failed";
    /// Message Queue Full
    MESSAGE_QUEUE_FULL = 0x0000_0014 => "message queue full";
    /// Invalid Service Type
    INVALID_SERVICE_TYPE = 0x0000_0015 => "invalid service type";
    // Reserved 0x00000016 - 0x00000032
    /// Invalid number of destinations
    INVALID_NUMBER_OF_DESTINATIONS = 0x0000_0033 => "invalid number of destinations";
    /// Invalid Distribution List name
    INVALID_DISTRIBUTION_LIST_NAME = 0x0000_0034 => "invalid distribution list name";
    // Reserved 0x00000035 - 0x0000003F
    /// Destination flag is invalid (submit_multi)
    INVALID_DESTINATION_FLAG = 0x0000_0040 => "invalid destination flag";
    // Reserved 0x00000041
    /// Invalid 'submit with replace' request
    /// (i.e. submit_sm with replace_if_present_flag set)
    INVALID_SUBMIT_WITH_REPLACE = 0x0000_0042 => "invalid 'submit with replace' request";
    /// Invalid esm_class field data
    INVALID_ESM_CLASS = 0x0000_0043 => "invalid esm class field data";
    /// Cannot Submit to Distribution List
    CANNOT_SUBMIT_TO_DISTRIBUTION_LIST = 0x0000_0044 => "cannot submit to distribution list";
    /// submit_sm or submit_multi failed
    SUBMIT_FAILED = 0x0000_0045 => "submitsm or submitmulti failed";
    // Reserved 0x00000046 - 0x00000047
    /// Invalid Source address TON
    INVALID_SOURCE_ADDRESS_TON = 0x0000_0048 => "invalid source address ton";
    /// Invalid Source address NPI
    INVALID_SOURCE_ADDRESS_NPI = 0x0000_0049 => "invalid source address npi";
    /// Invalid Destination address TON
    INVALID_DESTINATION_ADDRESS_TON = 0x0000_0050 => "invalid destination address ton";
    /// Invalid Destination address NPI
    INVALID_DESTINATION_ADDRESS_NPI = 0x0000_0051 => "invalid destination address npi";
    // Reserved 0x00000052
    /// Invalid system_type field
    INVALID_SYSTEM_TYPE = 0x0000_0053 => "invalid system type field";
    /// Invalid replace_if_present flag
    INVALID_REPLACE_IF_PRESENT_FLAG = 0x0000_0054 => "invalid replace_if_present flag";
    /// Invalid number of messages
    INVALID_NUMBER_OF_MESSAGES = 0x0000_0055 => "invalid number of messages";
    // Reserved 0x00000056 - 0x00000057
    /// Throttling error (ESME has exceeded allowed message limits)
    THROTTLED = 0x0000_0058 => "throttling error";
    // Reserved 0x00000059 - 0x00000060
    /// Invalid Scheduled Delivery Time
    INVALID_SCHEDULED_DELIVERY_TIME = 0x0000_0061 => "invalid scheduled delivery time";
    /// Invalid message validity period (Expiry time)
    INVALID_EXPIRY_TIME = 0x0000_0062 => "invalid message validity period (expiry time)";
    /// Predefined Message Invalid or Not Found
    INVALID_PREDEFINED_MESSAGE = 0x0000_0063 => "predefined message invalid or not found";
    /// ESME Receiver Temporary App Error Code
    RECEIVER_TEMPORARY_APP_ERROR = 0x0000_0064 => "esme receiver temporary app error code";
    /// ESME Receiver Permanent App Error Code
    RECEIVER_PERMANENT_APP_ERROR = 0x0000_0065 => "esme receiver permanent app error code";
    /// ESME Receiver Reject Message Error Code
    RECEIVER_REJECT_MESSAGE_ERROR = 0x0000_0066 => "esme receiver reject message error code";
    /// query_sm request failed
    QUERY_SM_FAILED = 0x0000_0067 => "querysm request failed";
    // Reserved 0x00000068 - 0x000000BF
    /// Error in the optional part of the PDU Body.
    INVALID_OPTIONAL_PART = 0x0000_00C0 => "error in the optional part of the pdu body";
    /// Optional Parameter not allowed
    OPTIONAL_PARAMETER_NOT_ALLOWED = 0x0000_00C1 => "optional parameter not allowed";
    /// Invalid Parameter Length.
    INVALID_PARAMETER_LENGTH = 0x0000_00C2 => "invalid parameter length";
    /// Expected Optional Parameter missing
    MISSING_OPTIONAL_PARAMETER = 0x0000_00C3 => "expected optional parameter missing";
    /// Invalid Optional Parameter Value
    INVALID_OPTIONAL_PARAMETER_VALUE = 0x0000_00C4 => "invalid optional parameter value";
    // Reserved 0x000000C5 - 0x000000FD
    /// Delivery Failure (used for data_sm_resp)
    DELIVERY_FAILURE = 0x0000_00FE => "delivery failure (used for datasmresp)";
    /// Unknown Error
    UNKNOWN_ERROR = 0x0000_00FF => "unknown error";
    // Reserved for SMPP extension 0x00000100 - 0x000003FF
    // Reserved for SMSC vendor specific errors 0x00000400 - 0x000004FF
    // Reserved 0x00000500 - 0xFFFFFFFF
}

impl CommandStatus {
    /// Wraps a raw command_status value. Any `u32` is accepted.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw wire value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// `true` for `ESME_ROK`.
    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }

    /// `true` if the value has an entry in the status table.
    pub const fn is_known(self) -> bool {
        self.known_description().is_some()
    }

    /// Human readable diagnostic for this status. Never fails: values missing
    /// from the table are rendered as `unknown status: <decimal value>`.
    pub fn description(self) -> String {
        self.to_string()
    }

    /// Reads the status as an outcome, treating anything but `OK` as an error.
    pub fn into_result(self) -> Result<(), CommandStatus> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }
}

impl From<u32> for CommandStatus {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<CommandStatus> for u32 {
    fn from(status: CommandStatus) -> Self {
        status.0
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_description() {
            Some(description) => f.write_str(description),
            None => write!(f, "unknown status: {}", self.0),
        }
    }
}

impl std::error::Error for CommandStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_known_statuses() {
        assert_eq!(CommandStatus::OK.description(), "OK");
        assert_eq!(
            CommandStatus::new(1).description(),
            "invalid message length"
        );
        assert_eq!(CommandStatus::THROTTLED.to_string(), "throttling error");
        assert_eq!(CommandStatus::UNKNOWN_ERROR.to_string(), "unknown error");
    }

    #[test]
    fn describes_unknown_statuses_with_raw_value() {
        assert_eq!(
            CommandStatus::new(0x2000).description(),
            "unknown status: 8192"
        );
        // Reserved gap between SYSTEM_ERROR and INVALID_SOURCE_ADDRESS
        assert_eq!(CommandStatus::new(0x09).to_string(), "unknown status: 9");
        assert_eq!(
            CommandStatus::new(u32::MAX).to_string(),
            "unknown status: 4294967295"
        );
        assert!(!CommandStatus::new(0x0400).is_known());
    }

    #[test]
    fn table_values_are_stable() {
        assert_eq!(CommandStatus::KNOWN.len(), 48);
        assert_eq!(CommandStatus::INVALID_COMMAND_LENGTH.value(), 0x02);
        assert_eq!(CommandStatus::INVALID_SOURCE_ADDRESS.value(), 0x0A);
        assert_eq!(CommandStatus::INVALID_DESTINATION_FLAG.value(), 0x40);
        assert_eq!(CommandStatus::THROTTLED.value(), 0x58);
        assert_eq!(CommandStatus::INVALID_OPTIONAL_PART.value(), 0xC0);
        assert_eq!(CommandStatus::DELIVERY_FAILURE.value(), 0xFE);
        assert_eq!(CommandStatus::UNKNOWN_ERROR.value(), 0xFF);

        // Wire order, no duplicates
        assert!(CommandStatus::KNOWN.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn error_descriptions_are_lowercase() {
        for status in CommandStatus::KNOWN.iter().filter(|s| !s.is_ok()) {
            let description = status.known_description().unwrap();
            assert_eq!(description, description.to_lowercase(), "{status:?}");
        }
    }

    #[test]
    fn into_result_separates_success_from_failure() {
        assert_eq!(CommandStatus::OK.into_result(), Ok(()));
        assert_eq!(
            CommandStatus::BIND_FAILED.into_result(),
            Err(CommandStatus::BIND_FAILED)
        );
        // Unknown values are still failures when read as an outcome
        assert_eq!(
            CommandStatus::new(0x2000).into_result(),
            Err(CommandStatus::new(0x2000))
        );
    }

    #[test]
    fn works_as_boxed_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(CommandStatus::INVALID_PASSWORD);
        assert_eq!(err.to_string(), "invalid password");
    }

    #[test]
    fn converts_to_and_from_u32() {
        let status = CommandStatus::from(0x0000_0058);
        assert_eq!(status, CommandStatus::THROTTLED);
        assert_eq!(u32::from(status), 0x58);
    }
}
