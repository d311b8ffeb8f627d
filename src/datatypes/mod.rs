mod command_id;
mod command_status;

pub use command_id::CommandId;
pub use command_status::CommandStatus;
