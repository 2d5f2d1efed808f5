pub mod analyze;
mod command_result;
pub mod hardcode;
pub mod helper;
pub mod init;
pub mod store;

pub use command_result::*;
