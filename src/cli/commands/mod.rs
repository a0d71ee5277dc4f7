mod command_result;
pub mod generate;
pub mod helper;
pub mod init;
pub mod list;
pub mod resolve;

pub use command_result::*;
