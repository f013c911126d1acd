//! Command implementations.

pub mod delete;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod report;
pub mod set_status;
pub mod stats;
pub mod toggle;
pub mod version;
