pub mod check;
pub mod init;
pub mod inject;
pub mod status;
