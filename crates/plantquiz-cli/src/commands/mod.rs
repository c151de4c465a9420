pub mod check;
pub mod init;
pub mod mistakes;
pub mod play;
pub mod stats;
pub mod validate;
