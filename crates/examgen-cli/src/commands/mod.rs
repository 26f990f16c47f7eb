pub mod ai_generate;
pub mod generate;
pub mod init;
pub mod validate;
