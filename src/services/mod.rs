//! 服务层模块
//!
//! - file: 文件服务（逐字节读写文本文件）

pub mod file;

pub use file::{FileError, FileService};
