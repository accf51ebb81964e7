//! 文件服务：同步、逐字节保真的文本文件读写
//!
//! 打开/保存都在 UI 线程上同步执行，无超时、无重试；
//! 写入再读回的内容逐字节一致（包括空文件）。

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    NotAFile(PathBuf),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
        }
    }
}

impl std::error::Error for FileError {}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

#[derive(Default)]
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        Self
    }

    pub fn read_text(&self, path: &Path) -> Result<String> {
        if path.is_dir() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }
        std::fs::read_to_string(path).map_err(|e| Self::classify(e, path))
    }

    pub fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(|e| Self::classify(e, path))
    }

    fn classify(e: io::Error, path: &Path) -> FileError {
        match e.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
            _ => FileError::Io(e),
        }
    }
}
