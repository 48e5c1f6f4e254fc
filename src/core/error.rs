use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving, reading or updating the ignore-file.
///
/// Every variant is terminal for the invocation: `main` prints the message
/// followed by its source chain and exits with status 1.
#[derive(Debug, Error)]
pub enum IgnoreError {
    /// The requested template key is not in the registry.
    #[error("不支持的语言模板: {lang}\n支持的语言: {supported}")]
    UnsupportedLanguage { lang: String, supported: String },

    /// The process working directory could not be determined.
    #[error("无法获取当前目录")]
    CurrentDir(#[source] io::Error),

    #[error("读取.gitignore文件失败 ({})", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("写入.gitignore文件失败 ({})", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `-f` was given without a path argument.
    #[error("-f选项需要指定文件或文件夹路径")]
    MissingPath,

    /// The path cannot be written to the ignore-file on this platform.
    #[error("路径不是有效的Unicode: {}", .path.display())]
    NonUnicodePath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IgnoreError>;
