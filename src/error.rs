//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("起点或终点不存在: {0}")]
    VertexNotFound(String),

    #[error("未找到路径: {0}")]
    NoPath(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("命令错误: {0}")]
    CommandError(String),

    #[error("CSV 错误: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// 是否为“顶点不存在”类错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_))
    }

    /// 是否为“无路径”类错误
    pub fn is_no_path(&self) -> bool {
        matches!(self, Error::NoPath(_))
    }
}
