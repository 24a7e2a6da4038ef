use thiserror::Error;

/// 报告解码错误
#[derive(Error, Debug)]
pub enum DecodeError {
    /// 字节流无法按报告格式反序列化（截断、编码错误等）
    #[error("malformed report: {0}")]
    MalformedInput(#[from] prost::DecodeError),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
