//! 报告解码与规范化
//!
//! 输入是一份二进制 TCP ping 报告，输出是按目标顺序排列的扁平记录：
//! 每条记录都带有一份会话头部字段的拷贝，下游可以单独消费。

mod decoder;
mod error;
mod record;

pub use decoder::{ReportDecoder, UNKNOWN_TARGET, decode, normalize};
pub use error::{DecodeError, Result};
pub use record::{NormalizedRecord, ReplyFlags};
