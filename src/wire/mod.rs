//! 报告的二进制格式（protobuf）
//!
//! 消息结构直接用 `prost::Message` derive 声明，所有标量字段都是 proto2 风格的
//! `optional`，因此“字段是否存在”天然体现为 `Option<T>`。

mod report;

pub use report::{Header, Item, Report, TcpFlags};
pub use report::{DEFAULT_DSCP, DEFAULT_PACKET_SIZE, DEFAULT_PORT, DEFAULT_RANDOM};
