pub mod demo;
pub mod format;
pub mod report;
pub mod wire;

pub use report::{DecodeError, NormalizedRecord, ReplyFlags, ReportDecoder, decode};
