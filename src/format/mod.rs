//! 字段渲染：把原始地址 / DSCP 值转换成可读字符串

mod address;
mod dscp;

pub use address::{AF_INET, AF_INET6, printable_address};
pub use dscp::printable_dscp;

/// 解码器渲染字段时使用的格式化接口
pub trait FieldFormatter {
    fn address(&self, family: i32, raw: &[u8]) -> String;
    fn dscp(&self, code: u32) -> String;
}

/// 默认实现：委托给 [`printable_address`] 与 [`printable_dscp`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Printable;

impl FieldFormatter for Printable {
    fn address(&self, family: i32, raw: &[u8]) -> String {
        printable_address(family, raw)
    }

    fn dscp(&self, code: u32) -> String {
        printable_dscp(code)
    }
}
