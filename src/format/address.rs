use std::net::{Ipv4Addr, Ipv6Addr};

/// Linux 上的地址族编号（与探测端写入报告的值一致）
pub const AF_INET: i32 = 2;
pub const AF_INET6: i32 = 10;

const UNKNOWN: &str = "unknown";

/// 按地址族渲染原始地址字节；族与长度不匹配时返回 `"unknown"`
pub fn printable_address(family: i32, raw: &[u8]) -> String {
    match family {
        AF_INET => match <[u8; 4]>::try_from(raw) {
            Ok(octets) => Ipv4Addr::from(octets).to_string(),
            Err(_) => UNKNOWN.to_string(),
        },
        AF_INET6 => match <[u8; 16]>::try_from(raw) {
            Ok(octets) => Ipv6Addr::from(octets).to_string(),
            Err(_) => UNKNOWN.to_string(),
        },
        _ => UNKNOWN.to_string(),
    }
}
