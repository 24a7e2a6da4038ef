//! 演示用的示例报告
//!
//! 覆盖几种典型结果：正常应答、ICMP 应答、完全丢失。

use crate::format::{AF_INET, AF_INET6};
use crate::wire::{Header, Item, Report, TcpFlags};

/// 构造一份包含三个目标的示例报告
pub fn sample_report() -> Report {
    Report {
        header: Some(Header {
            port: Some(443),
            packet_size: Some(64),
            random: Some(false),
            dscp: Some(46),
        }),
        reports: vec![
            // SYN/ACK 应答
            Item {
                address: Some(vec![192, 0, 2, 10]),
                family: Some(AF_INET),
                rtt: Some(12.5),
                flags: Some(TcpFlags {
                    syn: Some(true),
                    ack: Some(true),
                    ..Default::default()
                }),
                name: Some("www.example.com".to_string()),
                ..Default::default()
            },
            // ICMP 应答，没有 rtt
            Item {
                address: Some(vec![
                    0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
                ]),
                family: Some(AF_INET6),
                icmptype: Some(3),
                icmpcode: Some(1),
                ..Default::default()
            },
            Item {
                address: Some(vec![198, 51, 100, 7]),
                family: Some(AF_INET),
                name: Some("lost.example.net".to_string()),
                ..Default::default()
            },
        ],
    }
}

/// 示例报告的二进制形式
pub fn sample_bytes() -> Vec<u8> {
    sample_report().to_bytes()
}
