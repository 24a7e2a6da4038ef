use tracing::{debug, trace};

use super::{NormalizedRecord, ReplyFlags, Result};
use crate::format::{FieldFormatter, Printable};
use crate::wire::{
    DEFAULT_DSCP, DEFAULT_PACKET_SIZE, DEFAULT_PORT, DEFAULT_RANDOM, Header, Item, Report,
};

/// 目标名缺失或为空时使用的占位名
pub const UNKNOWN_TARGET: &str = "unknown";

/// 报告解码器：字节流 -> 有序的规范化记录
///
/// 不持有任何可变状态，同一个实例可以被多个调用方并发使用。
#[derive(Debug, Clone, Default)]
pub struct ReportDecoder<F = Printable> {
    formatter: F,
}

impl ReportDecoder<Printable> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FieldFormatter> ReportDecoder<F> {
    /// 使用自定义的地址 / DSCP 渲染方式
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// 解码一份报告。反序列化失败时不返回任何记录。
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<NormalizedRecord>> {
        let report = Report::parse(buf)?;
        let header = report.header_or_default();
        debug!(
            bytes = buf.len(),
            targets = report.reports.len(),
            "decoded tcpping report"
        );

        let records = report
            .reports
            .iter()
            .map(|item| normalize(&header, item, &self.formatter))
            .collect();
        Ok(records)
    }
}

/// 使用默认渲染方式解码
pub fn decode(buf: &[u8]) -> Result<Vec<NormalizedRecord>> {
    ReportDecoder::new().decode(buf)
}

/// 把一个目标条目与会话头部合并成一条记录
pub fn normalize<F: FieldFormatter>(header: &Header, item: &Item, fmt: &F) -> NormalizedRecord {
    let target = match item.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNKNOWN_TARGET.to_string(),
    };

    // 控制位只在 rtt 存在时输出，否则残留的位不能漏出去
    let replyflags = item
        .rtt
        .map(|_| item.flags.as_ref().map(ReplyFlags::from).unwrap_or_default());

    let responded = item.rtt.is_some() || item.icmptype.is_some() || item.icmpcode.is_some();

    let record = NormalizedRecord {
        target,
        port: header.port.unwrap_or(DEFAULT_PORT),
        address: fmt.address(
            item.family.unwrap_or(0),
            item.address.as_deref().unwrap_or_default(),
        ),
        rtt: item.rtt,
        replyflags,
        icmptype: item.icmptype,
        icmpcode: item.icmpcode,
        packet_size: header.packet_size.unwrap_or(DEFAULT_PACKET_SIZE),
        random: header.random.unwrap_or(DEFAULT_RANDOM),
        loss: u8::from(!responded),
        dscp: fmt.dscp(header.dscp.unwrap_or(DEFAULT_DSCP)),
    };
    trace!(entry = %record.target, loss = record.loss, "normalized target entry");
    record
}
