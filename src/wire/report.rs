//! TCP ping 报告消息定义

use prost::Message;

use crate::report::Result;

/// 头部缺省时使用的目的端口
pub const DEFAULT_PORT: u32 = 80;
/// 头部缺省时使用的探测包大小（字节）
pub const DEFAULT_PACKET_SIZE: u32 = 64;
pub const DEFAULT_RANDOM: bool = false;
pub const DEFAULT_DSCP: u32 = 0;

/// 一次测试运行的完整报告：共享头部 + 每个目标一条结果
#[derive(Clone, PartialEq, Message)]
pub struct Report {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, repeated, tag = "2")]
    pub reports: Vec<Item>,
}

/// 本次测试所有目标共享的参数
#[derive(Clone, Copy, PartialEq, Message)]
pub struct Header {
    #[prost(uint32, optional, tag = "1")]
    pub port: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub packet_size: Option<u32>,
    #[prost(bool, optional, tag = "3")]
    pub random: Option<bool>,
    #[prost(uint32, optional, tag = "4")]
    pub dscp: Option<u32>,
}

/// 单个目标的探测结果
#[derive(Clone, PartialEq, Message)]
pub struct Item {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub address: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "2")]
    pub family: Option<i32>,
    /// 往返时延（毫秒）；存在即表示收到了 TCP 应答
    #[prost(double, optional, tag = "3")]
    pub rtt: Option<f64>,
    /// 应答报文的 TCP 控制位，只有 `rtt` 存在时才有意义
    #[prost(message, optional, tag = "4")]
    pub flags: Option<TcpFlags>,
    #[prost(uint32, optional, tag = "5")]
    pub icmptype: Option<u32>,
    #[prost(uint32, optional, tag = "6")]
    pub icmpcode: Option<u32>,
    #[prost(string, optional, tag = "7")]
    pub name: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Message)]
pub struct TcpFlags {
    #[prost(bool, optional, tag = "1")]
    pub fin: Option<bool>,
    #[prost(bool, optional, tag = "2")]
    pub syn: Option<bool>,
    #[prost(bool, optional, tag = "3")]
    pub rst: Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub psh: Option<bool>,
    #[prost(bool, optional, tag = "5")]
    pub ack: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub urg: Option<bool>,
}

impl Report {
    /// 从字节流反序列化；截断或格式错误的输入返回 `MalformedInput`
    pub fn parse(buf: &[u8]) -> Result<Self> {
        Ok(Self::decode(buf)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// 头部（缺失时按全部默认值处理）
    pub fn header_or_default(&self) -> Header {
        self.header.unwrap_or_default()
    }
}
