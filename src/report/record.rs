use serde::{Deserialize, Serialize};

use crate::wire::TcpFlags;

/// 应答报文的六个 TCP 控制位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyFlags {
    pub fin: bool,
    pub syn: bool,
    pub rst: bool,
    pub psh: bool,
    pub ack: bool,
    pub urg: bool,
}

impl From<&TcpFlags> for ReplyFlags {
    fn from(flags: &TcpFlags) -> Self {
        Self {
            fin: flags.fin.unwrap_or(false),
            syn: flags.syn.unwrap_or(false),
            rst: flags.rst.unwrap_or(false),
            psh: flags.psh.unwrap_or(false),
            ack: flags.ack.unwrap_or(false),
            urg: flags.urg.unwrap_or(false),
        }
    }
}

/// 单个目标的规范化结果（已合并会话头部字段）
///
/// `rtt` / `replyflags` / `icmptype` / `icmpcode` 缺失时序列化为 `null`，
/// 键本身始终存在。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub target: String,
    pub port: u32,
    pub address: String,
    pub rtt: Option<f64>,
    pub replyflags: Option<ReplyFlags>,
    pub icmptype: Option<u32>,
    pub icmpcode: Option<u32>,
    pub packet_size: u32,
    pub random: bool,
    /// 0 = 有响应，1 = 丢失
    pub loss: u8,
    pub dscp: String,
}

impl NormalizedRecord {
    pub fn is_lost(&self) -> bool {
        self.loss != 0
    }
}
