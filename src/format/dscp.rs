/// DSCP 码点 -> 名称（RFC 2474 / 2597 / 3246 / 5865）
const NAMED: &[(u32, &str)] = &[
    (0, "Default"),
    (8, "CS1"),
    (10, "AF11"),
    (12, "AF12"),
    (14, "AF13"),
    (16, "CS2"),
    (18, "AF21"),
    (20, "AF22"),
    (22, "AF23"),
    (24, "CS3"),
    (26, "AF31"),
    (28, "AF32"),
    (30, "AF33"),
    (32, "CS4"),
    (34, "AF41"),
    (36, "AF42"),
    (38, "AF43"),
    (40, "CS5"),
    (44, "VA"),
    (46, "EF"),
    (48, "CS6"),
    (56, "CS7"),
];

/// 渲染 DSCP 值：已知码点用名称，其余输出十进制数字
pub fn printable_dscp(code: u32) -> String {
    NAMED
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}
