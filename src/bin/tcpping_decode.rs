//! 解码一份 TCP ping 报告并以 JSON 输出规范化记录
//!
//! 记录写到 stdout，日志写到 stderr。

use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tcpping_report::{NormalizedRecord, ReportDecoder, demo};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "tcpping-decode",
    about = "Decode a binary tcpping report into normalized JSON records"
)]
struct Args {
    /// 报告文件路径；缺省时从 stdin 读取
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Disable logging
    #[arg(long)]
    quiet: bool,

    /// 忽略输入，解码内置的示例报告
    #[arg(long)]
    sample: bool,
}

fn read_input(args: &Args) -> io::Result<Vec<u8>> {
    if args.sample {
        return Ok(demo::sample_bytes());
    }
    match &args.input {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_records(records: &[NormalizedRecord], pretty: bool) -> io::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(io::Error::other)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        })
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let buf = match read_input(&args) {
        Ok(buf) => buf,
        Err(err) => {
            error!(%err, "failed to read report");
            eprintln!("tcpping-decode: {err}");
            return ExitCode::FAILURE;
        }
    };

    let records = match ReportDecoder::new().decode(&buf) {
        Ok(records) => records,
        Err(err) => {
            error!(%err, bytes = buf.len(), "failed to decode report");
            eprintln!("tcpping-decode: {err}");
            return ExitCode::FAILURE;
        }
    };

    let lost = records.iter().filter(|r| r.is_lost()).count();
    info!(targets = records.len(), lost, "report decoded");

    if let Err(err) = write_records(&records, args.pretty) {
        eprintln!("tcpping-decode: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
