use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use farpoint_core::{
    load_options, scan_and_write, scan_with_options, BufferMode, LineBounds, OverflowPolicy, ScanOptions,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "farpoint", version, about = "Find the 3D point farthest from the origin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描点文件（或目录下的所有点文件）
    Scan {
        /// 输入文件或目录
        #[arg(long)]
        input: PathBuf,

        /// 输出文件；缺省写到标准输出
        #[arg(long)]
        output: Option<PathBuf>,

        /// 输出格式：text（单文件时的可读格式）或 json（数组）
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// 选项文件（TOML）；命令行参数优先
        #[arg(long)]
        config: Option<PathBuf>,

        /// 缓冲区来源：mmap 或 read
        #[arg(long, value_enum)]
        buffer: Option<BufferArg>,

        /// 溢出策略：wrapping 或 checked
        #[arg(long, value_enum)]
        overflow: Option<OverflowArg>,

        /// 空白跳过边界：per-line 或 cross-lines
        #[arg(long, value_enum)]
        line_bounds: Option<LineBoundsArg>,

        /// 最大扫描文件大小（字节，仅 json 输出或目录扫描生效）
        #[arg(long)]
        max_file_size: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BufferArg {
    Mmap,
    Read,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OverflowArg {
    Wrapping,
    Checked,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineBoundsArg {
    PerLine,
    CrossLines,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, output, format, config, buffer, overflow, line_bounds, max_file_size } => {
            info!(?input, ?output, "starting scan");

            // 先读选项文件，再用命令行参数覆盖
            let mut opts = match &config {
                Some(path) => load_options(path)?,
                None => ScanOptions::default(),
            };
            if let Some(b) = buffer {
                opts.buffer = match b {
                    BufferArg::Mmap => BufferMode::Mmap,
                    BufferArg::Read => BufferMode::Read,
                };
            }
            if let Some(o) = overflow {
                opts.overflow = match o {
                    OverflowArg::Wrapping => OverflowPolicy::Wrapping,
                    OverflowArg::Checked => OverflowPolicy::Checked,
                };
            }
            if let Some(l) = line_bounds {
                opts.line_bounds = match l {
                    LineBoundsArg::PerLine => LineBounds::PerLine,
                    LineBoundsArg::CrossLines => LineBounds::CrossLines,
                };
            }
            if max_file_size.is_some() {
                opts.max_file_size = max_file_size;
            }

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path).context("create output file")?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };

            if format == Format::Text && !input.is_dir() {
                write_text_report(&input, &mut out, &opts)?;
            } else {
                let stats = scan_and_write(&input, &mut out, &opts).context("scan and write failed")?;
                writeln!(out)?;
                info!(
                    files_scanned = stats.files_scanned,
                    files_failed = stats.files_failed,
                    outputs_written = stats.outputs_written,
                    "scan finished"
                );
            }
            out.flush()?;
        }
    }

    Ok(())
}

/// 单文件可读输出；扫描失败时返回错误，进程以非零状态退出
fn write_text_report(input: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<()> {
    writeln!(out, "Processing file: {}", input.display())?;
    let report = scan_with_options(input, opts).with_context(|| format!("error while processing {}", input.display()))?;
    let fp = report.farthest;
    writeln!(out, "Farthest point found:")?;
    writeln!(out, "  Line number: {}", fp.line_number)?;
    writeln!(out, "  Coordinates: ({}, {}, {})", fp.x, fp.y, fp.z)?;
    writeln!(out, "  Distance^2 : {}", fp.max_distance_squared)?;
    info!(
        lines = report.stats.lines,
        valid_points = report.stats.valid_points,
        skipped_lines = report.stats.skipped_lines,
        "scan finished"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只保留结果
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
