//! WayGraph 数据导入工具
//!
//! 从 CSV 或 JSON Lines 文件构建图，输出统计信息，可选导出 DOT

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use waygraph::cli::Printer;
use waygraph::graph::Graph;
use waygraph::import::{import_jsonl_path, is_jsonl_path, CsvImporter, ImportOptions};
use waygraph::logging::init_tracing;
use waygraph::render;

#[derive(Parser, Debug)]
#[command(name = "waygraph-import")]
#[command(about = "WayGraph 数据导入工具")]
struct Args {
    /// 输入文件路径（`.jsonl`/`.json` 按 JSON Lines 读取，其余按 CSV）
    #[arg(short, long)]
    input: PathBuf,

    /// 字段分隔符
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// 输入文件没有表头
    #[arg(long)]
    no_headers: bool,

    /// 将图导出为 DOT 文件
    #[arg(long)]
    dot: Option<PathBuf>,

    /// 打印邻接表
    #[arg(short, long)]
    print: bool,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level).map_err(anyhow::Error::msg)?;

    if !args.delimiter.is_ascii() {
        anyhow::bail!("分隔符必须是 ASCII 字符: {}", args.delimiter);
    }

    println!("WayGraph 数据导入工具");
    println!("=====================");
    println!("输入文件: {:?}", args.input);

    let mut graph = Graph::new();
    let result = if is_jsonl_path(&args.input) {
        import_jsonl_path(&mut graph, &args.input)
    } else {
        CsvImporter::new(ImportOptions {
            delimiter: args.delimiter as u8,
            has_headers: !args.no_headers,
        })
        .import_path(&mut graph, &args.input)
    };
    let stats = result.with_context(|| format!("导入失败: {}", args.input.display()))?;

    println!("\n导入完成!");
    println!("  顶点导入: {}", stats.vertices_imported);
    println!("  边导入: {}", stats.edges_imported);
    println!("  丢弃的边: {}", stats.edges_dropped);
    println!("  错误数: {}", stats.errors);
    println!("  耗时: {} ms", stats.duration_ms);
    println!();
    print!("{}", Printer::new().stats(graph.vertex_count(), graph.edge_count()));

    if args.print {
        println!();
        for line in render::adjacency_lines(&graph) {
            println!("{}", line);
        }
    }

    if let Some(path) = &args.dot {
        std::fs::write(path, render::to_dot(&graph))
            .with_context(|| format!("无法写入 {}", path.display()))?;
        println!("\nDOT 已写入 {}", path.display());
    }

    Ok(())
}
