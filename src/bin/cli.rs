//! WayGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use waygraph::cli::commands::DEFAULT_MAX_BRUTEFORCE;
use waygraph::cli::{CommandResult, Session, ShellCompleter};
use waygraph::graph::Graph;
use waygraph::import::load_path;
use waygraph::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "waygraph-cli")]
#[command(about = "WayGraph 命令行工具")]
struct Args {
    /// 启动时导入的文件（CSV 或 JSON Lines，字段 origin,destination,weight）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 穷举环游搜索允许的最大顶点数
    #[arg(long, default_value_t = DEFAULT_MAX_BRUTEFORCE)]
    max_bruteforce: usize,

    /// 日志级别
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level).map_err(anyhow::Error::msg)?;

    let graph = match &args.input {
        Some(path) => {
            let (graph, stats) = load_path(path)
                .with_context(|| format!("无法导入 {}", path.display()))?;
            println!(
                "已导入 {}: {} 顶点, {} 边, {} 行错误",
                path.display(),
                stats.vertices_imported,
                stats.edges_imported,
                stats.errors
            );
            graph
        }
        None => Graph::new(),
    };

    let mut session = Session::new(graph).with_max_bruteforce(args.max_bruteforce);

    // 单个命令模式
    if let Some(command) = args.execute {
        report(session.handle_line(&command));
        return Ok(());
    }

    println!("WayGraph CLI {}", waygraph::VERSION);
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<ShellCompleter, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ShellCompleter::new()));

    loop {
        if let Some(helper) = editor.helper_mut() {
            helper.set_keys(session.graph().keys().into_iter().cloned().collect());
        }

        let line = match editor.readline("waygraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        if !report(session.handle_line(&line)) {
            break;
        }
    }

    println!("再见！");
    Ok(())
}

/// 输出命令结果，返回是否继续运行
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(message) => {
            println!("{}", message);
            true
        }
        CommandResult::Error(message) => {
            println!("{} {}", "错误:".red().bold(), message);
            true
        }
    }
}
