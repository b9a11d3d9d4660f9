//! 交互命令处理
//!
//! 命令解析是纯函数；执行结果以字符串返回，便于测试。

use crate::algorithm::{
    BruteForceTour, HopSearch, LongestPathSearch, RelaxationOrder, ShortestPath, TourSearch,
};
use crate::cli::printer::Printer;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::render;
use crate::types::Weight;

/// 穷举搜索默认允许的最大顶点数
pub const DEFAULT_MAX_BRUTEFORCE: usize = 9;

/// 解析后的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVertex(String),
    AddEdge {
        src: String,
        dst: String,
        weight: Weight,
    },
    Print,
    Table,
    Dot,
    Bfs {
        src: String,
        dst: String,
    },
    Dfs {
        src: String,
        dst: String,
    },
    Dijkstra {
        src: String,
        dst: String,
        order: RelaxationOrder,
    },
    Tour(String),
    TourBrute(String),
    Compare(String),
    Stats,
    Help,
    Quit,
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 所有命令名（用于补全）
pub const COMMAND_NAMES: &[&str] = &[
    "vertex", "edge", "print", "table", "dot", "bfs", "dfs", "dijkstra", "tour", "tour-brute",
    "compare", "stats", "help", "quit", "exit",
];

/// 解析一行输入
pub fn parse_command(input: &str) -> Result<Command> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        return Err(Error::CommandError("空命令".to_string()));
    };

    let usage = |text: &str| -> Result<Command> {
        Err(Error::CommandError(format!("用法: {}", text)))
    };

    match cmd.to_lowercase().as_str() {
        "vertex" | "v" => match args {
            [key] => Ok(Command::AddVertex(key.to_string())),
            _ => usage("vertex <键>"),
        },
        "edge" | "e" => match args {
            [src, dst] => Ok(Command::AddEdge {
                src: src.to_string(),
                dst: dst.to_string(),
                weight: 1.0,
            }),
            [src, dst, weight] => {
                let weight = weight
                    .parse::<Weight>()
                    .map_err(|_| Error::CommandError(format!("无效的权重: {}", weight)))?;
                Ok(Command::AddEdge {
                    src: src.to_string(),
                    dst: dst.to_string(),
                    weight,
                })
            }
            _ => usage("edge <起点> <终点> [权重]"),
        },
        "print" | "p" => Ok(Command::Print),
        "table" => Ok(Command::Table),
        "dot" => Ok(Command::Dot),
        "bfs" => match args {
            [src, dst] => Ok(Command::Bfs {
                src: src.to_string(),
                dst: dst.to_string(),
            }),
            _ => usage("bfs <起点> <终点>"),
        },
        "dfs" => match args {
            [src, dst] => Ok(Command::Dfs {
                src: src.to_string(),
                dst: dst.to_string(),
            }),
            _ => usage("dfs <起点> <终点>"),
        },
        "dijkstra" | "sp" => {
            let order = match args.get(2).map(|s| s.to_lowercase()) {
                None => RelaxationOrder::Enumeration,
                Some(s) if s == "priority" || s == "pq" => RelaxationOrder::Priority,
                Some(s) if s == "enumeration" || s == "naive" => RelaxationOrder::Enumeration,
                Some(s) => return Err(Error::CommandError(format!("未知的松弛顺序: {}", s))),
            };
            match args {
                [src, dst] | [src, dst, _] => Ok(Command::Dijkstra {
                    src: src.to_string(),
                    dst: dst.to_string(),
                    order,
                }),
                _ => usage("dijkstra <起点> <终点> [priority]"),
            }
        }
        "tour" => match args {
            [start] => Ok(Command::Tour(start.to_string())),
            _ => usage("tour <起点>"),
        },
        "tour-brute" => match args {
            [start] => Ok(Command::TourBrute(start.to_string())),
            _ => usage("tour-brute <起点>"),
        },
        "compare" => match args {
            [start] => Ok(Command::Compare(start.to_string())),
            _ => usage("compare <起点>"),
        },
        "stats" | "info" => Ok(Command::Stats),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(Error::CommandError(format!(
            "未知命令: {}。输入 'help' 查看帮助。",
            other
        ))),
    }
}

/// 交互会话：持有图和输出格式
pub struct Session {
    graph: Graph<String>,
    printer: Printer,
    max_bruteforce: usize,
}

impl Session {
    pub fn new(graph: Graph<String>) -> Self {
        Self {
            graph,
            printer: Printer::new(),
            max_bruteforce: DEFAULT_MAX_BRUTEFORCE,
        }
    }

    /// 设置穷举搜索允许的最大顶点数
    pub fn with_max_bruteforce(mut self, max: usize) -> Self {
        self.max_bruteforce = max;
        self
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 解析并执行一行输入
    pub fn handle_line(&mut self, input: &str) -> CommandResult {
        let input = input.trim();
        if input.is_empty() {
            return CommandResult::Continue;
        }

        match parse_command(input).and_then(|cmd| self.execute(cmd)) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    /// 执行命令
    pub fn execute(&mut self, command: Command) -> Result<CommandResult> {
        tracing::debug!(?command, "executing command");

        let message = match command {
            Command::Quit => return Ok(CommandResult::Exit),
            Command::Help => Printer::help(),

            Command::AddVertex(key) => {
                let existed = self.graph.contains(&key);
                self.graph.add_vertex(key.clone());
                if existed {
                    format!("顶点 {} 已存在", key)
                } else {
                    format!("已添加顶点 {}", key)
                }
            }

            Command::AddEdge { src, dst, weight } => {
                if self.graph.add_edge(&src, &dst, weight) {
                    format!("已添加边 {} -> {} ({})", src, dst, weight)
                } else {
                    format!("边 {} -> {} 被忽略：端点不存在", src, dst)
                }
            }

            Command::Print => {
                let lines = render::adjacency_lines(&self.graph);
                if lines.is_empty() {
                    "图为空".to_string()
                } else {
                    lines.join("\n")
                }
            }

            Command::Table => self.printer.adjacency_table(&self.graph),
            Command::Dot => render::to_dot(&self.graph),
            Command::Stats => self
                .printer
                .stats(self.graph.vertex_count(), self.graph.edge_count()),

            Command::Bfs { src, dst } => {
                let hops = HopSearch::new(&self.graph).shortest_hop_count(&src, &dst)?;
                format!("跳数: {}", hops)
            }

            Command::Dfs { src, dst } => {
                let route = LongestPathSearch::new(&self.graph).longest_path(&src, &dst)?;
                format!("最大代价: {}\n路径: {}", route.cost, route.path.join(" -> "))
            }

            Command::Dijkstra { src, dst, order } => {
                let route = ShortestPath::new(&self.graph)
                    .with_order(order)
                    .shortest_path(&src, &dst)?;
                if route.is_reachable() {
                    format!("最短距离: {}\n路径: {}", route.cost, route.path.join(" -> "))
                } else {
                    format!("{} 不可达 (距离: inf)", dst)
                }
            }

            Command::Tour(start) => {
                let tour = TourSearch::new(&self.graph).best_tour(&start)?;
                format!("最优环游代价: {}\n路线: {}", tour.cost, tour.route.join(" -> "))
            }

            Command::TourBrute(start) => {
                self.check_bruteforce_size()?;
                let tour = BruteForceTour::new(&self.graph).best_tour_bruteforce(&start)?;
                format!("最优环游代价: {}\n路线: {}", tour.cost, tour.route.join(" -> "))
            }

            Command::Compare(start) => {
                self.check_bruteforce_size()?;
                let exact = TourSearch::new(&self.graph).best_tour(&start)?;
                let brute = BruteForceTour::new(&self.graph).best_tour_bruteforce(&start)?;
                self.printer.tour_comparison(&exact, &brute)
            }
        };

        Ok(CommandResult::Message(message))
    }

    fn check_bruteforce_size(&self) -> Result<()> {
        let n = self.graph.vertex_count();
        if n > self.max_bruteforce {
            return Err(Error::CommandError(format!(
                "顶点数 {} 超过穷举上限 {}",
                n, self.max_bruteforce
            )));
        }
        Ok(())
    }
}
