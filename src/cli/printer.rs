//! 结果打印器
//!
//! 提供表格格式的结果输出

use crate::algorithm::TourResult;
use crate::graph::Graph;
use prettytable::{format, row, Cell, Row, Table};

/// 结果打印器
#[derive(Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 通用表格
    pub fn table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 邻接表：每条边一行
    pub fn adjacency_table(&self, graph: &Graph<String>) -> String {
        let mut rows = Vec::new();
        for id in graph.list_vertices() {
            let Some(src) = graph.key(id) else { continue };
            let edges = graph.edges(id);
            if edges.is_empty() {
                rows.push(vec![src.clone(), "-".to_string(), "-".to_string()]);
            }
            for edge in edges {
                let dst = graph.key(edge.dst()).cloned().unwrap_or_default();
                rows.push(vec![src.clone(), dst, edge.weight().to_string()]);
            }
        }

        if rows.is_empty() {
            return "图为空\n".to_string();
        }
        self.table(&["Origin", "Destination", "Weight"], &rows)
    }

    /// 打印统计信息
    pub fn stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 精确搜索与穷举搜索的对比
    pub fn tour_comparison(&self, exact: &TourResult<String>, brute: &TourResult<String>) -> String {
        let rows: Vec<Vec<String>> = [("exact", exact), ("exhaustive", brute)]
            .iter()
            .map(|(name, t)| {
                vec![
                    name.to_string(),
                    t.cost.to_string(),
                    t.route.join(" -> "),
                    t.explored.to_string(),
                    t.elapsed_ms.to_string(),
                ]
            })
            .collect();

        let mut out = self.table(&["Search", "Cost", "Route", "Explored", "Time (ms)"], &rows);
        if exact.cost == brute.cost {
            out.push_str("两种搜索的最优代价一致\n");
        } else {
            out.push_str("警告: 两种搜索的最优代价不一致\n");
        }
        out
    }

    /// 打印帮助信息
    pub fn help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   WayGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

构建:
  vertex, v <键>                 添加顶点（已存在则忽略）
  edge, e <起点> <终点> [权重]   添加有向边，权重默认 1
                                 端点不存在时边被忽略

查看:
  print, p                       邻接表
  table                          表格形式的边列表
  dot                            Graphviz DOT 导出
  stats, info                    顶点数和边数

算法:
  bfs <起点> <终点>              最少跳数（忽略权重）
  dfs <起点> <终点>              代价最大的简单路径
  dijkstra, sp <起点> <终点> [priority]
                                 最短路径；默认按枚举顺序松弛，
                                 priority 使用优先队列
  tour <起点>                    最优环游（分支探索）
  tour-brute <起点>              最优环游（全排列穷举）
  compare <起点>                 对比两种环游搜索

其他:
  help, h, ?                     显示帮助
  quit, exit, q                  退出程序

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
