//! 数据导入模块
//!
//! 从 CSV 或 JSON Lines 批量导入边：每行 `origin,destination,weight`。
//! 先插入两个端点，再插入边。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub edges_dropped: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 导入选项
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// 字段分隔符
    pub delimiter: u8,
    /// 第一行是否为表头
    pub has_headers: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// 一行边记录
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    #[serde(alias = "Origem", alias = "source", alias = "from")]
    origin: String,
    #[serde(alias = "Destino", alias = "target", alias = "to")]
    destination: String,
    #[serde(alias = "Peso", alias = "cost")]
    weight: Weight,
}

/// CSV 导入器
pub struct CsvImporter {
    options: ImportOptions,
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new(ImportOptions::default())
    }
}

impl CsvImporter {
    /// 创建导入器
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    /// 设置分隔符
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// 从文件导入
    pub fn import_path<P: AsRef<Path>>(&self, graph: &mut Graph<String>, path: P) -> Result<ImportStats> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Error::ImportError(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "importing edges");
        self.import_reader(graph, file)
    }

    /// 从任意读取器导入
    pub fn import_reader<R: Read>(&self, graph: &mut Graph<String>, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_headers)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut stats = ImportStats::default();
        let before = graph.vertex_count();

        for (line, record) in csv_reader.deserialize::<EdgeRecord>().enumerate() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(line = line + 1, error = %e, "skipping malformed row");
                    stats.errors += 1;
                    continue;
                }
            };

            insert_record(graph, record, &mut stats);
        }

        stats.vertices_imported = graph.vertex_count() - before;
        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            errors = stats.errors,
            "import finished"
        );
        Ok(stats)
    }
}

/// 插入一条记录：两个端点在前，边在后
fn insert_record(graph: &mut Graph<String>, record: EdgeRecord, stats: &mut ImportStats) {
    graph.add_vertex(record.origin.clone());
    graph.add_vertex(record.destination.clone());
    if graph.add_edge(&record.origin, &record.destination, record.weight) {
        stats.edges_imported += 1;
    } else {
        stats.edges_dropped += 1;
    }
}

/// 从 JSON Lines 导入，每行一个 `{"origin":..,"destination":..,"weight":..}`
pub fn import_jsonl<R: Read>(graph: &mut Graph<String>, reader: R) -> Result<ImportStats> {
    let start = Instant::now();
    let mut stats = ImportStats::default();
    let before = graph.vertex_count();

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<EdgeRecord>(&line) {
            Ok(record) => insert_record(graph, record, &mut stats),
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "skipping malformed record");
                stats.errors += 1;
            }
        }
    }

    stats.vertices_imported = graph.vertex_count() - before;
    stats.duration_ms = start.elapsed().as_millis() as u64;
    Ok(stats)
}

/// `.jsonl`/`.json` 扩展名视为 JSON Lines
pub fn is_jsonl_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("jsonl") | Some("json")
    )
}

/// 从 JSON Lines 文件导入到已有的图
pub fn import_jsonl_path<P: AsRef<Path>>(graph: &mut Graph<String>, path: P) -> Result<ImportStats> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| Error::ImportError(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), "importing edges");
    import_jsonl(graph, file)
}

/// 按扩展名选择格式，其余均按 CSV 处理
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<(Graph<String>, ImportStats)> {
    let path = path.as_ref();
    if !is_jsonl_path(path) {
        return load_csv(path);
    }

    let mut graph = Graph::new();
    let stats = import_jsonl_path(&mut graph, path)?;
    Ok((graph, stats))
}

/// 从 CSV 文件构建新图
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<(Graph<String>, ImportStats)> {
    let mut graph = Graph::new();
    let stats = CsvImporter::default().import_path(&mut graph, path)?;
    Ok((graph, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::HopSearch;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "origin,destination,weight").unwrap();
        writeln!(file, "A,B,1").unwrap();
        writeln!(file, "B,C,2.5").unwrap();
        writeln!(file, "A,C,5").unwrap();

        let (graph, stats) = load_csv(file.path()).unwrap();
        assert_eq!(stats.vertices_imported, 3);
        assert_eq!(stats.edges_imported, 3);
        assert_eq!(stats.errors, 0);

        let b = graph.find(&"B".to_string()).unwrap();
        let c = graph.find(&"C".to_string()).unwrap();
        assert_eq!(graph.edge_weight(b, c), Some(2.5));
        assert_eq!(
            HopSearch::new(&graph)
                .shortest_hop_count(&"B".to_string(), &"C".to_string())
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_import_original_headers() {
        let data = "Origem,Destino,Peso\nRecife,Olinda,12\nOlinda,Paulista, 8\n";
        let mut graph = Graph::new();
        let stats = CsvImporter::default()
            .import_reader(&mut graph, data.as_bytes())
            .unwrap();

        assert_eq!(stats.edges_imported, 2);
        assert!(graph.contains(&"Paulista".to_string()));
    }

    #[test]
    fn test_malformed_rows_are_counted() {
        let data = "origin,destination,weight\nA,B,1\nA,C,heavy\nB\nC,A,3\n";
        let mut graph = Graph::new();
        let stats = CsvImporter::default()
            .import_reader(&mut graph, data.as_bytes())
            .unwrap();

        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.errors, 2);
        // 出错的行不会插入顶点
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = "origin;destination;weight\nX;Y;4\n";
        let mut graph = Graph::new();
        let stats = CsvImporter::default()
            .with_delimiter(b';')
            .import_reader(&mut graph, data.as_bytes())
            .unwrap();
        assert_eq!(stats.edges_imported, 1);
    }

    #[test]
    fn test_import_jsonl() {
        let data = concat!(
            r#"{"origin":"A","destination":"B","weight":2}"#,
            "\n\n",
            r#"{"Origem":"B","Destino":"C","Peso":3.5}"#,
            "\n",
            "not json\n"
        );
        let mut graph = Graph::new();
        let stats = import_jsonl(&mut graph, data.as_bytes()).unwrap();

        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.vertices_imported, 3);
        assert_eq!(stats.errors, 1);
    }

    #[test]
    fn test_load_path_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        writeln!(file, r#"{{"origin":"X","destination":"Y","weight":1}}"#).unwrap();

        let (graph, stats) = load_path(file.path()).unwrap();
        assert_eq!(stats.edges_imported, 1);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_jsonl_extension_detection() {
        assert!(is_jsonl_path(Path::new("edges.jsonl")));
        assert!(is_jsonl_path(Path::new("dir/edges.json")));
        assert!(!is_jsonl_path(Path::new("edges.csv")));
        assert!(!is_jsonl_path(Path::new("edges")));
    }

    #[test]
    fn test_import_jsonl_path_into_existing_graph() {
        let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        writeln!(file, r#"{{"origin":"A","destination":"B","weight":1}}"#).unwrap();
        writeln!(file, r#"{{"source":"B","target":"C","cost":2}}"#).unwrap();

        let mut graph = Graph::new();
        graph.add_vertex("A".to_string());
        let stats = import_jsonl_path(&mut graph, file.path()).unwrap();
        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.vertices_imported, 2);
        assert_eq!(graph.edge_count(), 2);

        let err = import_jsonl_path(&mut graph, "/nonexistent/waygraph.jsonl").unwrap_err();
        assert!(matches!(err, Error::ImportError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv("/nonexistent/waygraph.csv").unwrap_err();
        assert!(matches!(err, Error::ImportError(_)));
    }
}
