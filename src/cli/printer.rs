//! 结果打印器
//!
//! 提供表格、纯文本和 JSON 格式的网络状态输出

use crate::algorithm::{AugmentingPath, MarkingReport};
use crate::error::Result;
use crate::network::{EdgeRecord, NodeRecord, Snapshot};
use crate::types::Step;
use prettytable::{format, row, Table};
use std::str::FromStr;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 纯文本模式（逐行转储）
    Plain,
    /// JSON
    Json,
}

impl FromStr for PrintMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(PrintMode::Table),
            "plain" | "text" => Ok(PrintMode::Plain),
            "json" => Ok(PrintMode::Json),
            other => Err(format!("未知的输出格式: {}", other)),
        }
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印节点列表
    pub fn print_nodes(&self, nodes: &[NodeRecord]) -> Result<String> {
        Ok(match self.mode {
            PrintMode::Table => {
                let mut table = Self::table();
                table.set_titles(row!["Node", "Marked", "Origin", "Step"]);
                for n in nodes {
                    let (origin, step) = match n.origin {
                        Some(o) => (o.signed().to_string(), o.step.to_string()),
                        None => ("-".to_string(), "-".to_string()),
                    };
                    table.add_row(row![n.id, n.marked, origin, step]);
                }
                table.to_string()
            }
            PrintMode::Plain => {
                let mut out = String::from("this graph's nodes : \n");
                for n in nodes {
                    out.push_str(&format!(
                        "#{} => is_marked : {} origin : {}\n",
                        n.id,
                        u8::from(n.marked),
                        n.origin.map_or(0, |o| o.signed())
                    ));
                }
                out
            }
            PrintMode::Json => serde_json::to_string_pretty(nodes)?,
        })
    }

    /// 打印边列表
    pub fn print_edges(&self, edges: &[EdgeRecord]) -> Result<String> {
        Ok(match self.mode {
            PrintMode::Table => {
                let mut table = Self::table();
                table.set_titles(row!["Source", "Target", "Capacity", "Stream"]);
                for e in edges {
                    table.add_row(row![e.source, e.target, e.capacity, e.stream]);
                }
                table.to_string()
            }
            PrintMode::Plain => {
                let mut out = String::from("this graph's edges : \n");
                for e in edges {
                    out.push_str(&format!(
                        "{} -> {} capacity : {} stream : {}\n",
                        e.source, e.target, e.capacity, e.stream
                    ));
                }
                out
            }
            PrintMode::Json => serde_json::to_string_pretty(edges)?,
        })
    }

    /// 打印完整快照
    pub fn print_snapshot(&self, snapshot: &Snapshot) -> Result<String> {
        if self.mode == PrintMode::Json {
            return snapshot.to_json();
        }
        Ok(format!(
            "{}\n{}",
            self.print_nodes(&snapshot.nodes)?,
            self.print_edges(&snapshot.edges)?
        ))
    }

    /// 打印标记摘要
    pub fn print_report(&self, report: &MarkingReport) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }
        let marked: Vec<String> = report.marked.iter().map(|id| id.to_string()).collect();
        Ok(format!(
            "marked {} node(s) from {} ({:?}): [{}], {} expansion(s)\n",
            report.marked.len(),
            report.source,
            report.order,
            marked.join(", "),
            report.expansions
        ))
    }

    /// 打印增广路径
    pub fn print_path(&self, path: &AugmentingPath) -> Result<String> {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(path)?);
        }
        let mut out = path.source.to_string();
        for hop in &path.hops {
            let arrow = match hop.step {
                Step::Backward => " <= ",
                _ => " -> ",
            };
            out.push_str(arrow);
            out.push_str(&hop.to.to_string());
        }
        out.push('\n');
        Ok(out)
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }
}
