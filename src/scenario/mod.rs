//! 场景模块
//!
//! 以声明方式描述流网络（可从 JSON 读取），并内置三个演示场景

use crate::error::{Error, Result};
use crate::network::Network;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 边描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: i64,
    pub to: i64,
    pub capacity: i64,
    #[serde(default)]
    pub stream: i64,
}

impl EdgeSpec {
    pub fn new(from: i64, to: i64, capacity: i64, stream: i64) -> Self {
        Self {
            from,
            to,
            capacity,
            stream,
        }
    }
}

/// 场景描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub nodes: Vec<i64>,
    pub edges: Vec<EdgeSpec>,
    /// 标记起点
    pub source: i64,
}

impl ScenarioSpec {
    /// 从 JSON 文件读取
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn source_id(&self) -> NodeId {
        NodeId::new(self.source)
    }

    /// 构建网络：先添加全部节点，再按顺序添加边并设置流量
    pub fn build(&self) -> Result<Network> {
        let mut network = Network::new();
        for &id in &self.nodes {
            network.create_node(id)?;
        }
        if network.find_node(self.source).is_none() {
            return Err(Error::ScenarioError(format!(
                "场景 {} 的源点 {} 不在节点列表中",
                self.name, self.source
            )));
        }
        for edge in &self.edges {
            let handle = network.connect(edge.from, edge.to, edge.capacity)?;
            network.set_stream(handle, edge.stream)?;
        }
        debug!(
            scenario = %self.name,
            nodes = network.node_count(),
            edges = network.edge_count(),
            "scenario built"
        );
        Ok(network)
    }
}

/// 内置场景名
pub const BUILTIN_NAMES: [&str; 3] = ["first", "second", "third"];

/// 按名称获取内置场景
pub fn builtin(name: &str) -> Result<ScenarioSpec> {
    match name.to_lowercase().as_str() {
        "first" | "1" => Ok(first()),
        "second" | "2" => Ok(second()),
        "third" | "3" => Ok(third()),
        other => Err(Error::ScenarioError(format!("未知的内置场景: {}", other))),
    }
}

pub fn all_builtin() -> Vec<ScenarioSpec> {
    vec![first(), second(), third()]
}

/// s = 1, a = 2, b = 3, t = 4
fn four_nodes(name: &str, edges: Vec<EdgeSpec>) -> ScenarioSpec {
    ScenarioSpec {
        name: name.to_string(),
        nodes: vec![1, 2, 3, 4],
        edges,
        source: 1,
    }
}

pub fn first() -> ScenarioSpec {
    four_nodes(
        "first",
        vec![
            EdgeSpec::new(1, 2, 3, 3),
            EdgeSpec::new(1, 3, 6, 2),
            EdgeSpec::new(3, 2, 4, 1),
            EdgeSpec::new(2, 4, 6, 4),
            EdgeSpec::new(3, 4, 1, 1),
        ],
    )
}

pub fn second() -> ScenarioSpec {
    four_nodes(
        "second",
        vec![
            EdgeSpec::new(1, 2, 5, 5),
            EdgeSpec::new(1, 3, 5, 0),
            EdgeSpec::new(2, 3, 5, 5),
            EdgeSpec::new(2, 4, 5, 0),
            EdgeSpec::new(3, 4, 5, 5),
        ],
    )
}

pub fn third() -> ScenarioSpec {
    four_nodes(
        "third",
        vec![
            EdgeSpec::new(1, 2, 4, 4),
            EdgeSpec::new(1, 3, 3, 2),
            EdgeSpec::new(2, 3, 2, 1),
            EdgeSpec::new(3, 2, 2, 1),
            EdgeSpec::new(2, 4, 5, 4),
            EdgeSpec::new(3, 4, 2, 2),
        ],
    )
}
