//! 网络状态快照
//!
//! 只读投影，用于诊断输出和测试断言

use super::network::Network;
use crate::error::Result;
use crate::types::{NodeId, Origin};
use serde::{Deserialize, Serialize};

/// 节点记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub marked: bool,
    pub origin: Option<Origin>,
}

/// 边记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub capacity: i64,
    pub stream: i64,
}

/// 快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node(&self, id: impl Into<NodeId>) -> Option<&NodeRecord> {
        let id = id.into();
        self.nodes.iter().find(|n| n.id == id)
    }
}

impl Network {
    /// 所有节点的 (id, 是否标记, 来源)
    pub fn node_records(&self) -> Vec<NodeRecord> {
        self.nodes()
            .map(|n| NodeRecord {
                id: n.id(),
                marked: n.is_marked(),
                origin: n.origin(),
            })
            .collect()
    }

    /// 所有边的 (源, 目标, 容量, 流量)
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edges()
            .filter_map(|(src, e)| {
                Some(EdgeRecord {
                    source: self.node(src)?.id(),
                    target: self.node(e.target())?.id(),
                    capacity: e.capacity(),
                    stream: e.stream(),
                })
            })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.node_records(),
            edges: self.edge_records(),
        }
    }
}
