//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 节点标识（由调用方指定，网络内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub i64);

impl NodeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 标记步骤的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// 源点本身
    Source,
    /// 正向残余步（沿边方向，边还能增加流量）
    Forward,
    /// 反向残余步（逆边方向，边上的流量可以撤销）
    Backward,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Source => "source",
            Step::Forward => "forward",
            Step::Backward => "backward",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 节点的来源：前驱节点 + 步骤类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Origin {
    pub predecessor: NodeId,
    pub step: Step,
}

impl Origin {
    pub fn source(id: NodeId) -> Self {
        Self {
            predecessor: id,
            step: Step::Source,
        }
    }

    pub fn forward(from: NodeId) -> Self {
        Self {
            predecessor: from,
            step: Step::Forward,
        }
    }

    pub fn backward(from: NodeId) -> Self {
        Self {
            predecessor: from,
            step: Step::Backward,
        }
    }

    /// 带符号的紧凑编码：正数为正向步，负数为反向步，源点为自身 ID
    ///
    /// 扩展到 i128，`i64::MIN` 取反也不会溢出。
    pub fn signed(&self) -> i128 {
        let id = i128::from(self.predecessor.0);
        match self.step {
            Step::Source | Step::Forward => id,
            Step::Backward => -id,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed())
    }
}

/// 工作表的遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// 深度优先，访问顺序与递归展开一致
    DepthFirst,
    /// 广度优先，逐个节点完整展开
    BreadthFirst,
}

impl Default for TraversalOrder {
    fn default() -> Self {
        TraversalOrder::DepthFirst
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Ok(TraversalOrder::DepthFirst),
            "bfs" | "breadth" | "breadth_first" => Ok(TraversalOrder::BreadthFirst),
            other => Err(format!("未知的遍历顺序: {}", other)),
        }
    }
}
