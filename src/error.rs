//! 错误类型定义

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("流量越界: 试图设置流量 {value}, 容量为 {capacity}")]
    CapacityViolation { value: i64, capacity: i64 },

    #[error("容量不能为负: {0}")]
    NegativeCapacity(i64),

    #[error("节点已存在: {0}")]
    DuplicateNode(NodeId),

    #[error("节点不存在: {0}")]
    NodeNotFound(NodeId),

    #[error("节点句柄不存在: {0}")]
    NodeHandleNotFound(usize),

    #[error("边不存在: 节点 {node} 的第 {slot} 条出边")]
    EdgeNotFound { node: NodeId, slot: usize },

    #[error("边的目标节点不在网络中: 句柄 {0}")]
    DanglingTarget(usize),

    #[error("节点未被标记，无法到达: {0}")]
    NotReachable(NodeId),

    #[error("来源链断裂: 节点 {0}")]
    BrokenOriginChain(NodeId),

    #[error("场景错误: {0}")]
    ScenarioError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
