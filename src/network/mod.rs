//! 流网络模块
//!
//! 定义节点、边和网络的核心数据结构

mod edge;
mod network;
mod node;
mod snapshot;

pub use edge::{Edge, EdgeHandle};
pub use network::Network;
pub use node::{Node, NodeHandle};
pub use snapshot::{EdgeRecord, NodeRecord, Snapshot};
