//! FlowMark - 残余图节点标记
//!
//! Ford-Fulkerson 最大流算法的标记阶段：
//! - 带容量与流量的有向多重图
//! - 正向/反向残余步判定
//! - 从源点出发标记所有可达节点，并记录来源
//! - 状态快照与诊断输出

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod network;
pub mod scenario;
pub mod types;

// 重导出常用类型
pub use algorithm::{trace_path, AugmentingPath, Hop, MarkingEngine, MarkingReport};
pub use config::MarkingConfig;
pub use error::{Error, Result};
pub use network::{Edge, EdgeHandle, Network, Node, NodeHandle, Snapshot};
pub use types::{NodeId, Origin, Step, TraversalOrder};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
