//! 残余图节点标记
//!
//! Ford-Fulkerson 的标记阶段：从源点出发，沿残余容量为正的正向边
//! 或流量可撤销的反向边，标记所有可达节点并记录来源。
//! 使用显式工作表代替递归，深度优先时的访问顺序与递归展开完全一致。

use crate::config::MarkingConfig;
use crate::error::{Error, Result};
use crate::network::{Network, NodeHandle};
use crate::types::{NodeId, Origin, TraversalOrder};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};

/// 标记结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkingReport {
    /// 源点
    pub source: NodeId,
    /// 使用的遍历顺序
    pub order: TraversalOrder,
    /// 按发现顺序排列的已标记节点（含源点）
    pub marked: Vec<NodeId>,
    /// 展开的节点数
    pub expansions: usize,
}

impl MarkingReport {
    fn new(source: NodeId, order: TraversalOrder) -> Self {
        Self {
            source,
            order,
            marked: vec![source],
            expansions: 0,
        }
    }

    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        self.marked.contains(&id)
    }
}

/// 节点展开进度
#[derive(Debug, Clone, Copy)]
enum Cursor {
    /// 正在扫描自身出边，下一条为 `slot`
    Forward { slot: usize },
    /// 正在扫描全网节点寻找指向自身的可撤销边，下一个为 `next`
    Backward { next: usize },
}

#[derive(Debug)]
struct Frame {
    handle: NodeHandle,
    cursor: Cursor,
}

impl Frame {
    fn new(handle: NodeHandle) -> Self {
        Self {
            handle,
            cursor: Cursor::Forward { slot: 0 },
        }
    }
}

/// 标记引擎
pub struct MarkingEngine {
    config: MarkingConfig,
}

impl Default for MarkingEngine {
    fn default() -> Self {
        Self::new(MarkingConfig::default())
    }
}

impl MarkingEngine {
    /// 创建引擎实例
    pub fn new(config: MarkingConfig) -> Self {
        Self { config }
    }

    pub fn with_order(order: TraversalOrder) -> Self {
        Self::new(MarkingConfig::with_order(order))
    }

    pub fn config(&self) -> &MarkingConfig {
        &self.config
    }

    /// 标记源点，来源指向自身
    pub fn mark_source(&self, network: &mut Network, source: NodeId) -> Result<NodeHandle> {
        let handle = network
            .handle_of(source)
            .ok_or(Error::NodeNotFound(source))?;
        if let Some(node) = network.node_mut(handle) {
            node.mark(Origin::source(source));
        }
        Ok(handle)
    }

    /// 从源点开始一次完整的标记
    ///
    /// 先清除网络上已有的标记，因此在未改动的网络上重复运行结果相同。
    pub fn mark_from(&self, network: &mut Network, source: NodeId) -> Result<MarkingReport> {
        network.reset_marks();
        let start = self.mark_source(network, source)?;

        let mut report = MarkingReport::new(source, self.config.order);
        match self.config.order {
            TraversalOrder::DepthFirst => Self::expand_depth_first(network, start, &mut report),
            TraversalOrder::BreadthFirst => {
                Self::expand_breadth_first(network, start, &mut report)
            }
        }

        info!(
            source = %source,
            order = ?self.config.order,
            marked = report.marked.len(),
            nodes = network.node_count(),
            "marking finished"
        );
        Ok(report)
    }

    fn expand_depth_first(network: &mut Network, start: NodeHandle, report: &mut MarkingReport) {
        let mut stack = vec![Frame::new(start)];
        report.expansions += 1;

        while let Some(frame) = stack.last_mut() {
            match next_discovery(network, frame) {
                Some((handle, origin)) => {
                    if record(network, handle, origin, report) {
                        stack.push(Frame::new(handle));
                        report.expansions += 1;
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn expand_breadth_first(network: &mut Network, start: NodeHandle, report: &mut MarkingReport) {
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            report.expansions += 1;
            let mut frame = Frame::new(current);
            while let Some((handle, origin)) = next_discovery(network, &mut frame) {
                if record(network, handle, origin, report) {
                    queue.push_back(handle);
                }
            }
        }
    }
}

/// 标记节点并写入结果，节点已被标记时返回 false
fn record(
    network: &mut Network,
    handle: NodeHandle,
    origin: Origin,
    report: &mut MarkingReport,
) -> bool {
    let Some(node) = network.node_mut(handle) else {
        return false;
    };
    if !node.mark(origin) {
        return false;
    }
    let id = node.id();
    debug!(node = %id, origin = %origin, step = %origin.step, "node marked");
    report.marked.push(id);
    true
}

fn is_unmarked(network: &Network, handle: NodeHandle) -> bool {
    network.node(handle).map_or(false, |n| !n.is_marked())
}

/// 推进 `frame` 的游标，返回下一个可标记的节点及其来源
fn next_discovery(network: &Network, frame: &mut Frame) -> Option<(NodeHandle, Origin)> {
    let current = network.node(frame.handle)?;
    let current_id = current.id();

    // 正向：自身出边还有残余容量
    if let Cursor::Forward { slot } = frame.cursor {
        for (i, edge) in current.edges().iter().enumerate().skip(slot) {
            if edge.can_increase() && is_unmarked(network, edge.target()) {
                frame.cursor = Cursor::Forward { slot: i + 1 };
                return Some((edge.target(), Origin::forward(current_id)));
            }
        }
        frame.cursor = Cursor::Backward { next: 0 };
    }

    // 反向：任意未标记节点有指向自身且带流量的边
    if let Cursor::Backward { next } = frame.cursor {
        for index in next..network.node_count() {
            let candidate = NodeHandle::new(index);
            let Some(node) = network.node(candidate) else {
                continue;
            };
            if node.is_marked() {
                continue;
            }
            let cancelable = node
                .edges()
                .iter()
                .any(|e| e.target() == frame.handle && e.can_decrease());
            if cancelable {
                frame.cursor = Cursor::Backward { next: index + 1 };
                return Some((candidate, Origin::backward(current_id)));
            }
        }
        frame.cursor = Cursor::Backward {
            next: network.node_count(),
        };
    }

    None
}
