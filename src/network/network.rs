//! 流网络
//!
//! 有向多重图：节点按插入顺序存放，边归源节点所有，目标以句柄引用

use super::edge::{Edge, EdgeHandle};
use super::node::{Node, NodeHandle};
use crate::error::{Error, Result};
use crate::types::NodeId;
use indexmap::IndexMap;
use tracing::debug;

/// 流网络
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// ID -> 节点，保持插入顺序，下标即 `NodeHandle`
    nodes: IndexMap<NodeId, Node>,
}

impl Network {
    /// 创建空网络
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    // ==================== 节点操作 ====================

    /// 添加节点，ID 重复时拒绝
    ///
    /// 节点自带的出边（例如从其他网络克隆而来）的目标必须已在本网络中，
    /// 或指向节点自身即将占用的位置。
    pub fn add_node(&mut self, node: Node) -> Result<NodeHandle> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }
        let next = self.nodes.len();
        if let Some(edge) = node.edges().iter().find(|e| e.target().index() > next) {
            return Err(Error::DanglingTarget(edge.target().index()));
        }
        let (index, _) = self.nodes.insert_full(id, node);
        debug!(node = %id, handle = index, "node added");
        Ok(NodeHandle::new(index))
    }

    /// 按 ID 创建并添加节点
    pub fn create_node(&mut self, id: impl Into<NodeId>) -> Result<NodeHandle> {
        self.add_node(Node::new(id))
    }

    /// 获取节点，不存在时返回 `NodeNotFound`
    pub fn get_node(&self, id: impl Into<NodeId>) -> Result<&Node> {
        let id = id.into();
        self.nodes.get(&id).ok_or(Error::NodeNotFound(id))
    }

    pub fn find_node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(&id.into())
    }

    /// ID 对应的句柄
    pub fn handle_of(&self, id: impl Into<NodeId>) -> Option<NodeHandle> {
        self.nodes.get_index_of(&id.into()).map(NodeHandle::new)
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get_index(handle.index()).map(|(_, n)| n)
    }

    pub(crate) fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_index_mut(handle.index()).map(|(_, n)| n)
    }

    /// 所有节点（插入顺序）
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ==================== 边操作 ====================

    /// 为节点追加出边
    pub fn add_edge(&mut self, from: NodeHandle, edge: Edge) -> Result<EdgeHandle> {
        if edge.target().index() >= self.nodes.len() {
            return Err(Error::DanglingTarget(edge.target().index()));
        }
        let node = self
            .node_mut(from)
            .ok_or(Error::NodeHandleNotFound(from.index()))?;
        let slot = node.push_edge(edge);
        Ok(EdgeHandle { node: from, slot })
    }

    /// 按 ID 连接两个节点
    pub fn connect(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        capacity: i64,
    ) -> Result<EdgeHandle> {
        let from = from.into();
        let to = to.into();
        let src = self.handle_of(from).ok_or(Error::NodeNotFound(from))?;
        let dst = self.handle_of(to).ok_or(Error::NodeNotFound(to))?;
        self.add_edge(src, Edge::new(capacity, dst)?)
    }

    pub fn edge(&self, handle: EdgeHandle) -> Result<&Edge> {
        let node = self
            .node(handle.node)
            .ok_or(Error::NodeHandleNotFound(handle.node.index()))?;
        node.edge(handle.slot).ok_or(Error::EdgeNotFound {
            node: node.id(),
            slot: handle.slot,
        })
    }

    /// 设置边的流量（容量检查见 `Edge::set_stream`）
    pub fn set_stream(&mut self, handle: EdgeHandle, value: i64) -> Result<()> {
        let node = self
            .node_mut(handle.node)
            .ok_or(Error::NodeHandleNotFound(handle.node.index()))?;
        let id = node.id();
        let edge = node.edge_mut(handle.slot).ok_or(Error::EdgeNotFound {
            node: id,
            slot: handle.slot,
        })?;
        edge.set_stream(value)
    }

    /// 所有边：(源节点句柄, 边)，先按节点再按出边顺序
    pub fn edges(&self) -> impl Iterator<Item = (NodeHandle, &Edge)> {
        self.nodes
            .values()
            .enumerate()
            .flat_map(|(i, n)| n.edges().iter().map(move |e| (NodeHandle::new(i), e)))
    }

    /// 指向 `target` 的所有边
    pub fn edges_into(&self, target: NodeHandle) -> impl Iterator<Item = (NodeHandle, &Edge)> {
        self.edges().filter(move |(_, e)| e.target() == target)
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.edges().len()).sum()
    }

    // ==================== 标记状态 ====================

    /// 清除所有节点的标记与来源
    pub fn reset_marks(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_mark();
        }
    }

    /// 已标记节点的 ID（插入顺序）
    pub fn marked_ids(&self) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.is_marked())
            .map(|n| n.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Origin;

    fn diamond() -> Network {
        let mut net = Network::new();
        for id in 1..=4 {
            net.create_node(id).unwrap();
        }
        net.connect(1, 2, 3).unwrap();
        net.connect(1, 3, 6).unwrap();
        net.connect(3, 2, 4).unwrap();
        net
    }

    #[test]
    fn test_network_basic() {
        let net = diamond();
        assert_eq!(net.node_count(), 4);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.handle_of(3), Some(NodeHandle::new(2)));
        assert_eq!(net.get_node(2).unwrap().id(), NodeId::new(2));
    }

    #[test]
    fn test_lookup_miss_is_explicit() {
        let net = diamond();
        assert!(matches!(net.get_node(99), Err(Error::NodeNotFound(NodeId(99)))));
        assert!(net.find_node(99).is_none());
        assert!(net.handle_of(99).is_none());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut net = diamond();
        assert!(matches!(
            net.create_node(2),
            Err(Error::DuplicateNode(NodeId(2)))
        ));
        assert_eq!(net.node_count(), 4);
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let mut net = diamond();
        let first = net.connect(1, 2, 5).unwrap();
        let second = net.connect(1, 2, 7).unwrap();
        assert_ne!(first, second);

        net.set_stream(first, 5).unwrap();
        assert_eq!(net.edge(first).unwrap().stream(), 5);
        assert_eq!(net.edge(second).unwrap().stream(), 0);

        let target = net.handle_of(2).unwrap();
        assert_eq!(net.edges_into(target).count(), 4);
    }

    #[test]
    fn test_dangling_target_rejected() {
        let mut net = diamond();
        let edge = Edge::new(1, NodeHandle::new(10)).unwrap();
        assert!(matches!(
            net.add_edge(NodeHandle::new(0), edge),
            Err(Error::DanglingTarget(10))
        ));
        assert!(net.connect(1, 42, 1).is_err());
    }

    #[test]
    fn test_unknown_source_handle() {
        let mut net = diamond();
        let edge = Edge::new(1, NodeHandle::new(0)).unwrap();
        assert!(matches!(
            net.add_edge(NodeHandle::new(7), edge),
            Err(Error::NodeHandleNotFound(7))
        ));

        let missing = EdgeHandle {
            node: NodeHandle::new(7),
            slot: 0,
        };
        assert!(matches!(net.edge(missing), Err(Error::NodeHandleNotFound(7))));
        assert!(matches!(
            net.set_stream(missing, 1),
            Err(Error::NodeHandleNotFound(7))
        ));
    }

    #[test]
    fn test_add_node_with_foreign_edges_rejected() {
        let source = diamond();
        let carried = source.get_node(1).unwrap().clone();
        assert_eq!(carried.edges().len(), 2);

        let mut net = Network::new();
        assert!(matches!(
            net.add_node(carried),
            Err(Error::DanglingTarget(1))
        ));
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn test_add_node_with_self_loop_accepted() {
        let mut source = Network::new();
        source.create_node(5).unwrap();
        let h = source.connect(5, 5, 2).unwrap();
        source.set_stream(h, 1).unwrap();

        let mut net = Network::new();
        net.add_node(source.get_node(5).unwrap().clone()).unwrap();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.edge_records().len(), net.edge_count());
    }

    #[test]
    fn test_set_stream_violation_keeps_value() {
        let mut net = diamond();
        let h = net.connect(2, 4, 6).unwrap();
        net.set_stream(h, 4).unwrap();
        assert!(net.set_stream(h, 7).is_err());
        assert_eq!(net.edge(h).unwrap().stream(), 4);

        let missing = EdgeHandle { node: h.node, slot: 9 };
        assert!(matches!(
            net.set_stream(missing, 1),
            Err(Error::EdgeNotFound { slot: 9, .. })
        ));
    }

    #[test]
    fn test_reset_marks() {
        let mut net = diamond();
        let h = net.handle_of(1).unwrap();
        net.node_mut(h).unwrap().mark(Origin::source(NodeId::new(1)));
        assert_eq!(net.marked_ids(), vec![NodeId::new(1)]);

        net.reset_marks();
        assert!(net.marked_ids().is_empty());
        assert!(net.get_node(1).unwrap().origin().is_none());
    }
}
