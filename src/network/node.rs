//! 节点定义

use crate::network::edge::Edge;
use crate::types::{NodeId, Origin};
use smallvec::SmallVec;
use std::fmt;

/// 节点句柄（网络中按插入顺序的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub usize);

impl NodeHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 节点
#[derive(Debug, Clone)]
pub struct Node {
    /// 节点 ID
    id: NodeId,
    /// 是否已标记（标记状态以此为准，不从 origin 推断）
    marked: bool,
    /// 来源
    origin: Option<Origin>,
    /// 出边，保持插入顺序
    edges: SmallVec<[Edge; 4]>,
}

impl Node {
    /// 创建未标记的新节点
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            marked: false,
            origin: None,
            edges: SmallVec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// 出边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, slot: usize) -> Option<&Edge> {
        self.edges.get(slot)
    }

    pub(crate) fn edge_mut(&mut self, slot: usize) -> Option<&mut Edge> {
        self.edges.get_mut(slot)
    }

    /// 追加出边，返回其位置
    pub(crate) fn push_edge(&mut self, edge: Edge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }

    /// 标记节点；已标记时不做任何修改并返回 false
    pub(crate) fn mark(&mut self, origin: Origin) -> bool {
        if self.marked {
            return false;
        }
        self.marked = true;
        self.origin = Some(origin);
        true
    }

    pub(crate) fn clear_mark(&mut self) {
        self.marked = false;
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_created_unmarked() {
        let n = Node::new(7);
        assert_eq!(n.id(), NodeId::new(7));
        assert!(!n.is_marked());
        assert_eq!(n.origin(), None);
        assert!(n.edges().is_empty());
    }

    #[test]
    fn test_mark_is_monotonic() {
        let mut n = Node::new(2);
        assert!(n.mark(Origin::forward(NodeId::new(1))));
        assert!(!n.mark(Origin::backward(NodeId::new(3))));
        assert!(n.is_marked());
        assert_eq!(n.origin(), Some(Origin::forward(NodeId::new(1))));
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut n = Node::new(1);
        let a = n.push_edge(Edge::new(3, NodeHandle::new(1)).unwrap());
        let b = n.push_edge(Edge::new(4, NodeHandle::new(1)).unwrap());
        assert_eq!((a, b), (0, 1));
        assert_eq!(n.edge(0).map(|e| e.capacity()), Some(3));
        assert_eq!(n.edge(1).map(|e| e.capacity()), Some(4));
    }
}
