//! 边定义
//!
//! 带容量与当前流量的有向边

use crate::error::{Error, Result};
use crate::network::node::NodeHandle;
use tracing::warn;

/// 边句柄：源节点 + 该节点出边列表中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeHandle {
    pub node: NodeHandle,
    pub slot: usize,
}

/// 边
///
/// 始终满足 `0 <= stream <= capacity`，只能经由 `new` 和 `set_stream` 构造与修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// 容量上限
    capacity: i64,
    /// 当前流量
    stream: i64,
    /// 目标节点（不持有，节点归网络所有）
    target: NodeHandle,
}

impl Edge {
    /// 创建新边，初始流量为 0
    pub fn new(capacity: i64, target: NodeHandle) -> Result<Self> {
        if capacity < 0 {
            return Err(Error::NegativeCapacity(capacity));
        }
        Ok(Self {
            capacity,
            stream: 0,
            target,
        })
    }

    /// 创建边并立即设置流量
    pub fn with_stream(mut self, stream: i64) -> Result<Self> {
        self.set_stream(stream)?;
        Ok(self)
    }

    /// 设置流量
    ///
    /// 超出 `[0, capacity]` 时拒绝，流量保持原值。
    pub fn set_stream(&mut self, value: i64) -> Result<()> {
        if value < 0 || value > self.capacity {
            warn!(
                value,
                capacity = self.capacity,
                stream = self.stream,
                "rejected stream update outside of [0, capacity]"
            );
            return Err(Error::CapacityViolation {
                value,
                capacity: self.capacity,
            });
        }
        self.stream = value;
        Ok(())
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn stream(&self) -> i64 {
        self.stream
    }

    pub fn target(&self) -> NodeHandle {
        self.target
    }

    /// 正向残余容量
    pub fn forward_residual(&self) -> i64 {
        self.capacity - self.stream
    }

    /// 反向残余容量（可撤销的流量）
    pub fn backward_residual(&self) -> i64 {
        self.stream
    }

    /// 还能增加流量
    pub fn can_increase(&self) -> bool {
        self.stream < self.capacity
    }

    /// 当前流量可以减少
    pub fn can_decrease(&self) -> bool {
        self.stream > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> NodeHandle {
        NodeHandle::new(1)
    }

    #[test]
    fn test_edge_starts_empty() {
        let e = Edge::new(6, target()).unwrap();
        assert_eq!(e.capacity(), 6);
        assert_eq!(e.stream(), 0);
        assert_eq!(e.target(), target());
        assert!(e.can_increase());
        assert!(!e.can_decrease());
    }

    #[test]
    fn test_negative_capacity_rejected() {
        assert!(matches!(
            Edge::new(-1, target()),
            Err(Error::NegativeCapacity(-1))
        ));
    }

    #[test]
    fn test_set_stream_boundary_is_inclusive() {
        let mut e = Edge::new(5, target()).unwrap();
        e.set_stream(5).unwrap();
        assert_eq!(e.stream(), 5);
        assert!(!e.can_increase());
        assert!(e.can_decrease());
    }

    #[test]
    fn test_set_stream_rejects_without_partial_update() {
        let mut e = Edge::new(4, target()).unwrap().with_stream(1).unwrap();

        let err = e.set_stream(5).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityViolation {
                value: 5,
                capacity: 4
            }
        ));
        assert_eq!(e.stream(), 1);

        assert!(e.set_stream(-1).is_err());
        assert_eq!(e.stream(), 1);
    }

    #[test]
    fn test_residuals() {
        let e = Edge::new(6, target()).unwrap().with_stream(2).unwrap();
        assert_eq!(e.forward_residual(), 4);
        assert_eq!(e.backward_residual(), 2);

        let zero = Edge::new(0, target()).unwrap();
        assert!(!zero.can_increase());
        assert!(!zero.can_decrease());
    }
}
