//! 增广路径重构
//!
//! 沿标记阶段记录的来源从汇点回溯到源点。只读，不修改流量。

use crate::error::{Error, Result};
use crate::network::Network;
use crate::types::{NodeId, Step};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 路径上的一跳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub from: NodeId,
    pub to: NodeId,
    /// Forward: 使用边 from->to；Backward: 撤销边 to->from 上的流量
    pub step: Step,
}

/// 增广路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentingPath {
    pub source: NodeId,
    pub sink: NodeId,
    pub hops: Vec<Hop>,
}

impl AugmentingPath {
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// 路径上的节点序列（源点到汇点）
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = vec![self.source];
        nodes.extend(self.hops.iter().map(|h| h.to));
        nodes
    }

    /// 路径瓶颈：各跳可用残余量的最小值
    ///
    /// 并行边取残余量最大的那条。源点即汇点时返回 None。
    pub fn bottleneck(&self, network: &Network) -> Option<i64> {
        let mut min: Option<i64> = None;
        for hop in &self.hops {
            let r = hop_residual(network, hop)?;
            min = Some(min.map_or(r, |m| m.min(r)));
        }
        min
    }
}

fn hop_residual(network: &Network, hop: &Hop) -> Option<i64> {
    let (from, to) = match hop.step {
        Step::Forward => (hop.from, hop.to),
        Step::Backward => (hop.to, hop.from),
        Step::Source => return None,
    };
    let src = network.find_node(from)?;
    let dst = network.handle_of(to)?;
    src.edges()
        .iter()
        .filter(|e| e.target() == dst)
        .map(|e| match hop.step {
            Step::Backward => e.backward_residual(),
            _ => e.forward_residual(),
        })
        .max()
}

/// 从汇点回溯出增广路径
pub fn trace_path(network: &Network, sink: impl Into<NodeId>) -> Result<AugmentingPath> {
    let sink = sink.into();
    let node = network.get_node(sink)?;
    if !node.is_marked() {
        return Err(Error::NotReachable(sink));
    }

    let mut hops = Vec::new();
    let mut seen = HashSet::new();
    let mut current = sink;

    loop {
        if !seen.insert(current) {
            return Err(Error::BrokenOriginChain(current));
        }
        let origin = network
            .get_node(current)?
            .origin()
            .ok_or(Error::BrokenOriginChain(current))?;

        if origin.step == Step::Source {
            break;
        }

        let pred = network
            .find_node(origin.predecessor)
            .filter(|n| n.is_marked())
            .ok_or(Error::BrokenOriginChain(current))?;

        hops.push(Hop {
            from: pred.id(),
            to: current,
            step: origin.step,
        });
        current = pred.id();
    }

    hops.reverse();
    Ok(AugmentingPath {
        source: current,
        sink,
        hops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::MarkingEngine;

    fn marked_network() -> Network {
        // s=1, a=2, b=3, t=4
        let mut net = Network::new();
        for id in 1..=4 {
            net.create_node(id).unwrap();
        }
        for (from, to, capacity, stream) in [
            (1, 2, 5, 5),
            (1, 3, 5, 0),
            (2, 3, 5, 5),
            (2, 4, 5, 0),
            (3, 4, 5, 5),
        ] {
            let h = net.connect(from, to, capacity).unwrap();
            net.set_stream(h, stream).unwrap();
        }
        MarkingEngine::default()
            .mark_from(&mut net, NodeId::new(1))
            .unwrap();
        net
    }

    #[test]
    fn test_trace_path_with_backward_hop() {
        let net = marked_network();
        let path = trace_path(&net, 4).unwrap();

        assert_eq!(path.source, NodeId::new(1));
        assert_eq!(
            path.nodes(),
            vec![NodeId::new(1), NodeId::new(3), NodeId::new(2), NodeId::new(4)]
        );
        assert_eq!(path.hops[0].step, Step::Forward);
        assert_eq!(path.hops[1].step, Step::Backward);
        assert_eq!(path.hops[2].step, Step::Forward);
        assert_eq!(path.bottleneck(&net), Some(5));
    }

    #[test]
    fn test_trace_path_to_source() {
        let net = marked_network();
        let path = trace_path(&net, 1).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.bottleneck(&net), None);
    }

    #[test]
    fn test_trace_unreachable_sink() {
        let mut net = Network::new();
        net.create_node(1).unwrap();
        net.create_node(2).unwrap();
        let h = net.connect(1, 2, 3).unwrap();
        net.set_stream(h, 3).unwrap();
        MarkingEngine::default()
            .mark_from(&mut net, NodeId::new(1))
            .unwrap();

        assert!(matches!(
            trace_path(&net, 2),
            Err(Error::NotReachable(NodeId(2)))
        ));
        assert!(matches!(
            trace_path(&net, 7),
            Err(Error::NodeNotFound(NodeId(7)))
        ));
    }

    #[test]
    fn test_bottleneck_uses_smallest_hop() {
        let mut net = Network::new();
        for id in 1..=3 {
            net.create_node(id).unwrap();
        }
        let a = net.connect(1, 2, 10).unwrap();
        net.set_stream(a, 4).unwrap();
        net.connect(2, 3, 2).unwrap();
        MarkingEngine::default()
            .mark_from(&mut net, NodeId::new(1))
            .unwrap();

        let path = trace_path(&net, 3).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.bottleneck(&net), Some(2));
    }
}
