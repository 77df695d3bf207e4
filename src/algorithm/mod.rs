//! 图算法模块
//!
//! 包含残余图标记和增广路径重构

mod marking;
mod path;

pub use marking::{MarkingEngine, MarkingReport};
pub use path::{trace_path, AugmentingPath, Hop};
