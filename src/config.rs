//! 运行配置

use crate::error::Result;
use crate::types::TraversalOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 标记引擎配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkingConfig {
    /// 工作表遍历顺序
    pub order: TraversalOrder,
}

impl MarkingConfig {
    pub fn with_order(order: TraversalOrder) -> Self {
        Self { order }
    }

    /// 从 JSON 文件读取，缺失字段取默认值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
