//! 语义颜色
//!
//! 绘制层只知道"这是什么"，具体怎么上色由各个 surface 决定。

use serde::{Deserialize, Serialize};

use crate::topo::NodeRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Wire,
    Client,
    Server,
    Plain,
    Hub,
    Packet,
    Text,
}

impl Paint {
    pub fn for_role(role: NodeRole) -> Paint {
        match role {
            NodeRole::Client => Paint::Client,
            NodeRole::Server => Paint::Server,
            NodeRole::Hub => Paint::Hub,
            NodeRole::Plain => Paint::Plain,
        }
    }

    /// RGB（0..=1）：client 绿、server 蓝、hub 黄、数据包红，其余白
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Paint::Client => [0.0, 1.0, 0.0],
            Paint::Server => [0.0, 0.0, 1.0],
            Paint::Hub => [1.0, 1.0, 0.0],
            Paint::Packet => [1.0, 0.0, 0.0],
            Paint::Wire | Paint::Plain | Paint::Text => [1.0, 1.0, 1.0],
        }
    }
}
