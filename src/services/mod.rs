//! 服务层模块
//!
//! 在图模型之上提供算法服务

pub mod algorithm;

// 重新导出常用服务
pub use algorithm::*;
