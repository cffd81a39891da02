//! CLI 模块
//!
//! 图结构和算法结果的文本输出

mod printer;

pub use printer::Printer;
