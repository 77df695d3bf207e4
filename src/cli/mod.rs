//! 命令行输出模块

mod printer;

pub use printer::{PrintMode, Printer};
