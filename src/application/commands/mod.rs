//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：会产生外部副作用的操作（远程合成、写文件、启动进程）

mod speech_commands;

pub mod handlers;

pub use speech_commands::*;
