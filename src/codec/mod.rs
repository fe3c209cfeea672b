//! 字节编解码底层实现模块。
//!
//! 提供字节序、字符集以及对字节缓冲区的低级读写操作。
//! 通常用户不需要直接使用此模块，而是通过 `convert` 中的函数进行转换。

pub mod charset;
pub mod endian;
pub mod error;
pub mod reader;
pub mod writer;
