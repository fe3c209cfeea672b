//! 将基础类型、文本以及自定义对象转换为字节序列。
//!
//! 多字节数值可以选择大端序或小端序,默认为大端序。

pub mod capability;
pub mod codec;
pub mod convert;
pub mod options;
pub mod value;

pub use capability::{Registry, ToBytes, TryToBytes};
pub use codec::charset::Charset;
pub use codec::endian::Endianness;
pub use codec::error::{Error, Result};
pub use codec::reader::ByteReader;
pub use codec::writer::ByteWriter;
pub use convert::{
    encode_bool, encode_char16, encode_char16_with, encode_i16, encode_i16_with, encode_i32,
    encode_i32_with, encode_i64, encode_i64_with, encode_object, encode_str, encode_str_with,
};
pub use options::Options;
pub use value::{Value, encode_value};
