use crate::capability::ToBytes;
use crate::codec::charset::Charset;
use crate::codec::endian::Endianness;
use crate::codec::writer::ByteWriter;
use std::fmt;

/// 可编码的值。
///
/// 用一个枚举代替按静态类型区分的多个重载。
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// 8 字节整数。
    Long(i64),
    /// 4 字节整数。
    Int(i32),
    /// 2 字节整数。
    Short(i16),
    /// 16 位字符码元。
    Char(u16),
    Bool(bool),
    Text(&'a str),
    /// 自行提供字节的对象。
    Object(&'a dyn ToBytes),
}

impl Value<'_> {
    /// 固定宽度类型的编码长度,文本与对象返回 `None`。
    pub const fn fixed_width(&self) -> Option<usize> {
        match self {
            Value::Long(_) => Some(8),
            Value::Int(_) => Some(4),
            Value::Short(_) | Value::Char(_) => Some(2),
            Value::Bool(_) => Some(1),
            Value::Text(_) | Value::Object(_) => None,
        }
    }

    /// 使用指定字节序和平台默认字符集编码。
    pub fn encode(&self, order: Endianness) -> Vec<u8> {
        self.encode_with(order, Charset::platform_default())
    }

    pub(crate) fn encode_with(&self, order: Endianness, charset: Charset) -> Vec<u8> {
        let mut w = ByteWriter::with_capacity(self.fixed_width().unwrap_or(0));
        match *self {
            Value::Long(v) => w.write_i64(v, order),
            Value::Int(v) => w.write_i32(v, order),
            Value::Short(v) => w.write_i16(v, order),
            Value::Char(v) => w.write_char16(v, order),
            Value::Bool(v) => w.write_bool(v),
            Value::Text(s) => w.write_str(s, charset),
            // 对象的字节原样返回
            Value::Object(o) => return o.to_bytes(),
        }
        w.into_inner()
    }
}

/// 按指定字节序编码一个 [`Value`]。
#[inline]
pub fn encode_value(value: &Value<'_>, order: Endianness) -> Vec<u8> {
    value.encode(order)
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Long(v) => f.debug_tuple("Long").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Short(v) => f.debug_tuple("Short").field(v).finish(),
            Value::Char(v) => write!(f, "Char({:#06x})", v),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i16> for Value<'_> {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<u16> for Value<'_> {
    fn from(v: u16) -> Self {
        Value::Char(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a, T: ToBytes> From<&'a T> for Value<'a> {
    fn from(o: &'a T) -> Self {
        Value::Object(o)
    }
}
