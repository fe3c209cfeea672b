use crate::capability::ToBytes;
use crate::codec::charset::Charset;
use crate::codec::endian::Endianness;

use bytes::BufMut;

/// 按指定字节序写入 `value` 的低 `length` 个字节。
///
/// 超出 `length * 8` 位的高位会被截断。
#[inline]
pub(crate) fn put_fixed<B: BufMut>(buf: &mut B, value: i64, length: usize, order: Endianness) {
    for i in 0..length {
        let shift = match order {
            Endianness::Big => (length - 1 - i) * 8,
            Endianness::Little => i * 8,
        };
        buf.put_u8(((value >> shift) & 0xFF) as u8);
    }
}

/// 字节写入器.
///
/// 将基础类型按固定宽度编码后追加到缓冲区.
/// 支持内存缓冲区 (`Vec<u8>`) 以及任何实现了 `bytes::BufMut` 的类型.
pub struct ByteWriter<B = Vec<u8>> {
    buffer: B,
}

impl Default for ByteWriter<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter<Vec<u8>> {
    /// 创建一个新的 ByteWriter.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// 重置写入器(针对 Vec 的特化实现).
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl<B: BufMut> ByteWriter<B> {
    /// 使用指定的缓冲区创建 ByteWriter.
    pub fn with_buffer(buffer: B) -> Self {
        Self { buffer }
    }

    /// 获取已写入的字节.
    #[inline]
    pub fn get_buffer(&self) -> &[u8]
    where
        B: AsRef<[u8]>,
    {
        self.buffer.as_ref()
    }

    /// 写入 8 字节整数.
    #[inline]
    pub fn write_i64(&mut self, value: i64, order: Endianness) {
        put_fixed(&mut self.buffer, value, 8, order);
    }

    /// 写入 4 字节整数.
    #[inline]
    pub fn write_i32(&mut self, value: i32, order: Endianness) {
        put_fixed(&mut self.buffer, value as i64, 4, order);
    }

    /// 写入 2 字节整数.
    #[inline]
    pub fn write_i16(&mut self, value: i16, order: Endianness) {
        put_fixed(&mut self.buffer, value as i64, 2, order);
    }

    /// 写入 16 位字符码元.
    #[inline]
    pub fn write_char16(&mut self, code: u16, order: Endianness) {
        put_fixed(&mut self.buffer, code as i64, 2, order);
    }

    /// 写入布尔值: true 为 1, false 为 0.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buffer.put_u8(value as u8);
    }

    /// 按字符集写入文本,不附带长度前缀.
    #[inline]
    pub fn write_str(&mut self, value: &str, charset: Charset) {
        match charset {
            Charset::Utf8 => self.buffer.put_slice(value.as_bytes()),
            other => self.buffer.put_slice(&other.encode(value)),
        }
    }

    #[inline]
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.buffer.put_slice(value);
    }

    /// 写入对象自身产生的字节,原样追加.
    #[inline]
    pub fn write_object<T: ToBytes + ?Sized>(&mut self, value: &T) {
        self.buffer.put_slice(&value.to_bytes());
    }
}
