use crate::codec::endian::Endianness;
use crate::codec::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use simdutf8::basic::from_utf8;

/// 字节读取器.
///
/// 直接基于字节切片 (`&[u8]`) 实现,是 `ByteWriter` 的逆操作.
/// 读取失败时游标保持不变.
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// 创建一个新的读取器.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            data: bytes,
            pos: 0,
        }
    }

    /// 获取当前偏移量.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 检查是否已到达末尾.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// 取出接下来的 `len` 个字节并前移游标.
    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.data.len().saturating_sub(self.pos);
        if available < len {
            return Err(Error::buffer_overflow(self.pos, len, available));
        }
        let data = self.data;
        let slice = &data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// 读取布尔值,任何非零字节都视为 true.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    #[inline]
    pub fn read_i64(&mut self, order: Endianness) -> Result<i64> {
        let b = self.take(8)?;
        Ok(match order {
            Endianness::Big => BigEndian::read_i64(b),
            Endianness::Little => LittleEndian::read_i64(b),
        })
    }

    #[inline]
    pub fn read_i32(&mut self, order: Endianness) -> Result<i32> {
        let b = self.take(4)?;
        Ok(match order {
            Endianness::Big => BigEndian::read_i32(b),
            Endianness::Little => LittleEndian::read_i32(b),
        })
    }

    #[inline]
    pub fn read_i16(&mut self, order: Endianness) -> Result<i16> {
        let b = self.take(2)?;
        Ok(match order {
            Endianness::Big => BigEndian::read_i16(b),
            Endianness::Little => LittleEndian::read_i16(b),
        })
    }

    /// 读取 16 位字符码元.
    #[inline]
    pub fn read_char16(&mut self, order: Endianness) -> Result<u16> {
        let b = self.take(2)?;
        Ok(match order {
            Endianness::Big => BigEndian::read_u16(b),
            Endianness::Little => LittleEndian::read_u16(b),
        })
    }

    /// 读取指定长度的原始字节 (零拷贝).
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// 读取 `len` 个字节并按 UTF-8 校验.
    pub fn read_str(&mut self, len: usize) -> Result<&'a str> {
        let start_pos = self.pos;
        let bytes = self.take(len)?;
        from_utf8(bytes).map_err(|_| {
            self.pos = start_pos;
            Error::InvalidUtf8 { offset: start_pos }
        })
    }
}
