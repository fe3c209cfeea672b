//! 值到字节序列的转换函数。
//!
//! 每个函数都返回新分配的 `Vec<u8>`,不带任何共享状态。
//! 数值与字符默认使用大端序。

use crate::capability::ToBytes;
use crate::codec::charset::Charset;
use crate::codec::endian::Endianness;
use crate::codec::writer::ByteWriter;

#[inline]
fn fixed(length: usize, write: impl FnOnce(&mut ByteWriter)) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(length);
    write(&mut writer);
    writer.into_inner()
}

/// 将 `i64` 按大端序转换为 8 个字节。
#[inline]
pub fn encode_i64(value: i64) -> Vec<u8> {
    encode_i64_with(value, Endianness::default())
}

/// 将 `i64` 按指定字节序转换为 8 个字节。
#[inline]
pub fn encode_i64_with(value: i64, order: Endianness) -> Vec<u8> {
    fixed(8, |w| w.write_i64(value, order))
}

#[inline]
pub fn encode_i32(value: i32) -> Vec<u8> {
    encode_i32_with(value, Endianness::default())
}

#[inline]
pub fn encode_i32_with(value: i32, order: Endianness) -> Vec<u8> {
    fixed(4, |w| w.write_i32(value, order))
}

#[inline]
pub fn encode_i16(value: i16) -> Vec<u8> {
    encode_i16_with(value, Endianness::default())
}

#[inline]
pub fn encode_i16_with(value: i16, order: Endianness) -> Vec<u8> {
    fixed(2, |w| w.write_i16(value, order))
}

/// 将 16 位字符码元 (UTF-16 code unit) 转换为 2 个字节。
#[inline]
pub fn encode_char16(code: u16) -> Vec<u8> {
    encode_char16_with(code, Endianness::default())
}

#[inline]
pub fn encode_char16_with(code: u16, order: Endianness) -> Vec<u8> {
    fixed(2, |w| w.write_char16(code, order))
}

/// true 转换为 `[1]`, false 转换为 `[0]`。
#[inline]
pub fn encode_bool(value: bool) -> Vec<u8> {
    fixed(1, |w| w.write_bool(value))
}

/// 使用平台默认字符集 (UTF-8) 编码文本。
#[inline]
pub fn encode_str(text: &str) -> Vec<u8> {
    Charset::platform_default().encode(text)
}

/// 使用指定名称的字符集编码文本。
///
/// 名称非法或不受支持时退回平台默认字符集,不会失败。
pub fn encode_str_with(text: &str, charset: &str) -> Vec<u8> {
    Charset::resolve_or_default(charset).encode(text)
}

/// 返回对象自身产生的字节,不做任何加工。
#[inline]
pub fn encode_object<T: ToBytes + ?Sized>(value: &T) -> Vec<u8> {
    value.to_bytes()
}
