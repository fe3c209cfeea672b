use crate::codec::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// 合法字符集名称: 以字母或数字开头,后续允许 `.`、`:`、`_`、`+`、`-`。
static LEGAL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.:_+\-]*$").expect("charset name pattern is valid")
});

/// 文本编码所使用的字符集。
///
/// 只包含每个平台都保证可用的标准字符集。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8,同时也是平台默认字符集。
    Utf8,
    /// UTF-16,大端序并带有字节序标记 `FE FF`。
    Utf16,
    Utf16Be,
    Utf16Le,
    /// 7 位 ASCII,无法表示的字符替换为 `?`。
    UsAscii,
    /// Latin-1,无法表示的字符替换为 `?`。
    Iso8859_1,
}

const REPLACEMENT: u8 = b'?';

impl Charset {
    /// 平台默认字符集。
    #[inline]
    pub const fn platform_default() -> Self {
        Charset::Utf8
    }

    /// 字符集的规范名称。
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16 => "UTF-16",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
        }
    }

    /// 根据名称或别名查找字符集 (大小写不敏感)。
    ///
    /// # 错误
    ///
    /// 名称非法或未知时返回 `Error::UnsupportedEncoding`.
    pub fn for_name(name: &str) -> Result<Self> {
        if !LEGAL_NAME.is_match(name) {
            return Err(Error::unsupported_encoding(name));
        }
        let charset = match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Charset::Utf8,
            "utf-16" | "utf_16" | "utf16" | "unicode" => Charset::Utf16,
            "utf-16be" | "utf_16be" | "x-utf-16be" | "iso-10646-ucs-2"
            | "unicodebigunmarked" => Charset::Utf16Be,
            "utf-16le" | "utf_16le" | "x-utf-16le" | "unicodelittleunmarked" => Charset::Utf16Le,
            "us-ascii" | "ascii" | "us" | "iso646-us" | "ascii7" | "646" | "cp367"
            | "csascii" | "ansi_x3.4-1968" | "iso_646.irv:1983" => Charset::UsAscii,
            "iso-8859-1" | "iso8859_1" | "iso8859-1" | "iso_8859-1" | "8859_1" | "latin1"
            | "l1" | "cp819" | "ibm819" | "819" | "csisolatin1" => Charset::Iso8859_1,
            _ => return Err(Error::unsupported_encoding(name)),
        };
        Ok(charset)
    }

    /// 先尝试按名称解析,失败时退回平台默认字符集。
    pub fn resolve_or_default(name: &str) -> Self {
        Self::for_name(name).unwrap_or_else(|_| Self::platform_default())
    }

    /// 将文本编码为字节。
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::Utf16 => {
                if text.is_empty() {
                    return Vec::new();
                }
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(&[0xFE, 0xFF]);
                text.encode_utf16()
                    .for_each(|unit| out.extend_from_slice(&unit.to_be_bytes()));
                out
            }
            Charset::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Charset::UsAscii => single_byte(text, 0x7F),
            Charset::Iso8859_1 => single_byte(text, 0xFF),
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::platform_default()
    }
}

fn single_byte(text: &str, max: u32) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= max { code as u8 } else { REPLACEMENT }
        })
        .collect()
}
