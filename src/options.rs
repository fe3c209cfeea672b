use crate::codec::charset::Charset;
use crate::codec::endian::Endianness;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// 转换选项。
///
/// 可以从任何 serde 格式反序列化,缺失的字段取默认值:
///
/// ```
/// use byteconv::{Endianness, Options};
///
/// let opts: Options = serde_json::from_str(r#"{"endianness": "little"}"#).unwrap();
/// assert_eq!(opts.endianness, Endianness::Little);
/// assert_eq!(opts.charset, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// 数值与字符使用的字节序。
    pub endianness: Endianness,
    /// 文本字符集名称,`None` 表示平台默认字符集。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Options {
    pub fn new(endianness: Endianness) -> Self {
        Self {
            endianness,
            charset: None,
        }
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// 实际使用的字符集,名称无法解析时为平台默认字符集。
    pub fn resolved_charset(&self) -> Charset {
        self.charset
            .as_deref()
            .map_or_else(Charset::platform_default, Charset::resolve_or_default)
    }

    /// 按选项编码一个值。
    pub fn encode(&self, value: &Value<'_>) -> Vec<u8> {
        value.encode_with(self.endianness, self.resolved_charset())
    }
}
