use thiserror::Error;

/// 字节转换错误枚举。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Type {type_name} does not expose a byte conversion")]
    /// 值的类型没有注册任何字节转换能力。
    NoSuchCapability { type_name: String },

    #[error("Byte conversion of {type_name} failed: {msg}")]
    /// 转换能力存在,但调用时失败。
    InvocationFailure {
        type_name: String,
        msg: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported text encoding '{name}'")]
    /// 字符集名称非法或不受支持。
    UnsupportedEncoding { name: String },

    #[error("Unexpected end of buffer at offset {offset}: required {required}, available {available}")]
    /// 缓冲区溢出 (读取越界)。
    BufferOverflow {
        offset: usize,
        required: usize,
        available: usize,
    },

    #[error("Invalid UTF-8 text at offset {offset}")]
    /// 文本字节不是合法的 UTF-8。
    InvalidUtf8 { offset: usize },
}

impl Error {
    pub fn no_such_capability(type_name: impl Into<String>) -> Self {
        Self::NoSuchCapability {
            type_name: type_name.into(),
        }
    }

    /// 创建一个调用失败错误,保留原始错误作为 source。
    pub fn invocation(
        type_name: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::InvocationFailure {
            type_name: type_name.into(),
            msg: source.to_string(),
            source: Some(source),
        }
    }

    /// 创建一个没有底层错误的调用失败 (例如转换过程中 panic)。
    pub fn invocation_msg(type_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvocationFailure {
            type_name: type_name.into(),
            msg: msg.into(),
            source: None,
        }
    }

    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }

    pub fn buffer_overflow(offset: usize, required: usize, available: usize) -> Self {
        Self::BufferOverflow {
            offset,
            required,
            available,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
