use serde::{Deserialize, Serialize};

/// 字节序。
///
/// 决定多字节数值编码时的字节排列顺序，默认为大端序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// 大端序 (高位字节在前)。
    #[default]
    #[serde(alias = "big-endian", alias = "be")]
    Big,
    /// 小端序 (低位字节在前)。
    #[serde(alias = "little-endian", alias = "le")]
    Little,
}

impl Endianness {
    /// 当前平台的字节序。
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// 是否为小端序。
    #[inline]
    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::Little)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endianness_default_is_big() {
        assert_eq!(Endianness::default(), Endianness::Big);
        assert!(!Endianness::default().is_little());
    }

    #[test]
    fn test_endianness_native_matches_target() {
        assert_eq!(
            Endianness::native().is_little(),
            cfg!(target_endian = "little")
        );
    }

    #[test]
    fn test_endianness_deserialize_with_aliases_returns_expected() {
        let big: Endianness = serde_json::from_str("\"big\"").unwrap();
        let little: Endianness = serde_json::from_str("\"little-endian\"").unwrap();
        let le: Endianness = serde_json::from_str("\"le\"").unwrap();
        assert_eq!(big, Endianness::Big);
        assert_eq!(little, Endianness::Little);
        assert_eq!(le, Endianness::Little);
        assert!(serde_json::from_str::<Endianness>("\"middle\"").is_err());
    }

    #[test]
    fn test_endianness_serialize_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Endianness::Little).unwrap(),
            "\"little\""
        );
    }
}
