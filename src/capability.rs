//! 自定义类型的字节转换能力。
//!
//! 实现 [`ToBytes`] 的类型可以直接交给 `convert::encode_object`。
//! 静态类型未知时 (`&dyn Any`),通过 [`Registry`] 显式登记每个类型的转换方式,
//! 在运行时按 `TypeId` 查找并调用。

use crate::codec::error::{Error, Result};
use bytes::Bytes;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// 能够把自身转换为字节序列的类型。
///
/// 编码器不会重新推导字节,返回值 (包括空序列) 会被原样使用。
pub trait ToBytes {
    fn to_bytes(&self) -> Vec<u8>;
}

/// 可能失败的字节转换。
pub trait TryToBytes {
    type Error: std::error::Error + Send + Sync + 'static;

    fn try_to_bytes(&self) -> std::result::Result<Vec<u8>, Self::Error>;
}

impl<T: ToBytes + ?Sized> ToBytes for &T {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        (**self).to_bytes()
    }
}

impl<T: ToBytes + ?Sized> ToBytes for Box<T> {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        (**self).to_bytes()
    }
}

impl ToBytes for [u8] {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl ToBytes for Vec<u8> {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

impl ToBytes for Bytes {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

type Hook = Box<dyn Fn(&dyn Any) -> Result<Vec<u8>> + Send + Sync>;

struct Entry {
    type_name: &'static str,
    hook: Hook,
}

/// 类型到字节转换方式的登记表。
///
/// 构建完成后只读,可以在线程间共享.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个实现了 [`ToBytes`] 的类型。
    pub fn register<T: ToBytes + Any>(&mut self) -> &mut Self {
        let name = type_name::<T>();
        self.insert::<T>(Box::new(move |value: &dyn Any| -> Result<Vec<u8>> {
            value
                .downcast_ref::<T>()
                .map(ToBytes::to_bytes)
                .ok_or_else(|| Error::no_such_capability(name))
        }))
    }

    /// 登记一个实现了 [`TryToBytes`] 的类型,转换失败时报告 `InvocationFailure`。
    pub fn register_fallible<T: TryToBytes + Any>(&mut self) -> &mut Self {
        let name = type_name::<T>();
        self.insert::<T>(Box::new(move |value: &dyn Any| -> Result<Vec<u8>> {
            let value = value
                .downcast_ref::<T>()
                .ok_or_else(|| Error::no_such_capability(name))?;
            value
                .try_to_bytes()
                .map_err(|e| Error::invocation(name, Box::new(e)))
        }))
    }

    fn insert<T: Any>(&mut self, hook: Hook) -> &mut Self {
        self.entries.insert(
            TypeId::of::<T>(),
            Entry {
                type_name: type_name::<T>(),
                hook,
            },
        );
        self
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.contains_type(TypeId::of::<T>())
    }

    pub fn contains_type(&self, id: TypeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 转换静态类型已知的值,错误信息中带有类型名。
    ///
    /// `T` 为 `Box<dyn Any>` 时按盒内的值查找。
    pub fn encode<T: Any>(&self, value: &T) -> Result<Vec<u8>> {
        match self.lookup(value) {
            Some((entry, inner)) => invoke(entry, inner),
            None => Err(Error::no_such_capability(type_name::<T>())),
        }
    }

    /// 转换类型未知的值。
    ///
    /// 传入 `&Box<dyn Any>` 时会拆开一层盒子再查找。
    ///
    /// # 错误
    ///
    /// 类型未登记时返回 `Error::NoSuchCapability`.
    /// 转换返回错误或发生 panic 时返回 `Error::InvocationFailure`.
    pub fn encode_any(&self, value: &dyn Any) -> Result<Vec<u8>> {
        match self.lookup(value) {
            Some((entry, inner)) => invoke(entry, inner),
            None => Err(Error::no_such_capability(format!(
                "<unregistered {:?}>",
                unboxed(value).unwrap_or(value).type_id()
            ))),
        }
    }

    fn lookup<'v>(&self, value: &'v dyn Any) -> Option<(&Entry, &'v dyn Any)> {
        if let Some(entry) = self.entries.get(&value.type_id()) {
            return Some((entry, value));
        }
        let inner = unboxed(value)?;
        self.entries.get(&inner.type_id()).map(|entry| (entry, inner))
    }
}

/// 拆开一层 `Box<dyn Any>` (含 `+ Send` / `+ Send + Sync`)。
fn unboxed(value: &dyn Any) -> Option<&dyn Any> {
    if let Some(b) = value.downcast_ref::<Box<dyn Any>>() {
        return Some(&**b as &dyn Any);
    }
    if let Some(b) = value.downcast_ref::<Box<dyn Any + Send>>() {
        return Some(&**b as &dyn Any);
    }
    value
        .downcast_ref::<Box<dyn Any + Send + Sync>>()
        .map(|b| &**b as &dyn Any)
}

fn invoke(entry: &Entry, value: &dyn Any) -> Result<Vec<u8>> {
    match catch_unwind(AssertUnwindSafe(|| (entry.hook)(value))) {
        Ok(res) => res,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "conversion panicked".to_string());
            Err(Error::invocation_msg(entry.type_name, msg))
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.values().map(|e| e.type_name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    struct Pair;

    impl ToBytes for Pair {
        fn to_bytes(&self) -> Vec<u8> {
            vec![0x01, 0x02]
        }
    }

    struct Empty;

    impl ToBytes for Empty {
        fn to_bytes(&self) -> Vec<u8> {
            Vec::new()
        }
    }

    #[derive(Debug)]
    struct Sealed;

    impl fmt::Display for Sealed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("sealed")
        }
    }

    impl std::error::Error for Sealed {}

    struct Locked(bool);

    impl TryToBytes for Locked {
        type Error = Sealed;

        fn try_to_bytes(&self) -> std::result::Result<Vec<u8>, Sealed> {
            if self.0 { Err(Sealed) } else { Ok(vec![0x7F]) }
        }
    }

    struct Exploding;

    impl ToBytes for Exploding {
        fn to_bytes(&self) -> Vec<u8> {
            panic!("boom");
        }
    }

    struct Unknown;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register::<Pair>()
            .register::<Empty>()
            .register::<Exploding>()
            .register_fallible::<Locked>();
        registry
    }

    #[test]
    fn test_encode_any_with_registered_type_delegates() {
        let registry = registry();
        let value: &dyn Any = &Pair;
        assert_eq!(registry.encode_any(value).unwrap(), vec![0x01, 0x02]);
        assert_eq!(registry.encode(&Pair).unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn test_encode_any_with_boxed_value_unwraps_the_box() {
        let registry = registry();
        let boxed: Box<dyn Any> = Box::new(Pair);
        assert_eq!(registry.encode_any(&boxed).unwrap(), vec![0x01, 0x02]);
        assert_eq!(registry.encode(&boxed).unwrap(), vec![0x01, 0x02]);

        let sendable: Box<dyn Any + Send> = Box::new(Locked(true));
        assert!(matches!(
            registry.encode_any(&sendable),
            Err(Error::InvocationFailure { ref type_name, .. }) if type_name.ends_with("Locked")
        ));

        let unknown: Box<dyn Any> = Box::new(Unknown);
        assert!(matches!(
            registry.encode_any(&unknown),
            Err(Error::NoSuchCapability { ref type_name }) if type_name.starts_with("<unregistered")
        ));
        // 只拆开一层
        let nested: Box<dyn Any> = Box::new(Box::new(Pair) as Box<dyn Any>);
        assert!(registry.encode_any(&nested).is_err());
    }

    #[test]
    fn test_encode_any_with_empty_result_returns_it_verbatim() {
        let registry = registry();
        assert!(registry.encode_any(&Empty).unwrap().is_empty());
    }

    #[test]
    fn test_encode_with_unregistered_type_returns_no_such_capability() {
        let registry = registry();
        let err = registry.encode(&Unknown).unwrap_err();
        assert!(
            matches!(err, Error::NoSuchCapability { ref type_name } if type_name.ends_with("Unknown"))
        );
        assert!(matches!(
            registry.encode_any(&42u32),
            Err(Error::NoSuchCapability { .. })
        ));
    }

    #[test]
    fn test_encode_any_with_failing_conversion_returns_invocation_failure() {
        let registry = registry();
        assert_eq!(registry.encode_any(&Locked(false)).unwrap(), vec![0x7F]);

        let err = registry.encode_any(&Locked(true)).unwrap_err();
        assert!(matches!(err, Error::InvocationFailure { ref msg, .. } if msg == "sealed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_encode_any_with_panicking_conversion_returns_invocation_failure() {
        let registry = registry();
        let err = registry.encode_any(&Exploding).unwrap_err();
        match err {
            Error::InvocationFailure { msg, source, .. } => {
                assert_eq!(msg, "boom");
                assert!(source.is_none());
            }
            other => panic!("Expected InvocationFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_bookkeeping_reports_registered_types() {
        let registry = registry();
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
        assert!(registry.contains::<Pair>());
        assert!(!registry.contains::<Unknown>());
        assert!(Registry::new().is_empty());
        assert!(format!("{:?}", registry).contains("Pair"));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }

    #[test]
    fn test_builtin_impls_return_their_bytes() {
        let boxed: Box<dyn ToBytes> = Box::new(Pair);
        assert_eq!(boxed.to_bytes(), vec![0x01, 0x02]);
        assert_eq!(vec![9u8, 8].to_bytes(), vec![9, 8]);
        assert_eq!(Bytes::from_static(b"ab").to_bytes(), b"ab".to_vec());
        assert_eq!((&[3u8][..]).to_bytes(), vec![3]);
    }
}
