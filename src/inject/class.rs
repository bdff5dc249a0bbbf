//! Type descriptors used as injection targets.

use std::any::{self, TypeId};

/// Identity and display name of a decorated type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    name: Option<&'static str>,
}

impl ClassDescriptor {
    /// Describe `T`, naming it after the last path segment of its type name.
    pub fn of<T: ?Sized + 'static>() -> Self {
        let type_name = any::type_name::<T>();
        Self {
            type_id: TypeId::of::<T>(),
            type_name,
            name: Some(short_type_name(type_name)),
        }
    }

    /// Describe `T` under an explicit class name.
    pub fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..Self::of::<T>()
        }
    }

    /// Describe `T` without a class name; label resolution then falls back
    /// to the type name.
    pub fn anonymous<T: ?Sized + 'static>() -> Self {
        Self {
            name: None,
            ..Self::of::<T>()
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name.filter(|name| !name.is_empty())
    }

    /// Class name, or the short type name when no class name is set.
    pub fn display_name(&self) -> &'static str {
        self.name()
            .unwrap_or_else(|| short_type_name(self.type_name))
    }
}

/// `a::b::Foo<c::Bar>` → `Foo`; `&[a::X]` and `(a::X, b::Y)` → `X`.
fn short_type_name(type_name: &str) -> &str {
    let mut inner = type_name;
    loop {
        let stripped = inner
            .trim_start_matches(['&', '(', '[', '*', ' '])
            .trim_start_matches("mut ")
            .trim_start_matches("const ")
            .trim_start_matches("dyn ");
        if stripped.len() == inner.len() {
            break;
        }
        inner = stripped;
    }

    let end = inner
        .find(['<', ',', ';', ')', ']', ' '])
        .unwrap_or(inner.len());
    let base = &inner[..end];
    match base.rsplit("::").next() {
        Some(name) if !name.is_empty() => name,
        _ => type_name,
    }
}
