//! Type modifier resolution: list/non-null unwrapping and signatures.

use gqlmd_schema::{Category, TypeRef};

/// A list or non-null wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    List,
    NonNull,
}

/// A type reference split into its modifier chain and named leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwrapped<'a> {
    pub name: &'a str,
    pub category: Category,
    /// Wrappers, outermost first.
    pub modifiers: Vec<Modifier>,
    /// A non-null wrapper occurs at any depth.
    pub is_non_null: bool,
    /// A list wrapper occurs at any depth.
    pub is_list: bool,
}

impl Unwrapped<'_> {
    /// Rebuilds the original type reference.
    pub fn rewrap(&self) -> TypeRef {
        self.modifiers
            .iter()
            .rev()
            .fold(TypeRef::named(self.name, self.category), |inner, modifier| {
                match modifier {
                    Modifier::List => TypeRef::list(inner),
                    Modifier::NonNull => TypeRef::non_null(inner),
                }
            })
    }
}

/// Unwraps every modifier around `ty` down to the named leaf.
pub fn unwrap(ty: &TypeRef) -> Unwrapped<'_> {
    let mut modifiers = Vec::new();
    let mut current = ty;
    loop {
        match current {
            TypeRef::Named { name, category } => {
                return Unwrapped {
                    name,
                    category: *category,
                    is_non_null: modifiers.contains(&Modifier::NonNull),
                    is_list: modifiers.contains(&Modifier::List),
                    modifiers,
                };
            }
            TypeRef::List { of_type } => {
                modifiers.push(Modifier::List);
                current = of_type;
            }
            TypeRef::NonNull { of_type } => {
                modifiers.push(Modifier::NonNull);
                current = of_type;
            }
        }
    }
}

/// Returns the name and category of the named leaf.
pub fn named_type(ty: &TypeRef) -> (&str, Category) {
    match ty {
        TypeRef::Named { name, category } => (name.as_str(), *category),
        TypeRef::List { of_type } | TypeRef::NonNull { of_type } => named_type(of_type),
    }
}

/// Renders the SDL signature of a type reference, e.g. `[Int!]!`.
pub fn signature(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named { name, .. } => name.clone(),
        TypeRef::List { of_type } => format!("[{}]", signature(of_type)),
        TypeRef::NonNull { of_type } => format!("{}!", signature(of_type)),
    }
}
