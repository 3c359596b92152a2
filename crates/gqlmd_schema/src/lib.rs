//! Schema model for gqlmd.
//!
//! This crate provides the read-only view of a GraphQL schema the printer
//! works on:
//! - `types`: categories and wrapped type references
//! - `directive`: directive definitions, locations and applications
//! - `element`: the `SchemaElement` capability trait
//! - `schema`: named type definitions, the schema and its builder

pub mod directive;
pub mod element;
pub mod schema;
pub mod types;

pub use directive::{AppliedDirective, DirectiveDefinition, DirectiveLocation};
pub use element::SchemaElement;
pub use schema::{
    EnumDef, EnumValueDef, FieldDef, InputObjectDef, InputValueDef, InputValueKind, InterfaceDef,
    ObjectDef, ScalarDef, Schema, SchemaBuilder, SchemaError, TypeDef, UnionDef,
};
pub use types::{Category, TypeRef};
