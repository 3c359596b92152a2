//! CLI errors.

use gqlmd_schema::SchemaError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read `{}`", path.display())]
    #[diagnostic(code(gqlmd::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`", path.display())]
    #[diagnostic(code(gqlmd::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration `{}`", path.display())]
    #[diagnostic(code(gqlmd::config), help("configuration keys are camelCase, e.g. `basePath`"))]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema `{}`", path.display())]
    #[diagnostic(code(gqlmd::schema))]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("`{first}` and `{second}` both render to `{}`", path.display())]
    #[diagnostic(code(gqlmd::page_collision), help("page file names are kebab-case slugs of the entity names"))]
    PageCollision {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("unknown type or directive `{0}`")]
    #[diagnostic(code(gqlmd::unknown_entity), help("run `gqlmd list` to see the documented entities"))]
    UnknownEntity(String),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
