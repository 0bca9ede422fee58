//! Schema-graph to TypeScript code generation.
//!
//! The input is a serialized schema graph: a flat table of type nodes keyed
//! by integer id plus a tree of named operations. [`generate`] turns one
//! graph into a single TypeScript source string containing standalone type
//! declarations for every named node and, optionally, a typed
//! `createApiClient` factory whose stubs delegate to a caller-supplied
//! loader.
//!
//! The pipeline is pure string assembly: [`graph`] deserializes the input,
//! `resolve` maps type ids to type expressions, `declarations` and `client`
//! render the two output sections and `emitter` stitches them together.

#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

mod client;
mod comment;
mod declarations;
mod emitter;
pub mod error;
pub mod graph;
mod resolve;
mod utils;

pub use emitter::{
    generate, CodegenOptions, TypeCheckPragma, GENERATED_BANNER, JSON_VALUE_DECLARATION,
};
pub use error::CodegenError;
