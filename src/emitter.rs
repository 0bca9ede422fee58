//! Top-level orchestration: schema graph in, TypeScript source out.

use tracing::debug;

use crate::client::{
    render_client_factory, CLIENT_OPTIONS_DECLARATION, LOADER_INPUT_DECLARATION,
    LOADER_OPTIONS_DECLARATION,
};
use crate::declarations::{type_declarations, NameRegistry};
use crate::error::CodegenError;
use crate::graph::SchemaGraph;

/// Banner placed at the top of every generated file.
pub const GENERATED_BANNER: &str =
    "/**\n * This file was generated by tsgen\n * Don't modify it manually\n*/";

/// The `JsonValue` alias every generated file starts from. All loader
/// payloads are typed against it.
pub const JSON_VALUE_DECLARATION: &str = "export type JsonValue =\n  | number\n  | string\n  | boolean\n  | null\n  | undefined\n  | JsonValue[]\n  | { toJSON(): string }\n  | { [key: string]: JsonValue }";

/// Whether to lead the generated file with a `// @ts-nocheck` pragma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeCheckPragma {
    /// No pragma; the generated file is type-checked as usual.
    #[default]
    Off,
    /// Bare `// @ts-nocheck`.
    On,
    /// `// @ts-nocheck` followed by a free-form reason on the same line.
    WithReason(String),
}

/// Knobs of [`generate`].
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Emit the client support declarations and the `createApiClient`
    /// factory. When false the output is declarations only.
    pub emit_client: bool,
    /// Leading type-check suppression pragma.
    pub suppress_type_check: TypeCheckPragma,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            emit_client: true,
            suppress_type_check: TypeCheckPragma::Off,
        }
    }
}

/// Generate the complete TypeScript source for one schema graph.
///
/// Output layout: banner, `JsonValue`, the standalone type declarations in
/// table order, then (unless disabled) the client support declarations and
/// the `createApiClient` factory. Sections are separated by blank lines and
/// the result is trimmed.
pub fn generate(graph: &SchemaGraph, options: &CodegenOptions) -> Result<String, CodegenError> {
    let mut registry = NameRegistry::new();

    let mut pieces = vec![GENERATED_BANNER.to_string(), JSON_VALUE_DECLARATION.to_string()];
    let declarations = type_declarations(&graph.types, &mut registry)?;
    debug!(
        types = graph.types.len(),
        declarations = declarations.len(),
        emit_client = options.emit_client,
        "Generating TypeScript source."
    );
    pieces.extend(declarations);

    if options.emit_client {
        pieces.push(LOADER_INPUT_DECLARATION.to_string());
        pieces.push(LOADER_OPTIONS_DECLARATION.to_string());
        pieces.push(CLIENT_OPTIONS_DECLARATION.to_string());
        pieces.push(render_client_factory(&graph.types, &graph.entries)?);
    }

    let mut source = pieces.join("\n\n");

    match &options.suppress_type_check {
        TypeCheckPragma::Off => {}
        TypeCheckPragma::On => {
            source = format!("// @ts-nocheck\n{source}");
        }
        TypeCheckPragma::WithReason(reason) => {
            source = format!("// @ts-nocheck {reason}\n{source}");
        }
    }

    Ok(source.trim().to_string())
}
