//! Typed client-stub generation over the entries tree.
//!
//! The client surface is one `createApiClient` factory whose object literal
//! mirrors the entries tree: namespaces become nested object literals and
//! operation leaves become arrow functions delegating to the caller-supplied
//! loader. The loader owns all transport concerns; generated stubs only
//! shape the call envelope and assert the response type.

use crate::comment::attach_comment;
use crate::error::CodegenError;
use crate::graph::Entry;
use crate::resolve::{resolve_type, TypeTable};
use crate::utils::apply_indent;

/// Call envelope handed to the loader: the entry path plus the serialized
/// input.
pub(crate) const LOADER_INPUT_DECLARATION: &str =
    "export type ApiClientLoaderInput = {\n  path: string[]\n  input: JsonValue\n}";

/// Per-call loader knobs. An interface so downstream code can augment it.
pub(crate) const LOADER_OPTIONS_DECLARATION: &str = "export interface ApiClientLoaderOptions {\n  batch?: boolean\n  stream?: boolean\n  cache?: boolean\n}";

/// Constructor options of the generated factory.
pub(crate) const CLIENT_OPTIONS_DECLARATION: &str = "export type ApiClientOptions = {\n  loader: (input: ApiClientLoaderInput, options?: ApiClientLoaderOptions) => Promise<JsonValue>\n}";

/// Render one operation leaf as an arrow function.
fn render_api(
    table: &TypeTable,
    input_type_id: u32,
    output_type_id: u32,
    path: &[String],
) -> Result<String, CodegenError> {
    let input_type = resolve_type(table, input_type_id, 2)?;
    let output_type = resolve_type(table, output_type_id, 4)?;
    let path_items = path
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "(input: {input_type}, loaderOptions?: ApiClientLoaderOptions) => {{\n\
         \x20 return options.loader(\n\
         \x20   {{\n\
         \x20     path: [{path_items}],\n\
         \x20     input: input as JsonValue,\n\
         \x20   }},\n\
         \x20   loaderOptions\n\
         \x20 ) as Promise<{output_type}>\n\
         }}"
    ))
}

/// Render one entries-tree node as an object-literal expression.
///
/// `path` is the accumulated key path from the root; `indent` is the field
/// indentation of this literal (nested literals use the default of 2).
fn render_entry(
    table: &TypeTable,
    entry: &Entry,
    path: &mut Vec<String>,
    indent: usize,
) -> Result<String, CodegenError> {
    match entry {
        Entry::Api { input, output, .. } => render_api(table, input.type_id, output.type_id, path),
        Entry::Entries { entries } => {
            let mut fields = Vec::with_capacity(entries.len());
            for (key, child) in entries {
                path.push(key.clone());
                let rendered = match child {
                    Entry::Api {
                        input,
                        output,
                        description,
                        deprecated,
                    } => {
                        let stub = render_api(table, input.type_id, output.type_id, path)?;
                        attach_comment(
                            format!("{key}: {stub}"),
                            &[
                                ("remarks", description.as_deref()),
                                ("deprecated", deprecated.as_deref()),
                                ("param input -", input.description.as_deref()),
                                ("returns", output.description.as_deref()),
                            ],
                        )
                    }
                    Entry::Entries { .. } => {
                        format!("{key}: {}", render_entry(table, child, path, 2)?)
                    }
                };
                path.pop();
                fields.push(rendered);
            }
            Ok(format!(
                "{{\n{}\n{}}}",
                apply_indent(&fields.join(",\n"), indent),
                " ".repeat(indent.saturating_sub(2))
            ))
        }
    }
}

/// Render the `createApiClient` factory declaration.
pub(crate) fn render_client_factory(
    table: &TypeTable,
    entries: &Entry,
) -> Result<String, CodegenError> {
    let mut path = Vec::new();
    let body = render_entry(table, entries, &mut path, 4)?;
    Ok(format!(
        "export const createApiClient = (options: ApiClientOptions) => {{\n  return {body}\n}}"
    ))
}
