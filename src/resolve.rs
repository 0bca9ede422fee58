//! Recursive type resolution: type id to TypeScript type expression.
//!
//! Resolution is a pure function of the type table. A named node resolves to
//! its bare name regardless of kind; an unnamed node is expanded inline by
//! kind at every reference site. Recursion depth is bounded by the longest
//! unnamed chain in the graph (every cycle must pass through a named node,
//! an invariant owned by the upstream graph builder).

use indexmap::IndexMap;

use crate::comment::attach_comment;
use crate::error::CodegenError;
use crate::graph::{FieldRef, TypeKind, TypeNode};
use crate::utils::{apply_indent, escape_js_string};

/// Type table alias used throughout the emitters.
pub(crate) type TypeTable = IndexMap<u32, TypeNode>;

pub(crate) fn lookup(table: &TypeTable, type_id: u32) -> Result<&TypeNode, CodegenError> {
    table
        .get(&type_id)
        .ok_or(CodegenError::MissingType { type_id })
}

/// Resolve one type id to its TypeScript type expression.
///
/// `indent` controls the field indentation of an inline struct expansion at
/// this site; nested expansions reset to the default of 2.
pub(crate) fn resolve_type(
    table: &TypeTable,
    type_id: u32,
    indent: usize,
) -> Result<String, CodegenError> {
    let node = lookup(table, type_id)?;

    if let Some(name) = node.reference_name() {
        return Ok(name.to_string());
    }

    match &node.kind {
        TypeKind::Scalar { value_type } => Ok(value_type.clone()),
        TypeKind::Literal { value } => Ok(render_literal(value)),
        TypeKind::Record { value_type_id } => Ok(format!(
            "Record<string, {}>",
            resolve_type(table, *value_type_id, 2)?
        )),
        TypeKind::Nullable { item_type_id } => Ok(format!(
            "{} | null | undefined",
            resolve_type(table, *item_type_id, 2)?
        )),
        TypeKind::List { item_type_id } => {
            Ok(format!("({})[]", resolve_type(table, *item_type_id, 2)?))
        }
        TypeKind::Union { item_types } => {
            let members = item_types
                .iter()
                .map(|item| resolve_type(table, item.type_id, 2))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(members.join(" | "))
        }
        TypeKind::Intersect { item_types } => {
            let members = item_types
                .iter()
                .map(|item| resolve_type(table, item.type_id, 2))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(members.join(" & "))
        }
        TypeKind::Tuple { item_types } => {
            let members = item_types
                .iter()
                .map(|item| resolve_type(table, item.type_id, 2))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", members.join(", ")))
        }
        TypeKind::Struct { fields } => {
            let lines = resolve_fields(table, fields)?;
            Ok(format!(
                "{{\n{}\n{}}}",
                apply_indent(&lines.join(",\n"), indent),
                " ".repeat(indent.saturating_sub(2))
            ))
        }
        TypeKind::Strict { item_type_id }
        | TypeKind::NonStrict { item_type_id }
        | TypeKind::ReadOnly { item_type_id }
        | TypeKind::ReadOnlyDeep { item_type_id } => resolve_type(table, *item_type_id, indent),
        // Object nodes are class-backed and only ever referenced by name.
        TypeKind::Object { .. } => Err(CodegenError::UnsupportedType {
            dump: format!("{node:#?}"),
        }),
    }
}

/// Render the field lines of a struct body.
///
/// A field whose declared type node is Nullable renders as `key?: T`; the
/// optional marker replaces one layer of the null/undefined union at the
/// declaration site only, the type text itself is unchanged. Each line is
/// preceded by a documentation block built from the field metadata.
pub(crate) fn resolve_fields(
    table: &TypeTable,
    fields: &IndexMap<String, FieldRef>,
) -> Result<Vec<String>, CodegenError> {
    fields
        .iter()
        .map(|(key, field)| {
            let node = lookup(table, field.type_id)?;
            let ty = resolve_type(table, field.type_id, 2)?;
            let line = if matches!(node.kind, TypeKind::Nullable { .. }) {
                format!("{key}?: {ty}")
            } else {
                format!("{key}: {ty}")
            };
            Ok(attach_comment(
                line,
                &[
                    ("remarks", field.description.as_deref()),
                    ("deprecated", field.deprecated.as_deref()),
                ],
            ))
        })
        .collect()
}

fn render_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => format!("\"{}\"", escape_js_string(text)),
        other => other.to_string(),
    }
}
