//! Standalone `export type` declarations for named type nodes.
//!
//! Declarations are emitted in type-table insertion order. Only four kinds
//! can anchor a declaration: Struct, Object, Union, Intersect and Tuple
//! count as anchors; any other named kind is rejected. Names are unique
//! across the whole run, not per kind.

use std::collections::HashSet;

use crate::error::CodegenError;
use crate::graph::{TypeKind, TypeNode};
use crate::resolve::{resolve_fields, resolve_type, TypeTable};
use crate::utils::apply_indent;

/// Names already claimed by a declaration in the current run.
pub(crate) type NameRegistry = HashSet<String>;

/// Claim `name` for `node`, rejecting empty and already-taken names.
fn register_name(
    registry: &mut NameRegistry,
    node: &TypeNode,
    name: &str,
) -> Result<(), CodegenError> {
    if name.is_empty() {
        return Err(CodegenError::EmptyName {
            dump: format!("{node:#?}"),
        });
    }
    if !registry.insert(name.to_string()) {
        return Err(CodegenError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn labeled(name: &str, body: String) -> String {
    format!("/**\n * @label {name}\n*/\n{body}")
}

/// Emit the declaration for one named node, or `None` for an unnamed node.
fn declare_node(
    table: &TypeTable,
    registry: &mut NameRegistry,
    node: &TypeNode,
) -> Result<Option<String>, CodegenError> {
    let Some(name) = node.name.as_deref() else {
        return Ok(None);
    };

    match &node.kind {
        TypeKind::Struct { fields } | TypeKind::Object { fields } => {
            register_name(registry, node, name)?;
            let lines = resolve_fields(table, fields)?;
            Ok(Some(labeled(
                name,
                format!(
                    "export type {name} = {{\n{}\n}}",
                    apply_indent(&lines.join(",\n"), 2)
                ),
            )))
        }
        TypeKind::Union { item_types } => {
            register_name(registry, node, name)?;
            let arms = item_types
                .iter()
                .map(|item| Ok(format!("| {}", resolve_type(table, item.type_id, 2)?)))
                .collect::<Result<Vec<_>, CodegenError>>()?;
            Ok(Some(labeled(
                name,
                format!(
                    "export type {name} =\n{}",
                    apply_indent(&arms.join("\n"), 2)
                ),
            )))
        }
        TypeKind::Intersect { item_types } => {
            register_name(registry, node, name)?;
            let arms = item_types
                .iter()
                .map(|item| Ok(format!("& {}", resolve_type(table, item.type_id, 2)?)))
                .collect::<Result<Vec<_>, CodegenError>>()?;
            Ok(Some(labeled(
                name,
                format!(
                    "export type {name} =\n{}",
                    apply_indent(&arms.join("\n"), 2)
                ),
            )))
        }
        TypeKind::Tuple { item_types } => {
            register_name(registry, node, name)?;
            let members = item_types
                .iter()
                .map(|item| resolve_type(table, item.type_id, 2))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(labeled(
                name,
                format!(
                    "export type {name} = [\n{}\n]",
                    apply_indent(&members.join(",\n"), 2)
                ),
            )))
        }
        _ => Err(CodegenError::UnsupportedType {
            dump: format!("{node:#?}"),
        }),
    }
}

/// Emit all standalone declarations in table order.
pub(crate) fn type_declarations(
    table: &TypeTable,
    registry: &mut NameRegistry,
) -> Result<Vec<String>, CodegenError> {
    let mut result = Vec::new();
    for node in table.values() {
        if let Some(decl) = declare_node(table, registry, node)? {
            result.push(decl);
        }
    }
    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // Fixtures are parsed from raw JSON so IndexMap sees the written key
    // order; a serde_json::Value intermediate would re-sort the keys.
    fn table(json: &str) -> TypeTable {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_unnamed_nodes_emit_nothing() {
        let table = table(
            r#"{
                "1": { "type": "Scalar", "valueType": "string" },
                "2": { "type": "List", "itemTypeId": 1 }
            }"#,
        );
        let mut registry = NameRegistry::new();
        assert!(type_declarations(&table, &mut registry).unwrap().is_empty());
    }

    #[test]
    fn test_struct_declaration() {
        let table = table(
            r#"{
                "1": { "type": "Scalar", "valueType": "string" },
                "2": { "type": "Nullable", "itemTypeId": 1 },
                "3": {
                    "type": "Struct",
                    "name": "User",
                    "fields": {
                        "id": { "typeId": 1, "description": "unique id" },
                        "nickname": { "typeId": 2 }
                    }
                }
            }"#,
        );
        let mut registry = NameRegistry::new();
        let decls = type_declarations(&table, &mut registry).unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(
            decls[0],
            "/**\n * @label User\n*/\n\
             export type User = {\n\
             \x20 /**\n\
             \x20 * @remarks unique id\n\
             \x20 */\n\
             \x20 id: string,\n\
             \x20 nickname?: string | null | undefined\n\
             }"
        );
        assert!(registry.contains("User"));
    }

    #[test]
    fn test_union_declaration() {
        let table = table(
            r#"{
                "1": { "type": "Literal", "value": "admin" },
                "2": { "type": "Literal", "value": "guest" },
                "3": {
                    "type": "Union",
                    "name": "Role",
                    "itemTypes": [{ "typeId": 1 }, { "typeId": 2 }]
                }
            }"#,
        );
        let mut registry = NameRegistry::new();
        let decls = type_declarations(&table, &mut registry).unwrap();
        assert_eq!(
            decls[0],
            "/**\n * @label Role\n*/\nexport type Role =\n  | \"admin\"\n  | \"guest\""
        );
    }

    #[test]
    fn test_intersect_declaration() {
        let table = table(
            r#"{
                "1": { "type": "Scalar", "valueType": "A" },
                "2": { "type": "Scalar", "valueType": "B" },
                "3": {
                    "type": "Intersect",
                    "name": "Both",
                    "itemTypes": [{ "typeId": 1 }, { "typeId": 2 }]
                }
            }"#,
        );
        let mut registry = NameRegistry::new();
        let decls = type_declarations(&table, &mut registry).unwrap();
        assert_eq!(
            decls[0],
            "/**\n * @label Both\n*/\nexport type Both =\n  & A\n  & B"
        );
    }

    #[test]
    fn test_tuple_declaration() {
        let table = table(
            r#"{
                "1": { "type": "Scalar", "valueType": "string" },
                "2": { "type": "Scalar", "valueType": "number" },
                "3": {
                    "type": "Tuple",
                    "name": "Pair",
                    "itemTypes": [{ "typeId": 1 }, { "typeId": 2 }]
                }
            }"#,
        );
        let mut registry = NameRegistry::new();
        let decls = type_declarations(&table, &mut registry).unwrap();
        assert_eq!(
            decls[0],
            "/**\n * @label Pair\n*/\nexport type Pair = [\n  string,\n  number\n]"
        );
    }

    #[test]
    fn test_duplicate_name_across_kinds() {
        let table = table(
            r#"{
                "1": { "type": "Struct", "name": "Thing", "fields": {} },
                "2": {
                    "type": "Union",
                    "name": "Thing",
                    "itemTypes": [{ "typeId": 1 }]
                }
            }"#,
        );
        let mut registry = NameRegistry::new();
        match type_declarations(&table, &mut registry) {
            Err(CodegenError::DuplicateName { name }) => assert_eq!(name, "Thing"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let table = table(
            r#"{
                "1": { "type": "Struct", "name": "", "fields": {} }
            }"#,
        );
        let mut registry = NameRegistry::new();
        assert!(matches!(
            type_declarations(&table, &mut registry),
            Err(CodegenError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_named_scalar_is_unsupported() {
        let table = table(
            r#"{
                "1": { "type": "Scalar", "name": "Alias", "valueType": "string" }
            }"#,
        );
        let mut registry = NameRegistry::new();
        assert!(matches!(
            type_declarations(&table, &mut registry),
            Err(CodegenError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_declarations_follow_table_order() {
        let table = table(
            r#"{
                "9": { "type": "Struct", "name": "Second", "fields": {} },
                "1": { "type": "Struct", "name": "First", "fields": {} }
            }"#,
        );
        let mut registry = NameRegistry::new();
        let decls = type_declarations(&table, &mut registry).unwrap();
        assert!(decls[0].contains("Second"));
        assert!(decls[1].contains("First"));
    }
}
