//! Schema-graph structs for serde deserialization.
//!
//! A schema graph is the immutable snapshot handed to [`generate`]: a type
//! table keyed by integer id plus a rooted tree of named operations. The
//! table addresses types through integer handles instead of nested owned
//! structures, so shared substructure and forward references need no special
//! treatment; cycles are legal as long as they pass through a named node.
//!
//! [`generate`]: crate::generate

use indexmap::IndexMap;
use serde::Deserialize;

/// Root schema graph: the type table plus the entries tree.
///
/// Iteration order of `types` is insertion order, which is also the
/// declaration-emission order of the generated output.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaGraph {
    /// Type table keyed by type id.
    pub types: IndexMap<u32, TypeNode>,
    /// Root of the entries tree (the client call surface).
    pub entries: Entry,
}

impl SchemaGraph {
    /// Parse a schema graph from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One node of the type graph.
///
/// Only the optional `name` decides how a node is rendered: a named node
/// always resolves to its bare name and is declared standalone exactly once,
/// while an unnamed node is re-expanded inline at every reference site.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeNode {
    /// Declaration anchor name, if any.
    pub name: Option<String>,
    /// Structural kind of the node.
    #[serde(flatten)]
    pub kind: TypeKind,
}

impl TypeNode {
    /// Name used at reference sites: present and non-empty.
    ///
    /// A node carrying `Some("")` is not referenceable; it still counts as
    /// named for declaration purposes, where it is rejected with
    /// `EmptyName`.
    pub fn reference_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Closed tagged union of type-node kinds.
///
/// The `"type"` tag matches the wire format of the upstream schema
/// formatter; unknown tags are rejected at the serde boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum TypeKind {
    /// Primitive keyword stored verbatim (e.g. "string", "number").
    Scalar { value_type: String },
    /// Fixed value rendered as a literal expression.
    Literal { value: serde_json::Value },
    /// String-keyed mapping to one value type.
    Record { value_type_id: u32 },
    /// May-be-absent wrapper; adds `| null | undefined` to the type text.
    Nullable { item_type_id: u32 },
    /// Homogeneous ordered collection.
    List { item_type_id: u32 },
    /// Ordered union of members.
    Union { item_types: Vec<ItemTypeRef> },
    /// Ordered intersection of members.
    Intersect { item_types: Vec<ItemTypeRef> },
    /// Fixed-arity ordered members.
    Tuple { item_types: Vec<ItemTypeRef> },
    /// Ordered mapping of field name to field.
    Struct { fields: IndexMap<String, FieldRef> },
    /// Class-backed variant of `Struct`; always declared under a name.
    Object { fields: IndexMap<String, FieldRef> },
    /// Transparent modifier, no syntactic effect.
    Strict { item_type_id: u32 },
    /// Transparent modifier, no syntactic effect.
    NonStrict { item_type_id: u32 },
    /// Transparent modifier, no syntactic effect.
    ReadOnly { item_type_id: u32 },
    /// Transparent modifier, no syntactic effect.
    ReadOnlyDeep { item_type_id: u32 },
}

/// Member reference inside Union/Intersect/Tuple.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTypeRef {
    pub type_id: u32,
}

/// One struct field: a type reference plus optional documentation metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    pub type_id: u32,
    pub description: Option<String>,
    pub deprecated: Option<String>,
}

/// Entries tree node: a namespace of children or one operation leaf.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Entry {
    /// Namespace mapping key to child node.
    Entries { entries: IndexMap<String, Entry> },
    /// One remote operation with a typed input and typed output.
    Api {
        input: TypedRef,
        output: TypedRef,
        description: Option<String>,
        deprecated: Option<String>,
    },
}

/// Typed endpoint of an operation (input or output side).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedRef {
    pub type_id: u32,
    pub description: Option<String>,
}
