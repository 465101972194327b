//! Table extraction.
//!
//! Walks the root `DB` interface and resolves each reference-typed member to
//! the interface it points at, collecting that interface's property names as
//! the table's columns. Pure; all file handling stays in the binary.

use crate::ast::{Member, Module, TypeExpr};
use crate::error::CodegenError;

/// Name of the root interface kysely-codegen emits.
pub const ROOT_INTERFACE: &str = "DB";

/// One table as registered on the root interface: the member's property name
/// and the referenced interface's property names, both in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<String>,
}

/// Extract every table the `DB` interface references, in member order.
///
/// Members whose declared type is not a named-type reference are skipped
/// silently; a reference to an undeclared type is fatal.
pub fn extract_tables(module: &Module) -> Result<Vec<TableSchema>, CodegenError> {
    let root = module
        .interface(ROOT_INTERFACE)
        .ok_or(CodegenError::SchemaNotFound)?;

    let mut tables = Vec::new();
    for member in &root.members {
        let Member::Property { name, ty } = member else {
            continue;
        };
        let TypeExpr::Reference(type_name) = ty else {
            continue;
        };

        let table_type = module.interface(type_name).ok_or_else(|| {
            CodegenError::TableTypeNotFound {
                name: type_name.clone(),
            }
        })?;

        let columns = table_type
            .members
            .iter()
            .filter_map(|m| match m {
                Member::Property { name, .. } => Some(name.clone()),
                Member::Other => None,
            })
            .collect();

        tables.push(TableSchema {
            table: name.clone(),
            columns,
        });
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn extract(input: &str) -> Result<Vec<TableSchema>, CodegenError> {
        extract_tables(&parser::parse(input))
    }

    #[test]
    fn tables_follow_root_member_order() {
        let tables = extract(
            r#"
            interface UsersTable { id: number; name: string }
            interface PostsTable { id: number; title: string; userId: number }
            interface DB { users: UsersTable; posts: PostsTable }
            "#,
        )
        .unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].table, "users");
        assert_eq!(tables[0].columns, vec!["id", "name"]);
        assert_eq!(tables[1].table, "posts");
        assert_eq!(tables[1].columns, vec!["id", "title", "userId"]);
    }

    #[test]
    fn non_reference_members_are_skipped_silently() {
        let tables = extract(
            r#"
            interface UsersTable { id: number }
            interface DB {
                version: number;
                flags: string | null;
                users: UsersTable;
            }
            "#,
        )
        .unwrap();

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].table, "users");
    }

    #[test]
    fn empty_table_interface_yields_empty_columns() {
        let tables = extract(
            r#"
            interface Nothing {}
            interface DB { nothing: Nothing }
            "#,
        )
        .unwrap();

        assert_eq!(tables, vec![TableSchema { table: "nothing".into(), columns: vec![] }]);
    }

    #[test]
    fn column_list_ignores_non_property_members() {
        let tables = extract(
            r#"
            interface Weird {
                id: number;
                [key: string]: unknown;
                describe(): string;
                name: string;
            }
            interface DB { weird: Weird }
            "#,
        )
        .unwrap();

        assert_eq!(tables[0].columns, vec!["id", "name"]);
    }

    #[test]
    fn missing_root_interface_is_fatal() {
        let err = extract("interface Users { id: number }").unwrap_err();
        assert!(matches!(err, CodegenError::SchemaNotFound));
    }

    #[test]
    fn missing_table_type_is_fatal_and_named() {
        let err = extract("interface DB { foo: Foo }").unwrap_err();
        assert!(matches!(&err, CodegenError::TableTypeNotFound { name } if name == "Foo"));
        assert!(err.to_string().contains("Foo"));
    }
}
