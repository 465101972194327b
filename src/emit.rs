//! Generated-file rendering.
//!
//! Builds the output module as one string: the do-not-edit marker, a
//! type-only import of the `DB` interface, the builder import, and the
//! `builderForSchema` chain with one `.table(...)` call per extracted table.

use crate::extract::{TableSchema, ROOT_INTERFACE};

/// npm package the builder factory is imported from.
pub const BUILDER_PACKAGE: &str = "kysely-rizzolver";

/// Render the output file contents.
///
/// Returns `None` when there is nothing to register, so the caller never
/// touches the output file in that case.
pub fn generate(tables: &[TableSchema], import_from: &str, export_as: &str) -> Option<String> {
    if tables.is_empty() {
        return None;
    }

    let mut out = String::from(
        "// This file was generated by kysely-rizzolver-codegen. Do not edit it manually.\n\n",
    );
    out.push_str(&format!(
        "import type {{ {} }} from '{}';\n",
        ROOT_INTERFACE, import_from
    ));
    out.push_str(&format!(
        "import {{ KyselyRizzolver }} from '{}';\n\n",
        BUILDER_PACKAGE
    ));

    out.push_str(&format!(
        "export const {} = KyselyRizzolver.builderForSchema<{}>()\n",
        export_as, ROOT_INTERFACE
    ));
    for table in tables {
        let columns = table
            .columns
            .iter()
            .map(|column| format!("'{}'", column))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("    .table('{}', [{}] as const)\n", table.table, columns));
    }
    out.push_str("    .build();\n");

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(table: &str, columns: &[&str]) -> TableSchema {
        TableSchema {
            table: table.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn renders_the_full_module() {
        let tables = vec![
            schema("users", &["id", "name"]),
            schema("posts", &["id", "title", "userId"]),
        ];

        let out = generate(&tables, "./db", "rizzolver").unwrap();
        assert_eq!(
            out,
            "// This file was generated by kysely-rizzolver-codegen. Do not edit it manually.\n\
             \n\
             import type { DB } from './db';\n\
             import { KyselyRizzolver } from 'kysely-rizzolver';\n\
             \n\
             export const rizzolver = KyselyRizzolver.builderForSchema<DB>()\n\
             \x20   .table('users', ['id', 'name'] as const)\n\
             \x20   .table('posts', ['id', 'title', 'userId'] as const)\n\
             \x20   .build();\n"
        );
    }

    #[test]
    fn custom_export_name() {
        let out = generate(&[schema("users", &["id"])], "../schema.ts", "db").unwrap();
        assert!(out.contains("export const db = KyselyRizzolver.builderForSchema<DB>()"));
        assert!(out.contains("from '../schema.ts'"));
    }

    #[test]
    fn empty_column_list_renders_empty_tuple() {
        let out = generate(&[schema("nothing", &[])], "./db", "rizzolver").unwrap();
        assert!(out.contains(".table('nothing', [] as const)"));
    }

    #[test]
    fn no_tables_means_no_output() {
        assert_eq!(generate(&[], "./db", "rizzolver"), None);
    }
}
