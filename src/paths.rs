//! Default import-path computation.
//!
//! When `--import-from` is not given, the generated import points at the
//! input file via the relative path from the output file's directory,
//! `./`-prefixed unless it already ascends with `../`. The file extension is
//! kept as-is.

use std::env;
use std::path::{Component, Path, PathBuf};

use anyhow::Result;

/// Compute the default `--import-from` value for the given input and output
/// files. Relative arguments are resolved against the current directory.
pub fn default_import_path(input: &Path, output: &Path) -> Result<String> {
    let cwd = env::current_dir()?;
    let input_abs = normalize(&cwd.join(input));
    let output_abs = normalize(&cwd.join(output));
    let output_dir = output_abs.parent().unwrap_or(Path::new("/"));

    let rel = relative_path(&input_abs, output_dir);
    if rel.starts_with("../") {
        Ok(rel)
    } else {
        Ok(format!("./{}", rel))
    }
}

/// Lexically resolve `.` and `..` components; no filesystem access.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Relative path from `base` (a directory) to `target`, joined with `/`.
fn relative_path(target: &Path, base: &Path) -> String {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();

    let mut common = 0;
    while common < target.len() && common < base.len() && target[common] == base[common] {
        common += 1;
    }

    let mut parts: Vec<String> = vec!["..".to_string(); base.len() - common];
    for component in &target[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(input: &str, output: &str) -> String {
        default_import_path(Path::new(input), Path::new(output)).unwrap()
    }

    #[test]
    fn sibling_files() {
        assert_eq!(import("/app/src/db.ts", "/app/src/rizzolver.ts"), "./db.ts");
    }

    #[test]
    fn input_below_output_dir() {
        assert_eq!(import("/app/src/db/schema.ts", "/app/src/gen.ts"), "./db/schema.ts");
    }

    #[test]
    fn ascending_path_keeps_bare_dotdot_prefix() {
        assert_eq!(import("/app/src/db.ts", "/app/generated/rizzolver.ts"), "../src/db.ts");
    }

    #[test]
    fn dot_components_are_resolved() {
        assert_eq!(
            import("/app/./src/../src/db.ts", "/app/src/out/../rizzolver.ts"),
            "./db.ts"
        );
    }

    #[test]
    fn relative_arguments_resolve_against_cwd() {
        // Both under cwd, so the cwd prefix cancels out.
        assert_eq!(import("schemas/db.ts", "schemas/rizzolver.ts"), "./db.ts");
    }
}
