//! Helper functions for AST node extraction.
//!
//! Pure functions with no state dependencies.

use std::path::{Path, PathBuf};

use serde_json::{Number, Value};
use swc_ecma_ast::{Expr, Lit, ModuleExportName, Tpl};

use super::SCRIPT_EXTENSIONS;

/// Unwrap TypeScript-specific expression wrappers to get the inner expression.
pub fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsNonNull(non_null) => unwrap_ts_expr(&non_null.expr),
        Expr::TsTypeAssertion(assertion) => unwrap_ts_expr(&assertion.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}

/// Convert a literal to its JSON value.
///
/// Returns None for literals with no JSON counterpart (regex, bigint, JSX text).
pub fn literal_value(lit: &Lit) -> Option<Value> {
    match lit {
        Lit::Str(s) => s.value.as_str().map(|s| Value::String(s.to_string())),
        Lit::Num(n) => Number::from_f64(n.value).map(Value::Number),
        Lit::Bool(b) => Some(Value::Bool(b.value)),
        Lit::Null(_) => Some(Value::Null),
        _ => None,
    }
}

/// Cooked text of a template literal without substitutions.
pub fn template_text(tpl: &Tpl) -> Option<String> {
    if !tpl.exprs.is_empty() {
        return None;
    }
    tpl.quasis
        .iter()
        .map(|q| q.cooked.as_ref().and_then(|s| s.as_str().map(|s| s.to_string())))
        .collect()
}

/// Name carried by an import/export specifier.
pub fn export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::Ident(ident) => ident.sym.to_string(),
        ModuleExportName::Str(s) => s.value.as_str().map(str::to_string).unwrap_or_default(),
    }
}

/// Resolve a relative import specifier to a file on disk.
///
/// Tries the path as written, then each script extension, then an `index`
/// file inside a directory of that name. A `.js` specifier also matches a
/// `.ts`/`.tsx` sibling. Bare specifiers (packages) are not resolved.
pub fn resolve_import_path(current_file: &Path, import_path: &str) -> Option<PathBuf> {
    if !import_path.starts_with('.') {
        return None;
    }

    let base_dir = current_file.parent()?;
    // Strip leading "./" from import_path to avoid paths like "./src/./messages"
    let normalized_import = import_path.strip_prefix("./").unwrap_or(import_path);
    let resolved = base_dir.join(normalized_import);

    if resolved.is_file() {
        return Some(resolved);
    }

    if resolved.extension().and_then(|e| e.to_str()) == Some("js") {
        for ext in ["ts", "tsx"] {
            let sibling = resolved.with_extension(ext);
            if sibling.is_file() {
                return Some(sibling);
            }
        }
    }

    for ext in SCRIPT_EXTENSIONS {
        let mut with_ext = resolved.clone().into_os_string();
        with_ext.push(".");
        with_ext.push(ext);
        let with_ext = PathBuf::from(with_ext);
        if with_ext.is_file() {
            return Some(with_ext);
        }
    }

    SCRIPT_EXTENSIONS
        .iter()
        .map(|ext| resolved.join(format!("index.{}", ext)))
        .find(|index_path| index_path.is_file())
}
