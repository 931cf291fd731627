//! Module-level declarations of a parsed catalog module.

use std::{collections::HashMap, path::PathBuf};

use swc_ecma_ast::{
    Decl, ExportSpecifier, Expr, ImportDecl, ImportSpecifier, Module, ModuleDecl, ModuleItem,
    NamedExport, Pat, Stmt, VarDecl,
};

use super::helpers::export_name;

/// Imported name used for `import x from` bindings.
pub const DEFAULT_EXPORT: &str = "default";

/// Imported name used for `import * as x from` bindings.
pub const NAMESPACE_IMPORT: &str = "*";

/// A value imported from another module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Name exported by the source module.
    pub imported: String,
    /// Module specifier as written (e.g. `./messages/login`).
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportBinding {
    /// Exports a module-level binding of this module.
    Local(String),
    /// Re-exports a binding of another module.
    Reexport(ImportBinding),
}

/// Declarations of one module that matter for static evaluation.
///
/// Only module-level initializers are kept; function bodies and classes are
/// never evaluated.
#[derive(Debug)]
pub struct ParsedModule {
    /// Path as reached from the entry file, used in error messages.
    pub path: PathBuf,
    pub bindings: HashMap<String, Box<Expr>>,
    pub imports: HashMap<String, ImportBinding>,
    pub exports: HashMap<String, ExportBinding>,
    /// Sources of `export * from` declarations, in order.
    pub star_exports: Vec<String>,
    pub default_export: Option<Box<Expr>>,
}

impl ParsedModule {
    pub fn collect(path: PathBuf, module: Module) -> Self {
        let mut parsed = Self {
            path,
            bindings: HashMap::new(),
            imports: HashMap::new(),
            exports: HashMap::new(),
            star_exports: Vec::new(),
            default_export: None,
        };

        for item in module.body {
            match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => parsed.collect_import(&import),
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    if let Decl::Var(var) = export.decl {
                        for name in parsed.collect_var_decl(*var) {
                            parsed
                                .exports
                                .insert(name.clone(), ExportBinding::Local(name));
                        }
                    }
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportNamed(named)) => {
                    parsed.collect_named_export(&named)
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportAll(all)) => {
                    if !all.type_only
                        && let Some(source) = all.src.value.as_str()
                    {
                        parsed.star_exports.push(source.to_string());
                    }
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(default)) => {
                    parsed.default_export = Some(default.expr);
                }
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => {
                    parsed.collect_var_decl(*var);
                }
                _ => {}
            }
        }

        parsed
    }

    pub fn has_export(&self, name: &str) -> bool {
        if name == DEFAULT_EXPORT {
            return self.default_export.is_some() || self.exports.contains_key(name);
        }
        self.exports.contains_key(name)
    }

    /// Record initialized identifier declarations, returning their names.
    fn collect_var_decl(&mut self, var: VarDecl) -> Vec<String> {
        let mut names = Vec::new();
        for decl in var.decls {
            let Pat::Ident(ident) = decl.name else {
                continue;
            };
            let name = ident.id.sym.to_string();
            if let Some(init) = decl.init {
                self.bindings.insert(name.clone(), init);
            }
            names.push(name);
        }
        names
    }

    fn collect_import(&mut self, node: &ImportDecl) {
        if node.type_only {
            return;
        }
        let Some(source) = node.src.value.as_str() else {
            return;
        };

        for specifier in &node.specifiers {
            let (local, imported) = match specifier {
                ImportSpecifier::Named(named) => {
                    if named.is_type_only {
                        continue;
                    }
                    let local = named.local.sym.to_string();
                    let imported = named
                        .imported
                        .as_ref()
                        .map(export_name)
                        .unwrap_or_else(|| local.clone());
                    (local, imported)
                }
                ImportSpecifier::Default(default) => {
                    (default.local.sym.to_string(), DEFAULT_EXPORT.to_string())
                }
                ImportSpecifier::Namespace(ns) => {
                    (ns.local.sym.to_string(), NAMESPACE_IMPORT.to_string())
                }
            };
            self.imports.insert(
                local,
                ImportBinding {
                    imported,
                    source: source.to_string(),
                },
            );
        }
    }

    fn collect_named_export(&mut self, node: &NamedExport) {
        if node.type_only {
            return;
        }
        let source = node
            .src
            .as_ref()
            .and_then(|s| s.value.as_str().map(|s| s.to_string()));

        for specifier in &node.specifiers {
            let ExportSpecifier::Named(named) = specifier else {
                continue;
            };
            if named.is_type_only {
                continue;
            }
            let orig = export_name(&named.orig);
            let exported = named
                .exported
                .as_ref()
                .map(export_name)
                .unwrap_or_else(|| orig.clone());
            let binding = match &source {
                Some(source) => ExportBinding::Reexport(ImportBinding {
                    imported: orig,
                    source: source.clone(),
                }),
                None => ExportBinding::Local(orig),
            };
            self.exports.insert(exported, binding);
        }
    }
}
