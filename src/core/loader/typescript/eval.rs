//! Expression evaluation and binding resolution.

use serde_json::{Map, Value};
use swc_common::{Span, Spanned};
use swc_ecma_ast::{ArrayLit, Expr, ExprOrSpread, ObjectLit, Prop, PropName, PropOrSpread};

use super::ModuleGraph;
use super::helpers::{literal_value, resolve_import_path, template_text, unwrap_ts_expr};
use super::module::{DEFAULT_EXPORT, ExportBinding, ImportBinding, NAMESPACE_IMPORT, ParsedModule};
use crate::error::PipelineError;

impl ModuleGraph {
    /// Evaluate a literal-data expression of `module`.
    pub(super) fn eval(&mut self, module: &ParsedModule, expr: &Expr) -> Result<Value, PipelineError> {
        match unwrap_ts_expr(expr) {
            Expr::Lit(lit) => literal_value(lit)
                .ok_or_else(|| self.error_at(module, lit.span(), "unsupported literal")),
            Expr::Tpl(tpl) => template_text(tpl).map(Value::String).ok_or_else(|| {
                self.error_at(
                    module,
                    tpl.span,
                    "template literals with substitutions are not supported",
                )
            }),
            Expr::Array(array) => self.eval_array(module, array),
            Expr::Object(object) => self.eval_object(module, object),
            Expr::Ident(ident) => self.resolve_identifier(module, &ident.sym, ident.span),
            other => Err(self.error_at(
                module,
                other.span(),
                "unsupported expression, only literal data can be evaluated",
            )),
        }
    }

    fn eval_array(&mut self, module: &ParsedModule, array: &ArrayLit) -> Result<Value, PipelineError> {
        let mut items = Vec::with_capacity(array.elems.len());
        for elem in &array.elems {
            match elem {
                // Hole, as in `[a, , b]`.
                None => items.push(Value::Null),
                Some(ExprOrSpread {
                    spread: Some(_),
                    expr,
                }) => match self.eval(module, expr)? {
                    Value::Array(spread) => items.extend(spread),
                    _ => return Err(self.error_at(module, expr.span(), "spread of a non-array value")),
                },
                Some(ExprOrSpread { expr, spread: None }) => items.push(self.eval(module, expr)?),
            }
        }
        Ok(Value::Array(items))
    }

    fn eval_object(&mut self, module: &ParsedModule, object: &ObjectLit) -> Result<Value, PipelineError> {
        let mut fields = Map::new();
        for prop in &object.props {
            match prop {
                PropOrSpread::Spread(spread) => match self.eval(module, &spread.expr)? {
                    Value::Object(spread_fields) => fields.extend(spread_fields),
                    _ => {
                        return Err(self.error_at(
                            module,
                            spread.expr.span(),
                            "spread of a non-object value",
                        ));
                    }
                },
                PropOrSpread::Prop(prop) => match &**prop {
                    Prop::KeyValue(kv) => {
                        let name = self.prop_name(module, &kv.key)?;
                        let value = self.eval(module, &kv.value)?;
                        fields.insert(name, value);
                    }
                    Prop::Shorthand(ident) => {
                        let value = self.resolve_identifier(module, &ident.sym, ident.span)?;
                        fields.insert(ident.sym.to_string(), value);
                    }
                    other => {
                        return Err(self.error_at(
                            module,
                            other.span(),
                            "methods, getters and setters are not supported",
                        ));
                    }
                },
            }
        }
        Ok(Value::Object(fields))
    }

    fn prop_name(&mut self, module: &ParsedModule, key: &PropName) -> Result<String, PipelineError> {
        match key {
            PropName::Ident(ident) => Ok(ident.sym.to_string()),
            PropName::Str(s) => Ok(s.value.as_str().map(str::to_string).unwrap_or_default()),
            PropName::Num(n) => Ok(n.value.to_string()),
            PropName::Computed(computed) => match self.eval(module, &computed.expr)? {
                Value::String(name) => Ok(name),
                _ => Err(self.error_at(
                    module,
                    computed.span,
                    "computed property names must evaluate to strings",
                )),
            },
            other => Err(self.error_at(module, other.span(), "unsupported property name")),
        }
    }

    /// Value bound to `name` in `module`, following imports.
    fn resolve_identifier(
        &mut self,
        module: &ParsedModule,
        name: &str,
        span: Span,
    ) -> Result<Value, PipelineError> {
        if let Some(expr) = module.bindings.get(name) {
            let guard = (super::module_key(&module.path), name.to_string());
            if self.in_progress.contains(&guard) {
                return Err(self.error_at(module, span, format!("circular reference to `{}`", name)));
            }
            self.in_progress.push(guard);
            let value = self.eval(module, expr);
            self.in_progress.pop();
            return value;
        }

        if let Some(import) = module.imports.get(name) {
            return self.resolve_import(module, import, span);
        }

        if name == "undefined" {
            return Ok(Value::Null);
        }

        Err(self.error_at(module, span, format!("`{}` is not defined", name)))
    }

    fn resolve_import(
        &mut self,
        module: &ParsedModule,
        import: &ImportBinding,
        span: Span,
    ) -> Result<Value, PipelineError> {
        if import.imported == NAMESPACE_IMPORT {
            return Err(self.error_at(
                module,
                span,
                format!("namespace import of `{}` is not supported", import.source),
            ));
        }

        let Some(path) = resolve_import_path(&module.path, &import.source) else {
            return Err(self.error_at(
                module,
                span,
                format!("cannot resolve import `{}`", import.source),
            ));
        };

        let target = self.module(&path)?;
        self.resolve_export(&target, &import.imported)
    }

    /// Value exported from `module` under `name`.
    pub(super) fn resolve_export(
        &mut self,
        module: &ParsedModule,
        name: &str,
    ) -> Result<Value, PipelineError> {
        let guard = (super::module_key(&module.path), name.to_string());
        if self.exports_in_progress.contains(&guard) {
            return Err(PipelineError::load(
                &module.path,
                format!("circular import of `{}`", name),
            ));
        }
        self.exports_in_progress.push(guard);
        let value = self.follow_export(module, name);
        self.exports_in_progress.pop();
        value
    }

    fn follow_export(&mut self, module: &ParsedModule, name: &str) -> Result<Value, PipelineError> {
        match module.exports.get(name) {
            Some(ExportBinding::Local(local)) => {
                return self.resolve_identifier(module, local, Span::default());
            }
            Some(ExportBinding::Reexport(import)) => {
                return self.resolve_import(module, import, Span::default());
            }
            None => {}
        }

        if name == DEFAULT_EXPORT
            && let Some(expr) = &module.default_export
        {
            return self.eval(module, expr);
        }

        if let Some(target) = self.star_export_source(module, name)? {
            return self.resolve_export(&target, name);
        }

        Err(PipelineError::load(
            &module.path,
            format!("module does not export `{}`", name),
        ))
    }
}
