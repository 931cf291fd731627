//! Static evaluation of TypeScript/JavaScript catalog modules.
//!
//! The entry module is parsed with swc and its `locales` and `translations`
//! exports are evaluated into a JSON document. Only literal data is
//! supported: strings, numbers, booleans, `null`, arrays, objects, spreads,
//! and identifiers bound to module-level constants or relative imports.
//! Nothing is executed.

mod eval;
mod helpers;
mod module;

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
};

use serde_json::{Map, Value};
use swc_common::{FileName, Globals, SourceMap, Span};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::error::PipelineError;
use module::ParsedModule;

/// File extensions parsed as script modules.
pub const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

const LOCALES_EXPORT: &str = "locales";
const TRANSLATIONS_EXPORT: &str = "translations";

/// Parsed modules reachable from a catalog entry file.
///
/// Modules are parsed lazily, the first time one of their bindings is
/// evaluated, and cached by canonical path.
pub struct ModuleGraph {
    source_map: Arc<SourceMap>,
    modules: HashMap<PathBuf, Rc<ParsedModule>>,
    /// Bindings currently being evaluated, for cycle detection.
    in_progress: Vec<(PathBuf, String)>,
    /// Exports currently being resolved, for import/re-export cycles.
    exports_in_progress: Vec<(PathBuf, String)>,
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self {
            source_map: Arc::new(SourceMap::default()),
            modules: HashMap::new(),
            in_progress: Vec::new(),
            exports_in_progress: Vec::new(),
        }
    }

    /// Evaluate the catalog exported by `entry` into a
    /// `{ "locales": .., "translations": .. }` document.
    ///
    /// Named `translations`/`locales` exports take precedence over an
    /// `export default` object.
    pub fn catalog_document(&mut self, entry: &Path) -> Result<Value, PipelineError> {
        let module = self.module(entry)?;

        if self.exports(&module, TRANSLATIONS_EXPORT)? {
            let mut document = Map::new();
            if self.exports(&module, LOCALES_EXPORT)? {
                let locales = self.resolve_export(&module, LOCALES_EXPORT)?;
                document.insert(LOCALES_EXPORT.to_string(), locales);
            }
            let translations = self.resolve_export(&module, TRANSLATIONS_EXPORT)?;
            document.insert(TRANSLATIONS_EXPORT.to_string(), translations);
            return Ok(Value::Object(document));
        }

        if let Some(default) = &module.default_export {
            return self.eval(&module, default);
        }

        Err(PipelineError::load(
            &module.path,
            "module does not export `translations`",
        ))
    }

    /// Parse `path`, or return the cached module.
    fn module(&mut self, path: &Path) -> Result<Rc<ParsedModule>, PipelineError> {
        let key = module_key(path);
        if let Some(module) = self.modules.get(&key) {
            return Ok(Rc::clone(module));
        }

        let module = Rc::new(self.parse(path)?);
        self.modules.insert(key, Rc::clone(&module));
        Ok(module)
    }

    fn parse(&self, path: &Path) -> Result<ParsedModule, PipelineError> {
        use swc_common::GLOBALS;

        tracing::debug!(path = %path.display(), "parsing catalog module");
        let code = fs::read_to_string(path)
            .map_err(|e| PipelineError::load(path, format!("failed to read file: {}", e)))?;

        let module = GLOBALS.set(&Globals::new(), || {
            let source_file = self
                .source_map
                .new_source_file(FileName::Real(path.to_path_buf()).into(), code);

            let mut parser = Parser::new(syntax_for(path), StringInput::from(&*source_file), None);
            parser
                .parse_module()
                .map_err(|e| PipelineError::load(path, format!("failed to parse module: {:?}", e)))
        })?;

        Ok(ParsedModule::collect(path.to_path_buf(), module))
    }

    /// Whether `module` exports `name`, directly or through `export *`.
    fn exports(&mut self, module: &ParsedModule, name: &str) -> Result<bool, PipelineError> {
        if module.has_export(name) {
            return Ok(true);
        }
        Ok(self.star_export_source(module, name)?.is_some())
    }

    /// First module reached through `export * from` chains that exports
    /// `name`.
    fn star_export_source(
        &mut self,
        module: &ParsedModule,
        name: &str,
    ) -> Result<Option<Rc<ParsedModule>>, PipelineError> {
        let mut visited = HashSet::from([module_key(&module.path)]);
        self.find_star_export(module, name, &mut visited)
    }

    fn find_star_export(
        &mut self,
        module: &ParsedModule,
        name: &str,
        visited: &mut HashSet<PathBuf>,
    ) -> Result<Option<Rc<ParsedModule>>, PipelineError> {
        for source in &module.star_exports {
            let Some(path) = helpers::resolve_import_path(&module.path, source) else {
                continue;
            };
            if !visited.insert(module_key(&path)) {
                continue;
            }
            let target = self.module(&path)?;
            if target.has_export(name) {
                return Ok(Some(target));
            }
            if let Some(found) = self.find_star_export(&target, name, visited)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn error_at(&self, module: &ParsedModule, span: Span, message: impl AsRef<str>) -> PipelineError {
        // Bindings reached through an export specifier carry no span.
        if span.is_dummy() {
            return PipelineError::load(&module.path, message.as_ref());
        }
        let line = self.source_map.lookup_char_pos(span.lo).line;
        PipelineError::load(&module.path, format!("line {}: {}", line, message.as_ref()))
    }
}

fn module_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn syntax_for(path: &Path) -> Syntax {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "js" | "jsx" | "mjs" | "cjs" => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: extension == "tsx",
            ..Default::default()
        }),
    }
}
