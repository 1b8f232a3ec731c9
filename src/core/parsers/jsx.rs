use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// Select the parser dialect from the file extension.
///
/// - `.tsx`: TypeScript with JSX
/// - `.ts`, `.mts`, `.cts`: TypeScript (JSX would clash with `<T>` casts)
/// - anything else (`.jsx`, `.js`, ...): ECMAScript with JSX
pub fn syntax_for_path(file_path: &Path) -> Syntax {
    match file_path.extension().and_then(|e| e.to_str()) {
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a source string into a module AST.
///
/// Accepts a per-file SourceMap so that files can be parsed on worker threads.
pub fn parse_source(code: String, file_path: &Path, source_map: Arc<SourceMap>) -> Result<Module> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(
            FileName::Real(file_path.to_path_buf()).into(),
            code,
        );

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let describe = |e: swc_ecma_parser::error::Error| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            anyhow!(
                "{}:{}:{}: {}",
                file_path.display(),
                loc.line,
                loc.col_display + 1,
                e.kind().msg()
            )
        };

        let module = parser.parse_module().map_err(&describe)?;

        // Recovered errors still mean the tree may be missing usages.
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(describe(err));
        }

        Ok(module)
    })
}
