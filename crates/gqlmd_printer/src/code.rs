//! SDL code blocks of type definitions.

use gqlmd_core::markdown::code_block;
use gqlmd_core::{MARKDOWN_CODE_INDENTATION, MARKDOWN_EOL};
use gqlmd_schema::{InputValueDef, SchemaElement};

use crate::filter::is_printable;
use crate::modifier::signature;
use crate::options::PrinterConfig;
use crate::strings;

/// Accumulates SDL text for one definition.
///
/// Members excluded by the filter policy leave no line behind.
pub struct CodeWriter<'a> {
    config: &'a PrinterConfig,
    output: String,
}

impl<'a> CodeWriter<'a> {
    pub fn new(config: &'a PrinterConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    pub fn push_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.output.push_str(MARKDOWN_CODE_INDENTATION);
        }
    }

    fn deprecated(&mut self, element: &impl SchemaElement) {
        if element.is_deprecated() {
            self.output.push_str(" @deprecated");
        }
    }

    /// Writes `name(args): Type = default @deprecated` on its own line.
    pub fn field<E: SchemaElement>(&mut self, field: &E, depth: usize) {
        if !is_printable(field, self.config) {
            return;
        }
        let Some(ty) = field.declared_type() else {
            return;
        };

        self.indent(depth);
        self.output.push_str(field.name());
        self.arguments(field.arguments(), depth);
        self.output.push_str(": ");
        self.output.push_str(&signature(ty));
        if let Some(default) = field.default_value() {
            self.output.push_str(" = ");
            self.output.push_str(default);
        }
        self.deprecated(field);
        self.output.push_str(MARKDOWN_EOL);
    }

    /// Writes a field list: ` {\n  field: T\n}`.
    pub fn fields<E: SchemaElement>(&mut self, fields: &[E]) {
        self.output.push_str(" {");
        self.output.push_str(MARKDOWN_EOL);
        for field in fields {
            self.field(field, 1);
        }
        self.output.push('}');
    }

    /// Writes a parenthesised argument block closing at `depth`. Nothing is
    /// written when no argument is printable.
    pub fn arguments(&mut self, arguments: &[InputValueDef], depth: usize) {
        let printable: Vec<&InputValueDef> = arguments
            .iter()
            .filter(|argument| is_printable(*argument, self.config))
            .collect();
        if printable.is_empty() {
            return;
        }

        self.output.push('(');
        self.output.push_str(MARKDOWN_EOL);
        for argument in printable {
            self.field(argument, depth + 1);
        }
        self.indent(depth);
        self.output.push(')');
    }

    /// Writes a bare member line, e.g. an enum value.
    pub fn value<E: SchemaElement>(&mut self, value: &E, depth: usize) {
        if !is_printable(value, self.config) {
            return;
        }
        self.indent(depth);
        self.output.push_str(value.name());
        self.deprecated(value);
        self.output.push_str(MARKDOWN_EOL);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// SDL line of a single field or input value, empty when excluded.
pub fn print_code_field<E: SchemaElement>(field: &E, config: &PrinterConfig, depth: usize) -> String {
    let mut writer = CodeWriter::new(config);
    writer.field(field, depth);
    writer.finish()
}

/// Argument block of a field or directive, empty when nothing is printable.
pub fn print_code_arguments<E: SchemaElement>(element: &E, config: &PrinterConfig, depth: usize) -> String {
    let mut writer = CodeWriter::new(config);
    writer.arguments(element.arguments(), depth);
    writer.finish()
}

/// Fenced GraphQL code block.
pub fn print_code_block(code: &str) -> String {
    code_block(strings::CODE_LANGUAGE, code)
}
