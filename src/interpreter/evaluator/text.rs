use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::FrameId,
        },
        value::core::Value,
    },
};

/// Position of the template scanner.
#[derive(Clone, Copy)]
enum Scan {
    /// Copying text verbatim.
    Text,
    /// Just read a `:`.
    Colon,
    /// Inside `:{...}`, collecting a variable name.
    Name,
}

impl Context<'_> {
    /// Evaluates `SMOOSH`: every operand converted to a YARN, joined.
    ///
    /// # Errors
    /// Returns `RuntimeError::ImplicitCast` if an operand is `NOOB`.
    pub(crate) fn eval_smoosh(&mut self,
                              operands: &[Expr],
                              frame: FrameId,
                              line: usize)
                              -> EvalResult<Value> {
        let mut text = String::new();
        for operand in operands {
            text.push_str(&self.eval(operand, frame)?.to_yarn(line)?);
        }

        Ok(Value::from(text))
    }

    /// Expands the escapes and interpolations in a string that is about to
    /// be printed.
    ///
    /// First `:"` becomes `"`, `:)` a line break and `:>` a tab. The result
    /// is then scanned once more: `::` yields a single `:` and `:{name}` is
    /// replaced by the text form of the variable `name`, looked up from
    /// `frame`. Any other `:` sequence is an error.
    ///
    /// # Errors
    /// - `Template` for an unknown escape, a bad variable name or an
    ///   unterminated sequence.
    /// - `UnknownVariable` or `ImplicitCast` if an interpolated variable is
    ///   missing or `NOOB`.
    ///
    /// ## Example
    /// ```
    /// use std::io;
    ///
    /// use lolcode::interpreter::{
    ///     evaluator::{
    ///         core::{Context, Options},
    ///         scope::MAIN,
    ///     },
    ///     value::core::Value,
    /// };
    ///
    /// let (mut input, mut output) = (io::empty(), io::sink());
    /// let mut context = Context::new(Options::default(), &mut input, &mut output);
    /// context.scopes.declare(MAIN, "x", Value::from("hi"));
    ///
    /// assert_eq!(context.expand_template("Hello:)World:>!", MAIN, 1).unwrap(),
    ///            "Hello\nWorld\t!");
    /// assert_eq!(context.expand_template(":{x}::", MAIN, 1).unwrap(), "hi:");
    /// assert!(context.expand_template("oops:", MAIN, 1).is_err());
    /// ```
    pub fn expand_template(&self, text: &str, frame: FrameId, line: usize) -> EvalResult<String> {
        let escaped = text.replace(":\"", "\"").replace(":)", "\n").replace(":>", "\t");

        let mut out = String::with_capacity(escaped.len());
        let mut name = String::new();
        let mut scan = Scan::Text;

        for c in escaped.chars() {
            scan = match (scan, c) {
                (Scan::Text, ':') => Scan::Colon,
                (Scan::Text, c) => {
                    out.push(c);
                    Scan::Text
                },
                (Scan::Colon, ':') => {
                    out.push(':');
                    Scan::Text
                },
                (Scan::Colon, '{') => {
                    name.clear();
                    Scan::Name
                },
                (Scan::Colon, c) => {
                    return Err(template_error(format!("unknown escape ':{c}'"), line));
                },
                (Scan::Name, '}') => {
                    if name.is_empty() {
                        return Err(template_error("empty variable name".to_string(), line));
                    }
                    out.push_str(&self.scopes.get(frame, &name, line)?.to_yarn(line)?);
                    Scan::Text
                },
                (Scan::Name, c) if c.is_ascii_digit() && name.is_empty() => {
                    return Err(template_error(format!("variable name cannot start with '{c}'"),
                                              line));
                },
                (Scan::Name, c) if c.is_ascii_alphanumeric() || c == '_' => {
                    name.push(c);
                    Scan::Name
                },
                (Scan::Name, c) => {
                    return Err(template_error(format!("invalid character '{c}' in variable name"),
                                              line));
                },
            };
        }

        match scan {
            Scan::Text => Ok(out),
            Scan::Colon | Scan::Name => {
                Err(template_error("unterminated ':' sequence".to_string(), line))
            },
        }
    }
}

fn template_error(details: String, line: usize) -> RuntimeError {
    RuntimeError::Template { details, line }
}
