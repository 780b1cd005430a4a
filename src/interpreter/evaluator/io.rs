use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Signal},
            scope::FrameId,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Executes `VISIBLE`.
    ///
    /// Each argument is evaluated, converted to a YARN, expanded as a
    /// template and written before the next argument is evaluated. A line
    /// break follows unless the statement ended with `!`.
    pub(crate) fn exec_print(&mut self,
                             arguments: &[Expr],
                             newline: bool,
                             frame: FrameId,
                             line: usize)
                             -> EvalResult<Signal> {
        for argument in arguments {
            let text = self.eval(argument, frame)?.to_yarn(line)?;
            let expanded = self.expand_template(&text, frame, line)?;
            self.write_output(&expanded, line)?;
        }

        if newline {
            self.write_output("\n", line)?;
        }

        Ok(Signal::Continue)
    }

    /// Executes `GIMMEH`.
    ///
    /// Reads one whitespace-delimited word and stores it as a YARN. An
    /// existing variable visible from `frame` is overwritten; otherwise the
    /// variable is declared in `frame`.
    pub(crate) fn exec_read(&mut self,
                            name: &str,
                            frame: FrameId,
                            line: usize)
                            -> EvalResult<Signal> {
        let word = Value::from(self.read_word(line)?);

        if self.scopes.is_visible(frame, name) {
            self.scopes.set(frame, name, word, line)?;
        } else {
            self.scopes.declare(frame, name, word);
        }

        Ok(Signal::Continue)
    }

    fn write_output(&mut self, text: &str, line: usize) -> EvalResult<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(|source| RuntimeError::Io { source, line })
    }

    /// Reads the next whitespace-delimited word from the input.
    ///
    /// Pending output is flushed first so that prompts appear before the
    /// program waits. Leading whitespace is skipped; the whitespace after
    /// the word is left in the stream. At the end of input the word is empty.
    fn read_word(&mut self, line: usize) -> EvalResult<String> {
        let io_error = |source| RuntimeError::Io { source, line };

        self.output.flush().map_err(io_error)?;

        let mut word = Vec::new();
        loop {
            let buffer = self.input.fill_buf().map_err(io_error)?;
            if buffer.is_empty() {
                break;
            }

            let mut consumed = 0;
            let mut complete = false;
            for &byte in buffer {
                if is_word_separator(byte) {
                    if !word.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    word.push(byte);
                }
                consumed += 1;
            }

            self.input.consume(consumed);
            if complete {
                break;
            }
        }

        Ok(String::from_utf8_lossy(&word).into_owned())
    }
}

/// Whitespace that ends a `GIMMEH` word; ASCII whitespace plus vertical tab.
const fn is_word_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0B'
}
