use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, value::core::Value}};

/// Index of a frame in the [`Scopes`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

/// The frame of the main program. It exists for the whole run.
pub const MAIN: FrameId = FrameId(0);

/// What kind of block a frame belongs to.
///
/// The kind decides which control statements are legal: functions may only
/// be declared in the main frame, and `FOUND YR`/`GTFO` are rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The top-level program.
    Main,
    /// The body of an `IM IN YR` loop.
    Loop,
    /// The body of a user function.
    Function,
}

/// One lexical scope.
#[derive(Debug)]
struct Frame {
    variables: HashMap<String, Value>,
    parent:    Option<FrameId>,
    kind:      FrameKind,
}

/// The scope chain of a running program.
///
/// Frames form a stack inside a single arena: a frame is always pushed after
/// the frame that encloses or calls it and popped before it. Lookups walk the
/// parent links, so a function frame (which has no parent) only sees its own
/// variables.
#[derive(Debug)]
pub struct Scopes {
    frames: Vec<Frame>,
}

impl Default for Scopes {
    fn default() -> Self {
        Self::new()
    }
}

impl Scopes {
    /// Creates a scope chain holding only the empty main frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame { variables: HashMap::new(),
                                    parent:    None,
                                    kind:      FrameKind::Main, }], }
    }

    /// Pushes a new empty frame and returns its id.
    ///
    /// # Parameters
    /// - `kind`: The kind of block the frame belongs to.
    /// - `parent`: The enclosing frame, or `None` for a function frame.
    pub fn push(&mut self, kind: FrameKind, parent: Option<FrameId>) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame { variables: HashMap::new(),
                                 parent,
                                 kind });
        id
    }

    /// Removes `id` and every frame pushed after it. The main frame is never
    /// removed.
    pub fn pop(&mut self, id: FrameId) {
        self.frames.truncate(id.0.max(1));
    }

    /// The number of live frames, including the main frame.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns the kind of the frame `id`.
    #[must_use]
    pub fn kind(&self, id: FrameId) -> FrameKind {
        self.frames[id.0].kind
    }

    /// Binds `name` in the frame `id`.
    ///
    /// Shadows any binding of the same name in enclosing frames and
    /// overwrites an existing binding in the same frame. Never fails.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::{
    ///     evaluator::scope::{FrameKind, MAIN, Scopes},
    ///     value::core::Value,
    /// };
    ///
    /// let mut scopes = Scopes::new();
    /// scopes.declare(MAIN, "x", Value::from(1));
    ///
    /// let inner = scopes.push(FrameKind::Loop, Some(MAIN));
    /// scopes.declare(inner, "x", Value::from(2));
    /// assert_eq!(scopes.get(inner, "x", 1).unwrap(), &Value::from(2));
    ///
    /// scopes.pop(inner);
    /// assert_eq!(scopes.get(MAIN, "x", 1).unwrap(), &Value::from(1));
    /// ```
    pub fn declare(&mut self, id: FrameId, name: &str, value: Value) {
        self.frames[id.0].variables.insert(name.to_string(), value);
    }

    /// Replaces the value of `name` in the nearest frame that declares it.
    ///
    /// # Errors
    /// Returns `RuntimeError::AssignmentToUndeclared` if no frame in the chain
    /// starting at `id` declares `name`.
    pub fn set(&mut self, id: FrameId, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let owner = self.owner(id, name)
                        .ok_or_else(|| RuntimeError::AssignmentToUndeclared { name: name.to_string(),
                                                                              line })?;

        if let Some(slot) = self.frames[owner.0].variables.get_mut(name) {
            *slot = value;
        }
        Ok(())
    }

    /// Looks up `name`, starting at `id` and walking outwards.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if no frame in the chain
    /// declares `name`.
    pub fn get(&self, id: FrameId, name: &str, line: usize) -> EvalResult<&Value> {
        self.owner(id, name)
            .and_then(|owner| self.frames[owner.0].variables.get(name))
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns `true` if `name` is declared anywhere in the chain starting at
    /// `id`.
    #[must_use]
    pub fn is_visible(&self, id: FrameId, name: &str) -> bool {
        self.owner(id, name).is_some()
    }

    fn owner(&self, id: FrameId, name: &str) -> Option<FrameId> {
        let mut current = Some(id);

        while let Some(frame_id) = current {
            let frame = &self.frames[frame_id.0];
            if frame.variables.contains_key(name) {
                return Some(frame_id);
            }
            current = frame.parent;
        }

        None
    }
}
