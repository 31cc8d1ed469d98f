use std::collections::HashMap;

use crate::interpreter::evaluator::core::Interpreter;

/// Index of the global frame in the interpreter's frame arena.
///
/// The global frame is created once per interpreter and is never popped.
pub(crate) const GLOBAL_FRAME: usize = 0;

/// One scope frame in the environment chain.
///
/// A frame maps variable names to integer values and points at its parent
/// frame by index. Lookups that miss locally continue through the parent
/// links; definitions always land in the frame they are made in. Function
/// definitions are not stored here: functions live in their own global-only
/// namespace on the [`Interpreter`], so a variable and a function may share
/// a name without collision.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    /// Index of the parent frame, `None` only for the global frame.
    parent:    Option<usize>,
    /// Variable bindings local to this frame.
    variables: HashMap<String, i64>,
}

impl Frame {
    /// Creates the global frame, the root of every lookup chain.
    pub(crate) fn global() -> Self {
        Self::default()
    }

    /// Creates a frame whose lookups fall through to `parent`.
    pub(crate) fn child_of(parent: usize) -> Self {
        Self { parent:    Some(parent),
               variables: HashMap::new(), }
    }
}

impl Interpreter {
    /// Pushes a fresh frame with the given parent and makes it current.
    ///
    /// Callers are responsible for restoring the previous current frame
    /// with [`Interpreter::restore_frames`] on every exit path; the pair
    /// forms the push/pop discipline that keeps the environment chain
    /// consistent across errors.
    pub(crate) fn push_frame(&mut self, parent: usize) {
        self.frames.push(Frame::child_of(parent));
        self.current = self.frames.len() - 1;
    }

    /// Pops every frame above `mark` and redirects the current-frame
    /// pointer back to `saved`.
    ///
    /// `mark` is the arena length captured before the matching push and
    /// `saved` the current index captured at the same time. Frames below
    /// `mark` are untouched, so parent indices held by surviving frames
    /// stay valid.
    pub(crate) fn restore_frames(&mut self, mark: usize, saved: usize) {
        self.frames.truncate(mark);
        self.current = saved;
    }

    /// Defines or overwrites a variable in the current frame only.
    ///
    /// Parent frames are never written to; shadowing works purely through
    /// lookup order.
    pub(crate) fn define_variable(&mut self, name: &str, value: i64) {
        self.frames[self.current].variables
                                 .insert(name.to_string(), value);
    }

    /// Looks a variable up through the chain, innermost frame first.
    ///
    /// Returns `None` when no frame in the chain binds the name.
    pub(crate) fn lookup_variable(&self, name: &str) -> Option<i64> {
        let mut index = Some(self.current);
        while let Some(i) = index {
            if let Some(value) = self.frames[i].variables.get(name) {
                return Some(*value);
            }
            index = self.frames[i].parent;
        }
        None
    }
}
