// SPDX-License-Identifier: MIT OR Apache-2.0
use super::{RawFrame, StackSource};
use std::sync::{Mutex, PoisonError};

/// A [`StackSource`] that replays a fixed list of frames.
///
/// Index 0 answers skip 0. Every requested skip is recorded, which lets tests
/// check the depth a logging entry point asks for without a real stack.
///
/// ```
/// use logx::stack::{RawFrame, ScriptedStack, StackWalker};
/// use std::sync::Arc;
///
/// let stack = Arc::new(ScriptedStack::new([RawFrame::new("/src/app/main.rs", 7)]));
/// let walker = StackWalker::new(stack.clone());
/// assert_eq!(walker.frame_at(0, 1).unwrap().line, 7);
/// assert!(walker.frame_at(1, 1).is_err());
/// assert_eq!(stack.requested_skips(), vec![0, 1]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedStack {
    frames: Vec<RawFrame>,
    requests: Mutex<Vec<usize>>,
}

impl ScriptedStack {
    pub fn new(frames: impl IntoIterator<Item = RawFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Skips asked for so far, oldest first.
    pub fn requested_skips(&self) -> Vec<usize> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forgets recorded requests.
    pub fn clear_requests(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl StackSource for ScriptedStack {
    fn frame(&self, skip: usize) -> Option<RawFrame> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(skip);
        self.frames.get(skip).cloned()
    }
}
