/// Input event types the engine understands.
/// Generic, no application-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved; coordinates are normalized device coordinates
    /// (x, y in [-1, 1], y up).
    PointerMove { x: f32, y: f32 },
    /// A click at the given normalized device coordinates.
    Click { x: f32, y: f32 },
    /// A custom event from the UI layer (sliders, buttons).
    /// `kind` identifies the event; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// DOM callbacks write events into the queue; the simulation reads them
/// on its next tick, then the queue is drained.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from a DOM callback).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns them and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
