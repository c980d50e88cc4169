use alloc::vec::Vec;

/// The three bare-word literals JSON allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    /// The literal a value starting with `first` must spell, if any.
    pub(crate) fn from_first(first: char) -> Option<Self> {
        match first {
            't' => Some(Self::True),
            'f' => Some(Self::False),
            'n' => Some(Self::Null),
            _ => None,
        }
    }

    pub(crate) fn word(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
        }
    }
}

/// Selects the grammar rules that govern the next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    Literal(Literal),
    String,
    Number,
    Array,
    Object,
    ObjectKey,
    ObjectValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) context: Context,
    /// Buffer index of the character that opened this frame; lookbacks
    /// within a token never reach before it.
    pub(crate) origin: usize,
}

#[derive(Debug, Default)]
pub(crate) struct ContextStack {
    frames: Vec<Frame>,
}

impl ContextStack {
    pub(crate) fn new() -> Self {
        Self { frames: Vec::new() }
    }

    #[inline]
    pub(crate) fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    #[inline]
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Swaps the context of the active frame, keeping its origin. Returns the
    /// previous context, or `None` when there is no active frame.
    pub(crate) fn replace_top(&mut self, context: Context) -> Option<Context> {
        let frame = self.frames.last_mut()?;
        Some(core::mem::replace(&mut frame.context, context))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }
}
