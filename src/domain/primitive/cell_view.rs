/// Read-only projection of one cell, consumed by rendering layers.
///
/// A cell displays its character, a caret (when selected and empty), or
/// nothing. The projection is recomputed from the model on read and carries
/// no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    pub character: Option<char>,
    pub selected: bool,
}

impl CellView {
    /// True when a renderer should show a caret in this cell.
    pub fn shows_caret(&self) -> bool {
        self.selected && self.character.is_none()
    }
}
