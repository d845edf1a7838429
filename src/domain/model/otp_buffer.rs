use crate::domain::primitive::{Capacity, CellView};

/// Buffer/selection model backing one widget instance.
///
/// Owns the filled-character sequence, the selected-cell index and the
/// disabled flag. Knows nothing about keyboards, validation patterns or
/// host fields; that policy lives in the usecase layer.
///
/// Invariants:
/// - `0 <= len() <= capacity`
/// - when `selected_cell()` is `Some(i)`, `0 <= i <= min(capacity - 1, len())`
/// - `selected_cell()` is `None` only while the widget is unfocused
pub struct OtpBuffer {
    capacity: Capacity,
    filled: Vec<char>,
    selected: Option<usize>,
    disabled: bool,
}

impl OtpBuffer {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            filled: Vec::with_capacity(capacity.value()),
            selected: None,
            disabled: false,
        }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.filled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.filled.len() == self.capacity.value()
    }

    pub fn selected_cell(&self) -> Option<usize> {
        self.selected
    }

    pub fn character_at(&self, index: usize) -> Option<char> {
        self.filled.get(index).copied()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Snap selection to the first empty cell, or the last cell when full.
    ///
    /// Single source of truth for where the next keystroke lands.
    pub fn focus_input_cell(&mut self) {
        if self.disabled {
            return;
        }
        self.selected = Some(self.filled.len().min(self.capacity.last_index()));
    }

    /// Advance selection one cell to the right, clamped at the last cell.
    /// An undefined selection counts as cell 0 before the increment.
    pub fn focus_next_cell(&mut self) {
        if self.disabled {
            return;
        }
        let current = self.selected.unwrap_or(0);
        if current == self.capacity.last_index() {
            return;
        }
        self.selected = Some(current + 1);
    }

    /// Move selection one cell left; no-op at cell 0 or while unfocused.
    pub fn move_selection_left(&mut self) {
        if self.disabled {
            return;
        }
        if let Some(current) = self.selected
            && current > 0
        {
            self.selected = Some(current - 1);
        }
    }

    /// Move selection one cell right; clamped to the first empty cell
    /// (or the last cell). No-op while unfocused.
    pub fn move_selection_right(&mut self) {
        if self.disabled {
            return;
        }
        let upper = self.capacity.last_index().min(self.filled.len());
        if let Some(current) = self.selected
            && current < upper
        {
            self.selected = Some(current + 1);
        }
    }

    /// Append a character, or overwrite the last cell when the buffer is
    /// already full (the newest character always wins over being dropped).
    /// Selection resnaps to the input cell afterwards.
    pub fn push_character(&mut self, ch: char) {
        if self.disabled {
            return;
        }
        if self.filled.len() < self.capacity.value() {
            self.filled.push(ch);
        } else if let Some(last) = self.filled.last_mut() {
            *last = ch;
        }
        self.focus_input_cell();
    }

    /// Overwrite the character at `index`, but only if one is already there.
    /// Selection is untouched; callers advance it separately.
    pub fn replace_character(&mut self, ch: char, index: usize) {
        if self.disabled {
            return;
        }
        if let Some(slot) = self.filled.get_mut(index) {
            *slot = ch;
        }
    }

    /// Remove and return the last character, then resnap selection.
    pub fn pop_character(&mut self) -> Option<char> {
        if self.disabled {
            return None;
        }
        let ch = self.filled.pop();
        self.focus_input_cell();
        ch
    }

    /// Remove the character at `index`, shifting later cells left to close
    /// the gap. Selection is untouched. Out-of-range indices are ignored
    /// (deleting on an empty buffer resolves to index 0).
    pub fn remove_character_at(&mut self, index: usize) {
        if self.disabled {
            return;
        }
        if index < self.filled.len() {
            self.filled.remove(index);
        }
    }

    /// Empty the buffer. Selection is untouched.
    pub fn clear(&mut self) {
        if self.disabled {
            return;
        }
        self.filled.clear();
    }

    /// Replace the whole buffer in one step. This is the programmatic
    /// seeding path used by the form binding; it bypasses the disabled gate
    /// (the external authority outranks the widget state) and leaves
    /// selection untouched.
    pub fn seed(&mut self, chars: impl IntoIterator<Item = char>) {
        self.filled = chars
            .into_iter()
            .take(self.capacity.value())
            .collect();
    }

    /// Drop focus entirely (blur). Plain bookkeeping, works while disabled.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The buffer contents joined in cell order. Recomputed on read.
    pub fn joined_value(&self) -> String {
        self.filled.iter().collect()
    }

    pub fn cell_view(&self, index: usize) -> CellView {
        CellView {
            index,
            character: self.character_at(index),
            selected: self.selected == Some(index),
        }
    }

    /// Projection of all capacity cells, in order.
    pub fn cells(&self) -> Vec<CellView> {
        (0..self.capacity.value())
            .map(|index| self.cell_view(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buffer(capacity: usize) -> OtpBuffer {
        OtpBuffer::new(Capacity::new(capacity).unwrap())
    }

    fn fill(buffer: &mut OtpBuffer, chars: &str) {
        for ch in chars.chars() {
            buffer.push_character(ch);
        }
    }

    // =========================================================================
    // Tests: new()
    // =========================================================================

    #[test]
    fn new_buffer_is_empty_and_unfocused() {
        let buffer = make_buffer(6);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.selected_cell(), None);
        assert!(!buffer.is_disabled());
    }

    #[test]
    fn new_buffer_joined_value_is_empty() {
        let buffer = make_buffer(4);
        assert_eq!(buffer.joined_value(), "");
    }

    // =========================================================================
    // Tests: focus_input_cell
    // =========================================================================

    #[test]
    fn focus_input_cell_on_empty_buffer_selects_cell_zero() {
        let mut buffer = make_buffer(6);
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), Some(0));
    }

    #[test]
    fn focus_input_cell_points_at_first_empty_cell() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn focus_input_cell_on_full_buffer_selects_last_cell() {
        let mut buffer = make_buffer(3);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn focus_input_cell_is_idempotent() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();
        let first = buffer.selected_cell();
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), first);
    }

    // =========================================================================
    // Tests: focus_next_cell
    // =========================================================================

    #[test]
    fn focus_next_cell_advances_by_one() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), Some(2));

        // replace-and-advance callers rely on this moving off a filled cell
        buffer.move_selection_left();
        buffer.focus_next_cell();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn focus_next_cell_is_clamped_at_the_last_cell() {
        let mut buffer = make_buffer(3);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), Some(2));

        buffer.focus_next_cell();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn focus_next_cell_treats_unfocused_as_cell_zero() {
        let mut buffer = make_buffer(6);
        assert_eq!(buffer.selected_cell(), None);
        buffer.focus_next_cell();
        assert_eq!(buffer.selected_cell(), Some(1));
    }

    #[test]
    fn focus_next_cell_unfocused_single_cell_widget_stays_put() {
        let mut buffer = make_buffer(1);
        buffer.focus_next_cell();
        assert_eq!(buffer.selected_cell(), None);
    }

    // =========================================================================
    // Tests: move_selection_left / move_selection_right
    // =========================================================================

    #[test]
    fn move_left_decrements_selection() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        buffer.move_selection_left();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn move_left_is_noop_at_cell_zero() {
        let mut buffer = make_buffer(6);
        buffer.focus_input_cell();
        buffer.move_selection_left();
        buffer.move_selection_left();
        assert_eq!(buffer.selected_cell(), Some(0));
    }

    #[test]
    fn move_left_is_noop_while_unfocused() {
        let mut buffer = make_buffer(6);
        buffer.move_selection_left();
        assert_eq!(buffer.selected_cell(), None);
    }

    #[test]
    fn move_right_increments_selection() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        buffer.move_selection_left();
        buffer.move_selection_left();
        buffer.move_selection_right();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn move_right_is_clamped_to_first_empty_cell() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();
        assert_eq!(buffer.selected_cell(), Some(2));

        buffer.move_selection_right();
        buffer.move_selection_right();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn move_right_is_clamped_to_last_cell_when_full() {
        let mut buffer = make_buffer(3);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        for _ in 0..5 {
            buffer.move_selection_right();
        }
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn selection_never_leaves_valid_range_under_repeated_arrows() {
        let mut buffer = make_buffer(4);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();

        for _ in 0..10 {
            buffer.move_selection_right();
            let selected = buffer.selected_cell().unwrap();
            assert!(selected <= buffer.len().min(3));
        }
        for _ in 0..10 {
            buffer.move_selection_left();
            let selected = buffer.selected_cell().unwrap();
            assert!(selected <= buffer.len().min(3));
        }
    }

    // =========================================================================
    // Tests: push_character
    // =========================================================================

    #[test]
    fn push_appends_and_focuses_next_empty_cell() {
        let mut buffer = make_buffer(6);
        buffer.push_character('1');
        assert_eq!(buffer.joined_value(), "1");
        assert_eq!(buffer.selected_cell(), Some(1));
    }

    #[test]
    fn push_up_to_capacity_focuses_last_cell() {
        let mut buffer = make_buffer(3);
        fill(&mut buffer, "123");
        assert_eq!(buffer.joined_value(), "123");
        assert_eq!(buffer.selected_cell(), Some(2));
        assert!(buffer.is_full());
    }

    #[test]
    fn push_when_full_overwrites_the_last_cell() {
        let mut buffer = make_buffer(3);
        fill(&mut buffer, "abc");
        buffer.push_character('d');
        assert_eq!(buffer.joined_value(), "abd");
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn push_never_grows_past_capacity() {
        let mut buffer = make_buffer(4);
        fill(&mut buffer, "123456789");
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.joined_value(), "1239");
    }

    // =========================================================================
    // Tests: replace_character
    // =========================================================================

    #[test]
    fn replace_overwrites_an_occupied_cell() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "123");
        buffer.replace_character('9', 1);
        assert_eq!(buffer.joined_value(), "193");
    }

    #[test]
    fn replace_on_an_empty_cell_is_noop() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "12");
        buffer.replace_character('9', 2);
        assert_eq!(buffer.joined_value(), "12");
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn replace_does_not_move_selection() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        let before = buffer.selected_cell();
        buffer.replace_character('9', 0);
        assert_eq!(buffer.selected_cell(), before);
    }

    // =========================================================================
    // Tests: pop_character
    // =========================================================================

    #[test]
    fn pop_removes_and_returns_the_last_character() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "abc");
        assert_eq!(buffer.pop_character(), Some('c'));
        assert_eq!(buffer.pop_character(), Some('b'));
        assert_eq!(buffer.pop_character(), Some('a'));
        assert!(buffer.is_empty());
    }

    #[test]
    fn pop_on_empty_buffer_returns_none() {
        let mut buffer = make_buffer(6);
        assert_eq!(buffer.pop_character(), None);
    }

    #[test]
    fn pop_resnaps_selection_to_the_new_end() {
        let mut buffer = make_buffer(3);
        fill(&mut buffer, "123");
        assert_eq!(buffer.selected_cell(), Some(2));
        buffer.pop_character();
        assert_eq!(buffer.selected_cell(), Some(2));
        buffer.pop_character();
        assert_eq!(buffer.selected_cell(), Some(1));
    }

    // =========================================================================
    // Tests: remove_character_at
    // =========================================================================

    #[test]
    fn remove_at_index_shifts_later_cells_left() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "abc");
        buffer.remove_character_at(1);
        assert_eq!(buffer.joined_value(), "ac");
        buffer.remove_character_at(0);
        assert_eq!(buffer.joined_value(), "c");
    }

    #[test]
    fn remove_does_not_move_selection() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "abc");
        buffer.focus_input_cell();
        buffer.move_selection_left();
        let before = buffer.selected_cell();
        buffer.remove_character_at(0);
        assert_eq!(buffer.selected_cell(), before);
    }

    #[test]
    fn remove_on_empty_buffer_is_noop() {
        let mut buffer = make_buffer(6);
        buffer.remove_character_at(0);
        assert!(buffer.is_empty());
    }

    // =========================================================================
    // Tests: clear / seed
    // =========================================================================

    #[test]
    fn clear_empties_the_buffer_but_keeps_selection() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "123");
        buffer.focus_input_cell();
        let selected = buffer.selected_cell();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.selected_cell(), selected);
    }

    #[test]
    fn seed_replaces_the_whole_buffer() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "99");
        buffer.seed("123456".chars());
        assert_eq!(buffer.joined_value(), "123456");
    }

    #[test]
    fn seed_truncates_to_capacity() {
        let mut buffer = make_buffer(4);
        buffer.seed("123456".chars());
        assert_eq!(buffer.joined_value(), "1234");
    }

    #[test]
    fn seed_works_while_disabled() {
        let mut buffer = make_buffer(6);
        buffer.set_disabled(true);
        buffer.seed("123456".chars());
        assert_eq!(buffer.joined_value(), "123456");
    }

    // =========================================================================
    // Tests: clear_selection
    // =========================================================================

    #[test]
    fn clear_selection_drops_focus() {
        let mut buffer = make_buffer(6);
        buffer.focus_input_cell();
        buffer.clear_selection();
        assert_eq!(buffer.selected_cell(), None);
    }

    #[test]
    fn clear_selection_works_while_disabled() {
        let mut buffer = make_buffer(6);
        buffer.focus_input_cell();
        buffer.set_disabled(true);
        buffer.clear_selection();
        assert_eq!(buffer.selected_cell(), None);
    }

    // =========================================================================
    // Tests: disabled gate
    // =========================================================================

    #[test]
    fn disabled_push_is_noop() {
        let mut buffer = make_buffer(6);
        buffer.set_disabled(true);
        buffer.push_character('1');
        assert!(buffer.is_empty());
        assert_eq!(buffer.selected_cell(), None);
    }

    #[test]
    fn disabled_replace_pop_remove_clear_are_noops() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "123");
        buffer.set_disabled(true);

        buffer.replace_character('9', 0);
        assert_eq!(buffer.joined_value(), "123");

        assert_eq!(buffer.pop_character(), None);
        assert_eq!(buffer.joined_value(), "123");

        buffer.remove_character_at(0);
        assert_eq!(buffer.joined_value(), "123");

        buffer.clear();
        assert_eq!(buffer.joined_value(), "123");
    }

    #[test]
    fn disabled_selection_does_not_advance() {
        let mut buffer = make_buffer(6);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();
        buffer.set_disabled(true);

        buffer.focus_input_cell();
        buffer.focus_next_cell();
        buffer.move_selection_left();
        buffer.move_selection_right();
        assert_eq!(buffer.selected_cell(), Some(2));
    }

    #[test]
    fn reenabling_restores_mutators() {
        let mut buffer = make_buffer(6);
        buffer.set_disabled(true);
        buffer.push_character('1');
        buffer.set_disabled(false);
        buffer.push_character('1');
        assert_eq!(buffer.joined_value(), "1");
    }

    // =========================================================================
    // Tests: cell projection
    // =========================================================================

    #[test]
    fn cells_returns_one_view_per_capacity_cell() {
        let mut buffer = make_buffer(4);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();

        let cells = buffer.cells();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].character, Some('1'));
        assert_eq!(cells[1].character, Some('2'));
        assert_eq!(cells[2].character, None);
        assert_eq!(cells[3].character, None);
    }

    #[test]
    fn exactly_the_selected_cell_is_marked_selected() {
        let mut buffer = make_buffer(4);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();

        let cells = buffer.cells();
        let selected: Vec<usize> = cells
            .iter()
            .filter(|cell| cell.selected)
            .map(|cell| cell.index)
            .collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn no_cell_is_selected_after_blur() {
        let mut buffer = make_buffer(4);
        buffer.focus_input_cell();
        buffer.clear_selection();
        assert!(buffer.cells().iter().all(|cell| !cell.selected));
    }

    #[test]
    fn caret_shows_in_the_selected_empty_cell() {
        let mut buffer = make_buffer(4);
        fill(&mut buffer, "12");
        buffer.focus_input_cell();
        let cells = buffer.cells();
        assert!(cells[2].shows_caret());
        assert!(!cells[0].shows_caret());
    }
}
