pub mod capacity;
pub mod char_pattern;
pub mod cell_view;
pub mod input_mode;

pub use capacity::Capacity;
pub use char_pattern::CharPattern;
pub use cell_view::CellView;
pub use input_mode::InputModeHint;
