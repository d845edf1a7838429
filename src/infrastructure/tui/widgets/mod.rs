pub mod cell_row;

pub use cell_row::render_cell_row;
