//! Contains structures and traits to define the decision making procedure of the search.
//!
//! Values are not selected: at a branching node both finishes of the selected position are
//! explored, glossy first.
pub mod position_selection;

pub use position_selection::PositionSelector;
