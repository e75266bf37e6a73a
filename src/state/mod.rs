pub mod expansion;
pub mod selection;
pub mod theme;

pub use expansion::{ExpansionMap, NodePath, TrickRow};
pub use selection::{Selection, SelectionAction};
pub use theme::{Palette, ThemeMode};
