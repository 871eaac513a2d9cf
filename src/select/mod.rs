pub mod augment;
pub mod control;

pub use augment::{augment, is_sentinel_selected};
pub use control::{OptionTag, SelectControl, SelectError, SelectOption};
