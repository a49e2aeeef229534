pub mod item;
pub mod cursor;
pub mod view_state;

pub use item::*;
pub use cursor::*;
pub use view_state::*;
