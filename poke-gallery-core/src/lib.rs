pub mod domain;
pub mod error;
pub mod projection;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use projection::*;
pub use traits::*;
