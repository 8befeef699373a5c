pub mod alias;
pub mod transform;
pub mod axis;
pub(crate) mod utils;
