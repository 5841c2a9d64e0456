pub mod common;
pub mod health;
pub mod modules;
pub mod search;

pub use health::health;
pub use modules::{get_module, get_modules};
pub use search::post_search;
