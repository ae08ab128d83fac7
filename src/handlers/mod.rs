pub mod greeting;
pub mod health;
pub mod info;

pub use greeting::greeting_handler;
pub use health::health_handler;
pub use info::info_handler;
