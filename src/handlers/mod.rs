pub mod health;
pub mod quote;
pub mod root;

pub use health::health_handler;
pub use quote::random_quote_handler;
pub use root::root_handler;
