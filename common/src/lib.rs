pub mod config;
pub mod error;
pub mod markup;
pub mod pages;
pub mod render;
pub mod sample;
pub mod session;
pub mod surface;

pub use config::*;
pub use error::*;
pub use pages::*;
pub use session::*;
pub use surface::*;
