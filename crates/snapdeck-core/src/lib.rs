pub mod config;
pub mod effects;
pub mod error;
pub mod motion;
pub mod page;
pub mod pager;

pub use config::{AppConfig, PagerConfig};
pub use error::{Error, Result};
pub use motion::Easing;
pub use page::PageDocument;
pub use pager::{Pager, Surface};
