pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod key;
pub use key::*;

pub mod record;
pub use record::*;

pub mod spacing;
pub use spacing::*;

pub mod table;
pub use table::*;
