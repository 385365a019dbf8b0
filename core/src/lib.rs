pub mod error;
pub mod types;

pub use error::{IndexError, ThemeError};
pub use types::config::{CaseMatching, ConfigError, SearchConfig};
pub use types::document::{DocumentList, PageUrl, SearchDocument};
pub use types::theme::{Theme, ThemeStore};
