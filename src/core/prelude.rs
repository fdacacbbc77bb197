// Core essentials
pub use crate::core::collation::Collator;
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};

// Command collaborators
pub use crate::commands::environment::{Environment, WorldInfo};
pub use crate::commands::sender::{Caller, Location, SenderKind};

// i18n
pub use crate::i18n::{Bundle, MessageCatalog};
pub use crate::ui::color::ChatColor;

pub use std::collections::BTreeMap;
pub use std::sync::Arc;
