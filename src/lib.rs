//! Map short aliases to files, programs and folders, and open them with the
//! operating system's native launcher.

pub mod alias;
pub mod error;
pub mod launcher;
pub mod picker;
pub mod resolver;
pub mod store;

pub use alias::Alias;
pub use error::{Error, Result};
pub use launcher::{Launcher, SystemLauncher};
pub use picker::{Picker, Selection, SystemPicker};
pub use resolver::Resolver;
pub use store::AliasStore;
