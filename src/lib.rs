//! A personal contact directory kept in a single JSON file.
//!
//! Every operation loads the whole file, applies one change and writes the
//! whole file back. The interactive menu and the one-shot subcommands in
//! [`cli`] are thin layers over [`domain::manager::DirectoryManager`].

pub mod cli;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod prelude;
pub mod storage;
