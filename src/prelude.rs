pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, is_valid_email, is_valid_phone},
    directory::{Directory, Document},
    manager::{AddOutcome, Confirm, DirectoryManager, FixedAnswer, Lookup, RemoveOutcome},
};
pub use crate::errors::AppError;
pub use crate::logging::{Verbosity, init_logging};
pub use crate::storage::{self, DirectoryStore, JsonStorage, LoadOutcome, MemStorage};
