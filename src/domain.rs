pub mod contact;
pub mod directory;
pub mod manager;

use crate::errors::AppError;
use contact::{Contact, normalize_name, validate_name};
use directory::{Directory, Document};
