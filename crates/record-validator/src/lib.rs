//! Customer Record Validation
//!
//! Provides the raw marketing-record schema, category vocabularies,
//! and input validation for the segmentation pipeline.

mod dataset;
mod error;
mod record;
mod validator;
mod vocab;

pub use dataset::{load_tsv, DatasetError};
pub use error::ValidationError;
pub use record::RawRecord;
pub use validator::{RecordValidator, ValidatedFields, ValidationConfig};
pub use vocab::{Education, MaritalStatus};
