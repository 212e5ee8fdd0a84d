//! funcap-store
//!
//! Repository interfaces for the three stores the report core reads:
//! the wizard key/value store (string-keyed JSON blobs, one per wizard
//! step), the binary attachment store backing the digital library, and
//! the hosted evaluator-profile document store.

pub mod attachments;
pub mod client;
pub mod error;
pub mod profile;
pub mod wizard;

pub use attachments::{AttachmentStore, FileAttachmentStore, MemoryAttachmentStore};
pub use error::StorageError;
pub use profile::{HostedProfileStore, MemoryProfileSource, ProfileSource};
pub use wizard::{load, save, FileStore, MemoryStore, WizardStore};
