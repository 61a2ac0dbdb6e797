//! # dashub-test
//!
//! rstest fixtures shared by the dashub test suites.
//!
//! ```
//! use dashub_test::{FakeUser, sample_apps, sample_registry};
//! use dashub_core::ModelRegistry;
//!
//! let registry = sample_registry();
//! assert!(registry.is_installed("library"));
//! assert_eq!(sample_apps().len(), 2);
//! assert!(FakeUser::superuser("root").is_superuser);
//! ```

pub mod apps;
pub mod changelist;
pub mod users;

pub use apps::{sample_apps, sample_registry, unordered_apps};
pub use changelist::{FakeChangeList, FakeFieldFilter, author_filter, book_change_list};
pub use users::{FakeUser, librarian, superuser};
