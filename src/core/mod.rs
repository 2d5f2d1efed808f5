//! Locale data model and the filesystem store built on it.

pub mod document;
pub mod fallback;
pub mod store;

pub use document::{InsertAction, KeyPath, LocaleDocument};
pub use store::{
    BatchSetResult, CopyResult, GetAllResult, GetResult, HasResult, LoadResult, LocaleList,
    LocaleStore, MissingResult, SetOutcome, SetResult, StoreWarning,
};
