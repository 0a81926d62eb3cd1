//! In-memory persistence adapters.
//!
//! Both repositories keep entities in a `DashMap` keyed by UUID, which gives
//! atomic per-key access to concurrent request handlers. Absence is always
//! reported through the port's typed `NotFound` variant.

mod in_memory_book_repository;
mod in_memory_file_repository;

pub use in_memory_book_repository::InMemoryBookRepository;
pub use in_memory_file_repository::InMemoryFileRepository;
