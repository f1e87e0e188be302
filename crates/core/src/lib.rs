//! Functional core for the booktracker backend.
//!
//! Pure types, traits, and decision functions. Nothing in this crate performs
//! I/O; storage, blob signing, and token decoding live behind the traits
//! defined here and are implemented by the `booktracker` binary.

pub mod attachments;
pub mod books;
pub mod identity;
pub mod serde;
pub mod storage;
