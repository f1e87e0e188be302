mod error;
mod factory;
mod ownership;
mod requests;
mod types;

pub use error::OwnershipError;
pub use factory::{build_book, new_book};
pub use ownership::verify_ownership;
pub use requests::{CreateBookRequest, UpdateBookRequest};
pub use types::{BookId, BookItem, UserId, RESERVED_FIELDS};
