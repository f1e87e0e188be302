use crate::books::BookId;

/// Object key for a book's attachment. The key is the book ID itself.
pub fn object_key(book_id: BookId) -> String {
    book_id.to_string()
}

/// Public retrieval URL for a book's attachment.
///
/// Pattern: `https://<bucket>.s3.amazonaws.com/<book_id>`
pub fn retrieval_url(bucket: &str, book_id: BookId) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{}", object_key(book_id))
}
