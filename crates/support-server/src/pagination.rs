use crate::error::ApiError;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_SIZE: usize = 50;
pub const MAX_SIZE: usize = 200;

/// A validated 1-based page window. Out-of-range values are a 400, not a
/// silent clamp, so clients learn about bad parameters immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: usize,
    size: usize,
}

impl Page {
    pub fn new(page: usize, size: usize) -> Result<Self, ApiError> {
        if page < 1 {
            return Err(ApiError::bad_request("page must be >= 1"));
        }
        if size < 1 || size > MAX_SIZE {
            return Err(ApiError::bad_request(format!(
                "size must be between 1 and {MAX_SIZE}"
            )));
        }
        Ok(Self { page, size })
    }

    /// The items of this page, in order. A page past the end is empty.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip((self.page - 1) * self.size)
            .take(self.size)
            .cloned()
            .collect()
    }
}

pub fn default_page() -> usize {
    DEFAULT_PAGE
}

pub fn default_size() -> usize {
    DEFAULT_SIZE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
