mod add;
mod edit;

pub use add::AddReview as Add;
pub use edit::EditReview as Edit;

/// Column sizes of `review.title` and `review.comment`, in characters
pub const TITLE_MAX_CHARS: usize = 255;
pub const COMMENT_MAX_CHARS: usize = 500;
