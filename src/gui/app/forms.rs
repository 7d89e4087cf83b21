use crate::{
    core::FormError,
    reviews::ReviewDraft,
};

/// Text buffers edited directly by the views, with the last validation error of each form.
#[derive(Debug, Default)]
pub struct Forms {
    pub review: ReviewDraft,
    pub review_error: Option<FormError>,
    pub post_search: String,
    pub post_error: Option<FormError>,
    pub login_error: Option<FormError>,
}
