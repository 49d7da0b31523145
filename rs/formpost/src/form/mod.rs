mod form;

pub use form::{
    content_type, generate_boundary, get_form_data, is_valid_boundary, FormData,
    BOUNDARY_PREFIX, MAX_BOUNDARY_LEN,
};
