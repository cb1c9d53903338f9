pub mod error;
pub mod string_ext;

pub use error::{ApiError, ApiResult};
pub use string_ext::{StringExt, sanitize_credential, strip_code_fences, strip_wrapping_quotes};
