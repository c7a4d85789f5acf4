pub mod error;
pub mod reviews;
pub mod snapshot;

pub use error::StoreError;
pub use reviews::{Review, ReviewStore};
