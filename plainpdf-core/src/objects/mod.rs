mod dictionary;
mod primitive;
mod stream;

pub use dictionary::Dictionary;
pub use primitive::{format_number, Object, ObjectId};
pub use stream::Stream;
