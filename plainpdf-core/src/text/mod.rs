mod encoding;
mod escape;
mod font;
mod wrap;

pub use encoding::{encode_win_ansi, win_ansi_byte};
pub use escape::escape_literal;
pub use font::StandardFont;
pub use wrap::{LineWrapper, DEFAULT_WRAP_WIDTH};
