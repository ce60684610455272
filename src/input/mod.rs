mod reader;

pub use reader::{InputReader, split_sentences};
