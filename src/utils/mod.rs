// Utils

pub mod text;

pub use text::{
    count_content_tokens, is_alphabetic_token, split_into_words, StopWordLanguage, StopWords,
};
