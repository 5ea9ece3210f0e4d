mod json;

pub use json::JsonLetterStore;
