pub mod exercise;
pub mod history;
