pub mod download;
pub mod print;
pub mod storage;
pub mod time;
