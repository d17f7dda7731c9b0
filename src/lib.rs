pub mod domain;
pub mod notify;
pub mod runtime;
pub mod storage;
pub mod utils;
