pub mod applications;
pub mod storage;
