// Utils compartidos

pub mod constants;
pub mod dates;
pub mod storage;
