pub mod config_io;
pub mod data_dir;
pub mod storage;
