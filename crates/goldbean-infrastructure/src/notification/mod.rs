mod serverchan;

pub use serverchan::{ServerChanSender, DEFAULT_SERVERCHAN_BASE_URL};
