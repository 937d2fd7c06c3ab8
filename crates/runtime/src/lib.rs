mod config;
pub mod logging;

pub use config::{
    DATE_PREFIX_FORMAT, DATE_PREFIX_SEPARATOR, EBOOK_DIR_NAME, EBOOK_EXTENSIONS, PROGRAM_LOG_LEVEL,
    PROGRAM_NAME,
};

pub use logging::init;
