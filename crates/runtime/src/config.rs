pub const PROGRAM_NAME: &str = "filemgr";
pub const PROGRAM_LOG_LEVEL: &str = "FILEMGR_LOG_LEVEL";

/// Directory created under the walked root to collect e-books.
pub const EBOOK_DIR_NAME: &str = "MyBooks";

/// File name suffixes treated as e-books. Matching is case-sensitive.
pub const EBOOK_EXTENSIONS: &[&str] = &[".epub", ".pdf", ".mobi"];

/// `chrono` format used for the creation date prefix, e.g. `2024-03-09`.
pub const DATE_PREFIX_FORMAT: &str = "%Y-%m-%d";

/// Separator between the date prefix and the original file name.
pub const DATE_PREFIX_SEPARATOR: char = '_';
