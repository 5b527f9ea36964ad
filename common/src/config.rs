use std::path::PathBuf;

/// Default file the text-block lesson writes to, relative to the working directory.
pub const DEFAULT_TEXT_BLOCK_PATH: &str = "demo.txt";

pub struct Config {
    /// Suppresses lesson headers and the closing separator.
    ///
    /// Does not silence the lesson output itself.
    pub quiet: u8,
    /// Where the text-block lesson writes its payload.
    pub text_block_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            text_block_path: PathBuf::from(DEFAULT_TEXT_BLOCK_PATH),
        }
    }
}
