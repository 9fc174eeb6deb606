#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Skips the banner printed before every command.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `1` drops section headers, `2` and above prints only the summary lines.
    pub quiet: u8,
}
