pub struct Config {
    /// Suppresses the banner line printed before a command runs.
    pub no_banner: bool,
    /// Output verbosity reduction.
    ///
    /// `0` prints headers and details, `1` drops headers, `2` prints only results.
    pub quiet: u8,
}
