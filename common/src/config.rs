pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// Output verbosity reduction level.
    ///
    /// 0 prints full per-document trees, 1 drops headers and decoration,
    /// 2 keeps only the run summary.
    pub quiet: u8,
    /// Masks the middle of every serial number printed to the terminal.
    pub redact: bool,
    /// Also lists the lines the candidate filter dropped.
    ///
    /// Does not affect flagging; rejected lines never reach the flagger.
    pub show_rejected: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            redact: false,
            show_rejected: false,
        }
    }
}
