/// Number of hosts shown per page when listing alive hosts.
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone)]
pub struct Config {
    /// Verbosity reduction. `0` prints everything, `1` drops decorations,
    /// `2` prints results only.
    pub quiet: u8,
    pub no_banner: bool,
    /// Emit results as JSON instead of terminal tables.
    pub json: bool,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            json: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
