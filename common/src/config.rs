pub struct Config {
    /// Validates the loaded list for ordering and overlap before building the table.
    ///
    /// Without it, an overlapping list yields unspecified lookup results.
    pub strict: bool,
    /// Drops lines with a format error instead of aborting the load.
    pub skip_errors: bool,
}
