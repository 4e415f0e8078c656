use std::path::Path;

use iplist_common::config::Config;
use tracing::{info, warn};

use crate::{loader, terminal::print};

pub fn check(list: &Path, cfg: &Config) -> anyhow::Result<()> {
    print::header("checking list");
    let loaded = loader::load_file(list, cfg)?;

    if let Err(e) = loaded.table.validate() {
        warn!("{e}; lookups may return unexpected ranges (use --strict to reject)");
    }

    info!(
        "{} ranges loaded, {} lines skipped, {} lines rejected",
        loaded.table.range_count(),
        loaded.skipped,
        loaded.rejected
    );
    Ok(())
}
