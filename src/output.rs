use std::path::Path;

use log::info;

use crate::error::Result;
use crate::scrape::ScrapeRecord;

/// Write records to a CSV file with a `url,content` header, one row per
/// record, in order. Overwrites any existing file at the path.
///
/// An empty record list writes nothing at all; an existing file at the
/// path is left untouched in that case.
pub fn write_csv(records: &[ScrapeRecord], path: impl AsRef<Path>) -> Result<()> {
    if records.is_empty() {
        info!("No data to save");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        // Header comes from the struct field names on the first row.
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
