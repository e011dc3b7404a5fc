mod error;
mod export;
mod extract;
mod model;
mod slug;
mod structure;
mod timestamp;

use std::io::Write;
use std::path::Path;
use std::sync::Once;

use tempfile::Builder;
use tracing::info;

pub use error::ConvertError;
pub use export::{
    ExportData, ExportMeta, GhostExport, PostRecord, PostTagRecord, TagRecord, EXPORT_VERSION,
};
pub use model::{Blog, Category, Post, PostTagLink};
pub use slug::slugify;
pub use structure::BLOGML_NAMESPACE;
pub use timestamp::{epoch_millis, parse_epoch_millis, parse_timestamp};

static INIT: Once = Once::new();

pub fn initialize_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Counts of what a conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub posts: usize,
    pub tags: usize,
    pub posts_tags: usize,
}

/// Loads a BlogML file and builds the Ghost export for it.
pub fn convert(xml_file: &Path, exported_on: i64) -> Result<GhostExport, ConvertError> {
    info!("Parsing file {:?}", xml_file);
    let sections = structure::parse_xml_file(xml_file)?;
    let blog = extract::extract_blog(&sections)?;
    Ok(GhostExport::new(&blog, exported_on))
}

/// Converts `xml_file` and writes the JSON export to `json_file`.
///
/// Nothing is written unless the whole conversion succeeds, and the output
/// file is replaced atomically.
pub fn convert_file(xml_file: &Path, json_file: &Path) -> Result<ConversionSummary, ConvertError> {
    let exported_on = chrono::Utc::now().timestamp_millis();
    let export = convert(xml_file, exported_on)?;
    let json = export.to_json()?;

    write_json(&json, json_file)?;
    info!("Wrote {} bytes to {:?}", json.len(), json_file);

    Ok(ConversionSummary {
        posts: export.data.posts.len(),
        tags: export.data.tags.len(),
        posts_tags: export.data.posts_tags.len(),
    })
}

fn write_json(json: &[u8], path: &Path) -> Result<(), ConvertError> {
    let write_error = |source: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Named temp files are owner-only; ask for the mode a plain create would
    // use so the umask decides, as it does for `File::create`.
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(write_error)?;
    file.write_all(json).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
