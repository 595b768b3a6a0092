//! MediaWiki export document and atomic file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::pages::Page;
use super::text::escape_page_text;
use crate::config::EXPORT_GENERATOR;
use crate::error::Result;

/// Render one `<page>` element.
#[must_use]
pub fn render_page(page: &Page) -> String {
    format!(
        "<page>\n\
         <title>{}</title>\n\
         <id />\n\
         <restrictions />\n\
         <revision>\n\
         <id />\n\
         <timestamp />\n\
         <comment />\n\
         <text xml:space=\"default\">\n\
         {}\n\
         </text>\n\
         <model>wikitext</model>\n\
         <format>text/x-wiki</format>\n\
         </revision>\n\
         </page>\n\
         \n",
        escape_page_text(&page.title),
        escape_page_text(&page.text)
    )
}

/// Render a MediaWiki export-0.8 document containing `pages`.
#[must_use]
pub fn render_export(site_name: &str, pages: &[Page]) -> String {
    let mut document = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <mediawiki xmlns=\"http://www.mediawiki.org/xml/export-0.8/\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:schemaLocation=\"http://www.mediawiki.org/xml/export-0.8/ http://www.mediawiki.org/xml/export-0.8.xsd\" \
         version=\"0.8\" xml:lang=\"en\">\n\
         \n\
         <siteinfo>\n\
         <sitename>{}</sitename>\n\
         <base>-</base>\n\
         <generator>{EXPORT_GENERATOR}</generator>\n\
         <case>first-letter</case>\n\
         </siteinfo>\n\
         \n",
        escape_page_text(site_name)
    );
    for page in pages {
        document.push_str(&render_page(page));
    }
    document.push_str("</mediawiki>");
    document
}

/// Write `content` to `path` atomically.
///
/// The content goes to a hidden temp file next to the target, is synced and
/// then renamed over the target, so readers never see a partial file.
pub fn save_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}
