//! Sprite parser.
//!
//! Reads an SVG sprite and returns the `id` of every `<symbol>` it declares,
//! deduplicated and in document order.

use std::collections::HashSet;

use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

const SYMBOL_TAG: &[u8] = b"symbol";

/// Parse sprite markup and return the declared icon identifiers.
///
/// Symbols without an `id` attribute declare nothing and are skipped.
pub fn parse_sprite_ids(markup: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(markup);
    reader.trim_text(true);

    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == SYMBOL_TAG
                    && let Some(id) = symbol_id(e)?
                    && seen.insert(id.clone())
                {
                    ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "Invalid sprite markup at byte {}",
                        reader.buffer_position()
                    )
                });
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

fn symbol_id(element: &BytesStart) -> Result<Option<String>> {
    let Some(attr) = element
        .try_get_attribute("id")
        .context("Invalid attribute on <symbol>")?
    else {
        return Ok(None);
    };

    let value = attr
        .unescape_value()
        .context("Invalid id attribute on <symbol>")?;

    Ok(Some(value.into_owned()))
}
