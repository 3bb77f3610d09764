use crate::config::LoaderConfig;
use crate::host::SheetRequest;

/// Derives the page name from a URL path: the last `/` segment with `suffix`
/// removed. Returns `None` when nothing is left (`/`, `/docs/`, `/.html`).
pub fn page_name<'a>(pathname: &'a str, suffix: &str) -> Option<&'a str> {
    let last = pathname.rsplit('/').next().unwrap_or_default();
    let name = last.strip_suffix(suffix).unwrap_or(last);
    if name.is_empty() { None } else { Some(name) }
}

/// Request for the shared stylesheet at `index` in the candidate list.
pub fn generic_request(config: &LoaderConfig, index: usize, name: &str) -> SheetRequest {
    SheetRequest::new(format!("{}{}", config.base_path, name))
        .with_id(format!("{}{}", config.generic_id_prefix, index))
}

/// Request for the stylesheet belonging to page `name`.
pub fn page_request(config: &LoaderConfig, name: &str) -> SheetRequest {
    SheetRequest::new(format!("{}{}.css", config.base_path, name))
        .with_id(format!("{}{}", config.page_id_prefix, name))
}
