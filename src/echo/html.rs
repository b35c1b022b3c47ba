//! HTML rendering of a [`ResponseRecord`].
//!
//! The page lives in `templates/echo.html`; askama escapes every
//! interpolated value because the template has an `.html` extension.

use askama::Template;

use super::record::ResponseRecord;

#[derive(Template)]
#[template(path = "echo.html")]
struct EchoPage<'a> {
    record: &'a ResponseRecord,
}

/// Render the record as a complete HTML document.
pub fn render(record: &ResponseRecord) -> Result<String, askama::Error> {
    EchoPage { record }.render()
}
