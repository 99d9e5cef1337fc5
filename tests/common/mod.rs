//! Shared fixtures for integration tests and benches
//!
//! Pages are wrapped in the same `html > body > div.wrapper > div` layout the
//! default path scaffold assumes, so rendered paths read naturally.

#![allow(dead_code)]

/// Wrap `content` in a full page with the default scaffold
pub fn page(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n\
         <head><meta charset=\"utf-8\"><title>Fixture</title></head>\n\
         <body>\n<div class=\"wrapper\">\n<div class=\"panel\">\n{}\n</div>\n</div>\n\
         </body>\n</html>\n",
        content
    )
}

/// The canonical original page with `#make-everything-ok-button`
pub fn original_page() -> String {
    page(
        r#"<button id="make-everything-ok-button" class="btn btn-success" data-role="submit">
Make everything OK</button>
<a class="btn btn-default" href="/cancel">Cancel</a>"#,
    )
}
