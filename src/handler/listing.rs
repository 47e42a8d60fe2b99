//! Directory listing module
//!
//! Renders the auto-generated HTML index for directories without an index
//! file: entries sorted by name, directories suffixed with `/`, names
//! escaped for HTML, hrefs percent-encoded.

use std::io;
use std::path::Path;
use tokio::fs;

/// Read a directory and render its listing page.
///
/// `request_path` is the decoded URI path shown in the title; hrefs are
/// relative to it, which is why the router redirects bare directory paths
/// to their trailing-slash form first.
pub async fn render_directory(dir: &Path, request_path: &str) -> io::Result<String> {
    let mut names: Vec<String> = Vec::new();

    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    Ok(render_page(request_path, &names))
}

fn render_page(request_path: &str, names: &[String]) -> String {
    let title = format!("Directory listing for {}", escape_html(request_path));

    let mut items = String::new();
    for name in names {
        let href = encode_href(name);
        let label = escape_html(name);
        items.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>\n"));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n<body>\n\
         <h1>{title}</h1>\n\
         <hr>\n<ul>\n{items}</ul>\n<hr>\n\
         </body>\n</html>\n"
    )
}

/// Percent-encode one entry name for use as a relative href, keeping the
/// trailing slash that marks directories.
fn encode_href(name: &str) -> String {
    match name.strip_suffix('/') {
        Some(stem) => format!("{}/", urlencoding::encode(stem)),
        None => urlencoding::encode(name).into_owned(),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
