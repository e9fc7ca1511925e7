//! Highlight a small JSON-with-comments document and print the HTML.
//!
//! Run with: `cargo run --example basic`

use json_highlight::highlight;

fn main() {
    let source = r#"// Server configuration
{
  "host": "localhost",
  "port": 8080, /* tcp */
  "tls": false,
  "retries": null,
  "backoff": [0.5, 1.0, 2.0]
  // ...
}
"#;

    let html = highlight(source);
    println!("<pre class=\"json\">\n{html}</pre>");
}
