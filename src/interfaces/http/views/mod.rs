//! Server-rendered HTML pages
//!
//! Pages are plain strings assembled with `format!`. Every value that comes
//! from a request or from storage passes through [`crate::support::html`]
//! before it is written into markup.

mod adjustments;
mod bills;
mod payments;

pub use adjustments::{adjustment_form, adjustment_not_implemented};
pub use bills::{bill_details, bill_not_found, retrieval_form};
pub use payments::{payment_form, receipt};

use crate::support::html::escape;

/// Wrap page content in the shared document layout.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Utility Billing</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<nav>
<a href="/">Home</a>
<a href="/bill-retrieval">View bill</a>
<a href="/bill-payment">Pay bill</a>
<a href="/bill-adjustments">Adjust bill</a>
</nav>
</header>
<main>
<h1>{title}</h1>
{content}
</main>
</body>
</html>"#,
        title = escape(title),
        content = content,
    )
}

pub fn index() -> String {
    layout(
        "Utility Billing",
        r#"<p>Retrieve, pay or adjust a monthly utility bill.</p>
<ul class="actions">
<li><a href="/bill-retrieval">View a bill</a></li>
<li><a href="/bill-payment">Pay a bill</a></li>
<li><a href="/bill-adjustments">Request a bill adjustment</a></li>
</ul>"#,
    )
}

/// Error page listing one or more messages.
pub fn error_page(title: &str, messages: &[String]) -> String {
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>\n", escape(m)))
        .collect();
    layout(
        title,
        &format!(
            "<div class=\"error\">\n<ul>\n{}</ul>\n</div>\n<p><a href=\"javascript:history.back()\">Go back</a></p>",
            items
        ),
    )
}

/// Month number to its English name, falling back to the number.
pub(crate) fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}
