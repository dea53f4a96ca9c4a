//! HTML fragments for templates.
//!
//! Uses [maud](https://maud.lambda.xyz/) so interpolated labels and names are
//! escaped automatically. Only the JSON-LD payload is emitted raw, after
//! neutralizing `</` so it cannot close the script element early.

use crate::placeholder::{PlaceholderDescriptor, icon_asset_name};
use crate::seo::{BreadcrumbItem, breadcrumb_schema};
use maud::{Markup, PreEscaped, html};

/// Cover placeholder: gradient box with an icon slot and a label.
pub fn render_placeholder(placeholder: &PlaceholderDescriptor) -> Markup {
    let class = format!("placeholder bg-gradient-to-br {}", placeholder.gradient);
    html! {
        div class=(class) data-icon=(icon_asset_name(&placeholder.icon)) {
            span.placeholder-label { (placeholder.label) }
        }
    }
}

/// `<script type="application/ld+json">` carrying a breadcrumb trail.
pub fn breadcrumb_script(items: &[BreadcrumbItem]) -> Markup {
    let json = breadcrumb_schema(items).replace("</", "<\\/");
    html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    }
}
