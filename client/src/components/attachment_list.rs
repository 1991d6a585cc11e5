//! Attachment list grouped into required (utama) and supporting (tambahan).

#[cfg(test)]
#[path = "attachment_list_test.rs"]
mod attachment_list_test;

use leptos::prelude::*;
use workflow::Attachment;
use workflow::application::AttachmentCategory;

#[component]
pub fn AttachmentList(attachments: Vec<Attachment>) -> impl IntoView {
    let group = |category: AttachmentCategory, title: &'static str| {
        let items: Vec<Attachment> = attachments.iter().filter(|a| a.category == category).cloned().collect();
        let body = if items.is_empty() {
            view! { <p class="attachments__empty">"Tidak ada lampiran."</p> }.into_any()
        } else {
            items
                .into_iter()
                .map(|a| {
                    let size = format_size(a.size);
                    let name = a.filename.clone();
                    let link = match a.url.clone() {
                        Some(url) => view! { <a href=url target="_blank" rel="noopener">{name}</a> }.into_any(),
                        None => view! { <span>{name}</span> }.into_any(),
                    };
                    view! {
                        <li class="attachments__item">
                            {link}
                            <span class="attachments__size">{size}</span>
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        };
        view! {
            <section class="attachments__group">
                <h4>{title}</h4>
                <ul>{body}</ul>
            </section>
        }
    };
    view! {
        <div class="attachments">
            {group(AttachmentCategory::Utama, "Lampiran Utama")}
            {group(AttachmentCategory::Tambahan, "Lampiran Tambahan")}
        </div>
    }
}

/// Human-readable file size; empty when unknown.
#[allow(clippy::cast_precision_loss)]
fn format_size(size: Option<u64>) -> String {
    match size {
        None => String::new(),
        Some(bytes) if bytes < 1024 => format!("{bytes} B"),
        Some(bytes) if bytes < 1024 * 1024 => format!("{:.1} KB", bytes as f64 / 1024.0),
        Some(bytes) => format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0)),
    }
}
