//! Riwayat (history) timeline, newest entry first.

#[cfg(test)]
#[path = "riwayat_timeline_test.rs"]
mod riwayat_timeline_test;

use leptos::prelude::*;
use workflow::RiwayatEntry;
use workflow::preview::format_tanggal;

use crate::components::status_badge::StatusBadge;

#[component]
pub fn RiwayatTimeline(entries: Vec<RiwayatEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="riwayat riwayat--empty">"Belum ada riwayat."</p> }.into_any();
    }
    let items = entries
        .into_iter()
        .rev()
        .map(|entry| {
            let heading = entry_heading(&entry);
            let stamp = entry_timestamp(&entry);
            let catatan = entry.catatan.clone().filter(|c| !c.trim().is_empty());
            view! {
                <li class="riwayat__item">
                    <div class="riwayat__head">
                        <span class="riwayat__action">{entry.action_type.label()}</span>
                        <StatusBadge status=entry.status/>
                    </div>
                    <div class="riwayat__route">{heading}</div>
                    <div class="riwayat__time">{stamp}</div>
                    {catatan.map(|c| view! { <blockquote class="riwayat__catatan">{c}</blockquote> })}
                </li>
            }
        })
        .collect_view();
    view! { <ol class="riwayat">{items}</ol> }.into_any()
}

/// `Sender -> Receiver`, or just the sender when nobody receives.
fn entry_heading(entry: &RiwayatEntry) -> String {
    match entry.receiver_role {
        Some(receiver) => format!("{} \u{2192} {}", entry.sender_role.label(), receiver.label()),
        None => entry.sender_role.label().to_owned(),
    }
}

fn entry_timestamp(entry: &RiwayatEntry) -> String {
    let tanggal = format_tanggal(&entry.date);
    if entry.time.trim().is_empty() { tanggal } else { format!("{tanggal}, {}", entry.time.trim()) }
}
