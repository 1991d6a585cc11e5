//! Rendered recommendation letter.
//!
//! Fields that are not known yet (letter number before reservation, stamp
//! before selection) show placeholders so the draft layout stays stable.

#[cfg(test)]
#[path = "letter_preview_test.rs"]
mod letter_preview_test;

use leptos::prelude::*;
use workflow::preview::PreviewData;

const PLACEHOLDER: &str = "-";

#[component]
pub fn LetterPreview(data: PreviewData) -> impl IntoView {
    let rows = letter_rows(&data)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <tr>
                    <td class="letter__label">{label}</td>
                    <td class="letter__colon">":"</td>
                    <td class="letter__value">{value}</td>
                </tr>
            }
        })
        .collect_view();
    let number = data.letter_number.clone().unwrap_or_else(|| "(nomor belum diterbitkan)".to_owned());
    let tanggal = data.tanggal_surat.clone().unwrap_or_else(|| PLACEHOLDER.to_owned());
    let stamp = data.stamp.clone().map(|stamp| match stamp.image_url {
        Some(url) => view! { <img class="letter__stamp" src=url alt=stamp.name/> }.into_any(),
        None => view! { <span class="letter__stamp letter__stamp--text">{stamp.name}</span> }.into_any(),
    });

    view! {
        <article class="letter">
            <header class="letter__head">
                <h2>"SURAT REKOMENDASI BEASISWA"</h2>
                <p class="letter__number">"Nomor: " {number}</p>
            </header>
            <p>"Yang bertanda tangan di bawah ini menerangkan bahwa:"</p>
            <table class="letter__table">{rows}</table>
            <p>
                "adalah mahasiswa aktif yang kami rekomendasikan untuk mengikuti seleksi "
                <strong>{data.scholarship_name.clone()}</strong>
                "."
            </p>
            <footer class="letter__sign">
                <p>{tanggal}</p>
                <p>"Wakil Dekan 1"</p>
                <div class="letter__stamp-slot">{stamp}</div>
            </footer>
        </article>
    }
}

/// Label/value rows of the applicant table.
fn letter_rows(data: &PreviewData) -> Vec<(&'static str, String)> {
    let or_dash = |value: &str| {
        if value.trim().is_empty() { PLACEHOLDER.to_owned() } else { value.trim().to_owned() }
    };
    vec![
        ("Nama", or_dash(&data.nama)),
        ("NIM", or_dash(&data.nim)),
        ("Tempat, tanggal lahir", data.ttl()),
        ("Departemen", or_dash(&data.departemen)),
        ("Program Studi", or_dash(&data.program_studi)),
        ("Semester", data.semester.map_or_else(|| PLACEHOLDER.to_owned(), |s| s.to_string())),
        ("IPK", data.ipk.map_or_else(|| PLACEHOLDER.to_owned(), |ipk| format!("{ipk:.2}"))),
        ("No. HP", or_dash(&data.no_hp)),
        ("Email", or_dash(&data.email)),
    ]
}
