use super::*;

#[test]
fn detail_rows_format_dates_and_numbers() {
    let form = FormData {
        nama_lengkap: "Siti Aminah".to_owned(),
        tanggal_lahir: "2003-08-17".to_owned(),
        semester: Some(5),
        ipk: Some(3.5),
        ..FormData::default()
    };
    let rows = detail_rows(&form);
    assert_eq!(rows[0], ("Nama Lengkap", "Siti Aminah".to_owned()));
    assert_eq!(rows[5], ("Tanggal Lahir", "17 Agustus 2003".to_owned()));
    assert_eq!(rows[8], ("Semester", "5".to_owned()));
    assert_eq!(rows[9], ("IPK", "3.50".to_owned()));
}

#[test]
fn detail_rows_dash_blank_fields() {
    let rows = detail_rows(&FormData::default());
    assert_eq!(rows[1], ("NIM", "-".to_owned()));
    assert_eq!(rows[5], ("Tanggal Lahir", "-".to_owned()));
    assert_eq!(rows[9], ("IPK", "-".to_owned()));
}
