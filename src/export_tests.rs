//! Unit tests for the CSV writer

use super::*;
use std::fs;
use tempfile::TempDir;

fn entry(name: &str, quantity: u32, location: &str, notes: &str) -> Entry {
    Entry {
        name: name.to_string(),
        quantity,
        location: location.to_string(),
        notes: notes.to_string(),
    }
}

#[test]
fn test_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(
        &path,
        &[
            entry("Schraube", 10, "Regal A", "rostfrei"),
            entry("Mutter", 25, "Regal B", ""),
        ],
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Artikel,Menge,Standort,Notizen\r\nSchraube,10,Regal A,rostfrei\r\nMutter,25,Regal B,\r\n"
    );
}

#[test]
fn test_quotes_embedded_separators() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&path, &[entry("Kabel, rot", 3, "Lager \"Süd\"", "Zeile1\nZeile2")]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Artikel,Menge,Standort,Notizen\r\n\"Kabel, rot\",3,\"Lager \"\"Süd\"\"\",\"Zeile1\nZeile2\"\r\n"
    );
}

#[test]
fn test_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "alter Inhalt").unwrap();

    write_csv(&path, &[entry("A", 1, "", "")]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Artikel,Menge,Standort,Notizen\r\nA,1,,\r\n");
}

#[test]
fn test_missing_directory_fails_without_leftovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("out.csv");

    assert!(write_csv(&path, &[entry("A", 1, "", "")]).is_err());
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_no_temp_files_left_after_success() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&path, &[entry("A", 1, "", "")]).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("out.csv")]);
}

#[cfg(unix)]
mod permission_tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn mode(path: &Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_new_export_is_not_owner_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, &[entry("A", 1, "", "")]).unwrap();

        assert_eq!(mode(&path), 0o644);
    }

    #[test]
    fn test_overwrite_keeps_existing_mode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "alter Inhalt").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_csv(&path, &[entry("A", 1, "", "")]).unwrap();

        assert_eq!(mode(&path), 0o640);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Artikel,Menge,Standort,Notizen\r\nA,1,,\r\n"
        );
    }
}

#[test]
fn test_suggested_file_name() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(suggested_file_name(date), "Inventur_2024-03-01.csv");
}
