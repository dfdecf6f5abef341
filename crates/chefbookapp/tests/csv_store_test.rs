use chefbookapp::dto::{BookingDto, CustomerDto, Dto, NoteDto};
use chefbookapp::error::ChefbookError;
use chefbookapp::model::{Booking, Customer, Record};
use chefbookapp::store::{CsvFileStore, DataStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    (dir, path)
}

fn booking(id: &str, customer_id: &str, date: &str) -> BookingDto {
    BookingDto {
        id: Some(id.to_string()),
        customer_id: Some(customer_id.to_string()),
        date: Some(date.to_string()),
    }
}

#[test]
fn test_csv_store_round_trip_preserves_order() {
    let (_dir, path) = setup("bookings.csv");
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    let rows = vec![
        booking("b2", "c1", "15.06.2024 20:00"),
        booking("b1", "c2", "14.06.2024 19:00"),
        booking("b3", "c1", "01.01.2025 12:00"),
    ];

    store.save(&rows).unwrap();
    assert_eq!(store.load(), rows);
}

#[test]
fn test_csv_store_header_matches_fields() {
    let (_dir, path) = setup("customers.csv");
    let mut store = CsvFileStore::<CustomerDto>::new(&path);
    store
        .save(&[Customer::new("Alice").unwrap().dto()])
        .unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    let header = on_disk.lines().next().unwrap();
    assert_eq!(header, CustomerDto::FIELDS.join(","));
    assert_eq!(header, "id,name,phones,birthday,address,email,notes");
}

#[test]
fn test_csv_store_load_missing_file_is_empty() {
    let (_dir, path) = setup("missing.csv");
    let store = CsvFileStore::<BookingDto>::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn test_csv_store_empty_save_leaves_file_unmodified() {
    let (_dir, path) = setup("bookings.csv");
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    store.save(&[booking("b1", "c1", "15.06.2024 20:00")]).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    store.save(&[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_csv_store_empty_save_creates_nothing() {
    let (_dir, path) = setup("bookings.csv");
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    store.save(&[]).unwrap();
    assert!(!path.exists());
}

#[test]
fn test_csv_store_delete() {
    let (_dir, path) = setup("bookings.csv");
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    store.save(&[booking("b1", "c1", "15.06.2024 20:00")]).unwrap();

    store.delete().unwrap();
    assert!(!path.exists());
    assert!(store.load().is_empty());

    // Deleting again is fine
    store.delete().unwrap();
}

#[test]
fn test_csv_store_atomic_write_artifacts() {
    let (dir, path) = setup("bookings.csv");
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    store.save(&[booking("b1", "c1", "15.06.2024 20:00")]).unwrap();
    store.save(&[booking("b2", "c1", "16.06.2024 20:00")]).unwrap();

    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_csv_store_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("bookings.csv");
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    store.save(&[booking("b1", "c1", "15.06.2024 20:00")]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_csv_store_skips_unreadable_rows() {
    let (_dir, path) = setup("bookings.csv");
    let mut bytes = b"id,customer_id,date\nb1,c1,15.06.2024 20:00\n".to_vec();
    bytes.extend_from_slice(b"b2,c\xff\xfe,16.06.2024 20:00\n");
    bytes.extend_from_slice(b"b3,c3,17.06.2024 20:00\n");
    fs::write(&path, bytes).unwrap();

    let store = CsvFileStore::<BookingDto>::new(&path);
    let ids: Vec<_> = store.load().into_iter().filter_map(|row| row.id).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
}

#[test]
fn test_csv_store_tolerates_short_rows_and_unknown_columns() {
    let (_dir, path) = setup("bookings.csv");
    fs::write(
        &path,
        "id,table,customer_id,date\nb1,7,c1,15.06.2024 20:00\nb2,3\n",
    )
    .unwrap();

    let store = CsvFileStore::<BookingDto>::new(&path);
    let rows = store.load();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], booking("b1", "c1", "15.06.2024 20:00"));
    assert_eq!(rows[1].id.as_deref(), Some("b2"));
    assert_eq!(rows[1].customer_id, None);
    assert_eq!(rows[1].date, None);
}

#[test]
fn test_csv_store_notes_with_separators_survive() {
    let (_dir, path) = setup("customers.csv");
    let mut customer = Customer::new("Alice").unwrap();
    customer.add_phone("0501112233").unwrap();
    customer.add_phone("0509998877").unwrap();
    customer
        .add_note("Soup; no salt, table #4", ["allergy", "vip"])
        .unwrap();
    customer.add_note(r"Back\slash fan", Vec::<String>::new()).unwrap();
    customer.set_address("12 Main St, Kyiv, Ukraine").unwrap();

    let mut store = CsvFileStore::<CustomerDto>::new(&path);
    store.save(&[customer.dto()]).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded[0].notes,
        vec![
            NoteDto {
                text: "Soup; no salt, table #4".to_string(),
                tags: vec!["allergy".to_string(), "vip".to_string()],
            },
            NoteDto {
                text: r"Back\slash fan".to_string(),
                tags: vec![],
            },
        ]
    );

    let restored = Customer::from_trusted_dto(loaded[0].clone());
    assert_eq!(restored, customer);
}

#[test]
fn test_csv_store_booking_records_round_trip() {
    let (_dir, path) = setup("bookings.csv");
    let bookings = vec![
        Booking::new("c1", "15.06.2024 20:00").unwrap(),
        Booking::new("c2", "16.06.2024 13:15").unwrap(),
    ];
    let mut store = CsvFileStore::<BookingDto>::new(&path);
    store
        .save(&bookings.iter().map(Record::dto).collect::<Vec<_>>())
        .unwrap();

    let restored: Vec<Booking> = store
        .load()
        .into_iter()
        .map(Booking::from_trusted_dto)
        .collect();
    assert_eq!(restored, bookings);
}

#[test]
fn test_csv_store_failed_save_reports_write_error() {
    let (dir, path) = setup("bookings.csv");
    // A directory in the store's place makes the final rename fail.
    fs::create_dir(&path).unwrap();
    let mut store = CsvFileStore::<BookingDto>::new(&path);

    let err = store
        .save(&[booking("b1", "c1", "15.06.2024 20:00")])
        .unwrap_err();
    match err {
        ChefbookError::StorageWrite { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected a write error, got {other:?}"),
    }

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    assert!(path.is_dir());
}
