//! File-backed loader tests.

use std::io::Write;
use std::path::Path;

use his_ingest::{LoadCache, load, read_csv_table, source_timestamp};
use his_model::{DayConvention, ReportError, columns};

fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(content.as_bytes()).expect("write csv");
    path
}

const CONSOLIDADO: &str = "\
anio,mes,nombre_establecimiento,profesional,nombres_profesional,Total Atenciones,atendidos_servicios_total,1,2,10,Unnamed: 0
2024,10,IPRESS A,Cardiología,Dr. Perez,150,120,3,4,5,0
2024,10,IPRESS B,Pediatría,Dr. Soto,300,250,7,8,9,1
";

#[test]
fn load_detects_schema_and_derives_month_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "consolidado.csv", CONSOLIDADO);

    let dataset = load(&path).expect("load dataset");
    assert_eq!(dataset.frame.height(), 2);
    assert_eq!(dataset.schema.convention, DayConvention::Bare);
    assert_eq!(dataset.schema.day_names(), vec!["1", "2", "10"]);
    assert_eq!(
        dataset.schema.attention_total.as_deref(),
        Some("Total Atenciones")
    );

    // Unnamed artifact column is gone.
    assert!(dataset.frame.column("Unnamed: 0").is_err());

    let month_names = dataset.frame.column(columns::MONTH_NAME).expect("mes_nombre");
    let month_names = month_names.str().expect("utf8 column");
    assert_eq!(month_names.get(0), Some("Octubre"));
}

#[test]
fn missing_source_is_source_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no-such-file.csv");
    match read_csv_table(&missing) {
        Err(ReportError::SourceNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
}

#[test]
fn headers_are_trimmed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        dir.path(),
        "spaced.csv",
        " anio , mes ,nombres_profesional\n2024,10,Dr. Perez\n",
    );
    let table = read_csv_table(&path).expect("read table");
    assert_eq!(table.headers, vec!["anio", "mes", "nombres_profesional"]);
}

#[test]
fn cache_serves_unchanged_source_and_reloads_on_touch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(dir.path(), "consolidado.csv", CONSOLIDADO);

    let mut cache = LoadCache::new();
    let first = cache.load(&path).expect("first load");
    assert_eq!(first.frame.height(), 2);
    assert_eq!(cache.len(), 1);

    let again = cache.load(&path).expect("cached load");
    assert_eq!(again.frame.height(), 2);

    // Rewrite with one more row and a bumped mtime.
    std::thread::sleep(std::time::Duration::from_millis(20));
    let extended = format!("{CONSOLIDADO}2024,11,IPRESS C,Cirugía,Dr. Castro,140,100,1,1,1,2\n");
    write_csv(dir.path(), "consolidado.csv", &extended);
    filetime_touch(&path);

    let reloaded = cache.load(&path).expect("reload");
    assert_eq!(reloaded.frame.height(), 3);
}

// Force a fresh mtime even on filesystems with coarse timestamps.
fn filetime_touch(path: &Path) {
    let file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .expect("open for touch");
    file.set_modified(std::time::SystemTime::now())
        .expect("set mtime");
}

#[test]
fn timestamp_falls_back_for_missing_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let present = write_csv(dir.path(), "present.csv", "anio\n2024\n");

    let stamp = source_timestamp(&present, his_ingest::REPORT_TIMEZONE);
    assert!(!stamp.fallback);

    let stamp = source_timestamp(&dir.path().join("absent.csv"), his_ingest::REPORT_TIMEZONE);
    assert!(stamp.fallback);
    assert!(stamp.formatted().contains("Hrs."));
}
