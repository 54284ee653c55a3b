//! End-to-end report command tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use his_cli::cli::ReportArgs;
use his_cli::commands::run_report;
use his_core::SummaryMetric;
use his_model::{ALL, ReportError, columns::display};

const EXPORT_CSV: &str = "\
anio,mes,nombre_establecimiento,profesional,nombres_profesional,Total Atenciones,atendidos_servicios_total,1,2
2024,10,IPRESS A,Cardiología,Dr. Perez,150,120,3,4
2024,10,IPRESS A,Cardiología,Dr. Perez,50,30,1,1
2024,10,IPRESS B,Pediatría,Dr. Soto,300,250,7,8
2024,11,IPRESS C,Cirugía,Dr. Castro,140,100,2,2
";

fn write_csv(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("consolidado.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(content.as_bytes()).expect("write csv");
    path
}

fn args(source: PathBuf) -> ReportArgs {
    ReportArgs {
        source,
        year: ALL.to_string(),
        month: ALL.to_string(),
        establishment: ALL.to_string(),
        profession: ALL.to_string(),
        professional: ALL.to_string(),
        top: None,
        with_days: false,
        export: None,
        demo_rows: 0,
    }
}

#[test]
fn report_aggregates_and_clamps_the_cutoff() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_csv(dir.path(), EXPORT_CSV);

    let result = run_report(&args(source)).expect("report");
    assert!(!result.used_demo_data);
    assert_eq!(result.summary.height(), 3);
    assert_eq!(result.summary.metric, SummaryMetric::Attentions);
    // Requested default 20, clamped to the 3 available professionals.
    assert_eq!(result.top_n, 3);

    // Dr. Soto ranks first with 300 attentions.
    let top = result.summary.top(1);
    let names = top.column(display::PROFESSIONAL).expect("professional");
    assert_eq!(names.str().expect("utf8").get(0), Some("Dr. Soto"));

    // Daily trend sums across all four rows.
    let days: Vec<(u8, f64)> = result
        .trend
        .iter()
        .map(|point| (point.day, point.total))
        .collect();
    assert_eq!(days, vec![(1, 13.0), (2, 15.0)]);
}

#[test]
fn month_filter_restricts_the_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_csv(dir.path(), EXPORT_CSV);

    let mut args = args(source);
    args.month = "Noviembre".to_string();
    let result = run_report(&args).expect("report");
    assert_eq!(result.summary.height(), 1);
    assert_eq!(
        result.summary.column_total(display::ATTENTIONS).expect("attentions"),
        140.0
    );
}

#[test]
fn empty_filter_result_halts_before_aggregation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_csv(dir.path(), EXPORT_CSV);

    let mut args = args(source);
    args.professional = "Dr. Nadie".to_string();
    let error = run_report(&args).expect_err("must fail");
    assert!(matches!(
        error.downcast_ref::<ReportError>(),
        Some(ReportError::EmptyFilterResult)
    ));
}

#[test]
fn export_writes_the_full_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write_csv(dir.path(), EXPORT_CSV);
    let export = dir.path().join("resumen.csv");

    let mut args = args(source);
    args.top = Some(5);
    args.export = Some(export.clone());
    let result = run_report(&args).expect("report");
    assert_eq!(result.exported.as_deref(), Some(export.as_path()));

    let contents = std::fs::read_to_string(&export).expect("read export");
    let lines: Vec<&str> = contents.lines().collect();
    // Header plus every group, not just the top-N.
    assert_eq!(lines.len(), 1 + result.summary.height());
    assert!(lines[0].contains(display::ATTENTIONS));
    assert!(lines[0].contains(display::TOTAL));
    // Reconciled attentions for the duplicated Dr. Perez rows: 150 + 50.
    assert!(lines.iter().any(|line| line.contains("Dr. Perez") && line.contains("200")));
}

#[test]
fn missing_source_falls_back_to_demo_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut args = args(dir.path().join("no-such.csv"));
    args.demo_rows = 30;
    let result = run_report(&args).expect("report");
    assert!(result.used_demo_data);
    assert!(result.updated.ends_with("(Archivo no encontrado)"));
    assert_eq!(result.summary.height(), result.summary.frame.height());
    assert!(result.summary.height() >= 20);
    // 31 day columns in the demo dataset.
    assert_eq!(result.trend.len(), 31);
}
