//! Filter engine tests.

use polars::prelude::{DataFrame, NamedFrom, Series};

use his_core::apply_filters;
use his_model::{DatasetSchema, FilterSet, FilterValue, ReportError};

fn frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("anio".into(), vec![2024.0, 2024.0, 2025.0]).into(),
        Series::new("mes".into(), vec![10.0, 11.0, 1.0]).into(),
        Series::new(
            "mes_nombre".into(),
            vec!["Octubre", "Noviembre", "Enero"],
        )
        .into(),
        Series::new(
            "nombre_establecimiento".into(),
            vec!["IPRESS A", "IPRESS B", "IPRESS A"],
        )
        .into(),
        Series::new(
            "profesional".into(),
            vec!["Cardiología", "Pediatría", "Cardiología"],
        )
        .into(),
        Series::new(
            "nombres_profesional".into(),
            vec!["Dr. Perez", "Dr. Soto", "Dr. Perez"],
        )
        .into(),
        Series::new("Total Atenciones".into(), vec![5.0, 7.0, 3.0]).into(),
    ])
    .unwrap()
}

fn schema_of(df: &DataFrame) -> DatasetSchema {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    DatasetSchema::detect(&names)
}

#[test]
fn all_sentinels_keep_every_record() {
    let df = frame();
    let filtered = apply_filters(&df, &schema_of(&df), &FilterSet::default()).unwrap();
    assert_eq!(filtered.height(), 3);
}

#[test]
fn predicates_compose_as_logical_and() {
    let df = frame();
    let filters = FilterSet {
        year: FilterValue::from_selection("2024"),
        establishment: FilterValue::from_selection("IPRESS A"),
        ..FilterSet::default()
    };
    let filtered = apply_filters(&df, &schema_of(&df), &filters).unwrap();
    assert_eq!(filtered.height(), 1);
    let names = filtered.column("nombres_profesional").unwrap();
    assert_eq!(names.str().unwrap().get(0), Some("Dr. Perez"));
}

#[test]
fn month_name_filter_uses_the_derived_column() {
    let df = frame();
    let filters = FilterSet {
        month_name: FilterValue::from_selection("Noviembre"),
        ..FilterSet::default()
    };
    let filtered = apply_filters(&df, &schema_of(&df), &filters).unwrap();
    assert_eq!(filtered.height(), 1);
}

#[test]
fn non_numeric_year_filter_is_a_no_op() {
    let df = frame();
    let filters = FilterSet {
        year: FilterValue::from_selection("no-es-un-numero"),
        ..FilterSet::default()
    };
    let filtered = apply_filters(&df, &schema_of(&df), &filters).unwrap();
    assert_eq!(filtered.height(), 3);
}

#[test]
fn zero_survivors_signal_empty_filter_result() {
    let df = frame();
    let filters = FilterSet {
        professional: FilterValue::from_selection("Dr. Nadie"),
        ..FilterSet::default()
    };
    let error = apply_filters(&df, &schema_of(&df), &filters).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ReportError>(),
        Some(ReportError::EmptyFilterResult)
    ));
}

#[test]
fn filter_on_absent_column_is_skipped() {
    let df = DataFrame::new(vec![
        Series::new("nombres_profesional".into(), vec!["Dr. Perez"]).into(),
        Series::new("Total Atenciones".into(), vec![5.0]).into(),
    ])
    .unwrap();
    let filters = FilterSet {
        year: FilterValue::from_selection("2024"),
        establishment: FilterValue::from_selection("IPRESS A"),
        ..FilterSet::default()
    };
    // No year or establishment columns: both predicates skip.
    let filtered = apply_filters(&df, &schema_of(&df), &filters).unwrap();
    assert_eq!(filtered.height(), 1);
}
