//! Fixed Spanish month mapping.
//!
//! The calendar ordering of `MONTH_NAMES` is an invariant: month filter
//! enumeration and any month-based sort must follow it, never alphabetical
//! order ("Abril" before "Enero" would be wrong).

/// Spanish month names in calendar order, index 0 = Enero.
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Category assigned to rows whose month value maps to nothing.
pub const UNKNOWN_MONTH: &str = "Mes Desconocido";

/// Month name for a 1-based month number, or the unknown category.
pub fn month_name(month: i64) -> &'static str {
    if (1..=12).contains(&month) {
        MONTH_NAMES[(month - 1) as usize]
    } else {
        UNKNOWN_MONTH
    }
}

/// Calendar position of a month name, used to keep month enumerations
/// chronological. Unknown names sort last.
pub fn month_order(name: &str) -> usize {
    MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .unwrap_or(MONTH_NAMES.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_valid_months() {
        assert_eq!(month_name(1), "Enero");
        assert_eq!(month_name(9), "Septiembre");
        assert_eq!(month_name(12), "Diciembre");
    }

    #[test]
    fn unmapped_months_get_unknown_category() {
        assert_eq!(month_name(0), UNKNOWN_MONTH);
        assert_eq!(month_name(13), UNKNOWN_MONTH);
        assert_eq!(month_name(-3), UNKNOWN_MONTH);
    }

    #[test]
    fn ordering_is_calendar_not_alphabetical() {
        assert!(month_order("Enero") < month_order("Abril"));
        assert!(month_order("Noviembre") < month_order("Diciembre"));
        assert_eq!(month_order(UNKNOWN_MONTH), 12);
    }
}
