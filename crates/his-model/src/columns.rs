//! Semantic column roles of the source table and their display names.
//!
//! All pipeline logic addresses columns by role through the detected
//! [`DatasetSchema`](crate::DatasetSchema), never by position, so optional
//! columns can be absent without shifting anything else.

/// Raw source column holding the record year.
pub const YEAR: &str = "anio";
/// Raw source column holding the numeric month (1-12).
pub const MONTH: &str = "mes";
/// Derived column holding the Spanish month name.
pub const MONTH_NAME: &str = "mes_nombre";
/// Raw source column holding the establishment (IPRESS) name.
pub const ESTABLISHMENT: &str = "nombre_establecimiento";
/// Raw source column holding the profession / specialty.
pub const PROFESSION: &str = "profesional";
/// Raw source column holding the professional's name.
pub const PROFESSIONAL: &str = "nombres_profesional";
/// Raw source column holding the served-patients total.
pub const SERVED_TOTAL: &str = "atendidos_servicios_total";

/// Raw names the attentions total appears under, in probe order.
/// The consolidated export uses "Total Atenciones"; the per-service
/// export carries the same figure as a second "total" block ("total.1").
pub const ATTENTION_TOTAL_CANDIDATES: &[&str] = &["Total Atenciones", "total.1"];

/// Display (presentation) names for the summary table.
pub mod display {
    pub const ESTABLISHMENT: &str = "Establecimiento";
    pub const PROFESSION: &str = "Profesión";
    pub const PROFESSIONAL: &str = "Profesional";
    pub const SERVED: &str = "Atendidos";
    pub const ATTENTIONS: &str = "Atenciones";
    /// Fallback metric when no attentions column exists: row-wise day sum.
    pub const DAY_SUM: &str = "Suma_Dias";
    /// Content-derived grand total over the day columns.
    pub const TOTAL: &str = "TOTAL";
}
