use eclipse_core::EclipseRecord;

use crate::error::IngestError;

/// Reject a record with any non-finite numeric field. This is the
/// trust boundary: everything downstream (projector, solver, tracer)
/// assumes finite input and will silently produce NaN propagation
/// otherwise.
pub fn validate_finite(record: &EclipseRecord) -> Result<(), IngestError> {
    let scalar_fields: &[(&str, f64)] = &[
        ("t0_tt_hours", record.t0_tt_hours),
        ("delta_t_seconds", record.delta_t_seconds),
        ("tan_f1", record.tan_f1),
        ("tan_f2", record.tan_f2),
    ];
    for (name, value) in scalar_fields {
        if !value.is_finite() {
            return Err(non_finite(record, name));
        }
    }

    let series_fields: &[(&str, &[f64])] = &[
        ("x", &record.x),
        ("y", &record.y),
        ("d", &record.d),
        ("mu", &record.mu),
        ("l1", &record.l1),
        ("l2", &record.l2),
    ];
    for (name, series) in series_fields {
        if series.iter().any(|v| !v.is_finite()) {
            return Err(non_finite(record, name));
        }
    }

    if let Some(lat) = record.greatest_eclipse_lat_deg {
        if !lat.is_finite() {
            return Err(non_finite(record, "greatest_eclipse_lat_deg"));
        }
    }
    if let Some(lon) = record.greatest_eclipse_lon_deg {
        if !lon.is_finite() {
            return Err(non_finite(record, "greatest_eclipse_lon_deg"));
        }
    }

    Ok(())
}

fn non_finite(record: &EclipseRecord, field: &'static str) -> IngestError {
    IngestError::NonFiniteField {
        record_id: record.id.clone(),
        field,
    }
}
