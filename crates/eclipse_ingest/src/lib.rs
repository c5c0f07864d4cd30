//! JSON ingestion of eclipse records at the system boundary.
//!
//! [`eclipse_core::EclipseRecord`] is the trusted internal type; this
//! crate is the only place malformed or partially-specified external
//! data is allowed to exist, and it rejects anything non-finite before
//! handing a record to the solver or tracer.

pub mod error;
pub mod record_dto;
pub mod validate;

use eclipse_core::EclipseRecord;

pub use error::IngestError;
pub use record_dto::{EclipseKindDto, EclipseRecordDto};

/// Parse a single eclipse record from a JSON object.
pub fn parse_record(json: &str) -> Result<EclipseRecord, IngestError> {
    let dto: EclipseRecordDto = serde_json::from_str(json)?;
    let record: EclipseRecord = dto.into();
    validate::validate_finite(&record)?;
    Ok(record)
}

/// Parse a JSON array of eclipse records. The whole batch is rejected
/// if any single record fails to parse or validate.
pub fn parse_records(json: &str) -> Result<Vec<EclipseRecord>, IngestError> {
    let dtos: Vec<EclipseRecordDto> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(dtos.len());
    for dto in dtos {
        let record: EclipseRecord = dto.into();
        validate::validate_finite(&record)?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RECORD: &str = r#"{
        "id": "2027-08-02",
        "date_ymd": "2027-08-02",
        "kind": "total",
        "t0_tt_hours": 9.0,
        "delta_t_seconds": 71.0,
        "tan_f1": 0.0047,
        "tan_f2": 0.0046,
        "x": [-0.2, 0.515, -0.0003, -0.000007],
        "y": [0.35, -0.065, -0.00012],
        "d": [17.8, 0.002],
        "mu": [0.5, 15.0423],
        "l1": [0.545, -0.00002],
        "l2": [-0.004, -0.00002]
    }"#;

    #[test]
    fn parses_a_valid_record() {
        let record = parse_record(VALID_RECORD).unwrap();
        assert_eq!(record.id, "2027-08-02");
        assert_eq!(record.x.len(), 4);
        assert!(record.greatest_eclipse_lat_deg.is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_record("{not json").unwrap_err();
        assert!(matches!(err, IngestError::Parse(_)));
    }

    #[test]
    fn rejects_non_finite_field_via_json_string() {
        // serde_json rejects NaN/Infinity literals at the syntax
        // level, so the boundary test is the finiteness check itself
        // (see `validate::tests`) rather than round-tripping through JSON.
        let missing_field = r#"{"id": "x", "date_ymd": "2024-01-01", "kind": "partial"}"#;
        assert!(parse_record(missing_field).is_err());
    }

    #[test]
    fn parses_an_array_of_records() {
        let array = format!("[{VALID_RECORD}]");
        let records = parse_records(&array).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_array_parses_to_empty_vec() {
        let records = parse_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unknown_kind_string_is_rejected() {
        let bad_kind = VALID_RECORD.replace("\"total\"", "\"eclipsey\"");
        assert!(parse_record(&bad_kind).is_err());
    }
}
