//! Wire schema for an eclipse record. Deserializes independently of
//! [`eclipse_core::EclipseRecord`] so the JSON contract can evolve
//! (renames, added optional fields) without touching the solver's
//! internal type.

use serde::{Deserialize, Serialize};

use eclipse_core::{EclipseKind, EclipseRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKindDto {
    Total,
    Annular,
    Partial,
    Hybrid,
}

impl From<EclipseKindDto> for EclipseKind {
    fn from(dto: EclipseKindDto) -> Self {
        match dto {
            EclipseKindDto::Total => EclipseKind::Total,
            EclipseKindDto::Annular => EclipseKind::Annular,
            EclipseKindDto::Partial => EclipseKind::Partial,
            EclipseKindDto::Hybrid => EclipseKind::Hybrid,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EclipseRecordDto {
    pub id: String,
    pub date_ymd: String,
    pub kind: EclipseKindDto,
    pub t0_tt_hours: f64,
    pub delta_t_seconds: f64,
    pub tan_f1: f64,
    pub tan_f2: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub d: Vec<f64>,
    pub mu: Vec<f64>,
    pub l1: Vec<f64>,
    pub l2: Vec<f64>,
    #[serde(default)]
    pub greatest_eclipse_lat_deg: Option<f64>,
    #[serde(default)]
    pub greatest_eclipse_lon_deg: Option<f64>,
    #[serde(default)]
    pub greatest_eclipse_utc: Option<String>,
}

impl From<EclipseRecordDto> for EclipseRecord {
    fn from(dto: EclipseRecordDto) -> Self {
        EclipseRecord {
            id: dto.id,
            date_ymd: dto.date_ymd,
            kind: dto.kind.into(),
            t0_tt_hours: dto.t0_tt_hours,
            delta_t_seconds: dto.delta_t_seconds,
            tan_f1: dto.tan_f1,
            tan_f2: dto.tan_f2,
            x: dto.x,
            y: dto.y,
            d: dto.d,
            mu: dto.mu,
            l1: dto.l1,
            l2: dto.l2,
            greatest_eclipse_lat_deg: dto.greatest_eclipse_lat_deg,
            greatest_eclipse_lon_deg: dto.greatest_eclipse_lon_deg,
            greatest_eclipse_utc: dto.greatest_eclipse_utc,
        }
    }
}
