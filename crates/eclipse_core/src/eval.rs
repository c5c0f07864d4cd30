//! Per-instant geometry: polynomial evaluation plus observer projection,
//! combined into the two scalar metric functions the solver roots.

use eclipse_geo::observer_to_fundamental;
use eclipse_math::horner_eval;

use crate::record::{EclipseRecord, Observer};

/// All derived quantities at a single instant `t_hours` from t0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalAtT {
    pub t_hours: f64,
    pub x: f64,
    pub y: f64,
    pub d: f64,
    pub mu: f64,
    pub l1: f64,
    pub l2: f64,
    pub xi: f64,
    pub eta: f64,
    pub zeta: f64,
    /// Shadow-axis distance on the fundamental plane.
    pub delta: f64,
    /// Penumbral radius projected to the observer's tangent plane.
    pub l1obs: f64,
    /// Umbral/antumbral radius projected to the observer's tangent plane.
    /// May be negative (total shadow) or positive (annular shadow).
    pub l2obs: f64,
}

/// Evaluate every Besselian polynomial and the observer projection at
/// `t_hours`, and derive `delta`, `l1obs`, `l2obs`.
///
/// Floating-point operations are evaluated in this exact order and must
/// not be reassociated: doing so changes last-bit results and breaks
/// millisecond-level snapshot agreement on the UTC contact strings.
pub fn eval_at_t(record: &EclipseRecord, observer: &Observer, t_hours: f64) -> EvalAtT {
    let x = horner_eval(&record.x, t_hours);
    let y = horner_eval(&record.y, t_hours);
    let d = horner_eval(&record.d, t_hours);
    let mu = horner_eval(&record.mu, t_hours);
    let l1 = horner_eval(&record.l1, t_hours);
    let l2 = horner_eval(&record.l2, t_hours);

    let proj = observer_to_fundamental(observer.lat_deg, observer.lon_deg, d, mu, observer.elev_m);

    let delta = (x - proj.xi).hypot(y - proj.eta);
    let l1obs = l1 - proj.zeta * record.tan_f1;
    let l2obs = l2 - proj.zeta * record.tan_f2;

    EvalAtT {
        t_hours,
        x,
        y,
        d,
        mu,
        l1,
        l2,
        xi: proj.xi,
        eta: proj.eta,
        zeta: proj.zeta,
        delta,
        l1obs,
        l2obs,
    }
}

/// Penumbral metric: zeros are C1/C4.
pub fn f_pen(eval: &EvalAtT) -> f64 {
    eval.delta - eval.l1obs
}

/// Umbral metric: zeros are C2/C3.
pub fn f_umb(eval: &EvalAtT) -> f64 {
    eval.delta - eval.l2obs.abs()
}
