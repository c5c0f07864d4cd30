//! The contact solver: locates C1-C4, the time of maximum obscuration,
//! visibility, local classification, magnitude, and central duration.

use std::cell::RefCell;
use std::collections::HashMap;

use eclipse_math::{bisect, bracket_roots};
use eclipse_time::{format_iso8601_utc, TimeError, TtInstant};

use crate::eval::{eval_at_t, f_pen, f_umb, EvalAtT};
use crate::record::{EclipseRecord, Observer};

/// Local eclipse classification at the observer's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalKind {
    None,
    Partial,
    Total,
    Annular,
}

/// Tuned magic numbers from the spec, surfaced as named configuration
/// rather than inlined literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Half-width of the search window around t0, hours. Default 3.0.
    pub window_hours: f64,
    /// Coarse bracketing step, hours. Default 1/60 (60 seconds).
    pub coarse_step_hours: f64,
    /// Fine scan step used for max-obscuration selection, hours.
    /// Default 1/600 (6 seconds).
    pub fine_step_hours: f64,
    /// Absolute bisection tolerance, hours. Default 1e-7 (~0.36 ms).
    pub bisection_tol_hours: f64,
    /// Maximum bisection iterations per bracket.
    pub max_iterations: u32,
    /// Whether to populate [`Circumstances::debug`].
    pub include_debug: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            window_hours: 3.0,
            coarse_step_hours: 1.0 / 60.0,
            fine_step_hours: 1.0 / 600.0,
            bisection_tol_hours: 1e-7,
            max_iterations: 100,
            include_debug: false,
        }
    }
}

/// Diagnostic payload: root lists, bracket counts, and the selected
/// maximum-obscuration time, in hours from t0.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfo {
    pub penumbral_roots_hours: Vec<f64>,
    pub umbral_roots_hours: Vec<f64>,
    pub penumbral_bracket_count: usize,
    pub umbral_bracket_count: usize,
    pub max_t_hours: f64,
}

/// Solver output for one (record, observer) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Circumstances {
    pub eclipse_id: String,
    pub visible: bool,
    pub kind_at_location: LocalKind,
    pub c1_utc: Option<String>,
    pub c2_utc: Option<String>,
    pub max_utc: Option<String>,
    pub c3_utc: Option<String>,
    pub c4_utc: Option<String>,
    pub magnitude: Option<f64>,
    pub duration_seconds: Option<f64>,
    pub debug: Option<DebugInfo>,
}

/// Per-call cache of `t -> EvalAtT`, keyed on the bit-exact `t` used by
/// the bracketer/bisector, so repeated queries at the same `t` reuse the
/// same float and preserve floating-point evaluation order.
struct MetricsCache<'a> {
    record: &'a EclipseRecord,
    observer: &'a Observer,
    cache: RefCell<HashMap<u64, EvalAtT>>,
}

impl<'a> MetricsCache<'a> {
    fn new(record: &'a EclipseRecord, observer: &'a Observer) -> Self {
        Self {
            record,
            observer,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn eval(&self, t_hours: f64) -> EvalAtT {
        let key = t_hours.to_bits();
        if let Some(v) = self.cache.borrow().get(&key) {
            return *v;
        }
        let v = eval_at_t(self.record, self.observer, t_hours);
        self.cache.borrow_mut().insert(key, v);
        v
    }

    fn f_pen(&self, t_hours: f64) -> f64 {
        f_pen(&self.eval(t_hours))
    }

    fn f_umb(&self, t_hours: f64) -> f64 {
        f_umb(&self.eval(t_hours))
    }
}

/// Root-find every zero of `metric` on `[lo, hi]` using the given
/// coarse step / tolerance / iteration cap, dropping null or non-finite
/// results and returning the ascending-sorted survivors.
fn find_roots(
    metric: impl Fn(f64) -> f64,
    lo: f64,
    hi: f64,
    coarse_step: f64,
    tol: f64,
    max_iterations: u32,
) -> (Vec<f64>, usize) {
    let brackets = bracket_roots(&metric, lo, hi, coarse_step);
    let bracket_count = brackets.len();
    let mut roots: Vec<f64> = brackets
        .into_iter()
        .filter_map(|br| bisect(&metric, br.a, br.b, tol, Some(max_iterations)))
        .filter(|r| r.t_hours.is_finite())
        .map(|r| r.t_hours)
        .collect();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    (roots, bracket_count)
}

/// Scan `[lo, hi]` in steps of `step`, returning `(t, value)` of the
/// sample with the smallest finite value. Falls back to `(lo, +inf)` if
/// every sample is non-finite.
fn scan_min(f: impl Fn(f64) -> f64, lo: f64, hi: f64, step: f64) -> (f64, f64) {
    assert!(step > 0.0);
    let slack = step * 1e-9;
    let mut best_t = lo;
    let mut best_v = f64::INFINITY;

    let mut i: i64 = 0;
    loop {
        let t = lo + (i as f64) * step;
        let v = f(t);
        if v.is_finite() && v < best_v {
            best_v = v;
            best_t = t;
        }
        if t >= hi - slack {
            break;
        }
        i += 1;
    }

    (best_t, best_v)
}

/// Compute eclipse circumstances for `observer` using the default
/// [`SolverConfig`].
pub fn compute_circumstances(
    record: &EclipseRecord,
    observer: &Observer,
) -> Result<Circumstances, TimeError> {
    compute_circumstances_with_config(record, observer, &SolverConfig::default())
}

/// Compute eclipse circumstances for `observer` with an explicit
/// [`SolverConfig`].
pub fn compute_circumstances_with_config(
    record: &EclipseRecord,
    observer: &Observer,
    config: &SolverConfig,
) -> Result<Circumstances, TimeError> {
    let t0 = TtInstant::from_record(&record.date_ymd, record.t0_tt_hours)?;

    let lo = -config.window_hours;
    let hi = config.window_hours;
    let cache = MetricsCache::new(record, observer);

    let (pen_roots, pen_brackets) = find_roots(
        |t| cache.f_pen(t),
        lo,
        hi,
        config.coarse_step_hours,
        config.bisection_tol_hours,
        config.max_iterations,
    );
    let (umb_roots, umb_brackets) = find_roots(
        |t| cache.f_umb(t),
        lo,
        hi,
        config.coarse_step_hours,
        config.bisection_tol_hours,
        config.max_iterations,
    );

    let c1_t = pen_roots.first().copied();
    let c4_t = if pen_roots.len() >= 2 {
        pen_roots.last().copied()
    } else {
        None
    };

    let (c2_t, c3_t) = if umb_roots.len() >= 2 {
        (umb_roots.first().copied(), umb_roots.last().copied())
    } else {
        (None, None)
    };

    let visible = c1_t.is_some() && c4_t.is_some();

    let (max_t, kind) = if visible {
        match (c2_t, c3_t) {
            (Some(c2), Some(c3)) if c3 > c2 => {
                let (t, _) = scan_min(|t| cache.f_umb(t), c2, c3, config.fine_step_hours);
                let eval = cache.eval(t);
                let kind = if eval.l2obs < 0.0 {
                    LocalKind::Total
                } else {
                    LocalKind::Annular
                };
                (t, kind)
            }
            _ => {
                let (t, _) = scan_min(
                    |t| cache.f_pen(t),
                    c1_t.unwrap(),
                    c4_t.unwrap(),
                    config.fine_step_hours,
                );
                (t, LocalKind::Partial)
            }
        }
    } else {
        let (t, _) = scan_min(|t| cache.eval(t).delta, lo, hi, config.fine_step_hours);
        (t, LocalKind::None)
    };

    let to_utc = |t_hours: Option<f64>| -> Option<String> {
        let t_hours = t_hours?;
        if !t_hours.is_finite() {
            return None;
        }
        let instant = t0.offset_hours(t_hours);
        let utc_millis = instant.to_utc_millis(record.delta_t_seconds);
        Some(format_iso8601_utc(utc_millis))
    };

    let c1_utc = to_utc(c1_t);
    let c2_utc = to_utc(c2_t);
    let c3_utc = to_utc(c3_t);
    let c4_utc = to_utc(c4_t);
    let max_utc = to_utc(Some(max_t));

    let duration_seconds = match (c2_t, c3_t) {
        (Some(c2), Some(c3)) if c3 > c2 => Some((c3 - c2) * 3600.0),
        _ => None,
    };

    let max_eval = cache.eval(max_t);
    let magnitude = if !visible
        || !(max_eval.l1obs > 0.0)
        || !max_eval.l1obs.is_finite()
        || !max_eval.delta.is_finite()
    {
        None
    } else {
        match kind {
            LocalKind::Total | LocalKind::Annular => Some(1.0),
            LocalKind::Partial => {
                Some(((max_eval.l1obs - max_eval.delta) / max_eval.l1obs).clamp(0.0, 1.0))
            }
            LocalKind::None => None,
        }
    };

    let debug = if config.include_debug {
        Some(DebugInfo {
            penumbral_roots_hours: pen_roots,
            umbral_roots_hours: umb_roots,
            penumbral_bracket_count: pen_brackets,
            umbral_bracket_count: umb_brackets,
            max_t_hours: max_t,
        })
    } else {
        None
    };

    Ok(Circumstances {
        eclipse_id: record.id.clone(),
        visible,
        kind_at_location: kind,
        c1_utc,
        c2_utc,
        max_utc,
        c3_utc,
        c4_utc,
        magnitude,
        duration_seconds,
        debug,
    })
}
