//! Memoized rule lookup.
//!
//! Rules are deterministic in `(weight, n, alpha, beta)`, so each one is
//! computed once and shared as an [`Arc`]. Parameters a family does not use
//! are ignored when building the key, so `gaussq` on Legendre with any
//! `alpha` hits the same entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use super::{qrule_with, LegendreMethod, QuadratureRule, WeightFunction};
use crate::error::QuadError;

/// Producer of rules for a [`QuadratureTable`].
pub trait RuleSource: Send + Sync {
    fn rule(&self, weight: WeightFunction, n: usize, alpha: f64, beta: f64) -> Result<QuadratureRule, QuadError>;
}

/// The built-in Newton and closed-form rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonRules {
    pub legendre: LegendreMethod,
}

impl RuleSource for NewtonRules {
    fn rule(&self, weight: WeightFunction, n: usize, alpha: f64, beta: f64) -> Result<QuadratureRule, QuadError> {
        qrule_with(n, weight, alpha, beta, self.legendre)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RuleKey {
    weight: WeightFunction,
    n: usize,
    alpha: u64,
    beta: u64,
}

impl RuleKey {
    fn new(weight: WeightFunction, n: usize, alpha: f64, beta: f64) -> Self {
        let bits = |v: f64, used: bool| if used { v.to_bits() } else { 0 };
        Self {
            weight,
            n,
            alpha: bits(alpha, weight.uses_alpha()),
            beta: bits(beta, weight.uses_beta()),
        }
    }
}

/// Thread-safe cache of quadrature rules.
///
/// # Example
///
/// ```
/// use quadris::rules::{QuadratureTable, LegendreMethod, WeightFunction};
///
/// let table = QuadratureTable::new(LegendreMethod::HighOrder);
/// let a = table.get(WeightFunction::Hermite, 8, 0.0, 0.0).unwrap();
/// let b = table.get(WeightFunction::Hermite, 8, 0.0, 0.0).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// assert_eq!(table.len(), 1);
/// ```
pub struct QuadratureTable {
    source: Box<dyn RuleSource>,
    cache: Mutex<HashMap<RuleKey, Arc<QuadratureRule>>>,
}

impl QuadratureTable {
    pub fn new(legendre: LegendreMethod) -> Self {
        Self::with_source(Box::new(NewtonRules { legendre }))
    }

    /// Cache rules from a custom producer.
    pub fn with_source(source: Box<dyn RuleSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide table using the default Legendre method.
    pub fn global() -> &'static QuadratureTable {
        static GLOBAL: OnceLock<QuadratureTable> = OnceLock::new();
        GLOBAL.get_or_init(QuadratureTable::default)
    }

    /// Fetch a rule, computing and storing it on first request.
    ///
    /// The lock is not held while a rule is computed; two threads racing on
    /// the same key may both compute it, and the first stored copy wins.
    pub fn get(
        &self,
        weight: WeightFunction,
        n: usize,
        alpha: f64,
        beta: f64,
    ) -> Result<Arc<QuadratureRule>, QuadError> {
        let key = RuleKey::new(weight, n, alpha, beta);
        if let Some(rule) = self.lock().get(&key) {
            return Ok(Arc::clone(rule));
        }

        log::debug!(
            "computing {:?} rule: n = {}, alpha = {}, beta = {}",
            weight,
            n,
            alpha,
            beta
        );
        let rule = Arc::new(self.source.rule(weight, n, alpha, beta)?);
        Ok(Arc::clone(self.lock().entry(key).or_insert(rule)))
    }

    /// Number of cached rules.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached rule.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<RuleKey, Arc<QuadratureRule>>> {
        // Entries are only ever inserted whole, so a poisoned map is still valid.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for QuadratureTable {
    fn default() -> Self {
        Self::new(LegendreMethod::default())
    }
}

impl core::fmt::Debug for QuadratureTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadratureTable")
            .field("len", &self.len())
            .finish()
    }
}
