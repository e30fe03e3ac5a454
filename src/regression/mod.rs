//! Correlation and ordinary least squares.
//!
//! The fit solves the normal equations `β = (XᵀX)⁻¹Xᵀy` with `nalgebra` and reports the usual
//! coefficient table: standard errors from `σ²(XᵀX)⁻¹`, t-values, two-sided p-values and
//! confidence intervals on `n - p` residual degrees of freedom.

use crate::error::{DomainError, Result};
use crate::testing::confidence::ConfidenceInterval;
use crate::testing::inference::student_t_p_value;
use crate::testing::utils::{require_len, to_f64_sample};
use crate::testing::Alternative;
use nalgebra::DVector;
use single_utilities::traits::FloatOps;
use statrs::statistics::Statistics;
use tracing::debug;

mod design;
pub mod vif;

pub use design::{CONSTANT, DesignMatrix};

/// Pearson product-moment correlation of two equally long samples.
///
/// A constant sample has no defined correlation and yields `NaN`.
pub fn pearson_correlation<T>(x: &[T], y: &[T]) -> Result<f64>
where
    T: FloatOps,
{
    if x.len() != y.len() {
        return Err(DomainError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    require_len("correlation", x.len(), 2)?;

    let x = to_f64_sample(x)?;
    let y = to_f64_sample(y)?;
    let (mean_x, mean_y) = (x.iter().mean(), y.iter().mean());

    let (sxy, sxx, syy) = x.iter().zip(y.iter()).fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (a, b)| {
        let (da, db) = (a - mean_x, b - mean_y);
        (sxy + da * db, sxx + da * da, syy + db * db)
    });

    Ok(sxy / (sxx * syy).sqrt())
}

/// One row of the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    pub estimate: f64,
    pub std_err: f64,
    pub t_value: f64,
    pub p_value: f64,
}

#[derive(Debug, Clone)]
pub struct OlsFit {
    pub names: Vec<String>,
    pub params: Vec<f64>,
    pub bse: Vec<f64>,
    pub tvalues: Vec<f64>,
    pub pvalues: Vec<f64>,
    pub nobs: usize,
    /// Residual degrees of freedom, `n - p`
    pub df_resid: f64,
    /// Residual variance `RSS / (n - p)`
    pub scale: f64,
    /// Centred when the design has an intercept, uncentred otherwise
    pub r_squared: f64,
}

impl OlsFit {
    fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn coefficient(&self, name: &str) -> Option<Coefficient> {
        self.index(name).map(|i| Coefficient {
            estimate: self.params[i],
            std_err: self.bse[i],
            t_value: self.tvalues[i],
            p_value: self.pvalues[i],
        })
    }

    pub fn param(&self, name: &str) -> Option<f64> {
        self.index(name).map(|i| self.params[i])
    }

    /// `estimate ± t(1 - alpha/2, n - p) * std_err` for every coefficient, in column order.
    pub fn conf_int(&self, alpha: f64) -> Result<Vec<(String, ConfidenceInterval)>> {
        self.names
            .iter()
            .zip(self.params.iter().zip(self.bse.iter()))
            .map(|(name, (&estimate, &se))| {
                let ci = ConfidenceInterval::from_standard_error(estimate, se, self.df_resid, alpha)?;
                Ok((name.clone(), ci))
            })
            .collect()
    }

    /// Fitted values for a design with the same columns as the one that was fitted.
    pub fn predict(&self, design: &DesignMatrix) -> Result<Vec<f64>> {
        if design.names() != self.names {
            return Err(DomainError::InvalidDesign(format!(
                "expected columns {:?}, got {:?}",
                self.names,
                design.names()
            )));
        }

        let beta = DVector::from_column_slice(&self.params);
        Ok((design.to_matrix() * beta).iter().copied().collect())
    }
}

/// Fit `y = Xβ + ε` by ordinary least squares.
///
/// # Errors
///
/// [`DomainError`] when `y` and the design differ in length, there are no more observations than
/// columns, or `XᵀX` cannot be inverted.
pub fn ols(design: &DesignMatrix, y: &[f64]) -> Result<OlsFit> {
    let n = design.nrows();
    let p = design.ncols();
    if n != y.len() {
        return Err(DomainError::LengthMismatch {
            left: n,
            right: y.len(),
        });
    }
    if p == 0 {
        return Err(DomainError::InvalidDesign("no columns".to_string()));
    }
    if n <= p {
        return Err(DomainError::NonPositiveDegreesOfFreedom(n as f64 - p as f64));
    }

    let x = design.to_matrix();
    let y = DVector::from_column_slice(y);
    let xtx_inv = (x.transpose() * &x)
        .try_inverse()
        .ok_or(DomainError::Singular)?;
    let beta = &xtx_inv * x.transpose() * &y;

    let residuals = &y - &x * &beta;
    let rss = residuals.norm_squared();
    let df_resid = (n - p) as f64;
    let scale = rss / df_resid;

    let tss = if design.has_constant() {
        let mean = y.sum() / n as f64;
        y.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>()
    } else {
        y.norm_squared()
    };

    let params: Vec<f64> = beta.iter().copied().collect();
    let bse: Vec<f64> = (0..p).map(|i| (scale * xtx_inv[(i, i)]).sqrt()).collect();
    let tvalues: Vec<f64> = params.iter().zip(bse.iter()).map(|(b, se)| b / se).collect();
    let pvalues = tvalues
        .iter()
        .map(|&t| student_t_p_value(t, df_resid, Alternative::TwoSided))
        .collect::<Result<Vec<_>>>()?;
    debug!(nobs = n, df_resid, rss, "ols fit");

    Ok(OlsFit {
        names: design.names(),
        params,
        bse,
        tvalues,
        pvalues,
        nobs: n,
        df_resid,
        scale,
        r_squared: 1.0 - rss / tss,
    })
}
