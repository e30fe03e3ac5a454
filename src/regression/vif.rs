use crate::error::{DomainError, Result};
use crate::regression::{ols, DesignMatrix};
use tracing::debug;

/// Variance inflation factor of every non-constant column.
///
/// Each regressor is fitted on all the others plus an intercept; its factor is `1 / (1 - R²)`.
/// Values well above 5 to 10 flag multicollinearity.
pub fn variance_inflation_factors(design: &DesignMatrix) -> Result<Vec<(String, f64)>> {
    let regressors: Vec<String> = design
        .names()
        .into_iter()
        .filter(|n| n != super::CONSTANT)
        .collect();
    if regressors.len() < 2 {
        return Err(DomainError::InvalidDesign(
            "variance inflation needs at least two regressors".to_string(),
        ));
    }

    regressors
        .into_iter()
        .map(|name| {
            let target = design
                .column(&name)
                .ok_or_else(|| DomainError::InvalidDesign(format!("no column named {name}")))?;
            let others = design.without(&name).with_constant();
            let r_squared = ols(&others, target)?.r_squared;
            let vif = 1.0 / (1.0 - r_squared);
            debug!(column = %name, vif, "variance inflation");
            Ok((name, vif))
        })
        .collect()
}
