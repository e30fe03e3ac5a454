// Worked examples from "Regression Analysis" (Frost), checked against the printed answers.

use anyhow::Result;
use approx::assert_abs_diff_eq;
use statistics_revision::data::{Table, book_path};
use statistics_revision::regression::vif::variance_inflation_factors;
use statistics_revision::regression::{DesignMatrix, ols, pearson_correlation};

fn load(file: &str) -> Result<Table> {
    Table::from_path(book_path("regression_analysis_frost", file))
}

#[test]
fn correlation_p16() -> Result<()> {
    let df = load("HeightWeight.csv")?;
    let corr = pearson_correlation(df.column("Height M")?, df.column("Weight kg")?)?;
    assert_abs_diff_eq!(corr, 0.705, epsilon = 1e-3);
    Ok(())
}

#[test]
fn regression_model_values_p52() -> Result<()> {
    let df = load("HeightWeight.csv")?;
    let x = DesignMatrix::new()
        .with_constant()
        .with_column("Height M", df.column("Height M")?)?;
    let model = ols(&x, df.column("Weight kg")?)?;

    let intercept = model.coefficient("const").unwrap();
    assert_abs_diff_eq!(intercept.estimate, -114.326, epsilon = 1e-3);
    assert_abs_diff_eq!(intercept.std_err, 17.4425, epsilon = 1e-4);
    assert_abs_diff_eq!(intercept.t_value, -6.554444, epsilon = 1e-5);
    assert_abs_diff_eq!(intercept.p_value, 0.0, epsilon = 1e-3);

    let slope = model.coefficient("Height M").unwrap();
    assert_abs_diff_eq!(slope.estimate, 106.505, epsilon = 1e-3);
    assert_abs_diff_eq!(slope.std_err, 11.5500, epsilon = 1e-4);
    assert_abs_diff_eq!(slope.t_value, 9.221177, epsilon = 1e-5);
    assert_abs_diff_eq!(slope.p_value, 0.0, epsilon = 1e-3);

    let ci = model.conf_int(0.05)?;
    assert_eq!(ci[0].0, "const");
    assert_eq!(model.df_resid, 86.0);
    assert_abs_diff_eq!(ci[0].1.lower, -149.0, epsilon = 1e-1);
    assert_abs_diff_eq!(ci[0].1.upper, -79.7, epsilon = 1e-1);
    assert_abs_diff_eq!(ci[1].1.lower, 83.5, epsilon = 1e-1);
    assert_abs_diff_eq!(ci[1].1.upper, 129.5, epsilon = 1e-1);

    // a single regressor explains the squared correlation
    let corr = pearson_correlation(df.column("Height M")?, df.column("Weight kg")?)?;
    assert_abs_diff_eq!(model.r_squared, corr * corr, epsilon = 1e-9);
    Ok(())
}

#[test]
fn regression_model_curvature_p86() -> Result<()> {
    let df = load("Hardness.csv")?;
    let x = DesignMatrix::new()
        .with_constant()
        .with_column("Temp", df.column("Temp")?)?
        .with_column("Pressure", df.column("Pressure")?)?
        .with_derived("Pressure*Pressure", "Pressure", |p| p * p)?;
    let params = ols(&x, df.column("Hardness")?)?;

    assert_abs_diff_eq!(params.param("const").unwrap(), -38.8, epsilon = 1e-1);
    assert_abs_diff_eq!(params.param("Temp").unwrap(), 0.759, epsilon = 1e-3);
    assert_abs_diff_eq!(params.param("Pressure").unwrap(), -1.6, epsilon = 1e-2);
    assert_abs_diff_eq!(params.param("Pressure*Pressure").unwrap(), 0.1657, epsilon = 1e-4);
    assert_abs_diff_eq!(params.r_squared, 0.98858, epsilon = 1e-5);
    Ok(())
}

#[test]
fn squared_term_inflates_variance_p86() -> Result<()> {
    let df = load("Hardness.csv")?;
    let x = DesignMatrix::new()
        .with_constant()
        .with_column("Temp", df.column("Temp")?)?
        .with_column("Pressure", df.column("Pressure")?)?
        .with_derived("Pressure*Pressure", "Pressure", |p| p * p)?;

    let vifs = variance_inflation_factors(&x)?;
    let names: Vec<&str> = vifs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["Temp", "Pressure", "Pressure*Pressure"]);
    assert_abs_diff_eq!(vifs[0].1, 1.0098, epsilon = 1e-4);
    assert_abs_diff_eq!(vifs[1].1, 43.565, epsilon = 1e-3);
    assert_abs_diff_eq!(vifs[2].1, 43.628, epsilon = 1e-3);
    Ok(())
}

#[test]
fn regression_model_curvature_prediction_p96() -> Result<()> {
    let df = load("CurveFittingExample.csv")?;

    fn build_x(input: &[f64]) -> Result<DesignMatrix> {
        Ok(DesignMatrix::new()
            .with_constant()
            .with_column("Input", input)?
            .with_derived("Input^2", "Input", |v| v * v)?)
    }

    let input = df.column("Input")?;
    let model = ols(&build_x(input)?, df.column("Output")?)?;
    assert_abs_diff_eq!(model.param("const").unwrap(), 4.9162, epsilon = 1e-4);
    assert_abs_diff_eq!(model.param("Input").unwrap(), 3.1027, epsilon = 1e-4);
    assert_abs_diff_eq!(model.param("Input^2").unwrap(), -0.20227, epsilon = 1e-5);

    let (lo, hi) = input
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let grid: Vec<f64> = (0..50).map(|i| lo + (hi - lo) * f64::from(i) / 49.0).collect();
    let predicted = model.predict(&build_x(&grid)?)?;
    assert_eq!(predicted.len(), 50);

    let b = &model.params;
    for (x, y) in grid.iter().zip(predicted.iter()) {
        assert_abs_diff_eq!(*y, b[0] + b[1] * x + b[2] * x * x, epsilon = 1e-9);
    }
    Ok(())
}
