// Worked examples from "Hypothesis Testing" (Frost), checked against the printed answers.

use anyhow::Result;
use approx::assert_abs_diff_eq;
use statistics_revision::data::{Table, book_path};
use statistics_revision::descriptive::{self, summarize};
use statistics_revision::testing::confidence::{
    DEFAULT_ALPHA, independent_means_ci, one_sample_mean_ci, paired_means_ci,
};
use statistics_revision::testing::inference::SampleStatTests;
use statistics_revision::testing::inference::parametric::{paired_t_test, t_test};
use statistics_revision::testing::{Alternative, TTestType};

fn load(file: &str) -> Result<Table> {
    Table::from_path(book_path("hypothesis_testing_frost", file))
}

#[test]
fn descriptive_statistics_fuel_cost_p28() -> Result<()> {
    let df = load("FuelsCosts.csv")?;
    let x = df.column("Fuel Cost")?;
    assert_eq!(x.len(), 25);

    let summary = summarize(x)?;
    assert_abs_diff_eq!(summary.mean, 330.6, epsilon = 1e-1);
    assert_abs_diff_eq!(summary.sem, 30.8, epsilon = 1e-1);
    assert_abs_diff_eq!(summary.std_dev, 154.2, epsilon = 1e-1);
    assert_abs_diff_eq!(descriptive::sem(x)?, summary.std_dev / 5.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn one_sample_t_test_p47() -> Result<()> {
    let df = load("AssessmentScores.csv")?;
    let x = df.column("Score")?;

    let res = x.one_sample_t_test(60.0, Alternative::TwoSided)?;
    assert_abs_diff_eq!(res.statistic, 1.42, epsilon = 1e-2);
    assert_abs_diff_eq!(res.p_value, 0.178, epsilon = 1e-3);

    let summary = summarize(x)?;
    assert_abs_diff_eq!(summary.mean, 64.16, epsilon = 1e-2);
    assert_abs_diff_eq!(summary.sem, 2.93, epsilon = 1e-2);
    assert_abs_diff_eq!(res.standard_error.unwrap(), summary.sem, epsilon = 1e-12);

    let ci = one_sample_mean_ci(x, DEFAULT_ALPHA)?;
    assert_abs_diff_eq!(ci.lower, 57.87, epsilon = 1e-2);
    assert_abs_diff_eq!(ci.upper, 70.45, epsilon = 1e-2);
    assert_eq!(res.confidence_interval, Some(ci.bounds()));
    Ok(())
}

#[test]
fn one_sided_t_tests_p47() -> Result<()> {
    let df = load("AssessmentScores.csv")?;
    let x = df.column("Score")?;

    let two_sided = x.one_sample_t_test(60.0, Alternative::TwoSided)?;
    let greater = x.one_sample_t_test(60.0, Alternative::Greater)?;
    let less = x.one_sample_t_test(60.0, Alternative::Less)?;
    assert_abs_diff_eq!(greater.p_value, 0.0889, epsilon = 1e-4);
    assert_abs_diff_eq!(less.p_value, 0.9111, epsilon = 1e-4);
    assert_abs_diff_eq!(greater.p_value, two_sided.p_value / 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(greater.p_value + less.p_value, 1.0, epsilon = 1e-12);
    assert_eq!(greater.statistic, two_sided.statistic);
    Ok(())
}

#[test]
fn two_sample_t_test_p51() -> Result<()> {
    let df = load("t-TestExamples.csv")?;
    let x = df.column("Method A")?;
    let y = df.column("Method B")?;

    let res = t_test(x, y, TTestType::Student, Alternative::TwoSided)?;
    assert_abs_diff_eq!(res.statistic, -4.08, epsilon = 1e-2);
    assert_abs_diff_eq!(res.p_value, 0.0, epsilon = 1e-3);
    assert_eq!(res.degrees_of_freedom, Some(28.0));

    let ci = independent_means_ci(x, y, DEFAULT_ALPHA)?;
    assert_abs_diff_eq!(ci.lower, -19.89, epsilon = 1e-2);
    assert_abs_diff_eq!(ci.upper, -6.59, epsilon = 1e-2);
    Ok(())
}

#[test]
fn paired_t_test_p55() -> Result<()> {
    let df = load("t-TestExamples.csv")?;
    let x = df.column("Pretest")?;
    let y = df.column("Posttest")?;

    let res = paired_t_test(x, y, Alternative::TwoSided)?;
    assert_abs_diff_eq!(res.statistic, -3.73, epsilon = 1e-2);
    assert_abs_diff_eq!(res.p_value, 0.002, epsilon = 1e-3);
    assert_eq!(res.degrees_of_freedom, Some(14.0));

    let ci = paired_means_ci(x, y, DEFAULT_ALPHA)?;
    assert_abs_diff_eq!(ci.lower, -16.96, epsilon = 1e-2);
    assert_abs_diff_eq!(ci.upper, -4.59, epsilon = 1e-2);
    Ok(())
}

#[test]
fn two_sample_t_test_and_ci_p66() -> Result<()> {
    let df = load("DifferenceMeans.csv")?;
    let x = df.column("Strength B")?;
    let y = df.column("Strength A")?;

    let res = x.t_test(y, TTestType::Student, Alternative::TwoSided)?;
    assert_abs_diff_eq!(res.statistic, 2.09, epsilon = 1e-2);
    assert_abs_diff_eq!(res.p_value, 0.044, epsilon = 1e-3);

    let ci = x.independent_means_ci(y, DEFAULT_ALPHA)?;
    assert_abs_diff_eq!(ci.lower, 0.06, epsilon = 1e-2);
    assert_abs_diff_eq!(ci.upper, 4.23, epsilon = 1e-2);
    assert!(!ci.contains(0.0));
    Ok(())
}
