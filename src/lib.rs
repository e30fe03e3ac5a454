//! # statistics-revision
//!
//! Worked examples from two statistics textbooks ("Hypothesis Testing" and "Regression Analysis"),
//! reproduced in Rust and checked against the printed answers.
//!
//! Distribution functions come from `statrs` and matrix algebra from `nalgebra`; this crate adds
//! the procedures the examples need on top of them. The centrepiece is the Student-t confidence
//! interval for a difference of means, for both independent and paired samples.
//!
//! ## Core Features
//!
//! - **Confidence intervals**: pooled two-sample, paired and one-sample t-intervals
//! - **Hypothesis tests**: one-sample, Student/Welch two-sample and paired t-tests, one-way ANOVA,
//!   two-proportion z-test
//! - **Regression**: Pearson correlation, ordinary least squares with a full coefficient table,
//!   variance inflation factors
//! - **Datasets**: the example CSV tables, loaded into labelled numeric columns
//!
//! ## Quick Start
//!
//! Call the free functions in [`testing::confidence`] and [`testing::inference`], or bring
//! [`testing::inference::SampleStatTests`] into scope to call them on a slice directly. Every
//! numeric routine reports invalid preconditions as a [`DomainError`].
//!
//! ## Module Organization
//!
//! - **[`testing`]**: Confidence intervals and hypothesis tests
//! - **[`descriptive`]**: Mean, Bessel-corrected variance, standard error
//! - **[`regression`]**: Correlation, OLS, variance inflation
//! - **[`data`]**: CSV tables bundled with the examples

pub mod data;
pub mod descriptive;
pub mod error;
pub mod regression;
pub mod testing;

pub use error::DomainError;
