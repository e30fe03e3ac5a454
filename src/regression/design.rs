use crate::error::{DomainError, Result};
use nalgebra::DMatrix;

pub const CONSTANT: &str = "const";

/// Named regressor columns of equal length, optionally preceded by an intercept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignMatrix {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    constant: bool,
}

impl DesignMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an intercept column named `const`.
    pub fn with_constant(mut self) -> Self {
        self.constant = true;
        self
    }

    pub fn with_column(mut self, name: &str, values: &[f64]) -> Result<Self> {
        if name == CONSTANT || self.names.iter().any(|n| n == name) {
            return Err(DomainError::InvalidDesign(format!("duplicate column '{name}'")));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return Err(DomainError::LengthMismatch {
                    left: first.len(),
                    right: values.len(),
                });
            }
        }

        self.names.push(name.to_string());
        self.columns.push(values.to_vec());
        Ok(self)
    }

    /// Add a column computed element-wise from an existing one, e.g. a squared term.
    pub fn with_derived<F>(self, name: &str, from: &str, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let derived: Vec<f64> = self
            .column(from)
            .ok_or_else(|| DomainError::InvalidDesign(format!("unknown column '{from}'")))?
            .iter()
            .map(|&v| f(v))
            .collect();
        self.with_column(name, &derived)
    }

    pub fn has_constant(&self) -> bool {
        self.constant
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Column names in matrix order, `const` first when present.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.ncols());
        if self.constant {
            names.push(CONSTANT.to_string());
        }
        names.extend(self.names.iter().cloned());
        names
    }

    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn ncols(&self) -> usize {
        self.columns.len() + usize::from(self.constant)
    }

    /// The same design without `name`, keeping the intercept.
    pub(crate) fn without(&self, name: &str) -> Self {
        let (names, columns) = self
            .names
            .iter()
            .zip(self.columns.iter())
            .filter(|(n, _)| n.as_str() != name)
            .map(|(n, c)| (n.clone(), c.clone()))
            .unzip();
        DesignMatrix {
            names,
            columns,
            constant: self.constant,
        }
    }

    pub(crate) fn to_matrix(&self) -> DMatrix<f64> {
        let offset = usize::from(self.constant);
        DMatrix::from_fn(self.nrows(), self.ncols(), |i, j| {
            if j < offset { 1.0 } else { self.columns[j - offset][i] }
        })
    }
}
