use anyhow::{Context, Result, ensure};
use itertools::{Itertools, iproduct};
use log::debug;

/// Maximum number of elements a matrix can hold in [`Storage::Bounded`] mode
pub const MAX_BOUNDED_ELEMENTS: usize = 10_000;

/// How much room a parsed matrix may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    /// At most [`MAX_BOUNDED_ELEMENTS`] elements
    Bounded,
    /// No limit apart from available memory
    Unbounded,
}

impl Storage {
    pub fn max_elements(&self) -> Option<usize> {
        match self {
            Storage::Bounded => Some(MAX_BOUNDED_ELEMENTS),
            Storage::Unbounded => None,
        }
    }
}

/// Row-major matrix of integers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<i32>,
}

/// Results of [`Matrix::analyze`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// 1-based index of the column with the longest run, 0 if the matrix has no elements
    pub longest_run_column: usize,
    pub saddle_points: usize,
}

impl Matrix {
    pub fn new(rows: usize, columns: usize, values: Vec<i32>) -> Result<Self> {
        ensure!(
            rows.checked_mul(columns) == Some(values.len()),
            "a {rows} x {columns} matrix cannot hold {} values",
            values.len()
        );
        Ok(Matrix {
            rows,
            columns,
            values,
        })
    }

    /// Parses a matrix from whitespace separated text: the number of rows and columns,
    /// followed by all values in row-major order. Trailing content is ignored.
    pub fn parse(input: &str, storage: Storage) -> Result<Self> {
        let mut tokens = input.split_whitespace();

        let mut read_dimension = || -> Result<usize> {
            let token = tokens.next().context("could not read matrix size")?;
            token
                .parse()
                .with_context(|| format!("could not read matrix size: {token:?}"))
        };
        let rows = read_dimension()?;
        let columns = read_dimension()?;

        let n_elements = rows
            .checked_mul(columns)
            .with_context(|| format!("matrix too large: {rows} x {columns}"))?;
        if let Some(max) = storage.max_elements() {
            ensure!(
                n_elements <= max,
                "matrix too large: {rows} x {columns} exceeds {max} elements"
            );
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(n_elements)
            .context("could not allocate memory for the matrix")?;
        for token in tokens.take(n_elements) {
            let value = token
                .parse::<i32>()
                .with_context(|| format!("invalid matrix value: {token:?}"))?;
            values.push(value);
        }
        ensure!(
            values.len() == n_elements,
            "input does not contain enough numbers, expected {n_elements}, found {}",
            values.len()
        );

        debug!("[MATRIX] parsed {rows} x {columns} matrix ({storage:?} storage)");
        Matrix::new(rows, columns, values)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> i32 {
        assert!(row < self.rows && column < self.columns);
        self.values[row * self.columns + column]
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = i32> + '_ {
        (0..self.rows).map(move |row| self.get(row, column))
    }

    /// Length of the longest run of equal, vertically adjacent values in `column`
    pub fn longest_run_in_column(&self, column: usize) -> usize {
        self.column(column)
            .dedup_with_count()
            .map(|(count, _)| count)
            .max()
            .unwrap_or(0)
    }

    /// 1-based index of the column containing the longest run of equal vertically adjacent values.
    /// Ties are resolved in favor of the leftmost column. 0 if the matrix has no elements.
    pub fn longest_run_column(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut best = (0, 0);
        for column in 0..self.columns {
            let run = self.longest_run_in_column(column);
            if run > best.1 {
                best = (column + 1, run);
            }
        }
        best.0
    }

    /// Number of elements that are both the minimum of their row and the maximum of their column.
    pub fn count_saddle_points(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let row_minima = self
            .values
            .chunks(self.columns)
            .map(|row| *row.iter().min().expect("rows are non-empty"))
            .collect_vec();
        let column_maxima = (0..self.columns)
            .map(|c| self.column(c).max().expect("columns are non-empty"))
            .collect_vec();

        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(r, c)| {
                let value = self.get(r, c);
                value == row_minima[r] && value == column_maxima[c]
            })
            .count()
    }

    pub fn analyze(&self) -> Analysis {
        Analysis {
            longest_run_column: self.longest_run_column(),
            saddle_points: self.count_saddle_points(),
        }
    }
}
