use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::MinSupport;
use crate::error::FpError;
use crate::fp::{fp_growth_matrix, group_by_level};

impl From<FpError> for PyErr {
    fn from(err: FpError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
) -> PyResult<Vec<(Vec<usize>, usize)>> {
    let itemsets = fp_growth_matrix(transactions.as_array(), MinSupport::Fraction(min_support))?;

    Ok(itemsets
        .into_iter()
        .map(|itemset| {
            let mut items = itemset.items;
            items.sort_unstable();
            (items, itemset.support)
        })
        .collect())
}

#[pyfunction]
#[pyo3(name = "fp_growth_levels")]
fn fp_growth_levels_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let itemsets = fp_growth_matrix(transactions.as_array(), MinSupport::Fraction(min_support))?;

    let mut result = Vec::new();

    for level in group_by_level(&itemsets) {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let num_itemsets = level.len();
        let mut data = vec![0usize; num_itemsets * itemset_size];

        for (i, (itemset, _)) in level.iter().enumerate() {
            let row = &mut data[i * itemset_size..(i + 1) * itemset_size];
            row.copy_from_slice(itemset);
            row.sort_unstable();
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;

        result.push(array.into_pyarray(py));
    }

    Ok(result)
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_levels_py, m)?)?;
    Ok(())
}
