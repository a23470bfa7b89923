//! Broadcasting of limits and extra arguments to one flat batch.

use ndarray::{Array1, ArrayViewD, IxDyn};

use crate::error::QuadError;

/// Common shape of `shapes` under the usual trailing-axis broadcasting
/// rules, promoted to at least one dimension.
pub(crate) fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>, QuadError> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0).max(1);
    let mut out = vec![1; ndim];
    for shape in shapes {
        let offset = ndim - shape.len();
        for (i, &len) in shape.iter().enumerate() {
            let slot = &mut out[offset + i];
            if *slot == 1 {
                *slot = len;
            } else if len != 1 && len != *slot {
                return Err(QuadError::ShapeMismatch(out.clone(), shape.to_vec()));
            }
        }
    }
    Ok(out)
}

/// `view` broadcast to `shape` and flattened in row-major order.
pub(crate) fn flatten(view: &ArrayViewD<'_, f64>, shape: &[usize]) -> Result<Array1<f64>, QuadError> {
    let expanded = view
        .broadcast(IxDyn(shape))
        .ok_or_else(|| QuadError::ShapeMismatch(view.shape().to_vec(), shape.to_vec()))?;
    Ok(expanded.iter().copied().collect())
}

/// Flattened copies of every input, all of length `shape.iter().product()`.
pub(crate) struct Batch {
    pub shape: Vec<usize>,
    pub a: Array1<f64>,
    pub b: Array1<f64>,
    /// One column per extra argument.
    pub args: ndarray::Array2<f64>,
}

impl Batch {
    pub fn new(
        a: ArrayViewD<'_, f64>,
        b: ArrayViewD<'_, f64>,
        args: &[ArrayViewD<'_, f64>],
    ) -> Result<Self, QuadError> {
        let mut shapes: Vec<&[usize]> = vec![a.shape(), b.shape()];
        shapes.extend(args.iter().map(|p| p.shape()));
        let shape = broadcast_shape(&shapes)?;
        let len = shape.iter().product();

        let mut columns = ndarray::Array2::zeros((len, args.len()));
        for (j, p) in args.iter().enumerate() {
            columns.column_mut(j).assign(&flatten(p, &shape)?);
        }

        Ok(Self {
            a: flatten(&a, &shape)?,
            b: flatten(&b, &shape)?,
            args: columns,
            shape,
        })
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }
}
