//! Start/stop/step slicing over the three channels.

use super::ColorValue;
use crate::error::ColorError;
use crate::range::Range;

/// Result of [`ColorValue::slice`].
///
/// A selection of exactly three channels is itself a color (so the full and
/// reversed slices stay colors); any other length is a plain value list.
#[derive(Debug, Clone, PartialEq)]
pub enum Slice<R: Range> {
    Color(ColorValue<R>),
    Values(Vec<R::Number>),
}

impl<R: Range> Slice<R> {
    /// The selected channel values, in order.
    pub fn values(&self) -> Vec<R::Number> {
        match self {
            Slice::Color(color) => color.iter().collect(),
            Slice::Values(values) => values.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Slice::Color(_) => 3,
            Slice::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve optional slice bounds against a sequence of `len` items.
///
/// Negative bounds count from the end and out-of-range bounds are clamped,
/// so the result only ever holds valid indices.
fn slice_indices(
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
    len: isize,
) -> Result<Vec<usize>, ColorError> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(ColorError::ZeroSliceStep);
    }

    let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
    let resolve = |bound: Option<isize>, default: isize| match bound {
        None => default,
        Some(i) if i < 0 => (i + len).max(lower),
        Some(i) => i.min(upper),
    };
    let start = resolve(start, if step < 0 { upper } else { lower });
    let stop = resolve(stop, if step < 0 { lower } else { upper });

    let mut indices = Vec::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        indices.push(i as usize);
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(indices)
}

impl<R: Range> ColorValue<R> {
    /// Select channels by `start:stop:step`, with `None` for an omitted bound.
    ///
    /// ```
    /// use tdsp_color::{Color, Slice};
    ///
    /// let red = Color::new(1.0, 0.0, 0.0);
    /// assert_eq!(red.slice(None, None, Some(-1)), Ok(Slice::Color(Color::new(0.0, 0.0, 1.0))));
    /// assert_eq!(red.slice(Some(0), Some(2), None), Ok(Slice::Values(vec![1.0, 0.0])));
    /// ```
    ///
    /// # Errors
    ///
    /// [`ColorError::ZeroSliceStep`] if `step` is `Some(0)`.
    pub fn slice(
        self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Slice<R>, ColorError> {
        let values: Vec<_> = slice_indices(start, stop, step, 3)?
            .into_iter()
            .map(|i| self.channels[i])
            .collect();

        Ok(match Self::from_sequence(&values) {
            Ok(color) => Slice::Color(color),
            Err(_) => Slice::Values(values),
        })
    }
}
