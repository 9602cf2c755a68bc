use std::borrow::Cow;

use crate::error::{ChartError, ChartResult};

/// Reduces `items` to at most `max_count` entries for axis labelling.
///
/// Sequences that already fit are returned borrowed and untouched. Longer
/// ones use gradient selection: entry `i` is taken from index
/// `ceil((max_count / 100) * i * len)`, clamped to the last element. The
/// picks cluster toward the start of the series and may repeat when
/// `max_count` is small; callers rely on that exact selection.
pub fn downsample<T: Clone>(items: &[T], max_count: usize) -> ChartResult<Cow<'_, [T]>> {
    if max_count == 0 {
        return Err(ChartError::InvalidArgument(
            "downsample max_count must be > 0".to_owned(),
        ));
    }

    if items.len() <= max_count {
        return Ok(Cow::Borrowed(items));
    }

    let picked = gradient_indices(items.len(), max_count)
        .map(|index| items[index].clone())
        .collect();
    Ok(Cow::Owned(picked))
}

/// Source indices chosen by [`downsample`] for a sequence of `len` items.
pub fn gradient_indices(len: usize, max_count: usize) -> impl Iterator<Item = usize> {
    let rate = max_count as f64 / 100.0;
    let last = len.saturating_sub(1);
    (0..max_count).map(move |i| {
        let raw = (rate * i as f64 * len as f64).ceil();
        if raw <= 0.0 { 0 } else { (raw as usize).min(last) }
    })
}
