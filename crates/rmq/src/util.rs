/// Folds `slice` into the running minimum `init`.
#[inline(always)]
pub(crate) fn fold_min(init: i64, slice: &[i64]) -> i64 {
    slice.iter().fold(init, |acc, &v| acc.min(v))
}
