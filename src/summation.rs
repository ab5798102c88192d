//! Weighted-mean accumulation strategies.
//!
//! Every function in this module evaluates the same quantity — the discrete
//! weighted mean `dv · Σ values[i]·weights[i]` — but with a different
//! accumulation order or precision, so their rounding-error behavior can be
//! compared on identical inputs.
//!
//! # Algorithms
//!
//! - **Naive**: left-to-right `f32` accumulation, O(n·ε) worst-case error.
//! - **Pairwise**: recursive divide-and-conquer, O(ε·log n) error bound.
//!   Reference: Higham (1993), "The Accuracy of Floating Point Summation",
//!   *SIAM J. Sci. Comput.* 14(4).
//! - **Close values**: iterative stride-doubling reduction, the in-place
//!   equivalent of the pairwise tree.
//! - **Kahan**: classical compensated summation, O(ε) error independent
//!   of n. Reference: Kahan (1965), "Pracniques: Further Remarks on
//!   Reducing Truncation Errors", *CACM* 8(1).
//! - **FMA**: fused multiply-add accumulation, one rounding per term.
//! - **f64**: double-precision accumulation over single-precision inputs,
//!   the high-accuracy reference for the other five.
//!
//! All estimators return `None` for empty input or mismatched slice
//! lengths; on valid input the arithmetic is deterministic and the result
//! is bit-reproducible.

/// Computes the weighted mean by naive left-to-right summation.
///
/// # Algorithm
/// A single running `f32` total of `values[i]·weights[i]`, multiplied by
/// `dv` at the end. Rounding error grows linearly with `n`; this is the
/// baseline the other strategies are measured against.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if the slices are empty or their lengths differ.
///
/// # Examples
/// ```
/// use maxwell_mean::summation::weighted_mean;
/// let m = weighted_mean(&[1.0, 2.0], &[0.5, 0.5], 1.0).unwrap();
/// assert!((m - 1.5).abs() < 1e-6);
/// ```
pub fn weighted_mean(values: &[f32], weights: &[f32], dv: f32) -> Option<f32> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let mut sum = 0.0_f32;
    for (&v, &w) in values.iter().zip(weights) {
        sum += v * w;
    }
    Some(dv * sum)
}

/// Computes the weighted mean by recursive pairwise summation.
///
/// # Algorithm
/// Divide-and-conquer over the inclusive index range `[start, end]`:
/// a single index contributes `v·w·dv`, two adjacent indices contribute
/// `(v₀·w₀ + v₁·w₁)·dv`, and longer ranges split at
/// `mid = ⌊(start+end)/2⌋` (odd ranges favor the left half). The balanced
/// reduction tree bounds every accumulation chain to depth O(log n),
/// improving the worst-case error to O(ε·log n).
///
/// Reference: Higham (1993), *SIAM J. Sci. Comput.* 14(4), pp. 783–799.
///
/// # Complexity
/// Time: O(n), Space: O(log n) call stack (depth ≈ 20 for n = 10⁶)
///
/// # Returns
/// - `None` if the slices are empty or their lengths differ.
pub fn weighted_mean_pairwise(values: &[f32], weights: &[f32], dv: f32) -> Option<f32> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    Some(pairwise(values, weights, dv, 0, values.len() - 1))
}

fn pairwise(values: &[f32], weights: &[f32], dv: f32, start: usize, end: usize) -> f32 {
    if start == end {
        values[start] * weights[start] * dv
    } else if end - start == 1 {
        (values[start] * weights[start] + values[end] * weights[end]) * dv
    } else {
        let mid = (start + end) / 2;
        pairwise(values, weights, dv, start, mid) + pairwise(values, weights, dv, mid + 1, end)
    }
}

/// Computes the weighted mean by iterative stride-doubling reduction
/// ("close value" sums).
///
/// # Algorithm
/// Materializes the per-element products `values[i]·weights[i]·dv`, then
/// repeatedly folds neighbors at strides 1, 2, 4, …: at each stride, every
/// index `i = 0, 2·stride, 4·stride, …` with `i < n − stride` absorbs
/// `partial[i + stride]`. The answer accumulates in `partial[0]`.
///
/// This is the in-place, loop-based form of the balanced tree built by
/// [`weighted_mean_pairwise`], so operands combined at each step are close
/// in magnitude. When `n` is not a power of two the trailing unpaired block
/// head at a given stride is carried forward untouched until a later stride
/// reaches it, which yields a slightly different tree shape (and result)
/// than the recursive split — every element is still folded in exactly
/// once.
///
/// # Complexity
/// Time: O(n), Space: O(n) scratch
///
/// # Returns
/// - `None` if the slices are empty or their lengths differ.
pub fn weighted_mean_close_values(values: &[f32], weights: &[f32], dv: f32) -> Option<f32> {
    let n = values.len();
    if n == 0 || n != weights.len() {
        return None;
    }
    let mut partial: Vec<f32> = values
        .iter()
        .zip(weights)
        .map(|(&v, &w)| v * w * dv)
        .collect();
    let mut stride = 1;
    while stride < n {
        let mut i = 0;
        while i < n - stride {
            partial[i] += partial[i + stride];
            i += 2 * stride;
        }
        stride *= 2;
    }
    Some(partial[0])
}

/// Computes the weighted mean by classical Kahan compensated summation.
///
/// # Algorithm
/// Maintains a running `f32` sum and a compensation term `t` holding the
/// low-order bits lost by the previous addition. For each term:
///
/// ```text
/// y = valueᵢ·weightᵢ − t
/// z = sum + y
/// t = (z − sum) − y
/// sum = z
/// ```
///
/// The compensation is reinjected into the *next* term, canceling the
/// leading-order rounding error of every addition and giving O(ε) total
/// error independent of `n`.
///
/// Reference: Kahan (1965), *CACM* 8(1), p. 40.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if the slices are empty or their lengths differ.
pub fn weighted_mean_kahan(values: &[f32], weights: &[f32], dv: f32) -> Option<f32> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let mut sum = 0.0_f32;
    let mut t = 0.0_f32;
    for (&v, &w) in values.iter().zip(weights) {
        let y = v * w - t;
        let z = sum + y;
        t = (z - sum) - y;
        sum = z;
    }
    Some(sum * dv)
}

/// Computes the weighted mean by fused multiply-add accumulation.
///
/// Each term is folded in with a single `fma(valueᵢ, weightᵢ, sum)`,
/// so the product contributes at full precision and only the final
/// addition rounds — one rounding per term instead of two.
///
/// # Returns
/// - `None` if the slices are empty or their lengths differ.
pub fn weighted_mean_fma(values: &[f32], weights: &[f32], dv: f32) -> Option<f32> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let mut sum = 0.0_f32;
    for (&v, &w) in values.iter().zip(weights) {
        sum = v.mul_add(w, sum);
    }
    Some(dv * sum)
}

/// Computes the weighted mean in double precision over single-precision
/// inputs.
///
/// Each `f32` operand is widened to `f64` before the multiply, and the
/// accumulator stays in `f64` throughout, so individual rounding errors are
/// at the 2⁻⁵³ level. The result is returned as `f64` — the high-accuracy
/// reference the five single-precision estimators are compared against.
///
/// # Returns
/// - `None` if the slices are empty or their lengths differ.
///
/// # Examples
/// ```
/// use maxwell_mean::summation::weighted_mean_f64;
/// let m = weighted_mean_f64(&[1.5, 2.5], &[2.0, 2.0], 2.0).unwrap();
/// assert_eq!(m, 16.0);
/// ```
pub fn weighted_mean_f64(values: &[f32], weights: &[f32], dv: f32) -> Option<f64> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let mut sum = 0.0_f64;
    for (&v, &w) in values.iter().zip(weights) {
        sum += f64::from(v) * f64::from(w);
    }
    Some(f64::from(dv) * sum)
}

/// The weighted mean of one dataset under all six accumulation strategies.
///
/// Fields mirror the individual estimator functions; [`precise`] is the
/// double-precision reference, everything else is `f32`.
///
/// [`precise`]: MeanEstimates::precise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanEstimates {
    /// Naive left-to-right sum ([`weighted_mean`]).
    pub naive: f32,
    /// Recursive pairwise sum ([`weighted_mean_pairwise`]).
    pub pairwise: f32,
    /// Iterative stride-doubling sum ([`weighted_mean_close_values`]).
    pub close_values: f32,
    /// Kahan compensated sum ([`weighted_mean_kahan`]).
    pub kahan: f32,
    /// Fused multiply-add sum ([`weighted_mean_fma`]).
    pub fma: f32,
    /// Double-precision reference sum ([`weighted_mean_f64`]).
    pub precise: f64,
}

impl MeanEstimates {
    /// Runs all six estimators on the same dataset.
    ///
    /// # Returns
    /// - `None` if the slices are empty or their lengths differ.
    pub fn compute(values: &[f32], weights: &[f32], dv: f32) -> Option<Self> {
        Some(Self {
            naive: weighted_mean(values, weights, dv)?,
            pairwise: weighted_mean_pairwise(values, weights, dv)?,
            close_values: weighted_mean_close_values(values, weights, dv)?,
            kahan: weighted_mean_kahan(values, weights, dv)?,
            fma: weighted_mean_fma(values, weights, dv)?,
            precise: weighted_mean_f64(values, weights, dv)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for same-length (values, weights) pairs of moderate size.
    fn weighted_data(
        min_len: usize,
        max_len: usize,
    ) -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
        proptest::collection::vec((-1e3_f32..1e3, 0.0_f32..1.0), min_len..=max_len)
            .prop_map(|pairs| pairs.into_iter().unzip())
    }

    /// Scale-aware absolute tolerance: a small multiple of the total mass
    /// Σ|valueᵢ·weightᵢ·dv|, so cancellation-heavy inputs are judged on
    /// absolute rather than relative error.
    fn mass(values: &[f32], weights: &[f32], dv: f32) -> f64 {
        values
            .iter()
            .zip(weights)
            .map(|(&v, &w)| (f64::from(v) * f64::from(w)).abs())
            .sum::<f64>()
            * f64::from(dv)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- every f32 estimator stays near the f64 reference ---
        #[test]
        fn f32_estimators_track_f64_reference((values, weights) in weighted_data(1, 200)) {
            let dv = 1e-3_f32;
            let e = MeanEstimates::compute(&values, &weights, dv).unwrap();
            let tol = 1e-4 * (mass(&values, &weights, dv) + 1.0);
            for r in [e.naive, e.pairwise, e.close_values, e.kahan, e.fma] {
                prop_assert!(
                    (f64::from(r) - e.precise).abs() < tol,
                    "estimator {} vs reference {}", r, e.precise
                );
            }
        }

        // --- recursive and iterative pairwise agree for power-of-two n ---
        #[test]
        fn pairwise_variants_agree_on_power_of_two(
            exp in 0_u32..10,
            seed in weighted_data(1024, 1024),
        ) {
            let n = 1_usize << exp;
            let (values, weights) = seed;
            let values = &values[..n];
            let weights = &weights[..n];
            let dv = 1e-3_f32;
            let rec = weighted_mean_pairwise(values, weights, dv).unwrap();
            let close = weighted_mean_close_values(values, weights, dv).unwrap();
            let tol = 1e-5 * (mass(values, weights, dv) + 1.0);
            prop_assert!(
                (f64::from(rec) - f64::from(close)).abs() < tol,
                "recursive {} vs close-values {}", rec, close
            );
        }

        // --- antisymmetric data under symmetric weights cancels ---
        #[test]
        fn antisymmetric_data_sums_to_zero((values, weights) in weighted_data(1, 100)) {
            // Mirror the dataset: [v₀ … vₙ, −vₙ … −v₀] with weights
            // [w₀ … wₙ, wₙ … w₀]. The exact weighted sum is zero.
            let mut sym_v = values.clone();
            sym_v.extend(values.iter().rev().map(|v| -v));
            let mut sym_w = weights.clone();
            sym_w.extend(weights.iter().rev());

            let dv = 1e-3_f32;
            let e = MeanEstimates::compute(&sym_v, &sym_w, dv).unwrap();
            let tol = 1e-4 * (mass(&sym_v, &sym_w, dv) + 1.0);
            for r in [
                f64::from(e.naive),
                f64::from(e.pairwise),
                f64::from(e.close_values),
                f64::from(e.kahan),
                f64::from(e.fma),
                e.precise,
            ] {
                prop_assert!(r.abs() < tol, "expected cancellation, got {}", r);
            }
            // The double-precision reference cancels far more tightly.
            prop_assert!(e.precise.abs() < 1e-9 * (mass(&sym_v, &sym_w, dv) + 1.0));
        }

        // --- repeated evaluation is bit-identical ---
        #[test]
        fn estimators_are_idempotent((values, weights) in weighted_data(1, 64)) {
            let dv = 1e-3_f32;
            let a = MeanEstimates::compute(&values, &weights, dv).unwrap();
            let b = MeanEstimates::compute(&values, &weights, dv).unwrap();
            prop_assert_eq!(a.naive.to_bits(), b.naive.to_bits());
            prop_assert_eq!(a.pairwise.to_bits(), b.pairwise.to_bits());
            prop_assert_eq!(a.close_values.to_bits(), b.close_values.to_bits());
            prop_assert_eq!(a.kahan.to_bits(), b.kahan.to_bits());
            prop_assert_eq!(a.fma.to_bits(), b.fma.to_bits());
            prop_assert_eq!(a.precise.to_bits(), b.precise.to_bits());
        }
    }
}
