//! Algebraic compliance test helpers.
//!
//! These functions verify that a pair of equal-shape multi-block vectors
//! satisfies the laws the block-wise operators and equality promise. Reused by the
//! operator tests with fixed and randomly generated inputs.

use blockvec_core::IntVector;

use crate::multi_vector::MultiIntVector;

/// Assert `a + b == b + a`.
pub fn assert_add_commutative(a: &MultiIntVector, b: &MultiIntVector) {
    assert_eq!(a + b, b + a, "addition is not commutative for {a} and {b}");
}

/// Assert `a - a` is the all-zeros vector of the same shape.
pub fn assert_sub_self_is_zero(a: &MultiIntVector) {
    let diff = a - a;
    assert_eq!(diff.block_count(), a.block_count());
    assert!(diff.is_zero(a.dim()), "{a} - {a} = {diff}, expected zeros");
}

/// Assert `-(-a) == a` and `a * 2 == a + a`.
pub fn assert_negation_and_scaling(a: &MultiIntVector) {
    assert_eq!(-(-a), *a, "double negation changed {a}");
    assert_eq!(a * 2, a + a, "scaling by 2 differs from self-addition for {a}");
}

/// Assert `min_of` is below and `max_of` above both inputs.
pub fn assert_min_max_bounds(a: &MultiIntVector, b: &MultiIntVector) {
    let lo = MultiIntVector::min_of(a, b);
    let hi = MultiIntVector::max_of(a, b);
    assert!(lo.all_le(a) && lo.all_le(b), "min_of({a}, {b}) = {lo}");
    assert!(hi.all_ge(a) && hi.all_ge(b), "max_of({a}, {b}) = {hi}");
    assert!(lo.min_component() <= a.min_component().min(b.min_component()));
    assert!(hi.max_component() >= a.max_component().max(b.max_component()));
}

/// Assert ceiling division by a strictly positive divisor derived from `b`
/// matches real-valued ceiling per component.
pub fn assert_ceiling_quotient_matches_real(a: &MultiIntVector, b: &MultiIntVector) {
    let divisor: Vec<IntVector> = b
        .blocks()
        .iter()
        .map(|v| {
            let positive: Vec<i32> = v.iter().map(|c| c.abs() + 1).collect();
            IntVector::try_from(positive).expect("tuple keeps its dimension")
        })
        .collect();
    let divisor = MultiIntVector {
        blocks: divisor,
    };
    let q = MultiIntVector::ceiling_quotient(a, &divisor);
    for ((num, den), got) in a.blocks().iter().zip(divisor.blocks()).zip(q.blocks()) {
        for k in 0..num.dim().value() {
            let expected = (num[k] as f64 / den[k] as f64).ceil() as i32;
            assert_eq!(got[k], expected, "ceil({} / {})", num[k], den[k]);
        }
    }
}

/// Assert `a == a` and the text form parses back to `a`.
pub fn assert_equality_and_text(a: &MultiIntVector) {
    assert_eq!(a, a);
    let back: MultiIntVector = a.to_string().parse().expect("text form should parse");
    assert_eq!(&back, a);
}

/// Assert that changing one component of the last block breaks equality.
pub fn assert_component_change_breaks_equality(a: &MultiIntVector) {
    let mut changed = a.clone();
    if let Some(last) = changed.blocks.last_mut() {
        let k = last.dim().value() - 1;
        last[k] = last[k].wrapping_add(1);
    }
    assert!(a.check_compatible(&changed).is_ok());
    assert_ne!(*a, changed, "changing the last block of {a} kept it equal");
}

/// Run all compliance checks on an equal-shape pair.
pub fn run_full_compliance(a: &MultiIntVector, b: &MultiIntVector) {
    assert_add_commutative(a, b);
    assert_sub_self_is_zero(a);
    assert_sub_self_is_zero(b);
    assert_negation_and_scaling(a);
    assert_min_max_bounds(a, b);
    assert_ceiling_quotient_matches_real(a, b);
    assert_equality_and_text(a);
    assert_equality_and_text(b);
    assert_component_change_breaks_equality(a);
    assert_component_change_breaks_equality(b);
}
