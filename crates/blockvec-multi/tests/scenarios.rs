use blockvec_core::{BlockId, Dimension, IntVector};
use blockvec_multi::{BlockLayout, LayoutConfig, MultiIntVector, MultiVectorError};
use blockvec_test_utils::fixtures::{mixed_sign_blocks, ratio_blocks};
use blockvec_test_utils::iv;

#[test]
fn two_block_refinement_ratios_in_2d() {
    let layout = BlockLayout::from_config(&LayoutConfig::new(2)).unwrap();
    let a = MultiIntVector::uniform(&layout, Dimension::TWO, 2);
    let b = MultiIntVector::uniform(&layout, Dimension::TWO, 3);

    let sum = &a + &b;
    assert_eq!(sum.block_count(), 2);
    assert_eq!(sum[BlockId(0)], iv(&[5, 5]));
    assert_eq!(sum[BlockId(1)], iv(&[5, 5]));

    assert!(a.all_lt(&b));
    assert!(a.all_le(&b));
    assert!(b.all_gt(&a));
    assert!(b.all_ge(&a));

    let q = MultiIntVector::ceiling_quotient(&b, &a);
    assert_eq!(q, MultiIntVector::filled(&layout, Dimension::TWO, 2, 2));
    // Truncating division rounds the other way.
    assert_eq!(&b / &a, MultiIntVector::filled(&layout, Dimension::TWO, 1, 2));
}

#[test]
fn set_block_count_then_set_all() {
    let layout = BlockLayout::default();
    layout.set_block_count(3);
    let tuple = iv(&[4, 2, 1]);
    let mut v = MultiIntVector::new(iv(&[1, 1, 1]));
    v.set_all(&layout, &tuple);

    assert_eq!(v.block_count(), 3);
    for id in layout.block_ids() {
        assert_eq!(v.block_vector(id), &tuple);
    }
}

#[test]
fn ratchet_across_several_vectors() {
    let layout = BlockLayout::new(2);
    let small = MultiIntVector::uniform(&layout, Dimension::THREE, 1);
    let large = MultiIntVector::from_blocks(&layout, ratio_blocks(3, 5, 4));
    assert_eq!(layout.block_count(), 5);

    // Earlier vectors keep their size; later replicated vectors follow the layout.
    assert_eq!(small.block_count(), 2);
    let replicated = MultiIntVector::uniform(&layout, Dimension::THREE, 1);
    assert_eq!(replicated.block_count(), large.block_count());
    assert!(replicated.all_le(&large));
}

#[test]
fn global_bounds_over_many_blocks() {
    let layout = BlockLayout::new(16);
    let ratios = MultiIntVector::from_blocks(&layout, ratio_blocks(3, 16, 4));
    let min = ratios.min_component();
    let max = ratios.max_component();
    assert!((1..=4).contains(&min));
    assert!((1..=4).contains(&max));
    assert!(min <= max);

    let floor = MultiIntVector::uniform(&layout, Dimension::THREE, min);
    let ceil = MultiIntVector::uniform(&layout, Dimension::THREE, max);
    assert!(floor.all_le(&ratios));
    assert!(ceil.all_ge(&ratios));
}

#[test]
fn min_max_of_mixed_sign_blocks() {
    let layout = BlockLayout::new(8);
    let a = MultiIntVector::from_blocks(&layout, mixed_sign_blocks(2, 8, 9));
    let b = -&a;
    let lo = MultiIntVector::min_of(&a, &b);
    let hi = MultiIntVector::max_of(&a, &b);
    assert!(lo.all_le(&a) && lo.all_le(&b));
    assert!(hi.all_ge(&a) && hi.all_ge(&b));
    // max(x, -x) = |x| and min(x, -x) = -|x|.
    assert_eq!(-&lo, hi);
    assert!(hi.min_component() >= 0);
}

#[test]
fn untrusted_block_ids_use_fallible_lookup() {
    let layout = BlockLayout::new(3);
    let v = MultiIntVector::uniform(&layout, Dimension::ONE, 7);
    let requested = [BlockId(0), BlockId(2), BlockId(3), BlockId::INVALID];
    let found: Vec<bool> = requested
        .iter()
        .map(|&id| v.try_block_vector(id).is_ok())
        .collect();
    assert_eq!(found, vec![true, true, false, false]);
    let err = v.try_block_vector(BlockId(3)).unwrap_err();
    assert_eq!(err.to_string(), "block 3 out of range: vector has 3 blocks");
}

#[test]
#[should_panic(expected = "block 3 out of range")]
fn out_of_range_block_vector_is_fatal() {
    let layout = BlockLayout::new(3);
    let v = MultiIntVector::uniform(&layout, Dimension::ONE, 7);
    let _ = v.block_vector(BlockId(3));
}

#[test]
fn text_round_trip_through_layout() {
    let layout = BlockLayout::new(1);
    let v = MultiIntVector::from_blocks(&layout, mixed_sign_blocks(3, 4, 20));
    let text = v.to_string();

    let reader_layout = BlockLayout::new(1);
    let back = MultiIntVector::read_from(&reader_layout, text.as_bytes()).unwrap();
    assert_eq!(back, v);
    assert_eq!(reader_layout.block_count(), 4);
}

#[test]
fn shape_checks_before_combining() {
    let layout = BlockLayout::new(2);
    let a = MultiIntVector::filled(&layout, Dimension::TWO, 1, 2);
    let b = MultiIntVector::filled(&BlockLayout::new(3), Dimension::TWO, 1, 3);
    match a.check_compatible(&b) {
        Err(MultiVectorError::BlockCountMismatch { lhs, rhs }) => {
            assert_eq!((lhs, rhs), (2, 3));
        }
        other => panic!("expected BlockCountMismatch, got {other:?}"),
    }
    let c = MultiIntVector::filled(&layout, Dimension::TWO, 4, 2);
    assert!(a.check_compatible(&c).is_ok());
    assert_eq!((&a * &c).max_component(), 4);
}

#[test]
fn is_one_and_is_zero_after_arithmetic() {
    let layout = BlockLayout::new(4);
    let ratios = MultiIntVector::from_blocks(&layout, ratio_blocks(2, 4, 8));
    assert!((&ratios - &ratios).is_zero(Dimension::TWO));
    assert!((&ratios / &ratios).is_one(Dimension::TWO));
    assert!(!ratios.is_zero(Dimension::TWO));
}

#[test]
fn single_block_constructor_and_conversion() {
    let v: MultiIntVector = IntVector::from([2, 4]).into();
    assert_eq!(v, MultiIntVector::new(iv(&[2, 4])));
    assert_eq!(v.dim(), Dimension::TWO);
    assert_eq!(v.iter().count(), 1);
}
