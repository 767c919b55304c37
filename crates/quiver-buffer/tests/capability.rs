//! Integration tests driving the capability trait across both buffer
//! kinds and every cross-kind combination.

use proptest::prelude::*;
use quiver_buffer::factory;
use quiver_buffer::{ArrayBuffer, OffHeapBuffer};
use quiver_core::{BufferKind, VectorBuffer};

const KINDS: [BufferKind; 2] = [BufferKind::Array, BufferKind::OffHeap];

#[test]
fn range_copy_moves_exactly_the_requested_window() {
    for src_kind in KINDS {
        for dest_kind in KINDS {
            let values: Vec<f32> = (0..10).map(|i| i as f32 + 0.5).collect();
            let a = factory::from_slice(src_kind, &values).unwrap();
            let mut b = factory::zeroed(dest_kind, 10).unwrap();

            b.copy_from(a.as_ref(), 2, 5, 3);

            assert_eq!(b.get(5), a.get(2));
            assert_eq!(b.get(6), a.get(3));
            assert_eq!(b.get(7), a.get(4));
            for i in (0..5).chain(8..10) {
                assert_eq!(b.get(i), 0.0, "position {i} should be untouched");
            }
        }
    }
}

#[test]
fn full_range_copy_replicates_source() {
    let src = ArrayBuffer::from_slice(&[9.0, 8.0, 7.0]).unwrap();
    let mut dest = OffHeapBuffer::zeroed(3).unwrap();
    dest.copy_from(&src, 0, 0, 3);
    assert!(dest.content_eq(&src));
}

#[test]
fn zero_count_copy_is_a_no_op() {
    let src = ArrayBuffer::from_slice(&[1.0, 2.0]).unwrap();
    let mut dest = OffHeapBuffer::from_slice(&[5.0, 6.0]).unwrap();
    dest.copy_from(&src, 2, 2, 0);
    assert_eq!(dest.as_slice(), &[5.0, 6.0]);
}

#[test]
#[should_panic(expected = "exceeds source length")]
fn copy_from_rejects_out_of_range_source() {
    let src = ArrayBuffer::zeroed(10).unwrap();
    let mut dest = OffHeapBuffer::zeroed(10).unwrap();
    dest.copy_from(&src, 8, 0, 3);
}

#[test]
#[should_panic(expected = "exceeds destination length")]
fn copy_from_rejects_out_of_range_destination() {
    let src = ArrayBuffer::zeroed(10).unwrap();
    let mut dest = OffHeapBuffer::zeroed(4).unwrap();
    dest.copy_from(&src, 0, 2, 3);
}

#[test]
#[should_panic(expected = "exceeds source length")]
fn copy_from_rejects_overflowing_range() {
    let src = ArrayBuffer::zeroed(10).unwrap();
    let mut dest = OffHeapBuffer::zeroed(10).unwrap();
    dest.copy_from(&src, usize::MAX, 0, 2);
}

#[test]
fn copy_within_is_overlap_safe_forward() {
    let mut buf = OffHeapBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    buf.copy_within(0, 2, 3);
    assert_eq!(buf.as_slice(), &[1.0, 2.0, 1.0, 2.0, 3.0]);
}

#[test]
fn copy_within_is_overlap_safe_backward() {
    let mut buf = ArrayBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    buf.copy_within(2, 0, 3);
    assert_eq!(buf.as_slice(), &[3.0, 4.0, 5.0, 4.0, 5.0]);
}

#[test]
#[should_panic(expected = "copy_within")]
fn copy_within_rejects_out_of_range() {
    let mut buf = OffHeapBuffer::zeroed(5).unwrap();
    buf.copy_within(3, 0, 3);
}

#[test]
fn boxed_clone_is_independent_through_trait_objects() {
    let mut original = factory::from_slice(BufferKind::OffHeap, &[1.0, 2.0]).unwrap();
    let copy = original.boxed_clone();
    assert_eq!(copy.kind(), BufferKind::OffHeap);
    assert!(copy.content_eq(original.as_ref()));

    original.set(0, -1.0);
    assert_eq!(copy.get(0), 1.0);
}

#[test]
fn content_eq_is_reflexive_and_symmetric_across_kinds() {
    let on_heap = ArrayBuffer::from_slice(&[1.0, 2.0]).unwrap();
    let off_heap = OffHeapBuffer::from_slice(&[1.0, 2.0]).unwrap();

    assert!(on_heap.content_eq(&on_heap));
    assert!(off_heap.content_eq(&off_heap));
    assert_eq!(
        on_heap.content_eq(&off_heap),
        off_heap.content_eq(&on_heap)
    );
}

#[test]
fn different_lengths_are_never_equal() {
    let short = ArrayBuffer::zeroed(3).unwrap();
    let long = OffHeapBuffer::zeroed(4).unwrap();
    assert!(!short.content_eq(&long));
    assert!(!long.content_eq(&short));
}

#[test]
fn equality_is_content_not_identity() {
    let a = OffHeapBuffer::from_slice(&[1.0]).unwrap();
    let b = OffHeapBuffer::from_slice(&[1.0]).unwrap();
    assert!(a.content_eq(&b));
    assert!(!std::ptr::eq(a.as_slice().as_ptr(), b.as_slice().as_ptr()));
}

proptest! {
    #[test]
    fn from_slice_round_trips(values in prop::collection::vec(any::<f32>(), 0..64)) {
        for kind in KINDS {
            let buf = factory::from_slice(kind, &values).unwrap();
            prop_assert_eq!(buf.len(), values.len());
            for (i, &v) in values.iter().enumerate() {
                prop_assert_eq!(buf.get(i).to_bits(), v.to_bits());
            }
        }
    }

    #[test]
    fn byte_round_trip_preserves_content(values in prop::collection::vec(any::<f32>(), 0..64)) {
        for kind in KINDS {
            let original = factory::from_slice(kind, &values).unwrap();
            let rebuilt = factory::from_bytes(kind, original.as_bytes()).unwrap();
            prop_assert!(rebuilt.content_eq(original.as_ref()));
        }
    }

    #[test]
    fn kinds_agree_on_equality_and_hash(values in prop::collection::vec(any::<f32>(), 0..64)) {
        let on_heap = ArrayBuffer::from_slice(&values).unwrap();
        let off_heap = OffHeapBuffer::from_slice(&values).unwrap();
        prop_assert!(on_heap.content_eq(&off_heap));
        prop_assert!(off_heap.content_eq(&on_heap));
        prop_assert_eq!(on_heap.content_hash(), off_heap.content_hash());
    }

    #[test]
    fn zero_clears_to_positive_zero_bits(values in prop::collection::vec(any::<f32>(), 1..64)) {
        for kind in KINDS {
            let mut buf = factory::from_slice(kind, &values).unwrap();
            buf.zero();
            prop_assert!(buf.as_slice().iter().all(|&v| v.to_bits() == 0));
        }
    }
}
