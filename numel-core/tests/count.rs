use numel_core::{checked_element_count, element_count, element_count_of, Dims, Error};
use rand::{seq::SliceRandom, Rng};

macro_rules! test_count {
    ($name:ident, [$($N:expr),*], $expected:expr) => {
        #[test]
        fn $name() {
            let dims = Dims::from([$($N, )*]);
            assert_eq!(element_count(&dims), $expected);
            assert_eq!(element_count_of(&[$($N, )*]), $expected);
        }
    };
}

test_count!(scalar, [], 1);
test_count!(single_axis, [7], 7);
test_count!(two_axes, [3, 5], 15);
test_count!(three_axes, [2, 3, 4], 24);
test_count!(all_ones, [1, 1, 1, 1], 1);
test_count!(zero_extent, [0, 5], 0);
test_count!(full_rank, [1, 2, 1, 2, 1, 2, 1, 2], 16);

#[test]
fn single_extent_is_identity() {
    for k in [0i64, 1, 2, 17, 1 << 40] {
        assert_eq!(element_count(&Dims::from([k])), k as u64);
    }
}

#[test]
fn order_does_not_matter() {
    assert_eq!(
        element_count(&Dims::from([6, 7])),
        element_count(&Dims::from([7, 6]))
    );
    assert_eq!(
        element_count(&Dims::from([2, 3, 4])),
        element_count(&Dims::from([4, 2, 3]))
    );
}

#[test]
fn repeated_calls_agree() {
    let dims = Dims::from([9, 8, 7]);
    assert_eq!(element_count(&dims), element_count(&dims));
    assert_eq!(element_count(&dims), 504);
}

#[test]
fn negative_extents_multiply_through() {
    assert_eq!(element_count(&Dims::from([-1, 3])), (-3i64) as u64);
    assert_eq!(element_count(&Dims::from([-1, 3])) as i64, -3);
    assert_eq!(element_count(&Dims::from([-2, -5])), 10);
}

#[test]
fn overflow_wraps() {
    let dims = Dims::from([i64::MAX, 2]);
    assert_eq!(element_count(&dims), (i64::MAX as u64).wrapping_mul(2));

    let dims = Dims::from([1 << 32, 1 << 32]);
    assert_eq!(element_count(&dims), 0);
}

#[test]
fn unused_slots_are_ignored() {
    let dims = Dims::new(&[3, 4]).unwrap();
    assert_eq!(dims.nb_dims(), 2);
    assert_eq!(element_count(&dims), 12);
}

#[test]
fn permutations_agree() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let rank = rng.gen_range(0..=numel_core::MAX_DIMS);
        let mut extents: Vec<i64> = (0..rank).map(|_| rng.gen_range(-16..=16)).collect();
        let expected = element_count(&Dims::new(&extents).unwrap());
        extents.shuffle(&mut rng);
        assert_eq!(element_count(&Dims::new(&extents).unwrap()), expected);
    }
}

mod checked {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn agrees_with_unchecked() {
        let cases: [&[i64]; 5] = [&[], &[5], &[2, 3, 4], &[0, 5], &[1, 1, 1, 1]];
        for extents in cases {
            let dims = Dims::new(extents).unwrap();
            assert_eq!(checked_element_count(&dims).unwrap(), element_count(&dims));
        }
    }

    #[test]
    fn rejects_negative_extent() {
        init_tracing();
        let err = checked_element_count(&Dims::from([2, -3, -4])).unwrap_err();
        assert!(matches!(
            err.inner(),
            Error::NegativeExtent {
                axis: 1,
                extent: -3
            }
        ));
    }

    #[test]
    fn negative_checked_before_zero() {
        let err = checked_element_count(&Dims::from([0, -1])).unwrap_err();
        assert!(matches!(err.inner(), Error::NegativeExtent { axis: 1, .. }));
    }

    #[test]
    fn zero_extent_avoids_overflow() {
        let dims = Dims::from([i64::MAX, i64::MAX, 0]);
        assert_eq!(checked_element_count(&dims).unwrap(), 0);
    }

    #[test]
    fn rejects_overflow() {
        init_tracing();
        let dims = Dims::from([1 << 32, 1 << 32]);
        let err = checked_element_count(&dims).unwrap_err();
        match err.inner() {
            Error::Overflow { dims: reported } => assert_eq!(*reported, dims),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn largest_representable() {
        let dims = Dims::from([i64::MAX, 2]);
        assert_eq!(
            checked_element_count(&dims).unwrap(),
            (i64::MAX as u64) * 2
        );
    }
}
