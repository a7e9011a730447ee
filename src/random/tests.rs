use rand::{SeedableRng, rngs::StdRng};

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn test_one_of() {
    let mut rng = rng();
    let items = ["red", "green", "blue"];
    for _ in 0..100 {
        let item = rng.one_of(&items).unwrap();
        assert!(items.contains(item));
    }
    assert_eq!(rng.one_of::<u8>(&[]), None);
}

#[test]
fn test_one_of_matches_choose() {
    let items = ["red", "green", "blue", "cyan", "magenta"];
    let ours: Vec<_> = (0..10).scan(rng(), |rng, _| rng.one_of(&items)).collect();
    let theirs: Vec<_> = (0..10).scan(rng(), |rng, _| items.choose(rng)).collect();
    assert_eq!(ours, theirs);
}

#[test]
fn test_next_in_range() {
    let mut rng = rng();
    for _ in 0..1000 {
        let x = rng.next_f64_in(-2.0, 3.0);
        assert!((-2.0..3.0).contains(&x));
        let y = rng.next_f32_in(10.0, 20.0);
        assert!((10.0..=20.0).contains(&y));
        let z = rng.next_f32();
        assert!((0.0..1.0).contains(&z));
    }
}

#[test]
fn test_next_bool_produces_both() {
    let mut rng = rng();
    let trues = (0..1000).filter(|_| rng.next_bool()).count();
    assert!((300..700).contains(&trues));
}

#[test]
fn test_deviation_bounds_and_shape() {
    let mut rng = rng();
    let mut counts = [0usize; 11];
    for _ in 0..10_000 {
        let value = rng.deviation(0, 10, 5).unwrap();
        assert!((0..=10).contains(&value));
        counts[value as usize] += 1;
    }
    assert!(counts[5] > counts[0] * 3);
    assert!(counts[5] > counts[10] * 3);
    assert!(counts[4] > counts[1]);
}

#[test]
fn test_deviation_degenerate() {
    let mut rng = rng();
    assert_eq!(rng.deviation(3, 3, 3), Some(3));
    assert_eq!(rng.deviation(0, 10, 11), None);
    assert_eq!(rng.deviation(5, 1, 3), None);
}

#[test]
fn test_reproducible() {
    let a: Vec<_> = (0..5).scan(rng(), |rng, _| rng.deviation(0, 100, 50)).collect();
    let b: Vec<_> = (0..5).scan(rng(), |rng, _| rng.deviation(0, 100, 50)).collect();
    assert_eq!(a, b);
}

#[test]
fn test_deviation_wide_range() {
    let mut rng = rng();
    for avg in [i32::MIN, 0, i32::MAX] {
        for _ in 0..1000 {
            assert!(rng.deviation(i32::MIN, i32::MAX, avg).is_some());
        }
    }
}

#[test]
fn test_deviation_two_values() {
    let mut rng = rng();
    let mut counts = [0usize; 2];
    for _ in 0..3000 {
        counts[rng.deviation(0, 1, 1).unwrap() as usize] += 1;
    }
    assert!(counts[0] > 600);
    assert!(counts[1] > counts[0]);
}

#[test]
fn test_triangular_rank() {
    let ranks: Vec<_> = (0..10).map(triangular_rank).collect();
    assert_eq!(ranks, vec![1, 2, 2, 3, 3, 3, 4, 4, 4, 4]);
    assert_eq!(triangular_rank(triangular(1 << 32) - 1), 1 << 32);
}
