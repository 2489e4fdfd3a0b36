use matmul_threads::Matrix;
use matmul_threads::sweep::timing::Elapsed;
use matmul_threads::sweep::{self, RunReport, SweepConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

#[test]
fn test_default_config() {
    let cfg = SweepConfig::default();
    assert_eq!(cfg.sizes, vec![10, 100, 1000, 2000, 5000]);
    assert_eq!(cfg.thread_floor, 64);
    assert_eq!(cfg.value_bound, 100);
    assert_eq!(cfg.seed, None);
}

#[test]
fn test_thread_schedule() {
    let cfg = SweepConfig::default();
    assert_eq!(cfg.thread_schedule(8), vec![64, 32, 16, 8, 4, 2, 0]);
    assert_eq!(cfg.thread_schedule(64), vec![64, 32, 16, 8, 4, 2, 0]);
    assert_eq!(cfg.thread_schedule(96), vec![96, 48, 24, 12, 6, 3, 0]);

    let tiny = SweepConfig {
        thread_floor: 1,
        ..SweepConfig::default()
    };
    assert_eq!(tiny.thread_schedule(1), vec![0]);
}

#[test]
fn test_elapsed_breakdown() {
    let e = Elapsed::from(Duration::from_nanos(1_234_567_891));
    assert_eq!(e.secs, 1);
    assert_eq!(e.millis, 234);
    assert_eq!(e.micros, 567);
    assert_eq!(e.nanos, 891);
    assert_eq!(e.total_nanos, 1_234_567_891);
    assert_eq!(e.to_string(), "  1s 234ms 567us 891ns   1234567891");
}

#[test]
fn test_report_line() {
    let report = RunReport {
        cpu_count: 8,
        threads: 16,
        size: 100,
        elapsed: Elapsed::from(Duration::from_micros(2_500)),
    };
    assert_eq!(
        report.to_string(),
        "  8cpu  16threads  100*100    0s   2ms 500us   0ns      2500000"
    );
}

#[test]
fn test_random_matrix_bounds_and_seed() {
    let a = Matrix::random(20, 30, 100, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = Matrix::random(20, 30, 100, &mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!((a.rows(), a.cols()), (20, 30));
    assert!(a.as_slice().iter().all(|&x| (0..100).contains(&x)));
    assert_eq!(a, b);

    let zeros = Matrix::random(4, 4, 0, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(zeros.as_slice().iter().all(|&x| x == 0));
}

#[test]
fn test_seeded_config_rng_is_reproducible() {
    let cfg = SweepConfig {
        seed: Some(11),
        ..SweepConfig::default()
    };
    let a = Matrix::random(5, 5, 100, &mut cfg.rng()).unwrap();
    let b = Matrix::random(5, 5, 100, &mut cfg.rng()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_run_one() {
    let cfg = SweepConfig::default();
    let mut rng = StdRng::seed_from_u64(1);

    for threads in [0, 1, 4] {
        let report = sweep::run_one(&cfg, &mut rng, 4, 10, threads).unwrap();
        assert_eq!(report.size, 10);
        assert_eq!(report.threads, threads);
        assert_eq!(report.cpu_count, 4);
    }
}

#[test]
fn test_self_check_consistent() {
    let report = sweep::self_check(sweep::cpu_count()).unwrap();
    assert!(report.is_consistent());
    assert_eq!(report.sequential.row(0), &[1259, 2396, 2816]);
}

#[test]
fn test_check_report_detects_mismatch() {
    let good = sweep::self_check(2).unwrap();
    let mut bad = good.clone();
    bad.multi_thread = Matrix::from_vec(3, 3, vec![0; 9]).unwrap();
    assert!(!bad.is_consistent());
}

#[test]
fn test_matrix_display() {
    let m = Matrix::from_vec(2, 2, vec![1, -20, 300, 4]).unwrap();
    assert_eq!(m.to_string(), "|    1|  -20|\n|  300|    4|\n");
}

#[test]
fn test_from_vec_shape_mismatch() {
    assert!(matches!(
        Matrix::from_vec(2, 2, vec![1, 2, 3]),
        Err(matmul_threads::MatmulError::ShapeMismatch {
            expected: 4,
            got: 3,
            ..
        })
    ));
}

#[test]
fn test_allocation_overflow_is_reported() {
    assert!(matches!(
        Matrix::zeroed(usize::MAX, 2),
        Err(matmul_threads::MatmulError::Allocation { .. })
    ));
}
