use matmul_threads::{MatmulError, distribute};

#[test]
fn test_even_split_remainder_on_last_slot() {
    assert_eq!(distribute(10, 3).unwrap(), vec![3, 3, 4]);
    assert_eq!(distribute(12, 4).unwrap(), vec![3, 3, 3, 3]);
    assert_eq!(distribute(9, 1).unwrap(), vec![9]);
    assert_eq!(distribute(100, 7).unwrap(), vec![14, 14, 14, 14, 14, 14, 16]);
}

#[test]
fn test_more_slots_than_cells() {
    assert_eq!(distribute(5, 8).unwrap(), vec![1, 1, 1, 1, 1, 0, 0, 0]);
    assert_eq!(distribute(1, 3).unwrap(), vec![1, 0, 0]);
    assert_eq!(distribute(3, 4).unwrap(), vec![1, 1, 1, 0]);

    for slots in 2..40 {
        for total in 0..slots {
            let plan = distribute(total, slots).unwrap();
            assert_eq!(plan.iter().filter(|&&c| c == 1).count(), total);
            assert_eq!(plan.iter().filter(|&&c| c == 0).count(), slots - total);
            assert!(plan[..total].iter().all(|&c| c == 1), "{} / {}", total, slots);
        }
    }
}

#[test]
fn test_no_cells() {
    for slots in [1, 2, 17, 64] {
        assert_eq!(distribute(0, slots).unwrap(), vec![0; slots]);
    }
}

#[test]
fn test_zero_slots_rejected() {
    assert!(matches!(distribute(10, 0), Err(MatmulError::NoSlots)));
    assert!(matches!(distribute(0, 0), Err(MatmulError::NoSlots)));
}

#[test]
fn test_unallocatable_plan_rejected() {
    assert!(matches!(
        distribute(1, usize::MAX),
        Err(MatmulError::PlanAllocation { slots: usize::MAX })
    ));
}

#[test]
fn test_plan_length_and_sum() {
    for total in (0..200).chain([999, 1000, 25_000_000]) {
        for slots in 1..70 {
            let plan = distribute(total, slots).unwrap();
            assert_eq!(plan.len(), slots, "{} / {}", total, slots);
            assert_eq!(plan.iter().sum::<usize>(), total, "{} / {}", total, slots);
        }
    }
}

#[test]
fn test_active_slots_are_a_prefix() {
    for total in 0..50 {
        for slots in 1..20 {
            let plan = distribute(total, slots).unwrap();
            let active = plan.iter().take_while(|&&c| c > 0).count();
            assert!(
                plan[active..].iter().all(|&c| c == 0),
                "gap in plan {:?}",
                plan
            );
        }
    }
}
