//! Every wrapper's return value and memory effect must be identical to the
//! raw operation, whether tracing is enabled or disabled.

use crate::common::{capture_tracer, disabled_tracer};
use std::cmp::Ordering;

fn both_tracers() -> Vec<pmemtrace::Tracer> {
    vec![capture_tracer().0, disabled_tracer().0]
}

#[test]
fn test_scalar_stores_mutate_exactly() {
    for tracer in both_tracers() {
        let mut field = 0u64;
        tracer.store(&mut field, 3);
        assert_eq!(field, 3);

        tracer.assign(&mut field, 10);
        assert_eq!(field, 10);

        let chained = tracer.store_through(&mut field, 20);
        assert_eq!(*chained, 20);
        *chained += 1;
        assert_eq!(field, 21);
    }
}

#[test]
fn test_compound_assignments_match_raw_operators() {
    for tracer in both_tracers() {
        let mut bits = 0b0011u8;
        tracer.or_assign(&mut bits, 0b0100);
        assert_eq!(bits, 0b0111);

        tracer.and_assign(&mut bits, 0b0110);
        assert_eq!(bits, 0b0110);

        let mut counter = 40i32;
        tracer.add_assign(&mut counter, 2);
        assert_eq!(counter, 42);

        tracer.sub_assign(&mut counter, 12);
        assert_eq!(counter, 30);
    }
}

#[test]
fn test_bulk_writes_mutate_exactly() {
    for tracer in both_tracers() {
        let mut block = [0u8; 8];
        tracer.fill(&mut block, 0xFF);
        assert_eq!(block, [0xFF; 8]);

        let src = [1u8, 2, 3, 4];
        tracer.copy(&mut block, &src);
        assert_eq!(&block[..4], &src);
        assert_eq!(&block[4..], &[0xFF; 4]);
    }
}

#[test]
fn test_copy_str_is_bounded_by_capacity() {
    for tracer in both_tracers() {
        let mut name = [0u8; 4];
        let copied = tracer.copy_str(&mut name, "journal");
        assert_eq!(copied, 4);
        assert_eq!(&name, b"jour");

        let mut wide = [0u8; 16];
        let copied = tracer.copy_str(&mut wide, "log");
        assert_eq!(copied, 3);
        assert_eq!(&wide[..3], b"log");
        assert_eq!(&wide[3..], &[0u8; 13]);
    }
}

#[test]
fn test_loads_return_unchanged_values() {
    for tracer in both_tracers() {
        let field = 0xDEAD_BEEFu32;
        assert_eq!(tracer.load(&field), 0xDEAD_BEEF);
        assert_eq!(*tracer.load_ref(&field), 0xDEAD_BEEF);

        let mut cell = 7u16;
        let slot = tracer.load_mut(&mut cell);
        *slot = *slot + 1;
        assert_eq!(cell, 8);
    }
}

#[test]
fn test_compare_matches_slice_ordering() {
    for tracer in both_tracers() {
        let pm = [1u8, 2, 3];
        assert_eq!(tracer.compare(&pm, &[1, 2, 3]), Ordering::Equal);
        assert_eq!(tracer.compare(&pm, &[1, 2, 4]), Ordering::Less);
        assert_eq!(tracer.compare(&pm, &[1, 2, 2]), Ordering::Greater);
    }
}

#[test]
fn test_continuations_run_once_and_results_pass_through() {
    for tracer in both_tracers() {
        let mut dst = [0u8; 8];
        let src = [9u8; 8];
        let mut runs = 0;
        let completed = tracer.store_nt(&mut dst, &src, |d, s| {
            runs += 1;
            d.copy_from_slice(s);
            s.len()
        });
        assert_eq!(runs, 1);
        assert_eq!(completed, 8);
        assert_eq!(dst, src);

        let mut flushes = 0;
        let done = tracer.flush(&dst, |region| {
            flushes += 1;
            region.len()
        });
        assert_eq!(flushes, 1);
        assert_eq!(done, 8);
    }
}

#[test]
fn test_partial_completion_is_returned_unchanged() {
    for tracer in both_tracers() {
        let mut dst = [0u8; 64];
        let src = [1u8; 64];
        let completed = tracer.store_nt(&mut dst, &src, |d, s| {
            d[..32].copy_from_slice(&s[..32]);
            32
        });
        assert_eq!(completed, 32);
        assert_eq!(&dst[..32], &src[..32]);
        assert_eq!(&dst[32..], &[0u8; 32]);

        let done = tracer.flush(&dst, |_| 16);
        assert_eq!(done, 16);
    }
}

#[test]
fn test_markers_touch_no_memory() {
    for tracer in both_tracers() {
        tracer.fence();
        tracer.barrier();
        tracer.commit();
        tracer.tx_start();
        tracer.tx_end();
    }
}
