//! Record shapes: one event per wrapper call, the documented kind, sizes
//! only where defined, addresses only on addressed kinds, and the caller's
//! origin.

use crate::common::{capture_tracer, disabled_tracer};
use pmemtrace::prelude::*;

#[test]
fn test_each_write_wrapper_emits_one_write() {
    let (tracer, sink) = capture_tracer();
    let mut field = 0u32;
    let mut block = [0u8; 8];

    tracer.store(&mut field, 1);
    tracer.store_through(&mut field, 2);
    tracer.assign(&mut field, 3);
    tracer.or_assign(&mut field, 4);
    tracer.and_assign(&mut field, 5);
    tracer.add_assign(&mut field, 6);
    tracer.sub_assign(&mut field, 7);
    tracer.fill(&mut block, 0);
    tracer.copy(&mut block, &[1, 2]);
    tracer.copy_str(&mut block, "x");

    assert_eq!(sink.kinds(), vec![EventKind::Write; 10]);
}

#[test]
fn test_scalar_events_record_field_address_and_width() {
    let (tracer, sink) = capture_tracer();

    let mut field = 0u64;
    let address = &field as *const u64 as usize;
    tracer.store(&mut field, 1);
    let value = tracer.load(&field);
    assert_eq!(value, 1);

    for event in sink.events() {
        assert_eq!(event.address(), Some(address));
        assert_eq!(event.primary_size(), 8);
        assert_eq!(event.secondary_size(), None);
    }
}

#[test]
fn test_bulk_events_record_range_start_and_length() {
    let (tracer, sink) = capture_tracer();

    let mut block = [0u8; 32];
    let start = block.as_ptr() as usize;
    tracer.fill(&mut block, 0xAB);
    tracer.copy(&mut block, &[0u8; 16]);
    let copied = tracer.copy_str(&mut block, "wal-segment-000042");
    assert_eq!(copied, 18);
    tracer.compare(&block, &[0u8; 32]);

    let events = sink.events();
    assert_eq!(
        events.iter().map(|e| e.kind()).collect::<Vec<_>>(),
        vec![
            EventKind::Write,
            EventKind::Write,
            EventKind::Write,
            EventKind::Read
        ]
    );
    assert_eq!(
        events.iter().map(|e| e.primary_size()).collect::<Vec<_>>(),
        vec![32, 16, 18, 32]
    );
    for event in events {
        assert_eq!(event.address(), Some(start));
    }
}

#[test]
fn test_completion_kinds_carry_both_sizes() {
    let (tracer, sink) = capture_tracer();

    let mut dst = [0u8; 64];
    let src = [7u8; 64];
    tracer.store_nt(&mut dst, &src, |d, s| {
        d[..48].copy_from_slice(&s[..48]);
        48
    });
    tracer.flush(&dst, |_| 64);

    let events = sink.events();
    assert_eq!(events[0].kind(), EventKind::NontemporalWrite);
    assert_eq!(events[0].primary_size(), 64);
    assert_eq!(events[0].secondary_size(), Some(48));
    assert_eq!(events[0].address(), Some(dst.as_ptr() as usize));

    assert_eq!(events[1].kind(), EventKind::Flush);
    assert_eq!(events[1].primary_size(), 64);
    assert_eq!(events[1].secondary_size(), Some(64));
}

#[test]
fn test_boundary_kinds_carry_no_address() {
    let (tracer, sink) = capture_tracer();

    tracer.fence();
    tracer.barrier();
    tracer.commit();
    tracer.tx_start();
    tracer.tx_end();

    let events = sink.events();
    assert_eq!(
        events.iter().map(|e| e.kind()).collect::<Vec<_>>(),
        vec![
            EventKind::Fence,
            EventKind::Barrier,
            EventKind::Commit,
            EventKind::TxStart,
            EventKind::TxEnd
        ]
    );
    for event in events {
        assert_eq!(event.address(), None);
        assert_eq!(event.secondary_size(), None);
    }
}

#[test]
fn test_only_completion_kinds_carry_secondary_size() {
    let (tracer, sink) = capture_tracer();

    let mut field = 0u8;
    let mut block = [0u8; 4];
    tracer.store(&mut field, 1);
    tracer.load(&field);
    tracer.load_mut(&mut field);
    tracer.fill(&mut block, 0);
    tracer.compare(&block, &block.clone());
    tracer.fence();
    tracer.commit();

    for event in sink.events() {
        assert!(
            !event.kind().has_completion(),
            "unexpected completion kind {:?}",
            event.kind()
        );
        assert_eq!(event.secondary_size(), None);
    }
}

#[test]
fn test_origin_names_this_call_site() {
    let (tracer, sink) = capture_tracer();

    let mut field = 0u32;
    let line = line!() + 1;
    tracer.store(&mut field, 1);

    let events = sink.events();
    assert_eq!(events[0].origin().file(), file!());
    assert_eq!(events[0].origin().line(), line);
}

#[test]
fn test_marker_origin_names_this_call_site() {
    let (tracer, sink) = capture_tracer();

    let line = line!() + 1;
    tracer.tx_start();

    let events = sink.events();
    assert_eq!(events[0].origin().file(), file!());
    assert_eq!(events[0].origin().line(), line);
}

#[test]
fn test_disabled_mask_suppresses_every_wrapper() {
    let (tracer, sink) = disabled_tracer();

    let mut field = 0u64;
    let mut block = [0u8; 8];
    tracer.store(&mut field, 1);
    tracer.store_through(&mut field, 2);
    tracer.assign(&mut field, 3);
    tracer.or_assign(&mut field, 1);
    tracer.and_assign(&mut field, 1);
    tracer.add_assign(&mut field, 1);
    tracer.sub_assign(&mut field, 1);
    tracer.fill(&mut block, 0);
    tracer.copy(&mut block, &[1, 2, 3]);
    tracer.copy_str(&mut block, "x");
    tracer.store_nt(&mut block, &[9u8; 8], |d, s| {
        d.copy_from_slice(s);
        s.len()
    });
    tracer.load(&field);
    tracer.load_ref(&field);
    tracer.load_mut(&mut field);
    tracer.compare(&block, &[9u8; 8]);
    tracer.flush(&block, |r| r.len());
    tracer.fence();
    tracer.barrier();
    tracer.commit();
    tracer.tx_start();
    tracer.tx_end();

    assert!(sink.is_empty());
}

#[test]
fn test_runtime_toggle_takes_effect_between_calls() {
    let (tracer, sink) = disabled_tracer();
    let mut field = 0u32;

    tracer.store(&mut field, 1);
    assert!(sink.is_empty());

    tracer.mask().enable();
    tracer.store(&mut field, 2);
    assert_eq!(sink.len(), 1);

    tracer.mask().disable();
    tracer.store(&mut field, 3);
    assert_eq!(sink.len(), 1);
    assert_eq!(field, 3);
}
