//! Simulator end-to-end tests.
//!
//! Runs short textual traces through the full driver and checks the
//! resulting snapshot, including partial results after a bad line.

use std::io::{BufReader, Cursor, Write};

use cachesim_core::common::{AccessRecord, AccessType, ConfigError, TraceError};
use cachesim_core::config::{CacheConfig, ReplacementPolicy};
use cachesim_core::sim::Simulator;
use pretty_assertions::assert_eq;

use crate::common::{TestContext, addr_in_set};

fn reference_lru() -> TestContext {
    TestContext::new(1, 1, 16, ReplacementPolicy::Lru)
}

#[test]
fn repeated_read_is_half_misses() {
    let mut ctx = reference_lru();
    let report = ctx.run("r 0x0000\nr 0x0000\n");

    assert!(report.error.is_none());
    assert_eq!(report.accesses, 2);
    assert_eq!(report.snapshot.read.accesses, 2);
    assert_eq!(report.snapshot.read.misses, 1);
    assert_eq!(report.snapshot.total.misses, 1);
    assert_eq!(report.snapshot.read.miss_rate, Some(50.0));
    assert_eq!(report.snapshot.write.miss_rate, None);
    assert_eq!(
        report.snapshot.to_string(),
        "1 50.000000% 1 50.000000% 0 nan% "
    );
}

#[test]
fn conflicting_reads_all_miss() {
    let mut ctx = reference_lru();
    let report = ctx.run("r 0x0000\nr 0x0400\n");

    assert_eq!(report.snapshot.read.misses, 2);
    assert_eq!(report.snapshot.total.miss_rate, Some(100.0));
    assert_eq!(
        report.snapshot.to_string(),
        "2 100.000000% 2 100.000000% 0 nan% "
    );
}

#[test]
fn reads_and_writes_counted_separately() {
    let mut ctx = TestContext::new(1, 2, 64, ReplacementPolicy::Lru);
    let report = ctx.run("r 0x100\nw 0x100\nw 0x2000\nr 0x2000\nw 0x4000\n");

    let s = report.snapshot;
    assert_eq!((s.read.accesses, s.read.misses), (2, 1));
    assert_eq!((s.write.accesses, s.write.misses), (3, 2));
    assert_eq!((s.total.accesses, s.total.misses), (5, 3));
}

#[test]
fn bad_line_stops_run_but_keeps_partial_stats() {
    let mut ctx = reference_lru();
    let report = ctx.run("r 0x0\nw 0x10\nbogus\nr 0x20\n");

    assert_eq!(report.accesses, 2);
    assert_eq!(report.snapshot.total.accesses, 2);
    assert_eq!(report.snapshot.total.misses, 2);
    assert!(matches!(
        report.error,
        Some(TraceError::UnknownKind { line_number: 3, .. })
    ));
}

#[test]
fn bad_address_stops_run() {
    let mut ctx = reference_lru();
    let report = ctx.run("r 0x0\nw 0xnothex\n");
    assert_eq!(report.accesses, 1);
    assert!(matches!(
        report.error,
        Some(TraceError::InvalidAddress { line_number: 2, .. })
    ));
}

#[test]
fn empty_trace_reports_no_rates() {
    let mut ctx = reference_lru();
    let report = ctx.run("");
    assert_eq!(report.accesses, 0);
    assert_eq!(report.snapshot.to_string(), "0 nan% 0 nan% 0 nan% ");
}

#[test]
fn process_and_finalize_match_run() {
    let mut ctx = TestContext::new(1, 2, 64, ReplacementPolicy::Lru);
    let g = ctx.geometry();
    let records = [
        AccessRecord::read(addr_in_set(&g, 0, 1)),
        AccessRecord::read(addr_in_set(&g, 0, 2)),
        AccessRecord::write(addr_in_set(&g, 0, 1)),
        AccessRecord::write(addr_in_set(&g, 0, 3)),
        AccessRecord::read(addr_in_set(&g, 0, 2)),
    ];
    for record in &records {
        let _ = ctx.sim.process(record);
    }
    let direct = ctx.sim.finalize();

    let trace: String = records
        .iter()
        .map(|r| {
            let kind = match r.kind {
                AccessType::Read => 'r',
                AccessType::Write => 'w',
            };
            format!("{kind} {:#x}\n", r.address)
        })
        .collect();
    let mut fresh = TestContext::new(1, 2, 64, ReplacementPolicy::Lru);
    let report = fresh.run(&trace);

    assert_eq!(report.snapshot, direct);
    // A, B, A(hit), C evicts B, B misses again.
    assert_eq!(direct.total.misses, 4);
    assert_eq!(direct.write.misses, 1);
}

#[test]
fn random_policy_runs_replay_with_same_seed() {
    let trace: String = (0..2000u64)
        .map(|i| {
            let kind = if i % 3 == 0 { 'w' } else { 'r' };
            format!("{kind} {:#x}\n", (i * 7919) % 0x8000)
        })
        .collect();

    let mut a = TestContext::new(1, 4, 32, ReplacementPolicy::Random);
    let mut b = TestContext::new(1, 4, 32, ReplacementPolicy::Random);
    assert_eq!(a.run(&trace).snapshot, b.run(&trace).snapshot);
}

#[test]
fn lru_and_random_agree_when_direct_mapped() {
    let trace: String = (0..500u64)
        .map(|i| format!("r {:#x}\n", (i * 0x1040) % 0x10000))
        .collect();

    let mut lru = TestContext::new(1, 1, 16, ReplacementPolicy::Lru);
    let mut random = TestContext::new(1, 1, 16, ReplacementPolicy::Random);
    assert_eq!(lru.run(&trace).snapshot, random.run(&trace).snapshot);
}

#[test]
fn runs_trace_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "r 0x0000").unwrap();
    writeln!(file, "w 0x0400").unwrap();
    writeln!(file, "r 0x0000").unwrap();
    file.flush().unwrap();

    let config = CacheConfig {
        capacity_kb: 1,
        associativity: 1,
        block_size: 16,
        policy: ReplacementPolicy::Lru,
        seed: Some(1),
    };
    let mut sim = Simulator::new(&config).unwrap();
    let report = sim.run(BufReader::new(file.reopen().unwrap()));

    assert!(report.error.is_none());
    assert_eq!(
        report.snapshot.to_string(),
        "3 100.000000% 2 100.000000% 1 100.000000% "
    );
}

#[test]
fn line_limit_stops_run_without_error() {
    let mut ctx = reference_lru();
    let trace = "r 0x0\nr 0x400\nr 0x800\nr 0xc00\nr 0x1000\n";
    let report = ctx.sim.run_with_limit(Cursor::new(trace), 3);

    assert!(report.error.is_none());
    assert_eq!(report.accesses, 3);
    assert_eq!(report.snapshot.total.accesses, 3);
    assert_eq!(report.snapshot.read.misses, 3);
}

#[test]
fn line_limit_ignores_bad_lines_past_the_limit() {
    let mut ctx = reference_lru();
    let report = ctx.sim.run_with_limit(Cursor::new("r 0x0\nw 0x10\nbogus\n"), 2);

    assert!(report.error.is_none());
    assert_eq!(report.accesses, 2);
}

#[test]
fn trace_shorter_than_limit_runs_to_end() {
    let mut ctx = reference_lru();
    let report = ctx.sim.run_with_limit(Cursor::new("r 0x0\nr 0x0\n"), 2);

    assert!(report.error.is_none());
    assert_eq!(report.accesses, 2);
    assert_eq!(report.snapshot.read.misses, 1);
}

#[test]
fn invalid_config_is_rejected_before_simulation() {
    let config = CacheConfig {
        capacity_kb: 1,
        associativity: 8,
        block_size: 256,
        policy: ReplacementPolicy::Random,
        seed: None,
    };
    assert!(matches!(
        Simulator::new(&config),
        Err(ConfigError::NoSets { .. })
    ));
}

#[test]
fn snapshot_serializes_to_json() {
    let mut ctx = reference_lru();
    let report = ctx.run("r 0x0\nr 0x0\n");
    let json = serde_json::to_value(report.snapshot).unwrap();

    assert_eq!(json["read"]["accesses"], 2);
    assert_eq!(json["read"]["misses"], 1);
    assert_eq!(json["read"]["miss_rate"], 50.0);
    assert!(json["write"]["miss_rate"].is_null());
    assert_eq!(json["total"]["misses"], 1);
}
