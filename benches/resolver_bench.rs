use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use sysresolve::base::cancelable::CancelToken;
use sysresolve::completion::EventLoop;
use sysresolve::dns::{AddressPreference, HostLookup, ResolverConfig, SystemResolver};

struct FixedLookup;

impl HostLookup for FixedLookup {
    fn lookup(&self, _domain: &str) -> io::Result<Vec<IpAddr>> {
        Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
    }
}

/// Token operations are on every request's hot path.
fn benchmark_cancel_token(c: &mut Criterion) {
    c.bench_function("cancel_token_new", |b| b.iter(|| black_box(CancelToken::new())));

    let token = CancelToken::new();
    c.bench_function("cancel_token_is_canceled", |b| {
        b.iter(|| black_box(token.is_canceled()))
    });
}

/// Round trip through the worker pool and back onto the event loop,
/// with a lookup that never touches the network.
fn benchmark_round_trip(c: &mut Criterion) {
    let mut event_loop = EventLoop::new();
    let resolver = SystemResolver::with_lookup(
        Arc::new(event_loop.handle()),
        ResolverConfig::new().thread_count(2),
        Arc::new(FixedLookup),
    )
    .unwrap();

    c.bench_function("resolve_round_trip", |b| {
        b.iter(|| {
            resolver.resolve("bench.test", AddressPreference::Any, |result| {
                black_box(result.is_ok());
            });
            event_loop.blocking_run_one()
        })
    });
}

criterion_group!(benches, benchmark_cancel_token, benchmark_round_trip);
criterion_main!(benches);
