//! Tracing support for the graph algorithms.
//!
//! Every algorithm entry point opens an `info_span!` named after itself.  When
//! the `tracing` feature is enabled, [`init_tracing`] installs a subscriber
//! that accumulates the wall time and count of closed spans per name on the
//! current thread.  When it's disabled, no-op replacements are provided.

use std::time::Duration;

/// Accumulated timing for all closed spans sharing one name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodTiming {
    pub name: &'static str,
    pub total: Duration,
    pub count: usize,
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use super::MethodTiming;

    thread_local! {
        static TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the timing subscriber as the global default.  Does nothing if
    /// called more than once or if another global subscriber is already set.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Returns the timings recorded on this thread, slowest first.
    pub fn method_timings() -> Vec<MethodTiming> {
        let mut timings: Vec<_> = TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(&name, &(total, count))| MethodTiming { name, total, count })
                .collect()
        });
        timings.sort_by(|a, b| b.total.cmp(&a.total));
        timings
    }

    pub fn reset_method_timings() {
        init_tracing();
        TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    pub fn dump_method_timings() {
        eprintln!("Method timings (desc):");
        for MethodTiming { name, total, count } in method_timings() {
            eprintln!("  {name}: {:?} ({}x)", total, count);
        }
    }

    pub use tracing::{Span, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::MethodTiming;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn method_timings() -> Vec<MethodTiming> {
        Vec::new()
    }

    pub fn reset_method_timings() {
        // No-op when tracing is disabled
    }

    pub fn dump_method_timings() {
        // No-op when tracing is disabled
    }

    // Provide a no-op macro replacement for info_span
    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::Span }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::Span }};
    }

    pub use info_span;

    #[derive(Clone, Debug)]
    pub struct Span;

    impl Span {
        pub fn entered(self) -> SpanGuard {
            SpanGuard
        }

        pub fn enter(&self) -> SpanGuard {
            SpanGuard
        }
    }

    pub struct SpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
