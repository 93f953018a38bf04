use {
    crate::env::Env,
    prometheus::{
        proto::MetricFamily, CounterVec, HistogramOpts, HistogramTimer, HistogramVec, Opts,
        Registry,
    },
};

#[derive(Clone, Debug)]
pub struct State {
    pub debug: bool,
    registry: Registry,
    invocation_counter: CounterVec,
    invocation_duration: HistogramVec,
}

impl State {
    pub fn new() -> prometheus::Result<State> {
        State::with(
            Env::is_debug_mode(),
            &Env::parse_metric_namespace(),
            &Env::parse_metric_subsystem(),
        )
    }

    pub fn with(debug: bool, namespace: &str, subsystem: &str) -> prometheus::Result<State> {
        let registry = Registry::new();

        let invocation_counter = CounterVec::new(
            Opts::new("invocation_count_total", "Counter of handler invocations.")
                .namespace(namespace)
                .subsystem(subsystem),
            &["proto"],
        )?;

        let invocation_duration = HistogramVec::new(
            HistogramOpts::new(
                "invocation_duration_seconds",
                "Histogram of the time (in seconds) each invocation took.",
            )
            .namespace(namespace)
            .subsystem(subsystem)
            .buckets(vec![
                0.001, 0.003, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["proto"],
        )?;

        registry.register(Box::new(invocation_counter.clone()))?;
        registry.register(Box::new(invocation_duration.clone()))?;

        Ok(State {
            debug,
            registry,
            invocation_counter,
            invocation_duration,
        })
    }

    pub fn start_timer(&self, proto: &str) -> HistogramTimer {
        self.invocation_duration
            .with_label_values(&[proto])
            .start_timer()
    }

    pub fn increase_invocation_counter(&self, proto: &str) {
        self.invocation_counter.with_label_values(&[proto]).inc();
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }
}
