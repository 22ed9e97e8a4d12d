#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use modkit::{HostRuntime, Module, ModuleCtx};
use serde_json::json;
use tokio_util::sync::CancellationToken;

type Journal = Arc<Mutex<Vec<String>>>;

/// Module that records every lifecycle call into a shared journal.
struct Recording {
    name: &'static str,
    journal: Journal,
    fail_at: Option<&'static str>,
}

impl Recording {
    fn new(name: &'static str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name,
            journal: journal.clone(),
            fail_at: None,
        })
    }

    /// Fails the given lifecycle stage (`"provision"` or `"start"`).
    fn failing(name: &'static str, stage: &'static str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name,
            journal: journal.clone(),
            fail_at: Some(stage),
        })
    }

    fn record(&self, event: &str) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{event}", self.name));
    }
}

#[async_trait]
impl Module for Recording {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn provision(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        self.record(&format!("provision({})", ctx.raw_config()));
        if self.fail_at == Some("provision") {
            anyhow::bail!("boom");
        }
        Ok(())
    }

    async fn start(&self) -> anyhow::Result<()> {
        self.record("start");
        if self.fail_at == Some("start") {
            anyhow::bail!("port in use");
        }
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        self.record("stop");
        Ok(())
    }
}

fn config() -> Arc<HashMap<String, serde_json::Value>> {
    let mut modules = HashMap::new();
    modules.insert("alpha".to_owned(), json!({ "config": { "level": 1 } }));
    Arc::new(modules)
}

#[tokio::test]
async fn run_follows_lifecycle_order() {
    let journal = Journal::default();
    let token = CancellationToken::new();
    token.cancel();

    HostRuntime::builder(config())
        .module(Recording::new("alpha", &journal))
        .module(Recording::new("beta", &journal))
        .cancellation_token(token)
        .build()
        .run()
        .await
        .unwrap();

    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            r#"alpha:provision({"level":1})"#,
            "beta:provision(null)",
            "alpha:start",
            "beta:start",
            "beta:stop",
            "alpha:stop",
        ]
    );
}

#[tokio::test]
async fn provisioning_failure_aborts_before_start() {
    let journal = Journal::default();

    let err = HostRuntime::builder(config())
        .module(Recording::failing("alpha", "provision", &journal))
        .module(Recording::new("beta", &journal))
        .build()
        .run()
        .await
        .unwrap_err();

    assert_eq!(format!("{err:#}"), "module 'alpha' failed to provision: boom");
    assert_eq!(
        *journal.lock().unwrap(),
        vec![r#"alpha:provision({"level":1})"#]
    );
}

#[tokio::test]
async fn run_waits_for_cancellation() {
    let journal = Journal::default();
    let token = CancellationToken::new();

    let runtime = HostRuntime::builder(config())
        .module(Recording::new("alpha", &journal))
        .cancellation_token(token.clone())
        .build();
    let handle = tokio::spawn(runtime.run());

    tokio::task::yield_now().await;
    token.cancel();
    handle.await.unwrap().unwrap();

    assert_eq!(journal.lock().unwrap().last().unwrap(), "alpha:stop");
}

#[tokio::test]
async fn start_failure_stops_only_started_modules() {
    let journal = Journal::default();

    let err = HostRuntime::builder(config())
        .module(Recording::new("alpha", &journal))
        .module(Recording::failing("beta", "start", &journal))
        .module(Recording::new("gamma", &journal))
        .build()
        .run()
        .await
        .unwrap_err();

    assert_eq!(format!("{err:#}"), "module 'beta' failed to start: port in use");
    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            r#"alpha:provision({"level":1})"#,
            "beta:provision(null)",
            "gamma:provision(null)",
            "alpha:start",
            "beta:start",
            "alpha:stop",
        ]
    );
}
