use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use coreopts_core::NegotiationOutcome;
use serde_json::{Value, json};

/// Per-case JSONL trace, written under the temp dir when
/// `COREOPTS_E2E_LOG` is set and discarded otherwise.
pub struct E2eLogger {
    writer: Option<Box<dyn Write>>,
    run_id: String,
    checks: usize,
}

impl E2eLogger {
    pub fn new(case_name: &str) -> Self {
        let writer = if std::env::var("COREOPTS_E2E_LOG").is_ok() {
            let dir = std::env::temp_dir().join("coreopts_e2e");
            let _ = std::fs::create_dir_all(&dir);
            std::fs::File::create(dir.join(format!("{case_name}.jsonl")))
                .ok()
                .map(|f| Box::new(f) as Box<dyn Write>)
        } else {
            None
        };
        Self {
            writer,
            run_id: format!("{case_name}-{}", now_ms()),
            checks: 0,
        }
    }

    pub fn event(&mut self, event: &str, data: Value) {
        if let Some(ref mut w) = self.writer {
            let line = json!({
                "run_id": self.run_id,
                "event": event,
                "ts_ms": now_ms(),
                "data": data,
            });
            let _ = writeln!(w, "{line}");
        }
    }

    /// Record a checked property; the caller still asserts it.
    pub fn invariant(&mut self, id: &str, passed: bool, detail: &str) {
        self.checks += 1;
        self.event(
            "invariant",
            json!({ "id": id, "passed": passed, "detail": detail }),
        );
    }

    pub fn outcome(&mut self, profile: &str, outcome: &NegotiationOutcome) {
        self.event(
            "outcome",
            json!({
                "profile": profile,
                "version": outcome.version.number(),
                "language": outcome.language.map(|l| l.tag()),
                "localized": outcome.localized,
                "registered": outcome.registered(),
                "categories_supported": outcome.categories_supported,
                "acquired": outcome.lifecycle.acquired,
                "released": outcome.lifecycle.released,
            }),
        );
    }

    pub fn complete(&mut self, passed: bool) {
        let checks = self.checks;
        self.event("complete", json!({ "passed": passed, "total_checks": checks }));
    }
}

fn now_ms() -> u64 {
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    u64::try_from(ms).unwrap_or(u64::MAX)
}
