//! Plan command report data structures.

use stagehand_pipeline::Plan;

use super::output::{Output, Report};

/// What a build would run, step by step.
#[derive(Debug)]
pub struct PlanReport {
    pub plan: Plan,
}

impl PlanReport {
    /// The plan as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.plan)
    }
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.plan.diagnostics {
            out.warning(&diagnostic.message);
        }

        for step in &self.plan.steps {
            if !step.enabled {
                out.key_value(step.name, "skipped");
                continue;
            }
            out.section(step.name);
            for (i, invocation) in step.invocations.iter().enumerate() {
                out.numbered_item(i + 1, &invocation.to_string());
            }
        }

        out.newline();
        let count = self.plan.invocation_count();
        out.preformatted(&format!(
            "{} {} would run",
            count,
            if count == 1 { "process" } else { "processes" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use stagehand_manifest::{Manifest, Pass, PassPhase};
    use stagehand_pipeline::Pipeline;

    use super::*;
    use crate::reports::BufferOutput;

    fn report() -> PlanReport {
        let mut manifest = Manifest::default();
        manifest.compiler.default_flags = vec!["-trimpath".to_string()];
        manifest.passes.push(Pass {
            name: "generate".to_string(),
            phase: PassPhase::Pre,
            command: "go".to_string(),
            args: vec!["generate".to_string(), "./...".to_string()],
            enabled: true,
        });

        let plan = Pipeline::new(manifest, vec!["./cmd/app".to_string()])
            .plan()
            .unwrap();
        PlanReport { plan }
    }

    #[test]
    fn test_render_text() {
        insta::assert_snapshot!(BufferOutput::render(&report()), @r"
        pre-passes:
          1. go generate ./...
        transpile: skipped
        style: skipped
        convert: skipped
        compile:
          1. go build -trimpath ./cmd/app
        post-passes: skipped

        2 processes would run
        ");
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();

        assert_eq!(json["steps"][0]["name"], "pre-passes");
        assert_eq!(json["steps"][4]["invocations"][0]["program"], "go");
        assert_eq!(json["steps"][4]["invocations"][0]["args"][0], "build");
        assert_eq!(json["steps"][5]["enabled"], false);
        assert_eq!(json["diagnostics"].as_array().unwrap().len(), 0);
    }
}
