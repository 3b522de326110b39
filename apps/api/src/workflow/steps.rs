use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
}

pub const STEP_COUNT: usize = 8;

pub const STEPS: [Step; STEP_COUNT] = [
    Step { id: "01", title: "Problem Statement", slug: "01-problem" },
    Step { id: "02", title: "Market Analysis", slug: "02-market" },
    Step { id: "03", title: "Architecture Design", slug: "03-architecture" },
    Step { id: "04", title: "High Level Design", slug: "04-hld" },
    Step { id: "05", title: "Low Level Design", slug: "05-lld" },
    Step { id: "06", title: "Build Track", slug: "06-build" },
    Step { id: "07", title: "Testing Phase", slug: "07-test" },
    Step { id: "08", title: "Shipment", slug: "08-ship" },
];

pub fn index_of(id: &str) -> Option<usize> {
    STEPS.iter().position(|s| s.id == id)
}
