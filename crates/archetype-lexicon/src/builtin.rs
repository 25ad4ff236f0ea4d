//! The built-in lexicon.
//!
//! Weights: primary 0.7–1.0, secondary 0.5–0.9, contextual 0.2–0.4.
//! Contextual weights are boosted by the pattern's context rule (1.5x) when a
//! trigger signal co-occurs. Hybrid thresholds and override floors are
//! expressed on normalized scores.

use archetype_core::config::defaults::DEFAULT_CONTEXT_MULTIPLIER;
use archetype_core::IndicatorCategory::{self, Contextual as C, Primary as P, Secondary as S};
use archetype_core::PatternType;

use crate::definition::{
    CombinationRuleDef, ContextRuleDef, CustomizationDef, IndicatorDef, LexiconDef,
    OverrideRuleDef, VocabularyDef,
};

/// Version tag of the built-in table. Bump on any weight or term change.
pub const BUILTIN_VERSION: &str = "builtin-1.0.0";

type IndicatorRow = (&'static str, f64, IndicatorCategory);

const RAG_INDICATORS: &[IndicatorRow] = &[
    ("rag", 1.0, P),
    ("retrieval", 1.0, P),
    ("retrieve", 1.0, P),
    ("knowledge base", 1.0, P),
    ("semantic search", 1.0, P),
    ("vector store", 0.9, P),
    ("embedding", 0.8, P),
    ("document", 0.9, S),
    ("citation", 0.7, S),
    ("corpus", 0.6, S),
    ("chunk", 0.5, S),
    ("question answering", 0.7, S),
    ("answer", 0.6, S),
    ("grounded", 0.6, S),
    ("search", 0.4, C),
    ("chatbot", 0.4, C),
    ("faq", 0.4, C),
    ("context", 0.3, C),
];

const AGENT_INDICATORS: &[IndicatorRow] = &[
    ("agent", 1.0, P),
    ("autonomous", 1.0, P),
    ("decide", 0.9, P),
    ("reason", 0.8, P),
    ("plan", 0.7, P),
    ("decision", 0.8, P),
    ("action", 0.5, S),
    ("goal", 0.6, S),
    ("adapt", 0.5, S),
    ("iterate", 0.5, S),
    ("tool use", 0.6, S),
    ("search", 0.4, C),
    ("explore", 0.4, C),
    ("intelligent", 0.4, C),
    ("dynamic", 0.3, C),
];

const TOOL_INDICATORS: &[IndicatorRow] = &[
    ("api", 0.8, P),
    ("crud", 1.0, P),
    ("endpoint", 0.9, P),
    ("rest endpoint", 1.0, P),
    ("function calling", 1.0, P),
    ("webhook", 0.8, P),
    ("tool", 0.9, P),
    ("external service", 0.6, S),
    ("third-party", 0.6, S),
    ("fetch", 0.5, S),
    ("database", 0.5, S),
    ("query", 0.5, S),
    ("integration", 0.6, S),
    ("lookup", 0.4, C),
    ("store", 0.3, C),
    ("call", 0.3, C),
];

const WORKFLOW_INDICATORS: &[IndicatorRow] = &[
    ("workflow", 1.0, P),
    ("pipeline", 0.9, P),
    ("sequential", 0.9, P),
    ("approval", 0.8, P),
    ("form submission", 1.0, P),
    ("step", 0.7, P),
    ("process", 0.6, S),
    ("stage", 0.6, S),
    ("schedule", 0.6, S),
    ("notification", 0.5, S),
    ("automate", 0.6, S),
    ("trigger", 0.5, S),
    ("form", 0.4, C),
    ("validate", 0.3, C),
    ("then", 0.2, C),
];

const MAPREDUCE_INDICATORS: &[IndicatorRow] = &[
    ("mapreduce", 1.0, P),
    ("map-reduce", 1.0, P),
    ("batch", 0.9, P),
    ("parallel", 0.9, P),
    ("aggregate", 0.8, P),
    ("bulk", 0.8, P),
    ("summarize", 0.6, S),
    ("thousands", 0.6, S),
    ("millions", 0.6, S),
    ("dataset", 0.6, S),
    ("split", 0.5, S),
    ("combine", 0.5, S),
    ("process", 0.4, C),
    ("analyze", 0.4, C),
    ("report", 0.3, C),
];

const MULTI_AGENT_INDICATORS: &[IndicatorRow] = &[
    ("multi-agent", 1.0, P),
    ("multiple agents", 1.0, P),
    ("collaborate", 0.9, P),
    ("orchestrator", 0.8, P),
    ("specialist", 0.7, P),
    ("delegate", 0.8, P),
    ("team", 0.5, S),
    ("role", 0.5, S),
    ("debate", 0.6, S),
    ("consensus", 0.6, S),
    ("handoff", 0.6, S),
    ("coordinate", 0.4, C),
    ("review", 0.3, C),
];

const STRUCTURED_OUTPUT_INDICATORS: &[IndicatorRow] = &[
    ("structured output", 1.0, P),
    ("json", 0.9, P),
    ("schema", 0.9, P),
    ("extract", 0.8, P),
    ("parse", 0.7, P),
    ("classify", 0.7, P),
    ("field", 0.5, S),
    ("format", 0.5, S),
    ("typed", 0.6, S),
    ("invoice", 0.5, S),
    ("entity", 0.5, S),
    ("form", 0.3, C),
    ("validate", 0.4, C),
];

/// Indicator rows per scored pattern.
///
/// Exhaustive over `PatternType`: a new variant must be given a row here.
fn indicator_rows(pattern: PatternType) -> &'static [IndicatorRow] {
    match pattern {
        PatternType::Rag => RAG_INDICATORS,
        PatternType::Agent => AGENT_INDICATORS,
        PatternType::Tool => TOOL_INDICATORS,
        PatternType::Workflow => WORKFLOW_INDICATORS,
        PatternType::MapReduce => MAPREDUCE_INDICATORS,
        PatternType::MultiAgent => MULTI_AGENT_INDICATORS,
        PatternType::StructuredOutput => STRUCTURED_OUTPUT_INDICATORS,
        PatternType::Hybrid => &[],
    }
}

/// Complexity signals that amplify a pattern's contextual indicators.
fn context_triggers(pattern: PatternType) -> &'static [&'static str] {
    match pattern {
        PatternType::Rag => &["accurate", "grounded"],
        PatternType::Agent => &["intelligent", "autonomous", "adaptive", "smart"],
        PatternType::Tool => &["real-time"],
        PatternType::Workflow => &["multi-step", "sequential"],
        PatternType::MapReduce => &["large-scale", "high-volume", "concurrent"],
        PatternType::MultiAgent => &["collaborative", "autonomous"],
        PatternType::StructuredOutput => &["strict", "validated"],
        PatternType::Hybrid => &[],
    }
}

fn customization_items(pattern: PatternType) -> &'static [&'static str] {
    match pattern {
        PatternType::Rag => &[
            "Define the retrieval corpus and how often it is re-ingested",
            "Define chunking and re-ranking strategy",
            "Choose the embedding model and vector store",
            "Specify the citation format for grounded answers",
        ],
        PatternType::Agent => &[
            "Enumerate the tools and actions the agent may take",
            "Define the stopping condition and iteration budget",
            "Specify the planning and reasoning loop",
            "Add guardrails around irreversible actions",
        ],
        PatternType::Tool => &[
            "Define the external API contracts and authentication",
            "Specify input validation and error mapping",
            "Decide the retry and timeout policy",
        ],
        PatternType::Workflow => &[
            "List the workflow steps and their order",
            "Define state transitions and failure handling per step",
            "Identify manual approval points",
        ],
        PatternType::MapReduce => &[
            "Define the map unit (per-item work)",
            "Define the reduce and aggregation strategy",
            "Set batch size and parallelism limits",
        ],
        PatternType::MultiAgent => &[
            "Define each agent's role and responsibilities",
            "Specify the coordination and hand-off protocol",
            "Decide how disagreements between agents are resolved",
        ],
        PatternType::StructuredOutput => &[
            "Define the output schema",
            "Specify validation and repair on schema violations",
            "Provide representative extraction examples",
        ],
        PatternType::Hybrid => &[
            "Define how data hands off between the two patterns",
            "Decide which pattern owns error handling and retries",
        ],
    }
}

const GENERAL_TERMS: &[&str] = &[
    "account", "admin", "app", "application", "customer", "dashboard", "data",
    "feature", "file", "image", "login", "message", "page", "product", "profile",
    "record", "service", "settings", "system", "ticket", "upload", "user",
    "rest api",
];

const COMPLEXITY_TERMS: &[&str] = &[
    "simple", "basic", "minimal", "complex", "advanced", "intelligent",
    "autonomous", "adaptive", "smart", "large-scale", "high-volume", "strict",
    "validated", "accurate", "grounded", "collaborative", "sequential", "reliable",
];

const HIGH_COMPLEXITY_TERMS: &[&str] = &[
    "real-time", "real time", "concurrent", "concurrency", "multi-step",
    "authentication", "authorization", "distributed", "scalable",
    "high availability", "streaming", "encryption", "multi-tenant", "compliance",
    "fault-tolerant", "low-latency",
];

const TECHNICAL_TERMS: &[&str] = &[
    "api", "rest", "rest api", "graphql", "grpc", "json", "xml", "sql",
    "database", "postgres", "redis", "cache", "queue", "kafka", "websocket",
    "llm", "embedding", "vector", "python", "typescript", "rust", "docker",
    "kubernetes", "oauth", "jwt", "http", "cli", "frontend", "backend",
    "microservice", "serverless", "cron",
];

const INTEGRATION_TERMS: &[&str] = &[
    "knowledge base", "third-party", "external api", "external service",
    "webhook", "slack", "email", "sms", "stripe", "payment gateway",
    "salesforce", "crm", "github", "jira", "google drive", "s3", "calendar",
    "vector database", "vector store", "database", "erp", "twilio", "zendesk",
    "sharepoint", "notion",
];

const ACTION_TERMS: &[&str] = &[
    "build", "create", "store", "search", "answer", "retrieve", "process",
    "send", "generate", "extract", "classify", "summarize", "analyze",
    "validate", "update", "delete", "fetch", "notify", "route", "decide",
    "reason", "plan", "schedule", "approve", "upload", "import", "export",
    "sync", "monitor", "track", "display", "compute", "aggregate", "call",
    "query", "review", "translate", "transform", "manage", "allow", "enable",
    "support", "handle", "integrate", "respond", "collect", "save", "read",
    "write", "parse", "coordinate", "delegate", "collaborate", "debate",
    "recommend", "detect", "filter", "sort", "convert", "submit", "register",
    "authenticate", "show", "list", "edit",
];

fn strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl LexiconDef {
    /// The built-in, human-curated lexicon.
    pub fn builtin() -> Self {
        let indicators = PatternType::ALL
            .iter()
            .flat_map(|&pattern| {
                indicator_rows(pattern)
                    .iter()
                    .map(move |&(keyword, weight, category)| IndicatorDef {
                        pattern,
                        keyword: keyword.to_string(),
                        weight,
                        category,
                    })
            })
            .collect();

        let context_rules = PatternType::SCORED
            .iter()
            .filter(|p| !context_triggers(**p).is_empty())
            .map(|&pattern| ContextRuleDef {
                pattern,
                triggers: strings(context_triggers(pattern)),
                multiplier: DEFAULT_CONTEXT_MULTIPLIER,
            })
            .collect();

        let overrides = vec![
            OverrideRuleDef {
                pattern: PatternType::Tool,
                terms: strings(&["crud", "rest endpoint", "rest api"]),
                floor: 0.5,
            },
            OverrideRuleDef {
                pattern: PatternType::Workflow,
                terms: strings(&["form submission"]),
                floor: 0.5,
            },
        ];

        // Evaluated in order; the first firing rule wins.
        let combinations = vec![
            CombinationRuleDef {
                name: "intelligent_rag".to_string(),
                first: PatternType::Rag,
                second: PatternType::Agent,
                min_normalized: 0.1,
                max_divergence: 0.7,
            },
            CombinationRuleDef {
                name: "integration_workflow".to_string(),
                first: PatternType::Tool,
                second: PatternType::Workflow,
                min_normalized: 0.1,
                max_divergence: 0.5,
            },
            CombinationRuleDef {
                name: "smart_processing".to_string(),
                first: PatternType::MapReduce,
                second: PatternType::Agent,
                min_normalized: 0.1,
                max_divergence: 0.5,
            },
        ];

        let customizations = PatternType::ALL
            .iter()
            .map(|&pattern| CustomizationDef {
                pattern,
                items: strings(customization_items(pattern)),
            })
            .collect();

        Self {
            version: BUILTIN_VERSION.to_string(),
            vocabulary: VocabularyDef {
                general: strings(GENERAL_TERMS),
                complexity: strings(COMPLEXITY_TERMS),
                high_complexity: strings(HIGH_COMPLEXITY_TERMS),
                technical: strings(TECHNICAL_TERMS),
                integration: strings(INTEGRATION_TERMS),
                actions: strings(ACTION_TERMS),
            },
            indicators,
            context_rules,
            overrides,
            combinations,
            customizations,
        }
    }
}
