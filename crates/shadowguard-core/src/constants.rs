//! Shared constants for the shadowguard resolver.

/// Project-level configuration file, looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "shadowguard.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "SHADOWGUARD_LOG";

/// Canonical source root, relative to the project directory.
pub const DEFAULT_MAIN_ROOT: &str = "main/java";

/// Legacy/adapter source root, relative to the project directory.
pub const DEFAULT_CLEAN_ROOT: &str = "app/src/main/java_clean";

/// Source file extension scanned in both roots.
pub const DEFAULT_EXTENSION: &str = "java";

/// Generated pattern file, relative to the project directory.
pub const DEFAULT_OUTPUT_PATH: &str = "build/generated/dup-fqcn-excludes.txt";

/// Maximum number of kept entries listed in a duplicate report.
pub const DEFAULT_REPORT_MAX_ENTRIES: usize = 200;

/// Tool name recorded in the generated file header.
pub const GENERATOR_NAME: &str = "shadowguard";

/// Hand-maintained exclusion prefixes that must never ship, independent of
/// what auto-detection finds. Each entry is a path prefix with a trailing `*`.
pub const DEFAULT_MANUAL_EXCLUDES: &[&str] = &[
    "com/example/lms/guard/AnswerSanitizer*",
    "com/example/lms/service/onnx/OnnxCrossEncoderReranker*",
    "com/example/lms/service/rag/AnalyzeWebSearchRetriever*",
    "com/example/lms/service/rag/auth/DomainWhitelist*",
    "com/example/lms/service/rag/fusion/RerankCanonicalizer*",
    "com/example/lms/service/rag/fusion/WeightedPowerMeanFuser*",
    "com/example/lms/service/rag/handler/DynamicRetrievalHandlerChain*",
    "com/example/lms/service/rag/handler/KnowledgeGraphHandler*",
    "com/example/lms/service/rag/overdrive/AngerOverdriveNarrower*",
    "com/example/lms/service/rag/overdrive/OverdriveGuard*",
    "com/example/lms/service/rag/rerank/DppDiversityReranker*",
    "service/rag/DppDiversityReranker*",
    "com/example/lms/strategy/RetrievalOrderService*",
    "com/example/lms/trace/TraceContext*",
    // default-package duplicates
    "service/rag/planner/SelfAskPlanner*",
    "trace/TimeBudget*",
];
