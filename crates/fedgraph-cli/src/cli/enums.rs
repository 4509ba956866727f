use clap::ValueEnum;

/// Output format for `fedgraph graph`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Nodes, edges and metadata as pretty-printed JSON
    #[value(name = "json")]
    Json,

    /// Graphviz DOT
    #[value(name = "dot")]
    Dot,

    /// Counts per node and edge kind
    #[value(name = "summary")]
    Summary,
}

/// Remote name matching
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Resolution {
    /// Names must match exactly
    #[value(name = "exact")]
    Exact,

    /// Exact, then ignoring case
    #[value(name = "case-insensitive")]
    CaseInsensitive,

    /// Exact, then ignoring case, then substring containment
    #[value(name = "fuzzy")]
    Fuzzy,
}
