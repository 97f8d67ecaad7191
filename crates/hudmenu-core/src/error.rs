use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("unknown {kind} tag `{tag}`")]
    UnknownTag { kind: &'static str, tag: String },
    #[error("a cycling list needs at least one value")]
    EmptyList,
    #[error("list index {index} is out of range for {len} values")]
    ListIndexOutOfRange { index: usize, len: usize },
    #[error("invalid menu configuration: {0}")]
    Config(#[from] serde_json::Error),
}
