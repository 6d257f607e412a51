mod source_kind;

pub use source_kind::SourceKind;
