/// Value of the PostgREST `Prefer` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefer {
    /// Do not echo the affected rows
    ReturnMinimal,
    /// Echo the affected rows as a JSON array
    ReturnRepresentation,
    /// Insert-or-update on the `on_conflict` target, no echo
    UpsertMinimal,
}

impl Prefer {
    pub fn header_value(&self) -> &'static str {
        match self {
            Self::ReturnMinimal => "return=minimal",
            Self::ReturnRepresentation => "return=representation",
            Self::UpsertMinimal => "resolution=merge-duplicates,return=minimal",
        }
    }
}
