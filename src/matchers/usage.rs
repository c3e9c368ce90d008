/// How a field matcher is used, fixed at construction.
///
/// Negation inverts the match result and switches to the negated phrasing.
/// Item usage drops the `was ` prefix from mismatch text; the
/// enclosing [`IterableMatcher`](crate::IterableMatcher) frames it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Usage {
    /// `has_*`, `was_logged_by`
    #[default]
    Standalone,
    /// `does_not_have_*`, `was_not_logged_by`
    StandaloneNegated,
    /// `with_*`, `logged_by`
    Item,
    /// `without_*`, `not_logged_by`
    ItemNegated,
}

impl Usage {
    #[inline]
    pub fn is_negated(self) -> bool {
        matches!(self, Usage::StandaloneNegated | Usage::ItemNegated)
    }

    #[inline]
    pub fn is_item(self) -> bool {
        matches!(self, Usage::Item | Usage::ItemNegated)
    }
}
