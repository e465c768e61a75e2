use crate::cursor::StrCursor;
use crate::position::Span;
use std::borrow::Cow;
use std::ops::Index;

/// A successful parse: the text consumed, its sub-matches, and where to
/// continue from
///
/// Labels live on the children themselves, so looking a name up walks the
/// same child list that [`children`](Match::children) exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'code> {
    start: StrCursor<'code>,
    remainder: StrCursor<'code>,
    children: Vec<Match<'code>>,
    label: Option<Cow<'static, str>>,
}

impl<'code> Match<'code> {
    /// Match with no children covering `start..remainder`
    pub(crate) fn leaf(start: StrCursor<'code>, remainder: StrCursor<'code>) -> Self {
        Self::node(start, remainder, Vec::new())
    }

    pub(crate) fn node(
        start: StrCursor<'code>,
        remainder: StrCursor<'code>,
        children: Vec<Match<'code>>,
    ) -> Self {
        Match {
            start,
            remainder,
            children,
            label: None,
        }
    }

    /// Zero-length match that leaves `at` untouched
    pub(crate) fn empty(at: StrCursor<'code>) -> Self {
        Self::leaf(at, at)
    }

    pub(crate) fn with_label(mut self, label: Cow<'static, str>) -> Self {
        self.label = Some(label);
        self
    }

    /// The matched text
    pub fn as_str(&self) -> &'code str {
        self.remainder.consumed_since(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start.position() == self.remainder.position()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Non-empty sub-matches, in input order
    pub fn children(&self) -> &[Match<'code>] {
        &self.children
    }

    /// Child bound to `label`; when a label repeats the last one wins
    pub fn get(&self, label: &str) -> Option<&Match<'code>> {
        self.children
            .iter()
            .rev()
            .find(|child| child.label() == Some(label))
    }

    /// Follow a chain of labels through nested matches
    pub fn path(&self, labels: &[&str]) -> Option<&Match<'code>> {
        labels
            .iter()
            .try_fold(self, |matched, label| matched.get(label))
    }

    /// Every visible binding in input order, one entry per label
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Match<'code>)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(move |(index, child)| {
                let label = child.label()?;
                let shadowed = self.children[index + 1..]
                    .iter()
                    .any(|later| later.label() == Some(label));
                (!shadowed).then_some((label, child))
            })
    }

    /// Cursor just past this match
    pub fn remainder(&self) -> StrCursor<'code> {
        self.remainder
    }

    /// Whether this match ran to the end of the input
    pub fn is_complete(&self) -> bool {
        self.remainder.is_complete()
    }

    pub fn span(&self) -> Span<'code> {
        Span::new(
            self.start.source(),
            self.start.position(),
            self.remainder.position(),
        )
    }
}

impl<'code> Index<&str> for Match<'code> {
    type Output = Match<'code>;

    /// Panics if nothing is bound to `label`; use [`Match::get`] otherwise
    fn index(&self, label: &str) -> &Self::Output {
        match self.get(label) {
            Some(child) => child,
            None => panic!("no binding named `{}` in match {:?}", label, self.as_str()),
        }
    }
}
