//! Spatial relation between shapes.

/// How one shape relates to another.
///
/// Relations read from the point of view of the receiver: `a.classify(&b) ==
/// Relation::Inside` means `a` lies inside `b`, `Relation::Cover` means `b`
/// lies inside `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The shapes share no area. Touching boundaries count as disjoint.
    Disjoint,
    /// The boundaries properly cross.
    Intersect,
    /// The receiver lies inside the other shape (boundary included).
    Inside,
    /// The other shape lies inside the receiver.
    Cover,
    /// Both shapes have the same vertex set.
    Equal,
}

impl Relation {
    /// Returns the relation seen from the other shape.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Relation::Inside => Relation::Cover,
            Relation::Cover => Relation::Inside,
            other => other,
        }
    }

    /// Returns `true` for [`Relation::Inside`].
    #[inline]
    pub fn is_inside(self) -> bool {
        self == Relation::Inside
    }
}
