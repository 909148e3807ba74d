use std::marker::PhantomData;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A node index that can be `None`.
/// This is a hack to get a small sized `Option<NodeIndex>` by storing the `None` variant as `usize::MAX`.
pub struct OptionalNodeIndex(usize);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid node index.
/// Node indices are assigned in canonical order of the node identifiers,
/// so comparing two node indices is the same as comparing their identifiers.
pub struct NodeIndex(usize);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid edge index.
pub struct EdgeIndex(usize);

/// A valid graph index.
pub trait GraphIndex:
    std::fmt::Debug + Eq + Ord + std::hash::Hash + Copy + Sized + From<usize>
{
    // We don't wanna have GraphIndex: Into<usize>, to make this type strong, i.e. make it hard to accidentally convert it to a different type.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($GraphIndexType:ident) => {
        impl GraphIndex for $GraphIndexType {
            #[inline]
            fn as_usize(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $GraphIndexType {
            fn from(source: usize) -> Self {
                debug_assert!(source != usize::MAX);
                Self(source)
            }
        }

        impl std::fmt::Debug for $GraphIndexType {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<T> std::ops::Index<$GraphIndexType> for Vec<T> {
            type Output = T;

            fn index(&self, index: $GraphIndexType) -> &Self::Output {
                &self[index.as_usize()]
            }
        }

        impl<T> std::ops::IndexMut<$GraphIndexType> for Vec<T> {
            fn index_mut(&mut self, index: $GraphIndexType) -> &mut Self::Output {
                &mut self[index.as_usize()]
            }
        }
    };
}

impl_graph_index!(NodeIndex);
impl_graph_index!(EdgeIndex);

impl OptionalNodeIndex {
    /// Returns a new `OptionalNodeIndex` that is marked as invalid.
    pub fn new_none() -> Self {
        Self(usize::MAX)
    }

    /// Get this index as `usize`, but return `None` if this index is marked as invalid.
    pub fn as_usize(self) -> Option<usize> {
        if self.0 != usize::MAX {
            Some(self.0)
        } else {
            None
        }
    }

    /// Returns `true` if the index is `None`.
    pub fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    /// Returns `true` if the index is `Some`.
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for OptionalNodeIndex {
    fn default() -> Self {
        Self::new_none()
    }
}

impl std::fmt::Debug for OptionalNodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(value) = self.as_usize() {
            write!(f, "{}", value)
        } else {
            write!(f, "None")
        }
    }
}

impl From<NodeIndex> for OptionalNodeIndex {
    fn from(source: NodeIndex) -> Self {
        Self(source.as_usize())
    }
}

impl From<Option<NodeIndex>> for OptionalNodeIndex {
    fn from(source: Option<NodeIndex>) -> Self {
        source.map(Self::from).unwrap_or_default()
    }
}

impl From<OptionalNodeIndex> for Option<NodeIndex> {
    fn from(source: OptionalNodeIndex) -> Self {
        source.as_usize().map(NodeIndex::from)
    }
}

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: usize,
    end: usize,
    index_type: PhantomData<IndexType>,
}

impl<IndexType: GraphIndex> From<(usize, usize)> for GraphIndices<IndexType> {
    fn from(raw: (usize, usize)) -> Self {
        Self {
            start: raw.0,
            end: raw.1,
            index_type: Default::default(),
        }
    }
}

impl<IndexType: GraphIndex> Iterator for GraphIndices<IndexType> {
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = Some(IndexType::from(self.start));
            self.start += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end.saturating_sub(self.start);
        (len, Some(len))
    }
}

impl<IndexType: GraphIndex> DoubleEndedIterator for GraphIndices<IndexType> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            Some(IndexType::from(self.end))
        } else {
            None
        }
    }
}

impl<IndexType: GraphIndex> ExactSizeIterator for GraphIndices<IndexType> {}

#[cfg(test)]
mod tests {
    use super::{GraphIndex, GraphIndices, NodeIndex, OptionalNodeIndex};

    #[test]
    fn test_optional_node_index_roundtrips_none() {
        let none = OptionalNodeIndex::new_none();
        assert!(none.is_none());
        assert_eq!(Option::<NodeIndex>::from(none), None);
        assert_eq!(format!("{:?}", none), "None");

        let some = OptionalNodeIndex::from(NodeIndex::from(4));
        assert!(some.is_some());
        assert_eq!(Option::<NodeIndex>::from(some), Some(NodeIndex::from(4)));
    }

    #[test]
    fn test_graph_indices_both_ends() {
        let indices: GraphIndices<NodeIndex> = GraphIndices::from((1, 4));
        assert_eq!(indices.len(), 3);
        let forward: Vec<_> = GraphIndices::<NodeIndex>::from((1, 4))
            .map(GraphIndex::as_usize)
            .collect();
        let backward: Vec<_> = GraphIndices::<NodeIndex>::from((1, 4))
            .rev()
            .map(GraphIndex::as_usize)
            .collect();
        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1]);
    }
}
