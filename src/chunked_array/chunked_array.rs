use arrow_array::Array;
use arrow_schema::Field;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::array::GeometryArray;
use crate::datatypes::{classify_field, GeometryKind};
use crate::error::{GeoArrowError, Result};

/// Prefix sums of chunk lengths.
///
/// The result has one more element than `lengths`: element `i` is the number of rows in all
/// chunks before chunk `i`, so a chunk-local index `j` of chunk `i` is global row `offsets[i] + j`.
pub fn chunk_offsets<I: IntoIterator<Item = usize>>(lengths: I) -> Vec<usize> {
    let lengths = lengths.into_iter();
    let mut offsets = Vec::with_capacity(lengths.size_hint().0 + 1);
    let mut total = 0;
    offsets.push(total);
    for length in lengths {
        total += length;
        offsets.push(total);
    }
    offsets
}

/// A collection of Arrow arrays of the same type.
///
/// This can be thought of as a column in a table, as Table objects normally have internal batches.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkedArray<A: Array> {
    pub(crate) chunks: Vec<A>,
    length: usize,
}

impl<A: Array> ChunkedArray<A> {
    pub fn new(chunks: Vec<A>) -> Self {
        let length = chunks.iter().map(|x| x.len()).sum();
        Self { chunks, length }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn chunks(&self) -> &[A] {
        self.chunks.as_slice()
    }

    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Row offset of each chunk within the full column.
    pub fn chunk_offsets(&self) -> Vec<usize> {
        chunk_offsets(self.chunks.iter().map(|chunk| chunk.len()))
    }
}

/// A collection of geometry chunks of the same kind.
///
/// This can be thought of as a geometry column in a table, as Table objects normally have internal
/// batches.
///
/// ## Invariants:
///
/// - All chunks have the same [`GeometryKind`]
#[derive(Debug, Clone)]
pub struct ChunkedGeometryArray {
    pub(crate) chunks: Vec<GeometryArray>,
    kind: GeometryKind,
    length: usize,
}

impl ChunkedGeometryArray {
    /// Create a chunked array of `kind` from already-typed chunks.
    ///
    /// # Errors
    ///
    /// - if any chunk is of a different kind
    pub fn try_new(chunks: Vec<GeometryArray>, kind: GeometryKind) -> Result<Self> {
        if let Some(chunk) = chunks.iter().find(|chunk| chunk.kind() != kind) {
            return Err(GeoArrowError::TypeMismatch {
                expected: kind.to_string(),
                found: chunk.kind().to_string(),
            });
        }
        let length = chunks.iter().map(|x| x.len()).sum();
        Ok(Self {
            chunks,
            kind,
            length,
        })
    }

    /// Interpret each Arrow chunk as geometries of the kind described by `field`.
    pub fn from_arrow_chunks<A: AsRef<dyn Array>>(
        chunks: &[A],
        field: &Field,
        validate: bool,
    ) -> Result<Self> {
        let (kind, _dim) = classify_field(field)?;
        let chunks = chunks
            .iter()
            .map(|array| GeometryArray::try_new(array.as_ref(), kind, validate))
            .collect::<Result<Vec<_>>>()?;
        Self::try_new(chunks, kind)
    }

    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn chunks(&self) -> &[GeometryArray] {
        self.chunks.as_slice()
    }

    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Row offset of each chunk within the full column.
    pub fn chunk_offsets(&self) -> Vec<usize> {
        chunk_offsets(self.chunks.iter().map(|chunk| chunk.len()))
    }

    /// Apply a fallible operation to each chunk along with its index, preserving chunk order.
    pub(crate) fn try_map_indexed<F, R>(&self, map_op: F) -> Result<Vec<R>>
    where
        F: Fn(usize, &GeometryArray) -> Result<R> + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "rayon")]
        {
            self.chunks
                .par_iter()
                .enumerate()
                .map(|(idx, chunk)| map_op(idx, chunk))
                .collect()
        }

        #[cfg(not(feature = "rayon"))]
        {
            self.chunks
                .iter()
                .enumerate()
                .map(|(idx, chunk)| map_op(idx, chunk))
                .collect()
        }
    }
}
