//! Projection of token spans back onto source rows.

use crate::domain::assembler::RowSpan;
use smallvec::SmallVec;
use std::ops::Range;

/// Row indices a token was derived from, in row order.
pub type SourceRows = SmallVec<[usize; 2]>;

/// Where a token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Every row whose non-empty span intersects the token
    pub source_rows: SourceRows,
    /// Row owning the token's first character; supplies the metadata
    pub representative: usize,
}

/// Maps token ranges to source rows.
pub struct MetadataProjector;

impl MetadataProjector {
    /// Project a token range onto the row spans of its unit.
    ///
    /// The representative is the row containing the first byte of the token.
    /// Returns `None` only when `spans` is empty.
    pub fn project(token: &Range<usize>, spans: &[RowSpan]) -> Option<Projection> {
        // First span that has not ended before the token starts. Zero-length
        // spans at the token start are skipped because their end is <= start.
        let first = spans.partition_point(|s| s.range.end <= token.start);
        let owner = spans.get(first).or_else(|| spans.last())?;

        let mut source_rows: SourceRows = spans[first..]
            .iter()
            .take_while(|s| s.range.start < token.end)
            .filter(|s| !s.range.is_empty())
            .map(|s| s.row_index)
            .collect();

        if source_rows.is_empty() {
            source_rows.push(owner.row_index);
        }

        Some(Projection {
            source_rows,
            representative: owner.row_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(ranges: &[Range<usize>]) -> Vec<RowSpan> {
        ranges
            .iter()
            .enumerate()
            .map(|(i, r)| RowSpan {
                row_index: 10 + i,
                range: r.clone(),
            })
            .collect()
    }

    #[test]
    fn test_token_inside_one_row() {
        let spans = spans(&[0..5, 6..12]);
        let p = MetadataProjector::project(&(7..10), &spans).unwrap();
        assert_eq!(p.representative, 11);
        assert_eq!(p.source_rows.as_slice(), &[11]);
    }

    #[test]
    fn test_straddling_token_uses_first_character_owner() {
        // "death he": "death" ends row 10, "he" starts row 11
        let spans = spans(&[0..5, 6..12]);
        let p = MetadataProjector::project(&(0..8), &spans).unwrap();
        assert_eq!(p.representative, 10);
        assert_eq!(p.source_rows.as_slice(), &[10, 11]);
    }

    #[test]
    fn test_first_character_beats_majority_overlap() {
        let spans = spans(&[0..10, 11..40]);
        let p = MetadataProjector::project(&(9..40), &spans).unwrap();
        assert_eq!(p.representative, 10);
        assert_eq!(p.source_rows.as_slice(), &[10, 11]);
    }

    #[test]
    fn test_empty_rows_are_never_sources() {
        // "a  b": rows "a", "", "b"
        let spans = spans(&[0..1, 2..2, 3..4]);
        let p = MetadataProjector::project(&(0..4), &spans).unwrap();
        assert_eq!(p.source_rows.as_slice(), &[10, 12]);

        let p = MetadataProjector::project(&(3..4), &spans).unwrap();
        assert_eq!(p.representative, 12);
    }

    #[test]
    fn test_no_spans() {
        assert!(MetadataProjector::project(&(0..1), &[]).is_none());
    }
}
