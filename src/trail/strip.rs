//! Tri-strip index derivation for quadrilateral ribbon segments.
//!
//! A triangle strip draws every three adjacent indices as a triangle. For a
//! run of quadrilaterals that each share an edge with their neighbour, the
//! natural left-to-right traversal of every other vertex pair has to be
//! reversed, giving the progression `0, 1, 3, 2, 4, 5, 7, 6, ...`.

/// Number of vertices needed to draw `segments` connected quadrilaterals as
/// a triangle strip: four for the first segment, two more for each segment
/// after it.
///
/// `segments` must be at least 1.
#[inline]
pub fn max_vertex_count(segments: usize) -> usize {
    4 + 2 * (segments - 1)
}

/// Returns the two indices to append once a pair insertion has brought the
/// trail up to `vertex_count` vertices.
///
/// `vertex_count / 2` is the 1-based number of the pair just inserted. Odd
/// pairs keep their natural order, even pairs are reversed; the lower index
/// of the pair is always `vertex_count - 2`.
pub fn next_pair_indices(vertex_count: usize) -> (u32, u32) {
    let lower = (vertex_count - 2) as u32;
    let upper = (vertex_count - 1) as u32;
    if (vertex_count / 2) % 2 == 1 {
        (lower, upper)
    } else {
        (upper, lower)
    }
}

#[cfg(test)]
mod tests {
    use super::{max_vertex_count, next_pair_indices};

    #[test]
    fn vertex_count_grows_by_two_per_segment() {
        assert_eq!(max_vertex_count(1), 4);
        assert_eq!(max_vertex_count(2), 6);
        assert_eq!(max_vertex_count(3), 8);
        assert_eq!(max_vertex_count(10), 22);
    }

    #[test]
    fn every_other_pair_is_reversed() {
        assert_eq!(next_pair_indices(2), (0, 1));
        assert_eq!(next_pair_indices(4), (3, 2));
        assert_eq!(next_pair_indices(6), (4, 5));
        assert_eq!(next_pair_indices(8), (7, 6));
        assert_eq!(next_pair_indices(10), (8, 9));
    }
}
