use crate::core::KError;

/// Returns the indices that would sort an array in descending order. The sort is stable, so
/// equal values keep their relative order.
///
/// # Arguments
///
/// * `data`: The vector to sort.
///
/// returns: `Vec<usize>`. The vector with the indices.
pub fn argsort_descending(data: &[f64]) -> Vec<usize> {
    let mut indices = (0..data.len()).collect::<Vec<_>>();
    indices.sort_by(|a, b| data[*b].total_cmp(&data[*a]));
    indices
}

/// Sort points by their last coordinate in descending order. This is the order in which the
/// kink-point engine sweeps a front.
///
/// # Arguments
///
/// * `points`: The points to sort. All points must have at least one coordinate.
///
/// returns: `Vec<Vec<f64>>`
pub fn sort_by_last_coordinate(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let last: Vec<f64> = points.iter().map(|p| p[p.len() - 1]).collect();
    argsort_descending(&last)
        .into_iter()
        .map(|idx| points[idx].clone())
        .collect()
}

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, KError>`
pub fn vector_min(v: &[f64]) -> Result<f64, KError> {
    Ok(*v
        .iter()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(KError::Generic(
            "Cannot calculate vector min value".to_string(),
        ))?)
}

#[cfg(test)]
mod test {
    use crate::utils::vectors::{argsort_descending, sort_by_last_coordinate, vector_min};

    #[test]
    fn test_argsort_descending() {
        let vec = vec![99.0, 11.0, 456.2, 19.0, 0.5];

        assert_eq!(argsort_descending(&vec), vec![2, 0, 3, 1, 4]);
    }

    #[test]
    /// Ties keep their order.
    fn test_argsort_ties() {
        let vec = vec![1.0, 2.0, 1.0, 2.0];

        assert_eq!(argsort_descending(&vec), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_sort_by_last_coordinate() {
        let points = vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 1.0], vec![3.0, 1.0, 2.0]];
        assert_eq!(
            sort_by_last_coordinate(&points),
            vec![vec![1.0, 2.0, 3.0], vec![3.0, 1.0, 2.0], vec![2.0, 3.0, 1.0]]
        );
        assert!(sort_by_last_coordinate(&[]).is_empty());
    }

    #[test]
    fn test_vector_min() {
        assert_eq!(vector_min(&[3.0, 0.5, 1.0]).unwrap(), 0.5);
        assert!(vector_min(&[])
            .unwrap_err()
            .to_string()
            .contains("Cannot calculate vector min value"));
    }
}
