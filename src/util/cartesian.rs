//! Cartesian product over lists of alternatives.

/// All combinations drawn from `lists`, one element per input list.
///
/// Combinations come out in row-major order: the first list varies slowest
/// and the last varies fastest. An empty input yields an empty product, and
/// any empty inner list empties the whole product.
///
/// ```
/// use hostlist::util::cartesian_product;
///
/// let product = cartesian_product(&[vec![0, 1], vec![3, 4]]);
/// assert_eq!(product, vec![vec![0, 3], vec![0, 4], vec![1, 3], vec![1, 4]]);
/// ```
pub fn cartesian_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };

    let mut product: Vec<Vec<T>> = first.iter().map(|value| vec![value.clone()]).collect();
    for list in rest {
        let mut next = Vec::with_capacity(product.len() * list.len());
        for combination in &product {
            for value in list {
                let mut row = Vec::with_capacity(combination.len() + 1);
                row.extend_from_slice(combination);
                row.push(value.clone());
                next.push(row);
            }
        }
        product = next;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_product() {
        let product: Vec<Vec<u8>> = cartesian_product(&[]);
        assert!(product.is_empty());
    }

    #[test]
    fn single_list_wraps_each_element() {
        assert_eq!(
            cartesian_product(&[vec!['a', 'b']]),
            vec![vec!['a'], vec!['b']]
        );
    }

    #[test]
    fn first_list_varies_slowest() {
        assert_eq!(
            cartesian_product(&[vec![0, 1], vec![7, 8, 9]]),
            vec![
                vec![0, 7],
                vec![0, 8],
                vec![0, 9],
                vec![1, 7],
                vec![1, 8],
                vec![1, 9],
            ]
        );
    }

    #[test]
    fn empty_inner_list_empties_the_product() {
        let product = cartesian_product(&[vec![1, 2], vec![]]);
        assert!(product.is_empty());
    }
}
