/// Returns a copy of `items` with the element at `old_index` moved to
/// `new_index`. Everything else keeps its relative order.
///
/// Returns `None` if either index is outside `0..items.len()`.
pub fn move_item<T: Clone>(items: &[T], old_index: usize, new_index: usize) -> Option<Vec<T>> {
    if old_index >= items.len() || new_index >= items.len() {
        return None;
    }
    let mut moved = items.to_vec();
    let item = moved.remove(old_index);
    moved.insert(new_index, item);
    Some(moved)
}

#[cfg(test)]
mod tests {
    use super::move_item;

    #[test]
    fn moves_forward_and_backward() {
        let items = ['a', 'b', 'c', 'd'];
        assert_eq!(move_item(&items, 0, 2), Some(vec!['b', 'c', 'a', 'd']));
        assert_eq!(move_item(&items, 3, 1), Some(vec!['a', 'd', 'b', 'c']));
    }

    #[test]
    fn handles_boundaries() {
        let items = [1, 2, 3];
        assert_eq!(move_item(&items, 2, 0), Some(vec![3, 1, 2]));
        assert_eq!(move_item(&items, 0, 2), Some(vec![2, 3, 1]));
        assert_eq!(move_item(&items, 1, 1), Some(vec![1, 2, 3]));
    }

    #[test]
    fn rejects_out_of_range() {
        let items = [1, 2, 3];
        assert_eq!(move_item(&items, 3, 0), None);
        assert_eq!(move_item(&items, 0, 3), None);
        assert_eq!(move_item::<u8>(&[], 0, 0), None);
    }
}
