use crate::graph::NodeId;

/// Default number of waypoints kept when writing a route polyline.
pub const DEFAULT_MAX_WAYPOINTS: usize = 100;

/// Down-sample a finished path to roughly `max_waypoints` evenly spaced nodes.
///
/// Every `stride`-th node by position is kept, with the stride chosen so the
/// strided points never exceed the budget. The final node is appended when it
/// does not land on a stride boundary, so the result holds at most
/// `max_waypoints + 1` nodes and always starts and ends with the path's
/// endpoints. A budget of zero behaves like a budget of one.
///
/// The stride rounds up rather than down: floor division would let a path of
/// `2 * max_waypoints - 1` nodes keep almost twice the budget.
pub fn simplify(path: &[NodeId], max_waypoints: usize) -> Vec<NodeId> {
    let Some(&last) = path.last() else {
        return Vec::new();
    };

    let stride = path.len().div_ceil(max_waypoints.max(1)).max(1);
    let mut waypoints: Vec<NodeId> = path.iter().copied().step_by(stride).collect();

    if (path.len() - 1) % stride != 0 {
        waypoints.push(last);
    }

    waypoints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_stays_empty() {
        assert!(simplify(&[], DEFAULT_MAX_WAYPOINTS).is_empty());
    }

    #[test]
    fn short_paths_are_kept_whole() {
        let path: Vec<NodeId> = (0..10).collect();
        assert_eq!(simplify(&path, DEFAULT_MAX_WAYPOINTS), path);
    }

    #[test]
    fn single_node_path() {
        assert_eq!(simplify(&[7], 3), vec![7]);
    }

    #[test]
    fn last_node_is_appended_off_stride() {
        let path: Vec<NodeId> = (0..10).collect();
        // stride 4 -> 0, 4, 8 then the endpoint 9
        assert_eq!(simplify(&path, 3), vec![0, 4, 8, 9]);
    }

    #[test]
    fn last_node_on_stride_is_not_duplicated() {
        let path: Vec<NodeId> = (0..9).collect();
        assert_eq!(simplify(&path, 3), vec![0, 3, 6, 8]);

        let path: Vec<NodeId> = (0..7).collect();
        assert_eq!(simplify(&path, 3), vec![0, 3, 6]);
    }

    #[test]
    fn budget_bounds_output_for_all_lengths() {
        for budget in [1usize, 2, 5, 100] {
            for len in 1..=450usize {
                let path: Vec<NodeId> = (0..len).collect();
                let waypoints = simplify(&path, budget);
                assert!(
                    waypoints.len() <= budget + 1,
                    "len {len} budget {budget} produced {}",
                    waypoints.len()
                );
                assert_eq!(waypoints.first(), Some(&0));
                assert_eq!(waypoints.last(), Some(&(len - 1)));
                assert!(waypoints.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn zero_budget_behaves_like_one() {
        let path: Vec<NodeId> = (0..5).collect();
        assert_eq!(simplify(&path, 0), vec![0, 4]);
    }
}
