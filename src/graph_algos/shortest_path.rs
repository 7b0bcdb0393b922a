use crate::errors::{PathfinderError, Result};
use crate::NodeId;
use super::{Path, SearchTree};

/// Walk parent pointers from `index` up to the root of the tree
/// Returns the nodes ordered from `index` to the root
fn trace_to_root(tree: &SearchTree, index: usize) -> Result<Vec<NodeId>> {

    let mut nodes = Vec::new();
    let mut current_index = index;

    while current_index != usize::MAX {
        // A chain longer than the tree means a cycle in the parent pointers
        if nodes.len() > tree.len() {
            return Err(PathfinderError::BrokenParentChain(nodes[nodes.len() - 1]));
        }
        match tree.get_index(current_index) {
            Some((&node, &(parent_index, _))) => {
                nodes.push(node);
                current_index = parent_index;
            }
            None => {
                let last = nodes.last().copied().unwrap_or(current_index);
                return Err(PathfinderError::BrokenParentChain(last));
            }
        }
    }

    Ok(nodes)
}

/// Construct the path through `touch` node
/// The forward tree is rooted at the source, the optional backward tree at the target.
/// The source half is traced back and reversed, then the target half is appended
/// without repeating the touch node.
pub(crate) fn traceback_path(touch: NodeId, forward: &SearchTree, backward: Option<&SearchTree>) -> Result<Path> {

    let forward_index = forward
        .get_index_of(&touch)
        .ok_or(PathfinderError::BrokenParentChain(touch))?;

    // touch -> source, reversed into source -> touch
    let mut nodes = trace_to_root(forward, forward_index)?;
    nodes.reverse();

    if let Some(backward) = backward {
        let backward_index = backward
            .get_index_of(&touch)
            .ok_or(PathfinderError::BrokenParentChain(touch))?;

        // touch -> target, already in path order
        let target_half = trace_to_root(backward, backward_index)?;
        nodes.extend(target_half.into_iter().skip(1));
    }

    Ok(Path::from(nodes))
}
