pub mod forstats;

use crate::base;

/// A forest of labelled nodes. Top-level nodes are printed flush left as
/// headings; everything below them is drawn with branch characters.
pub struct Tree<'cs> {
    charset: &'cs base::Charset,
    root: Node,
}

struct Node {
    data: std::borrow::Cow<'static, str>,
    children: Vec<Self>,
}

impl Node {
    fn new(data: std::borrow::Cow<'static, str>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }
}

impl Default for Node {
    /// Returns a node suitable for acting as the root node.
    fn default() -> Self {
        Self::new("".into())
    }
}

impl Tree<'_> {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            is_last_child_of_parent: bool,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            let (prefix_tail, child_prefix_tail) = if is_last_child_of_parent {
                (charset.tree_corner, charset.tree_space)
            } else {
                (charset.tree_sideways_t, charset.tree_pipe_gap)
            };
            writeln!(f, "{}{}{}", preprefix, prefix_tail, node.data)?;
            preprefix.push_str(child_prefix_tail);
            for (i, child) in node.children.iter().enumerate() {
                write_node(child, f, preprefix, i + 1 == node.children.len(), charset)?;
            }
            preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            Ok(())
        }

        let mut preprefix = String::new();
        for heading in self.root.children.iter() {
            writeln!(f, "{}", heading.data)?;
            for (i, child) in heading.children.iter().enumerate() {
                write_node(
                    child,
                    f,
                    &mut preprefix,
                    i + 1 == heading.children.len(),
                    self.charset,
                )?;
            }
        }
        Ok(())
    }
}
