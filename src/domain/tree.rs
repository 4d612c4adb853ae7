use termtree::Tree;
use tracing::instrument;

use crate::domain::Mobile;

/// Render a mobile as a `termtree` hierarchy.
pub trait MobileTreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl MobileTreeConvert for Mobile {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Mobile::Simple { weight } => Tree::new(format!("weight {}", weight)),
            Mobile::Composite {
                left,
                left_length,
                right,
                right_length,
            } => {
                let verdict = if self.is_balanced() {
                    "balanced"
                } else {
                    "unbalanced"
                };
                let root = format!("composite (weight {}, {})", self.weight(), verdict);

                // Each arm gets its own label node so the lengths show up
                let arm = |side: &str, length: f32, child: &Mobile| {
                    let sub = child.to_tree_string();
                    Tree::new(format!("{} @ {}: {}", side, length, sub.root))
                        .with_leaves(sub.leaves)
                };

                Tree::new(root).with_leaves([
                    arm("left", *left_length, left.as_ref()),
                    arm("right", *right_length, right.as_ref()),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tree_string() {
        let m = Mobile::composite(Mobile::simple(2.0), 6.0, Mobile::simple(3.0), 4.0);
        let rendered = m.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "composite (weight 5, balanced)");
        assert!(lines[1].ends_with("left @ 6: weight 2"));
        assert!(lines[2].ends_with("right @ 4: weight 3"));
    }

    #[test]
    fn test_to_tree_string_nests_composites() {
        let m = Mobile::composite(
            Mobile::simple(1.0),
            10.0,
            Mobile::composite(Mobile::simple(2.0), 5.0, Mobile::simple(3.0), 4.0),
            2.0,
        );
        let rendered = m.to_tree_string().to_string();
        assert!(rendered.contains("right @ 2: composite (weight 5, unbalanced)"));
        assert!(rendered.contains("left @ 5: weight 2"));
    }
}
