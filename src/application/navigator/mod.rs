//! Navigator
//!
//! Drives the interactive menu over a node tree. Each menu lists the current
//! node's children (or a single leaf entry) followed by a back entry.
//! Choosing a child descends into it; choosing back returns to the parent's
//! menu, or ends the session at the root. A selector error ends the whole
//! session regardless of depth.


use crate::domain::ports::{SelectionError, Selector};
use crate::domain::{preview, render_value, Node};

/// Fixed text used around menu entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabels {
    /// Prefix of the prompt, followed by the current path
    pub prompt_prefix: String,
    /// Prefix of the single entry shown for a leaf
    pub leaf_prefix: String,
    /// Final entry of every menu
    pub back: String,
}

impl MenuLabels {
    pub fn unicode() -> Self {
        Self {
            prompt_prefix: "Current path: ".to_string(),
            leaf_prefix: "(leaf node) ".to_string(),
            back: "⬅️ Back".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            back: "<- Back".to_string(),
            ..Self::unicode()
        }
    }

    pub fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self::unicode()
    }
}

/// What choosing a menu entry means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Descend into the child at this index
    Descend(usize),
    /// The leaf entry; nothing to descend into
    Leaf,
    /// Leave the current node
    Back,
}

/// The display list for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub prompt: String,
    pub items: Vec<String>,
    leaf: bool,
}

impl Menu {
    pub fn for_node(node: &Node<'_>, labels: &MenuLabels) -> Self {
        let mut items: Vec<String> = if node.is_leaf() {
            vec![format!("{}{}", labels.leaf_prefix, render_value(node.value))]
        } else {
            node.children
                .iter()
                .map(|child| format!("{}: {}", child.relative_path(node), preview(child.value)))
                .collect()
        };
        items.push(labels.back.clone());

        Self {
            prompt: format!("{}{}", labels.prompt_prefix, node.path),
            items,
            leaf: node.is_leaf(),
        }
    }

    /// Index of the back entry, always the last one.
    pub fn back_index(&self) -> usize {
        self.items.len() - 1
    }

    /// Interpret a chosen index.
    pub fn action(&self, index: usize) -> Result<MenuAction, SelectionError> {
        let back = self.back_index();
        if index == back {
            Ok(MenuAction::Back)
        } else if index > back {
            Err(SelectionError::InvalidChoice {
                index,
                len: self.items.len(),
            })
        } else if self.leaf {
            Ok(MenuAction::Leaf)
        } else {
            Ok(MenuAction::Descend(index))
        }
    }
}

/// Interactive navigation session over a node tree.
pub struct Navigator<'t, 'a> {
    root: &'t Node<'a>,
    labels: MenuLabels,
}

impl<'t, 'a> Navigator<'t, 'a> {
    pub fn new(root: &'t Node<'a>) -> Self {
        Self {
            root,
            labels: MenuLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: MenuLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Run the session until the user backs out of the root.
    ///
    /// Returns the selector's error if it fails at any depth; the navigation
    /// stack is abandoned in that case.
    pub fn run<S: Selector>(&self, mut selector: S) -> Result<(), SelectionError> {
        let mut stack: Vec<&'t Node<'a>> = vec![self.root];

        while let Some(&current) = stack.last() {
            let menu = Menu::for_node(current, &self.labels);
            let index = selector.select(&menu.prompt, &menu.items).map_err(|e| {
                tracing::debug!(path = %current.path, depth = stack.len(), error = %e, "selection failed");
                e
            })?;

            match menu.action(index)? {
                MenuAction::Descend(child) => {
                    let next = &current.children[child];
                    tracing::debug!(path = %next.path, "descend");
                    stack.push(next);
                }
                MenuAction::Back => {
                    tracing::debug!(path = %current.path, "back");
                    stack.pop();
                }
                MenuAction::Leaf => {}
            }
        }

        Ok(())
    }
}
