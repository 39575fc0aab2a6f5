use std::fmt::{self, Display, Formatter};

#[cfg(feature = "tree-json")]
use serde::{Deserialize, Serialize};

use crate::op::OpKind;

/// A single node of an expression tree: a numeric leaf, or an operator that
/// exclusively owns up to two children.
///
/// Children are attached incrementally during construction, so an operator
/// node may be left with zero or one child.
#[cfg_attr(feature = "tree-json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Operand(i64),
    Operator {
        kind: OpKind,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
}

impl Node {
    pub fn operand(value: i64) -> Self {
        Node::Operand(value)
    }

    pub fn operator(kind: OpKind) -> Self {
        Node::Operator {
            kind,
            left: None,
            right: None,
        }
    }

    /// Attaches `node` as the left child and returns a borrow of it.
    /// Operands are leaves; attaching to one drops the node and yields `None`.
    pub fn set_left(&mut self, node: Node) -> Option<&mut Node> {
        match self {
            Node::Operator { left, .. } => {
                *left = Some(Box::new(node));
                left.as_deref_mut()
            }
            Node::Operand(_) => None,
        }
    }

    /// Attaches `node` as the right child and returns a borrow of it.
    /// Operands are leaves; attaching to one drops the node and yields `None`.
    pub fn set_right(&mut self, node: Node) -> Option<&mut Node> {
        match self {
            Node::Operator { right, .. } => {
                *right = Some(Box::new(node));
                right.as_deref_mut()
            }
            Node::Operand(_) => None,
        }
    }

    /// Number of nodes reachable from this node, itself included.
    pub fn count(&self) -> usize {
        match self {
            Node::Operand(_) => 1,
            Node::Operator { left, right, .. } => {
                1 + left.as_ref().map_or(0, |node| node.count())
                    + right.as_ref().map_or(0, |node| node.count())
            }
        }
    }

    /// Returns `true` if every operator reachable from this node has both
    /// children.
    pub fn is_complete(&self) -> bool {
        match self {
            Node::Operand(_) => true,
            Node::Operator { left, right, .. } => match (left, right) {
                (Some(left), Some(right)) => left.is_complete() && right.is_complete(),
                _ => false,
            },
        }
    }
}

/// Raw prefix emission. An absent child emits nothing, which can leave
/// irregular space runs; callers re-split on whitespace before relying on
/// token boundaries.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Node::Operand(value) => write!(f, "{}", value),
            Node::Operator { kind, left, right } => {
                write!(f, "{} ", kind)?;
                if let Some(left) = left {
                    write!(f, "{}", left)?;
                }
                write!(f, " ")?;
                if let Some(right) = right {
                    write!(f, "{}", right)?;
                }
                Ok(())
            }
        }
    }
}
