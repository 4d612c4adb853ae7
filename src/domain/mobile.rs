//! Mobile: a hanging sculpture modelled as a binary tree
//!
//! Leaves carry a weight, composite nodes carry two sub-mobiles and the
//! lengths of the arms they hang from. Every node owns its children, so the
//! structure is a strict tree and can be mirrored in place.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Tolerance for torque and weight comparisons.
pub const EPSILON: f64 = 0.000_001;

/// One node of a mobile.
///
/// Weights are assumed to be non-negative and lengths positive. Neither is
/// checked: construction accepts any `f32`.
#[derive(Debug, Clone)]
pub enum Mobile {
    /// A single weight hanging at the end of an arm.
    Simple { weight: f32 },
    /// Two sub-mobiles balanced on a rod.
    Composite {
        left: Box<Mobile>,
        left_length: f32,
        right: Box<Mobile>,
        right_length: f32,
    },
}

impl Mobile {
    pub fn simple(weight: f32) -> Self {
        Mobile::Simple { weight }
    }

    pub fn composite(left: Mobile, left_length: f32, right: Mobile, right_length: f32) -> Self {
        Mobile::Composite {
            left: Box::new(left),
            left_length,
            right: Box::new(right),
            right_length,
        }
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, Mobile::Simple { .. })
    }

    pub fn is_composite(&self) -> bool {
        !self.is_simple()
    }

    /// Total mass of the mobile.
    pub fn weight(&self) -> f32 {
        match self {
            Mobile::Simple { weight } => *weight,
            Mobile::Composite { left, right, .. } => left.weight() + right.weight(),
        }
    }

    /// Number of levels, a single weight has height 1.
    pub fn height(&self) -> usize {
        match self {
            Mobile::Simple { .. } => 1,
            Mobile::Composite { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Leaf weights from left to right.
    pub fn flatten(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    pub fn leaf_count(&self) -> usize {
        self.flatten().count()
    }

    /// Torque on each side of a composite: `(left, right)`.
    pub fn torque(&self) -> Option<(f32, f32)> {
        match self {
            Mobile::Simple { .. } => None,
            Mobile::Composite {
                left,
                left_length,
                right,
                right_length,
            } => Some((left_length * left.weight(), right_length * right.weight())),
        }
    }

    /// Bracket notation, right side first: `[right,right_length,left,left_length]`.
    pub fn pretty(&self) -> String {
        self.to_string()
    }

    /// A mobile is balanced when every rod carries equal torque on both sides.
    pub fn is_balanced(&self) -> bool {
        match self {
            Mobile::Simple { .. } => true,
            Mobile::Composite {
                left,
                left_length,
                right,
                right_length,
            } => {
                left.is_balanced()
                    && right.is_balanced()
                    && f64::from((left_length * left.weight() - right_length * right.weight()).abs())
                        < EPSILON
            }
        }
    }

    /// Structural equality within [`EPSILON`].
    ///
    /// Arm lengths are compared with a signed difference, not an absolute
    /// one: a composite whose arms are shorter than `other`'s compares equal
    /// as long as the sub-mobiles do. The relation is therefore not
    /// symmetric for composites.
    pub fn structural_eq(&self, other: &Mobile) -> bool {
        match (self, other) {
            (Mobile::Simple { weight: a }, Mobile::Simple { weight: b }) => {
                f64::from((a - b).abs()) < EPSILON
            }
            (
                Mobile::Composite {
                    left,
                    left_length,
                    right,
                    right_length,
                },
                Mobile::Composite {
                    left: other_left,
                    left_length: other_left_length,
                    right: other_right,
                    right_length: other_right_length,
                },
            ) => {
                f64::from(left_length - other_left_length) < EPSILON
                    && f64::from(right_length - other_right_length) < EPSILON
                    && left.structural_eq(other_left)
                    && right.structural_eq(other_right)
            }
            _ => false,
        }
    }

    /// 32-bit hash over truncated weights and lengths, wrapping on overflow.
    pub fn hash_code(&self) -> i32 {
        match self {
            Mobile::Simple { weight } => 17i32.wrapping_mul(*weight as i32),
            Mobile::Composite {
                left,
                left_length,
                right,
                right_length,
            } => 13i32
                .wrapping_mul(*right_length as i32)
                .wrapping_add(right.hash_code())
                .wrapping_add(31i32.wrapping_mul(*left_length as i32))
                .wrapping_add(left.hash_code()),
        }
    }

    /// Reflect the mobile left-to-right, recursively and in place.
    pub fn mirror(&mut self) {
        if let Mobile::Composite {
            left,
            left_length,
            right,
            right_length,
        } = self
        {
            right.mirror();
            left.mirror();
            std::mem::swap(left, right);
            std::mem::swap(left_length, right_length);
        }
    }
}

impl fmt::Display for Mobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mobile::Simple { weight } => write!(f, "({})", Rounded(*weight)),
            Mobile::Composite {
                left,
                left_length,
                right,
                right_length,
            } => write!(
                f,
                "[{},{},{},{}]",
                right,
                Rounded(*right_length),
                left,
                Rounded(*left_length)
            ),
        }
    }
}

/// Zero-decimal rendering, halves round away from zero.
struct Rounded(f32);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.0.round())
    }
}

/// See [`Mobile::structural_eq`] for the asymmetry on arm lengths.
impl PartialEq for Mobile {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl Hash for Mobile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Depth-first iterator over leaf weights, left subtree before right.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a Mobile>,
}

impl Iterator for Leaves<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        while let Some(node) = self.stack.pop() {
            match node {
                Mobile::Simple { weight } => return Some(*weight),
                Mobile::Composite { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
