use crate::types::Node;

/// AVL tree node: one element, two child links and a cached height.
#[derive(Clone, Debug)]
pub struct AvlNode<V> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: V,
    /// `1 + max(height(l), height(r))`, where an absent child counts as 0.
    pub height: i32,
}

impl<V> AvlNode<V> {
    pub fn new(v: V) -> Self {
        Self {
            l: None,
            r: None,
            v,
            height: 1,
        }
    }
}

impl<V> Node for AvlNode<V> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// AVL-specific node behavior.
///
/// The element type is an associated type so that the tree algorithms can be
/// written against any node layout that caches a height.
pub trait AvlNodeLike: Node {
    type Value;

    /// Fresh leaf holding `value`, height 1.
    fn leaf(value: Self::Value) -> Self
    where
        Self: Sized;
    fn value(&self) -> &Self::Value;
    fn set_value(&mut self, value: Self::Value);
    fn into_value(self) -> Self::Value
    where
        Self: Sized;
    fn height(&self) -> i32;
    fn set_height(&mut self, height: i32);
}

impl<V> AvlNodeLike for AvlNode<V> {
    type Value = V;

    fn leaf(value: V) -> Self {
        Self::new(value)
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn set_value(&mut self, value: V) {
        self.v = value;
    }

    fn into_value(self) -> V {
        self.v
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}
