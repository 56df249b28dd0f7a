//! Per-vertex callbacks used by the traversal algorithms.

/// Processing applied to each vertex a traversal reaches.
///
/// Implemented for every `FnMut(&K, &E)` closure, so most callers never name
/// this trait.
pub trait Visitor<K, E> {
    /// Called once per visited vertex, in discovery order.
    fn visit(&mut self, id: &K, data: &E);
}

impl<K, E, F> Visitor<K, E> for F
where
    F: FnMut(&K, &E),
{
    fn visit(&mut self, id: &K, data: &E) {
        self(id, data)
    }
}

/// A visitor that records the identifiers it sees, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitOrder<K> {
    order: Vec<K>,
}

impl<K> VisitOrder<K> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Identifiers visited so far.
    pub fn as_slice(&self) -> &[K] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consume the recorder, returning the visit order.
    pub fn into_inner(self) -> Vec<K> {
        self.order
    }
}

impl<K> Default for VisitOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, E> Visitor<K, E> for VisitOrder<K> {
    fn visit(&mut self, id: &K, _data: &E) {
        self.order.push(id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_visitor() {
        let mut seen = Vec::new();
        {
            let mut visitor = |id: &String, data: &u32| seen.push(format!("{}={}", id, data));
            Visitor::<String, u32>::visit(&mut visitor, &"A".to_string(), &1);
            Visitor::<String, u32>::visit(&mut visitor, &"B".to_string(), &2);
        }
        assert_eq!(seen, vec!["A=1", "B=2"]);
    }

    #[test]
    fn visit_order_records_ids() {
        let mut order = VisitOrder::new();
        Visitor::<_, ()>::visit(&mut order, &"x", &());
        Visitor::<_, ()>::visit(&mut order, &"y", &());
        assert_eq!(order.len(), 2);
        assert_eq!(order.into_inner(), vec!["x", "y"]);
    }
}
