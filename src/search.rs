use bitvec::vec::BitVec;

use crate::{
    graph::{Graph, VertexId},
    queue::BoundedQueue,
    tracing_support::{Span, info_span},
};

/// A lazy breadth-first traversal.  Vertices are yielded in the order they
/// are dequeued; neighbors are enqueued in adjacency order.
pub struct Bfs<'g> {
    graph: &'g Graph,
    visited: BitVec,
    queue: BoundedQueue,
    span: Span,
}

impl<'g> Bfs<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexId) -> Self {
        let n = graph.vertex_count();
        let mut visited = BitVec::repeat(false, n);
        let mut queue = BoundedQueue::with_capacity(n);
        visited.set(start, true);
        let pushed = queue.push(start);
        debug_assert!(pushed.is_ok());
        Self {
            graph,
            visited,
            queue,
            span: info_span!("bfs", start),
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let _guard = self.span.enter();
        let u = self.queue.pop()?;
        for entry in self.graph.neighbors(u) {
            let v = entry.neighbor;
            if !self.visited[v] {
                self.visited.set(v, true);
                // Each vertex is enqueued at most once, so a queue sized to
                // the vertex count never fills.
                let pushed = self.queue.push(v);
                debug_assert!(pushed.is_ok());
            }
        }
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.count_zeros() + self.queue.len();
        (self.queue.len(), Some(remaining))
    }
}

struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// A lazy depth-first traversal yielding vertices in preorder.
///
/// Uses an explicit stack of `(vertex, next neighbor index)` frames, so the
/// visitation order is exactly that of the recursive formulation (visit a
/// vertex, then recurse into each unvisited neighbor in adjacency order)
/// without its call-stack depth.
pub struct Dfs<'g> {
    graph: &'g Graph,
    visited: BitVec,
    stack: Vec<Frame>,
    pending_start: Option<VertexId>,
    span: Span,
}

impl<'g> Dfs<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexId) -> Self {
        Self {
            graph,
            visited: BitVec::repeat(false, graph.vertex_count()),
            stack: Vec::new(),
            pending_start: Some(start),
            span: info_span!("dfs", start),
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let _guard = self.span.enter();
        let graph = self.graph;
        let next = match self.pending_start.take() {
            Some(start) => start,
            None => loop {
                let frame = self.stack.last_mut()?;
                let mut unvisited = None;
                while let Some(entry) = graph.neighbor_at(frame.vertex, frame.cursor) {
                    frame.cursor += 1;
                    if !self.visited[entry.neighbor] {
                        unvisited = Some(entry.neighbor);
                        break;
                    }
                }
                match unvisited {
                    Some(v) => break v,
                    None => {
                        self.stack.pop();
                    }
                }
            },
        };
        self.visited.set(next, true);
        self.stack.push(Frame {
            vertex: next,
            cursor: 0,
        });
        Some(next)
    }
}
