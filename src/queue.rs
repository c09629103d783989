use crate::graph::VertexId;

/// A fixed-capacity circular FIFO of vertex identifiers.
///
/// The capacity is chosen at construction time.  Breadth-first search sizes
/// its queue to the vertex count of the graph; since every vertex is enqueued
/// at most once, the queue can never fill up during a search.
#[derive(Clone, Debug)]
pub struct BoundedQueue {
    slots: Box<[VertexId]>,
    front: usize,
    len: usize,
}

impl BoundedQueue {
    /// Creates an empty queue able to hold `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Appends a vertex to the back of the queue.  If the queue is full, the
    /// queue is left unchanged and the rejected vertex is handed back.
    pub fn push(&mut self, vertex: VertexId) -> Result<(), VertexId> {
        if self.is_full() {
            return Err(vertex);
        }
        let rear = (self.front + self.len) % self.slots.len();
        self.slots[rear] = vertex;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the vertex at the front of the queue, or `None`
    /// if the queue is empty.
    pub fn pop(&mut self) -> Option<VertexId> {
        if self.is_empty() {
            return None;
        }
        let vertex = self.slots[self.front];
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        Some(vertex)
    }

    /// Returns the vertex at the front of the queue without removing it.
    pub fn front(&self) -> Option<VertexId> {
        (!self.is_empty()).then(|| self.slots[self.front])
    }
}
