use std::fmt;

/// Represents a vertex in the graph, identified solely by its payload
///
/// Equality and hashing delegate to the payload, so two vertices built from
/// equal values are interchangeable everywhere a vertex is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex<T> {
    data: T,
}

impl<T> Vertex<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> From<T> for Vertex<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

/// A directed, weighted edge `u -> v`
///
/// Undirected connections are modeled by supplying both `(u, v, w)` and
/// `(v, u, w)`. Equality and hashing cover the full `(u, v, weight)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<T> {
    u: Vertex<T>,
    v: Vertex<T>,
    weight: i32,
}

impl<T> Edge<T> {
    pub fn new(u: Vertex<T>, v: Vertex<T>, weight: i32) -> Self {
        Self { u, v, weight }
    }

    /// Source vertex
    pub fn u(&self) -> &Vertex<T> {
        &self.u
    }

    /// Destination vertex
    pub fn v(&self) -> &Vertex<T> {
        &self.v
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.u == self.v
    }
}

impl<T: Clone> Edge<T> {
    /// The same connection in the opposite direction
    pub fn reversed(&self) -> Self {
        Self::new(self.v.clone(), self.u.clone(), self.weight)
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}({})", self.u, self.v, self.weight)
    }
}

/// An adjacency-list entry: a neighbor and the weight of the edge leading to it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexDistance<T> {
    vertex: Vertex<T>,
    distance: i32,
}

impl<T> VertexDistance<T> {
    pub fn new(vertex: Vertex<T>, distance: i32) -> Self {
        Self { vertex, distance }
    }

    pub fn vertex(&self) -> &Vertex<T> {
        &self.vertex
    }

    pub fn distance(&self) -> i32 {
        self.distance
    }
}

impl<T: fmt::Display> fmt::Display for VertexDistance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.vertex, self.distance)
    }
}
