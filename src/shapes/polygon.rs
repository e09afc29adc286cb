use serde::{Deserialize, Serialize};

use crate::common::{GeometryError, GeometryResult};
use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// A closed outline of static walls, in world space.
///
/// Edges join consecutive vertices, and the last vertex joins the first.
/// Nothing requires convexity or a particular winding: a polygon may be a
/// solid obstacle or the outline of a room the agent moves inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// Fails with fewer than 3 distinct vertices, with non-finite coordinates,
    /// or when two consecutive vertices coincide (that edge would be
    /// degenerate).
    pub fn new(vertices: Vec<Vec2>) -> GeometryResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices { count: n });
        }
        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite(*bad));
        }
        for i in 0..n {
            let edge = LineSegment::new(vertices[i], vertices[(i + 1) % n]);
            if edge.is_degenerate() {
                return Err(GeometryError::DegenerateSegment { a: edge.a, b: edge.b });
            }
        }
        let distinct = distinct_count(&vertices);
        if distinct < 3 {
            return Err(GeometryError::TooFewVertices { count: distinct });
        }
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Number of vertices, which is also the number of edges.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The edge from vertex `i` to vertex `(i + 1) mod len`.
    pub fn edge(&self, i: usize) -> LineSegment {
        let n = self.vertices.len();
        LineSegment::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// All edges, in vertex order, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }
}

/// Number of pairwise distinct points, up to the first three.
fn distinct_count(vertices: &[Vec2]) -> usize {
    let mut seen: Vec<Vec2> = Vec::with_capacity(3);
    for v in vertices {
        if !seen.iter().any(|s| (*s - *v).try_normalize().is_none()) {
            seen.push(*v);
            if seen.len() == 3 {
                break;
            }
        }
    }
    seen.len()
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vec2>) -> GeometryResult<Self> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}
