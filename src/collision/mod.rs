pub mod aabb;
pub mod contact;
pub mod narrow_phase;
pub mod projection;
pub mod raycast;

// Re-export key types
pub use aabb::AABB;
pub use contact::{Contact, Penetration, TimeOfImpact};
pub use narrow_phase::*;
pub use projection::{closest_point_on_segment, project_segment, Interval};
pub use raycast::{hit_point, raycast, raycast_edges, Ray};
