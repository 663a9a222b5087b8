// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene registry port and capability queries.
//!
//! The host engine owns the live object set; this crate only defines the port
//! it calls through and the filters applied to what the port yields.

use std::any::Any;

/// Object living in the host scene.
///
/// Blanket-implemented for every `'static` type, so hosts only implement
/// [`SceneRegistry`].
pub trait SceneObject: Any {
    /// Upcast used for concrete-type queries.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> SceneObject for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Scene registry port implemented by the host engine.
///
/// # Design
///
/// This is a hexagonal port: the host enumerates its live objects, the crate
/// filters them. Implementations decide ordering; queries preserve it.
pub trait SceneRegistry {
    /// Enumerate every live object at call time.
    fn live_objects(&self) -> Box<dyn Iterator<Item = &dyn SceneObject> + '_>;
}

/// Live objects whose concrete type is `T`.
///
/// The iterator is lazy and one-shot: it walks the registry as it is consumed
/// and cannot be restarted. Call again for a fresh snapshot.
pub fn find_objects_of_type<T, R>(registry: &R) -> impl Iterator<Item = &T> + '_
where
    T: Any,
    R: SceneRegistry + ?Sized,
{
    registry
        .live_objects()
        .filter_map(|object| object.as_any().downcast_ref::<T>())
}

/// Live objects exposing capability `C`.
///
/// `project` is the capability test: it returns the object viewed as `C` when
/// the object implements it. Rust has no runtime trait lookup, so hosts supply
/// the projection (typically a chain of `downcast_ref` calls over the concrete
/// types that implement `C`).
///
/// # Examples
/// ```
/// use jar_util::scene::{find_interfaces_of_type, SceneObject, SceneRegistry};
///
/// trait Damageable {
///     fn health(&self) -> u32;
/// }
/// struct Crate;
/// struct Enemy(u32);
/// impl Damageable for Enemy {
///     fn health(&self) -> u32 {
///         self.0
///     }
/// }
///
/// struct World(Vec<Box<dyn SceneObject>>);
/// impl SceneRegistry for World {
///     fn live_objects(&self) -> Box<dyn Iterator<Item = &dyn SceneObject> + '_> {
///         Box::new(self.0.iter().map(|o| &**o))
///     }
/// }
///
/// let world = World(vec![Box::new(Crate), Box::new(Enemy(7))]);
/// let damageable = find_interfaces_of_type(&world, |o| {
///     o.as_any().downcast_ref::<Enemy>().map(|e| e as &dyn Damageable)
/// });
/// let health: Vec<u32> = damageable.map(|d| d.health()).collect();
/// assert_eq!(health, vec![7]);
/// ```
pub fn find_interfaces_of_type<'a, C, R, F>(
    registry: &'a R,
    project: F,
) -> impl Iterator<Item = &'a C> + 'a
where
    C: ?Sized + 'a,
    R: SceneRegistry + ?Sized,
    F: Fn(&'a dyn SceneObject) -> Option<&'a C> + 'a,
{
    registry.live_objects().filter_map(project)
}
