use std::collections::BTreeMap;
use tracing::debug;

use crate::managers::AirportManager;
use crate::models::{IdAllocator, Route, RouteId};

#[derive(Debug, Default)]
pub struct RouteManager {
    routes: BTreeMap<RouteId, Route>,
    ids: IdAllocator,
}

impl RouteManager {
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Creates a route between registered airports. When any code is unknown
    /// nothing is created and no id is consumed.
    ///
    /// Only the codes are stored, so deleting an airport later leaves the
    /// route pointing at a code that no longer resolves.
    pub fn create_route(
        &mut self,
        airports: &AirportManager,
        origin: &str,
        destination: &str,
        alternate: Option<&str>,
    ) -> Option<&Route> {
        let known = airports.contains(origin)
            && airports.contains(destination)
            && alternate.map_or(true, |code| airports.contains(code));
        if !known {
            debug!(
                "Route {} -> {} ({:?}) references an unknown airport",
                origin, destination, alternate
            );
            return None;
        }

        let id: RouteId = self.ids.allocate();
        let route = Route::new(id, origin, destination, alternate.map(str::to_string));
        debug!("Created route {} ({} -> {})", id, origin, destination);
        Some(&*self.routes.entry(id).or_insert(route))
    }

    pub fn delete_route(&mut self, route: &Route) -> bool {
        self.delete_route_by_id(route.id())
    }

    pub fn delete_route_by_id(&mut self, id: RouteId) -> bool {
        self.routes.remove(&id).is_some()
    }

    pub fn get_route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(&id)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.values()
    }

    /// Routes that start, end or divert at `code`.
    pub fn routes_touching<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Route> + 'a {
        self.routes.values().filter(move |route| route.touches(code))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
