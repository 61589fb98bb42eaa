pub mod auth_routes;
pub mod car_routes;
pub mod route_routes;
pub mod trip_routes;
pub mod rotation_routes;
pub mod photo_routes;
