pub mod car_controller;
pub mod route_controller;
pub mod trip_controller;
pub mod rotation_controller;
