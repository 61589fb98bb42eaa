pub mod car_repository;
pub mod route_repository;
pub mod trip_repository;
